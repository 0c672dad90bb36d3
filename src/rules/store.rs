// ==========================================
// 计算服务选型助手 - 规则库
// ==========================================
// 职责: 一次加载、多次读取的规则快照
// 状态: NotLoaded -> Loaded | Failed (允许重新加载)
// 红线:
// - 加载失败只记录日志,安装空规则,评估照常进行
// - 读取方每次评估取一个不可变快照 (Arc<[Rule]>),不持有锁
// ==========================================

use crate::domain::rule::Rule;
use crate::rules::parse::parse_rules_document;
use crate::rules::source::RuleSource;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{error, info};

// ==========================================
// LoadStatus - 加载状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadStatus {
    NotLoaded,
    Loaded {
        source: String,
        rule_count: usize,
        loaded_at: DateTime<Utc>,
    },
    Failed {
        source: String,
        reason: String,
        failed_at: DateTime<Utc>,
    },
}

impl LoadStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded { .. })
    }
}

struct StoreState {
    rules: Arc<[Rule]>,
    status: LoadStatus,
    generation: u64,
}

// ==========================================
// RuleStore - 规则库
// ==========================================
pub struct RuleStore {
    state: RwLock<StoreState>,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStore {
    /// 创建空规则库（未加载）
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                rules: Arc::from(Vec::new()),
                status: LoadStatus::NotLoaded,
                generation: 0,
            }),
        }
    }

    /// 以给定规则创建（测试 / 嵌入使用）
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        let store = Self::new();
        store.replace(rules, "inline");
        store
    }

    /// 当前规则快照
    pub fn snapshot(&self) -> Arc<[Rule]> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&state.rules)
    }

    pub fn status(&self) -> LoadStatus {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.status.clone()
    }

    /// 规则集变更代数（每次替换 +1,调用方据此判断是否需要重新评估）
    pub fn generation(&self) -> u64 {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.generation
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 替换规则集
    pub fn replace(&self, rules: Vec<Rule>, source: &str) {
        let rule_count = rules.len();
        self.install(
            rules,
            LoadStatus::Loaded {
                source: source.to_string(),
                rule_count,
                loaded_at: Utc::now(),
            },
        );
    }

    fn install(&self, rules: Vec<Rule>, status: LoadStatus) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.rules = Arc::from(rules);
        state.status = status;
        state.generation += 1;
    }

    /// 从来源加载规则
    ///
    /// 永不返回错误: 失败时安装空规则并记录 Failed 状态。
    ///
    /// # 返回
    /// 加载后的状态
    pub async fn load_from(&self, source: &dyn RuleSource) -> LoadStatus {
        let description = source.describe();
        info!(source = %description, "开始加载选型规则");

        let outcome = match source.fetch().await {
            Ok(raw) => parse_rules_document(&raw),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(rules) => {
                info!(source = %description, rule_count = rules.len(), "选型规则加载完成");
                self.replace(rules, &description);
            }
            Err(e) => {
                error!(source = %description, error = %e, "选型规则加载失败,使用空规则继续");
                self.install(
                    Vec::new(),
                    LoadStatus::Failed {
                        source: description,
                        reason: e.to_string(),
                        failed_at: Utc::now(),
                    },
                );
            }
        }

        self.status()
    }
}
