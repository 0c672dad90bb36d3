// ==========================================
// 计算服务选型助手 - 选型规则
// ==========================================
// 职责: 外部提供的声明式规则 (条件集 + 支持的候选 + 理由)
// 红线: 规则加载后只读
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// Rule - 选型规则
// ==========================================
// 外部格式字段名为 `service`,领域内称为 candidate (候选标签)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// 维度键名 -> 允许取值集合; 未出现的维度不做约束
    #[serde(default)]
    pub conditions: BTreeMap<String, BTreeSet<String>>,

    /// 候选服务标签（自由文本,由 CandidateResolver 归一化）
    #[serde(rename = "service", default)]
    pub candidate: String,

    /// 人类可读的理由
    #[serde(default)]
    pub reason: String,
}

impl Rule {
    pub fn new(candidate: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            conditions: BTreeMap::new(),
            candidate: candidate.into(),
            reason: reason.into(),
        }
    }

    /// 追加一个维度条件（构造规则用）
    pub fn with_condition<I, S>(mut self, dimension: &str, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions
            .entry(dimension.to_string())
            .or_default()
            .extend(allowed.into_iter().map(Into::into));
        self
    }

    /// 无任何条件的规则永远不会命中
    pub fn is_unconditional(&self) -> bool {
        self.conditions.is_empty()
    }

    /// 指定维度是否允许该取值
    pub fn allows(&self, dimension: &str, value: &str) -> bool {
        self.conditions
            .get(dimension)
            .map(|allowed| allowed.contains(value))
            .unwrap_or(false)
    }
}
