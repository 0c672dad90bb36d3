// ==========================================
// 计算服务选型助手 - 运行配置
// ==========================================
// 加载顺序 (后者覆盖前者):
// 1) 内置默认值
// 2) JSON 配置文件 (ADVISOR_CONFIG 指定)
// 3) 环境变量 ADVISOR_*
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::candidate::Candidate;
use crate::engine::cost::CostRates;
use crate::engine::ranker::DEFAULT_LIMIT;
use crate::engine::resolver::DEFAULT_FALLBACK;
use crate::rules::source::{FileRuleSource, RuleSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// 默认监听地址
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// 默认端口（与原前端代理保持一致）
pub const DEFAULT_PORT: u16 = 5000;

/// 默认语言
pub const DEFAULT_LOCALE: &str = "en";

// ==========================================
// 环境变量键
// ==========================================
pub mod env_keys {
    pub const CONFIG_FILE: &str = "ADVISOR_CONFIG";
    pub const RULES_PATH: &str = "ADVISOR_RULES_PATH";
    pub const RULES_URL: &str = "ADVISOR_RULES_URL";
    pub const HOST: &str = "ADVISOR_HOST";
    pub const PORT: &str = "ADVISOR_PORT";
    pub const DEFAULT_LIMIT: &str = "ADVISOR_DEFAULT_LIMIT";
    pub const FALLBACK_CANDIDATE: &str = "ADVISOR_FALLBACK_CANDIDATE";
    pub const LOCALE: &str = "ADVISOR_LOCALE";
}

/// 规则文档位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "location", rename_all = "snake_case")]
pub enum RulesLocation {
    File(PathBuf),
    Url(String),
}

impl RulesLocation {
    /// 构造对应的规则来源
    ///
    /// 未启用 server 特性时没有 HTTP 客户端,URL 位置视为配置错误。
    pub fn to_source(&self) -> ConfigResult<Arc<dyn RuleSource>> {
        match self {
            RulesLocation::File(path) => Ok(Arc::new(FileRuleSource::new(path.clone()))),
            #[cfg(feature = "server")]
            RulesLocation::Url(url) => Ok(Arc::new(crate::rules::source::HttpRuleSource::new(
                url.clone(),
            ))),
            #[cfg(not(feature = "server"))]
            RulesLocation::Url(url) => Err(ConfigError::InvalidValue {
                key: env_keys::RULES_URL.to_string(),
                value: url.clone(),
            }),
        }
    }
}

/// 默认规则文件路径
///
/// 优先使用 ADVISOR_RULES_PATH; 否则放在用户配置目录下。
pub fn default_rules_path() -> PathBuf {
    if let Ok(path) = std::env::var(env_keys::RULES_PATH) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("compute-advisor").join("rules.json"))
        .unwrap_or_else(|| PathBuf::from("./rules.json"))
}

// ==========================================
// AdvisorConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvisorConfig {
    pub rules: RulesLocation,
    pub host: String,
    pub port: u16,
    /// 推荐结果默认返回名次
    pub default_limit: usize,
    /// 规则标签无法识别时的兜底候选
    pub fallback_candidate: Candidate,
    /// 说明文本语言
    pub locale: String,
    pub cost_rates: CostRates,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            rules: RulesLocation::File(default_rules_path()),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            default_limit: DEFAULT_LIMIT,
            fallback_candidate: DEFAULT_FALLBACK,
            locale: DEFAULT_LOCALE.to_string(),
            cost_rates: CostRates::default(),
        }
    }
}

impl AdvisorConfig {
    /// 从 JSON 文件读取（缺省字段取默认值）
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: AdvisorConfig = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// 完整加载: 默认值 -> 配置文件 -> 环境变量,并校验
    pub fn load() -> ConfigResult<Self> {
        let base = match std::env::var(env_keys::CONFIG_FILE) {
            Ok(path) if !path.trim().is_empty() => {
                let path = PathBuf::from(path.trim());
                info!(path = %path.display(), "读取配置文件");
                Self::from_file(&path)?
            }
            _ => Self::default(),
        };

        let config = base.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 应用覆写（`lookup` 通常为环境变量读取,测试可注入）
    pub fn apply_overrides<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        // URL 优先于文件路径
        if let Some(path) = get(env_keys::RULES_PATH) {
            self.rules = RulesLocation::File(PathBuf::from(path));
        }
        if let Some(url) = get(env_keys::RULES_URL) {
            self.rules = RulesLocation::Url(url);
        }
        if let Some(host) = get(env_keys::HOST) {
            self.host = host;
        }
        if let Some(port) = get(env_keys::PORT) {
            self.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: env_keys::PORT.to_string(),
                value: port.clone(),
            })?;
        }
        if let Some(limit) = get(env_keys::DEFAULT_LIMIT) {
            self.default_limit = limit.parse().map_err(|_| ConfigError::InvalidValue {
                key: env_keys::DEFAULT_LIMIT.to_string(),
                value: limit.clone(),
            })?;
        }
        if let Some(fallback) = get(env_keys::FALLBACK_CANDIDATE) {
            self.fallback_candidate =
                fallback.parse().map_err(|_| ConfigError::InvalidValue {
                    key: env_keys::FALLBACK_CANDIDATE.to_string(),
                    value: fallback.clone(),
                })?;
        }
        if let Some(locale) = get(env_keys::LOCALE) {
            self.locale = locale;
        }

        Ok(self)
    }

    /// 校验配置
    pub fn validate(&self) -> ConfigResult<()> {
        let invalid = |key: &str, value: String| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        };

        if self.host.trim().is_empty() {
            return Err(invalid("host", self.host.clone()));
        }
        if self.port == 0 {
            return Err(invalid("port", self.port.to_string()));
        }
        if !crate::i18n::is_supported(&self.locale) {
            return Err(invalid("locale", self.locale.clone()));
        }
        if let RulesLocation::Url(url) = &self.rules {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid("rules", url.clone()));
            }
        }
        self.cost_rates
            .validate()
            .map_err(|reason| invalid("costRates", reason))?;
        Ok(())
    }

    /// 监听地址 "host:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
