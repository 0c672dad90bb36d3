// ==========================================
// 计算服务选型助手 - 配置层
// ==========================================
// 职责: 运行配置加载与校验,支持文件 + 环境变量覆写
// ==========================================

pub mod advisor_config;
pub mod error;

// 重导出核心配置
pub use advisor_config::{default_rules_path, env_keys, AdvisorConfig, RulesLocation};
pub use error::{ConfigError, ConfigResult};
