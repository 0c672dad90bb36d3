// ==========================================
// 计算服务选型助手 - 规则库层
// ==========================================
// 职责: 外部规则的取回、解析、快照管理
// 来源: 本地文件 / HTTP / 内存
// ==========================================

pub mod error;
pub mod parse;
pub mod source;
pub mod store;

// 重导出核心类型
pub use error::{RuleStoreError, RuleStoreResult};
pub use parse::{parse_rules_document, parse_rules_lenient};
#[cfg(feature = "server")]
pub use source::HttpRuleSource;
pub use source::{FileRuleSource, InlineRuleSource, RuleSource};
pub use store::{LoadStatus, RuleStore};
