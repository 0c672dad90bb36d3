// ==========================================
// 计算服务选型助手 - 规则库错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 规则库错误只在加载边界内处理,不向评估调用方传播
// ==========================================

use thiserror::Error;

/// 规则库错误类型
#[derive(Error, Debug)]
pub enum RuleStoreError {
    // ===== 读取错误 =====
    #[error("规则文件读取失败 (path={path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("规则拉取失败 (url={url}): {message}")]
    Http { url: String, message: String },

    // ===== 解析错误 =====
    #[error("规则文档 JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("规则文档格式错误: 顶层应为数组,实际为 {found}")]
    NotAnArray { found: String },
}

/// Result 类型别名
pub type RuleStoreResult<T> = Result<T, RuleStoreError>;
