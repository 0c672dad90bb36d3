// ==========================================
// 计算服务选型助手 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,将下层错误转换为用户可读的消息
// 红线: 评估本身不产生错误,只有边界解析与规则重载会失败
// ==========================================

use crate::config::error::ConfigError;
use crate::rules::error::RuleStoreError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 规则库错误
    // ==========================================
    #[error("规则库不可用: {0}")]
    RuleStoreUnavailable(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 机器可读的错误码（HTTP 响应体使用）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::RuleStoreUnavailable(_) => "RULE_STORE_UNAVAILABLE",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "INTERNAL_ERROR",
        }
    }
}

// ==========================================
// 从下层错误转换
// ==========================================
impl From<RuleStoreError> for ApiError {
    fn from(err: RuleStoreError) -> Self {
        ApiError::RuleStoreUnavailable(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidValue { key, value } => {
                ApiError::InvalidInput(format!("配置项{}取值非法: {}", key, value))
            }
            other => ApiError::InternalError(other.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
