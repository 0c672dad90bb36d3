// ==========================================
// 计算服务选型助手 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 HTTP 服务与嵌入方调用
// ==========================================

pub mod advisor_api;
pub mod dto;
pub mod error;

// 重导出核心类型
pub use advisor_api::AdvisorApi;
pub use dto::{
    CostEstimateRequest, ExplainRequest, ExplainResponse, HealthResponse, RecommendRequest,
};
pub use error::{ApiError, ApiResult};
