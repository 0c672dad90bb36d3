// ==========================================
// 计算服务选型助手 - API 请求/响应 DTO
// ==========================================
// 字段命名: camelCase（与浏览器前端保持一致）
// ==========================================

use crate::domain::criteria::Criteria;
use crate::rules::store::LoadStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// 推荐
// ==========================================

/// 推荐请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(default)]
    pub inputs: Criteria,
    /// 返回名次上限（缺省取配置的 default_limit）
    #[serde(default)]
    pub limit: Option<usize>,
}

// ==========================================
// 说明
// ==========================================

/// 推荐说明请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    #[serde(default)]
    pub inputs: Criteria,
}

/// 推荐说明响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

// ==========================================
// 成本估算
// ==========================================

/// 成本估算请求
///
/// 保留原始字符串,由 API 层解析并对越界值返回 InvalidInput。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimateRequest {
    #[serde(default)]
    pub traffic_pattern: String,
    #[serde(default)]
    pub budget_focus: String,
}

// ==========================================
// 健康检查
// ==========================================

/// 健康检查响应
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub version: &'static str,
    pub rule_count: usize,
    pub rule_store: LoadStatus,
}
