// ==========================================
// 计算服务选型助手 - HTTP 路由与处理函数
// ==========================================
// 路由:
//   GET  /api/health        健康检查（版本 + 规则库状态）
//   GET  /api/profiles      候选服务对比资料
//   POST /api/recommend     评分排名
//   POST /api/cost          月度成本估算
//   POST /api/explain       推荐说明
//   POST /api/rules/reload  重载规则
// ==========================================

use std::sync::Arc;

use axum::{extract::State, routing::get, routing::post, Json, Router};

use crate::api::advisor_api::AdvisorApi;
use crate::api::dto::{
    CostEstimateRequest, ExplainRequest, ExplainResponse, HealthResponse, RecommendRequest,
};
use crate::api::error::ApiResult;
use crate::domain::candidate::CandidateProfile;
use crate::domain::recommendation::RecommendationResult;
use crate::engine::cost::CostEstimate;
use crate::rules::store::LoadStatus;

/// 处理函数共享状态
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<AdvisorApi>,
}

impl AppState {
    pub fn new(api: Arc<AdvisorApi>) -> Self {
        Self { api }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.api.health())
}

async fn profiles(State(state): State<AppState>) -> Json<Vec<CandidateProfile>> {
    Json(state.api.get_comparison_profiles())
}

async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendationResult> {
    Json(state.api.score_and_rank(&request.inputs, request.limit))
}

async fn cost(
    State(state): State<AppState>,
    Json(request): Json<CostEstimateRequest>,
) -> ApiResult<Json<CostEstimate>> {
    state.api.estimate_cost(&request).map(Json)
}

async fn explain(
    State(state): State<AppState>,
    Json(request): Json<ExplainRequest>,
) -> Json<ExplainResponse> {
    Json(state.api.explain(&request.inputs))
}

async fn reload_rules(State(state): State<AppState>) -> ApiResult<Json<LoadStatus>> {
    state.api.reload().await.map(Json)
}

/// 创建路由
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/profiles", get(profiles))
        .route("/api/recommend", post(recommend))
        .route("/api/cost", post(cost))
        .route("/api/explain", post(explain))
        .route("/api/rules/reload", post(reload_rules))
}
