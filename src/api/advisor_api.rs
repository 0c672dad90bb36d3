// ==========================================
// 计算服务选型助手 - 选型 API
// ==========================================
// 职责: 对外提供选型对比、推荐、成本估算、推荐说明、规则重载
// 架构: API 层 -> Engine 层 (纯计算) + RuleStore (规则快照)
// ==========================================

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::api::dto::{CostEstimateRequest, ExplainResponse, HealthResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::config::advisor_config::AdvisorConfig;
use crate::domain::candidate::{comparison_profiles, Candidate, CandidateProfile};
use crate::domain::criteria::Criteria;
use crate::domain::recommendation::RecommendationResult;
use crate::domain::types::{BudgetFocus, TrafficPattern};
use crate::engine::cost::{CostEstimate, CostEstimator};
use crate::engine::explain::build_explanation;
use crate::engine::orchestrator::RecommendationEngine;
use crate::engine::ranker::DEFAULT_LIMIT;
use crate::engine::resolver::CandidateResolver;
use crate::i18n::t_in;
use crate::rules::source::RuleSource;
use crate::rules::store::{LoadStatus, RuleStore};

// ==========================================
// AdvisorApi - 选型 API
// ==========================================

/// 选型API
///
/// 每次调用都从规则库取一次快照,评估本身无状态、无缓存。
pub struct AdvisorApi {
    rule_store: Arc<RuleStore>,
    /// 重载使用的规则来源（未配置时只能通过 reload_from 指定）
    rule_source: Option<Arc<dyn RuleSource>>,
    engine: RecommendationEngine,
    cost: CostEstimator,
    default_limit: usize,
    locale: String,
}

impl AdvisorApi {
    /// 创建新的AdvisorApi实例
    ///
    /// # 参数
    /// - rule_store: 规则库（可与加载任务共享）
    /// - engine: 推荐引擎（已注入兜底候选）
    /// - cost: 成本估算器（已注入费率）
    pub fn new(
        rule_store: Arc<RuleStore>,
        engine: RecommendationEngine,
        cost: CostEstimator,
    ) -> Self {
        Self {
            rule_store,
            rule_source: None,
            engine,
            cost,
            default_limit: DEFAULT_LIMIT,
            locale: crate::config::advisor_config::DEFAULT_LOCALE.to_string(),
        }
    }

    /// 按运行配置装配（兜底候选、费率、默认名次、语言、规则来源）
    pub fn from_config(config: &AdvisorConfig, rule_store: Arc<RuleStore>) -> ApiResult<Self> {
        let source = config.rules.to_source()?;
        let engine = RecommendationEngine::new(CandidateResolver::new(config.fallback_candidate));
        let cost = CostEstimator::new(config.cost_rates);

        Ok(Self::new(rule_store, engine, cost)
            .with_rule_source(source)
            .with_default_limit(config.default_limit)
            .with_locale(config.locale.clone()))
    }

    pub fn with_rule_source(mut self, source: Arc<dyn RuleSource>) -> Self {
        self.rule_source = Some(source);
        self
    }

    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn rule_store(&self) -> &Arc<RuleStore> {
        &self.rule_store
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 候选服务静态对比资料
    pub fn get_comparison_profiles(&self) -> Vec<CandidateProfile> {
        comparison_profiles()
    }

    /// 评分并排名
    ///
    /// # 参数
    /// - criteria: 选型条件（缺失维度不参与匹配）
    /// - limit: 返回名次上限; None 取默认值
    ///
    /// # 返回
    /// 排名结果与推理轨迹; 规则为空时全部候选 0 分
    #[instrument(skip(self, criteria))]
    pub fn score_and_rank(&self, criteria: &Criteria, limit: Option<usize>) -> RecommendationResult {
        let rules = self.rule_store.snapshot();
        let limit = limit.unwrap_or(self.default_limit);
        self.engine.score_and_rank(criteria, &rules, limit)
    }

    /// 月度成本估算
    ///
    /// # 参数
    /// - request: 流量模式与预算侧重（外部字符串）
    ///
    /// # 返回
    /// - Ok(CostEstimate): 每个候选的估算金额
    /// - Err(ApiError::InvalidInput): 取值越界（区分大小写,不去空白）,消息中包含字段名和取值
    pub fn estimate_cost(&self, request: &CostEstimateRequest) -> ApiResult<CostEstimate> {
        let traffic: TrafficPattern = request.traffic_pattern.parse().map_err(|_| {
            ApiError::InvalidInput(t_in(
                &self.locale,
                "cost.invalid_traffic",
                &[("value", request.traffic_pattern.as_str())],
            ))
        })?;
        let focus: BudgetFocus = request.budget_focus.parse().map_err(|_| {
            ApiError::InvalidInput(t_in(
                &self.locale,
                "cost.invalid_budget",
                &[("value", request.budget_focus.as_str())],
            ))
        })?;

        Ok(self.cost.estimate(traffic, focus))
    }

    /// 推荐说明
    ///
    /// 以全部候选重新评分,列出每条命中规则,最后给出推荐服务。
    pub fn explain(&self, criteria: &Criteria) -> ExplainResponse {
        let rules = self.rule_store.snapshot();
        let evaluation = self.engine.evaluate(criteria, &rules, Candidate::ALL.len());
        ExplainResponse {
            explanation: build_explanation(&evaluation, rules.len(), &self.locale),
        }
    }

    /// 健康检查
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            version: crate::VERSION,
            rule_count: self.rule_store.len(),
            rule_store: self.rule_store.status(),
        }
    }

    pub fn rule_store_status(&self) -> LoadStatus {
        self.rule_store.status()
    }

    // ==========================================
    // 规则重载
    // ==========================================

    /// 从已配置的来源重载规则
    pub async fn reload(&self) -> ApiResult<LoadStatus> {
        let source = self.rule_source.clone().ok_or_else(|| {
            ApiError::RuleStoreUnavailable("未配置规则来源".to_string())
        })?;
        self.reload_from(source.as_ref()).await
    }

    /// 从指定来源重载规则
    ///
    /// 失败时规则库已降级为空规则,这里仍向调用方报告失败原因。
    pub async fn reload_from(&self, source: &dyn RuleSource) -> ApiResult<LoadStatus> {
        let status = self.rule_store.load_from(source).await;
        match &status {
            LoadStatus::Loaded { rule_count, .. } => {
                info!(rule_count = *rule_count, "规则重载完成");
                Ok(status)
            }
            LoadStatus::Failed { reason, .. } => {
                warn!(reason = %reason, "规则重载失败");
                Err(ApiError::RuleStoreUnavailable(reason.clone()))
            }
            LoadStatus::NotLoaded => Err(ApiError::InternalError(
                "规则库加载后状态仍为未加载".to_string(),
            )),
        }
    }
}
