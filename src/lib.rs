// ==========================================
// 计算服务选型助手 - 核心库
// ==========================================
// 职责: 依据用户选型条件,在 Lambda / EC2 / ECS / Fargate 间给出可解释的推荐
// 技术栈: Rust + axum + tokio
// 系统定位: 决策支持（规则驱动,所有得分可追溯）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 评分/排名/成本
pub mod engine;

// 规则库层 - 外部规则加载
pub mod rules;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 服务层 - HTTP
#[cfg(feature = "server")]
pub mod server;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Architecture, BudgetFocus, Dimension, TeamExperience, TrafficPattern};

// 领域实体
pub use domain::{
    comparison_profiles, Candidate, CandidateProfile, Criteria, RecommendationResult, Rule,
    RuleMatch, ScoredCandidate,
};

// 引擎
pub use engine::{
    CandidateResolver, CostEstimate, CostEstimator, CostRates, RecommendationEngine, Ranker,
    ScoringEngine,
};

// 规则库
pub use rules::{LoadStatus, RuleSource, RuleStore};

// API
pub use api::{AdvisorApi, ApiError, ApiResult};

// 配置
pub use config::AdvisorConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "计算服务选型助手";
