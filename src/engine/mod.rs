// ==========================================
// 计算服务选型助手 - 引擎层
// ==========================================
// 职责: 规则匹配、评分、排名、成本估算
// 红线: 引擎为纯函数,不做 I/O,所有得分必须可追溯到规则
// ==========================================

pub mod cost;
pub mod explain;
pub mod orchestrator;
pub mod ranker;
pub mod resolver;
pub mod scoring;
pub mod trace;

// 重导出核心引擎
pub use cost::{CostEstimate, CostEstimator, CostRates};
pub use explain::build_explanation;
pub use orchestrator::{Evaluation, RecommendationEngine};
pub use ranker::{confidence, Ranker, DEFAULT_LIMIT};
pub use resolver::{CandidateResolver, Resolution};
pub use scoring::{CandidateScore, ScoreSheet, ScoringEngine};
pub use trace::build_trace;
