// ==========================================
// 计算服务选型助手 - 领域模型层
// ==========================================
// 职责: 定义选型条件、候选服务、规则、推荐结果
// 红线: 不含加载逻辑,不含评分逻辑
// ==========================================

pub mod candidate;
pub mod criteria;
pub mod recommendation;
pub mod rule;
pub mod types;

// 重导出核心类型
pub use candidate::{comparison_profiles, BillingModel, Candidate, CandidateProfile};
pub use criteria::Criteria;
pub use recommendation::{RecommendationResult, RuleMatch, ScoredCandidate};
pub use rule::Rule;
pub use types::{Architecture, BudgetFocus, Dimension, TeamExperience, TrafficPattern};
