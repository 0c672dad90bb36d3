// ==========================================
// 计算服务选型助手 - 推荐编排
// ==========================================
// 职责: 评分 -> 排名 -> 推理轨迹,一次调用完成
// 红线: 无跨调用缓存,规则或条件变化时由调用方重新调用
// ==========================================

use crate::domain::criteria::Criteria;
use crate::domain::recommendation::RecommendationResult;
use crate::domain::rule::Rule;
use crate::engine::ranker::Ranker;
use crate::engine::resolver::CandidateResolver;
use crate::engine::scoring::{ScoreSheet, ScoringEngine};
use crate::engine::trace::build_trace;
use tracing::debug;

/// 一次评估的完整产物（评分明细 + 推荐结果）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub sheet: ScoreSheet,
    pub result: RecommendationResult,
}

// ==========================================
// RecommendationEngine - 推荐引擎入口
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    scoring: ScoringEngine,
    ranker: Ranker,
}

impl RecommendationEngine {
    pub fn new(resolver: CandidateResolver) -> Self {
        Self {
            scoring: ScoringEngine::new(resolver),
            ranker: Ranker::new(),
        }
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    /// 评分并保留明细
    pub fn evaluate(&self, criteria: &Criteria, rules: &[Rule], limit: usize) -> Evaluation {
        let sheet = self.scoring.score(criteria, rules);
        let ranked = self.ranker.rank(&sheet.raw_scores(), limit);
        let reasoning_trace = build_trace(&sheet.trace_entries());

        debug!(
            matches = sheet.matches.len(),
            top = ?ranked.first().map(|s| s.candidate),
            "评估完成"
        );

        Evaluation {
            result: RecommendationResult {
                ranked,
                reasoning_trace,
            },
            sheet,
        }
    }

    /// 评分 + 排名 + 轨迹
    pub fn score_and_rank(
        &self,
        criteria: &Criteria,
        rules: &[Rule],
        limit: usize,
    ) -> RecommendationResult {
        self.evaluate(criteria, rules, limit).result
    }
}
