// ==========================================
// 计算服务选型助手 - 推荐结果领域模型
// ==========================================
// 每次评估重新计算,不持久化
// ==========================================

use crate::domain::candidate::Candidate;
use serde::{Deserialize, Serialize};

// ==========================================
// RuleMatch - 单条规则命中记录
// ==========================================
// 按规则输入顺序记录,构成推理轨迹
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMatch {
    pub rule_index: usize,          // 规则在规则库中的位置
    pub label: String,              // 规则原始候选标签
    pub candidate: Candidate,       // 归一化后的候选
    pub matched_conditions: u32,    // 命中维度数
    pub reason: String,             // 规则理由
    pub via_fallback: bool,         // 标签未识别,落入兜底候选
}

impl RuleMatch {
    /// 推理轨迹条目: "<label> matched <n> condition(s)"
    pub fn describe(&self) -> String {
        format!("{} matched {} condition(s)", self.label, self.matched_conditions)
    }
}

// ==========================================
// ScoredCandidate - 带置信度的候选
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub raw_score: u32,
    /// 0..=100
    pub confidence: u8,
}

impl ScoredCandidate {
    pub fn display_name(&self) -> &'static str {
        self.candidate.display_name()
    }
}

// ==========================================
// RecommendationResult - 一次评估的输出
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub ranked: Vec<ScoredCandidate>,
    pub reasoning_trace: String,
}

impl RecommendationResult {
    /// 排名第一的候选
    pub fn top(&self) -> Option<&ScoredCandidate> {
        self.ranked.first()
    }
}
