// ==========================================
// 计算服务选型助手 - 规则评分引擎
// ==========================================
// 职责: 用户选型条件 x 规则库 -> 每个候选的原始得分 + 命中记录
// 输入: Criteria + 规则序列 (可为空: 规则尚未加载)
// 输出: ScoreSheet (覆盖全部候选,未被引用的候选得分为 0)
// 红线: 纯函数,每次调用新建累加器,不共享可变状态
// ==========================================

use crate::domain::candidate::Candidate;
use crate::domain::criteria::Criteria;
use crate::domain::recommendation::RuleMatch;
use crate::domain::rule::Rule;
use crate::engine::resolver::CandidateResolver;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

#[cfg(test)]
mod tests;

// ==========================================
// CandidateScore - 单个候选的累计得分
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScore {
    pub raw_score: u32,
    /// 命中该候选的规则描述（规则输入顺序）
    pub matched_rule_descriptions: Vec<String>,
}

// ==========================================
// ScoreSheet - 一次评分的完整输出
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSheet {
    /// 每个候选一项,按规范顺序
    pub scores: BTreeMap<Candidate, CandidateScore>,
    /// 全部命中记录,按规则输入顺序
    pub matches: Vec<RuleMatch>,
}

impl ScoreSheet {
    /// 全部候选得分为 0 的空表
    pub fn empty() -> Self {
        Self {
            scores: Candidate::ALL
                .iter()
                .map(|c| (*c, CandidateScore::default()))
                .collect(),
            matches: Vec::new(),
        }
    }

    pub fn raw_score(&self, candidate: Candidate) -> u32 {
        self.scores
            .get(&candidate)
            .map(|s| s.raw_score)
            .unwrap_or(0)
    }

    /// 候选 -> 原始得分
    pub fn raw_scores(&self) -> BTreeMap<Candidate, u32> {
        self.scores
            .iter()
            .map(|(c, s)| (*c, s.raw_score))
            .collect()
    }

    /// 推理轨迹条目（规则输入顺序）
    pub fn trace_entries(&self) -> Vec<String> {
        self.matches.iter().map(RuleMatch::describe).collect()
    }

    /// 全部候选得分之和
    pub fn total_score(&self) -> u32 {
        self.scores.values().map(|s| s.raw_score).sum()
    }

    /// 经兜底解析的命中记录数
    pub fn fallback_matches(&self) -> usize {
        self.matches.iter().filter(|m| m.via_fallback).count()
    }
}

// ==========================================
// ScoringEngine - 规则评分引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    resolver: CandidateResolver,
}

impl ScoringEngine {
    pub fn new(resolver: CandidateResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &CandidateResolver {
        &self.resolver
    }

    /// 单条规则的命中维度数
    ///
    /// 每个出现在 conditions 中的维度: 用户取值属于允许集合则 +1。
    /// 用户未填写/取值越界、或维度键名未知时该维度计 0。
    pub fn count_matches(criteria: &Criteria, rule: &Rule) -> u32 {
        rule.conditions
            .iter()
            .filter(|(dimension, allowed)| {
                criteria
                    .value_for_key(dimension)
                    .map(|value| allowed.contains(value))
                    .unwrap_or(false)
            })
            .count() as u32
    }

    /// 对规则库评分
    #[instrument(skip(self, criteria, rules), fields(rule_count = rules.len()))]
    pub fn score(&self, criteria: &Criteria, rules: &[Rule]) -> ScoreSheet {
        let mut sheet = ScoreSheet::empty();

        for (index, rule) in rules.iter().enumerate() {
            let matched = Self::count_matches(criteria, rule);
            if matched == 0 {
                continue;
            }

            let resolution = self.resolver.resolve(&rule.candidate);
            if resolution.via_fallback {
                debug!(
                    rule_index = index,
                    label = %rule.candidate,
                    fallback = %resolution.candidate,
                    "规则标签未识别,归入兜底候选"
                );
            }

            let rule_match = RuleMatch {
                rule_index: index,
                label: rule.candidate.clone(),
                candidate: resolution.candidate,
                matched_conditions: matched,
                reason: rule.reason.clone(),
                via_fallback: resolution.via_fallback,
            };

            let entry = sheet.scores.entry(resolution.candidate).or_default();
            entry.raw_score += matched;
            entry.matched_rule_descriptions.push(rule_match.describe());

            debug!(rule_index = index, candidate = %resolution.candidate, matched, "规则命中");
            sheet.matches.push(rule_match);
        }

        sheet
    }
}
