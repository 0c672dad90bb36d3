// ==========================================
// 计算服务选型助手 - 候选排名
// ==========================================
// 职责: 原始得分 -> 置信度 + 排序 + 截取前 K 名
// 排序键:
// 1) raw_score 降序
// 2) 并列时按候选规范顺序 (lambda, ec2, ecs, fargate)
// ==========================================

use crate::domain::candidate::Candidate;
use crate::domain::recommendation::ScoredCandidate;
use std::collections::BTreeMap;

/// 默认返回名次
pub const DEFAULT_LIMIT: usize = 3;

/// 置信度: round_half_up(raw / max * 100)
///
/// max 为 0 时显式返回 0（全部候选未命中任何规则）。
pub fn confidence(raw_score: u32, max_raw_score: u32) -> u8 {
    if max_raw_score == 0 {
        return 0;
    }
    let raw = u64::from(raw_score.min(max_raw_score));
    let max = u64::from(max_raw_score);
    // 整数四舍五入: (raw * 100 + max / 2) / max,写成 2 倍形式避免奇数 max 截断
    ((raw * 200 + max) / (2 * max)) as u8
}

// ==========================================
// Ranker - 排名器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// 排名并截取前 `limit` 名
    ///
    /// - 未出现在 `scores` 中的候选按 0 分参与排名
    /// - `limit` 大于候选数时返回全部; `limit == 0` 返回空
    pub fn rank(&self, scores: &BTreeMap<Candidate, u32>, limit: usize) -> Vec<ScoredCandidate> {
        if limit == 0 {
            return Vec::new();
        }

        let max_raw_score = scores.values().copied().max().unwrap_or(0);

        // Candidate::ALL 为规范顺序,sort_by 为稳定排序,并列保持规范顺序
        let mut ranked: Vec<ScoredCandidate> = Candidate::ALL
            .iter()
            .map(|candidate| {
                let raw_score = scores.get(candidate).copied().unwrap_or(0);
                ScoredCandidate {
                    candidate: *candidate,
                    raw_score,
                    confidence: confidence(raw_score, max_raw_score),
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.raw_score.cmp(&a.raw_score));
        ranked.truncate(limit);
        ranked
    }
}
