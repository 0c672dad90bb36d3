// ==========================================
// 计算服务选型助手 - 候选标签解析
// ==========================================
// 职责: 规则的自由文本标签 -> 规范候选键
// 规则: 显式查找表,大小写不敏感的子串匹配,按表顺序命中即返回
// 兜底: 未命中的标签落入 fallback 候选 (默认 ecs),不丢弃规则
// ==========================================

use crate::domain::candidate::Candidate;

/// 查找表: (子串, 候选),按规范顺序排列
///
/// "Amazon ECS (Fargate)" 同时包含 ecs 与 fargate,按表顺序归入 ecs。
pub const RESOLUTION_TABLE: [(&str, Candidate); 4] = [
    ("lambda", Candidate::Lambda),
    ("ec2", Candidate::Ec2),
    ("ecs", Candidate::Ecs),
    ("fargate", Candidate::Fargate),
];

/// 默认兜底候选
pub const DEFAULT_FALLBACK: Candidate = Candidate::Ecs;

/// 解析结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub candidate: Candidate,
    pub via_fallback: bool,
}

// ==========================================
// CandidateResolver - 候选标签解析器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct CandidateResolver {
    fallback: Candidate,
}

impl Default for CandidateResolver {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK)
    }
}

impl CandidateResolver {
    pub fn new(fallback: Candidate) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> Candidate {
        self.fallback
    }

    /// 解析标签（总函数: 任何输入都得到唯一候选）
    pub fn resolve(&self, label: &str) -> Resolution {
        let lowered = label.to_lowercase();
        RESOLUTION_TABLE
            .iter()
            .find(|(needle, _)| lowered.contains(needle))
            .map(|(_, candidate)| Resolution {
                candidate: *candidate,
                via_fallback: false,
            })
            .unwrap_or(Resolution {
                candidate: self.fallback,
                via_fallback: true,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_labels() {
        let resolver = CandidateResolver::default();

        assert_eq!(resolver.resolve("AWS Lambda").candidate, Candidate::Lambda);
        assert_eq!(resolver.resolve("Amazon EC2").candidate, Candidate::Ec2);
        assert_eq!(resolver.resolve("amazon ecs").candidate, Candidate::Ecs);
        assert_eq!(resolver.resolve("AWS Fargate").candidate, Candidate::Fargate);
        assert!(!resolver.resolve("AWS Lambda").via_fallback);
    }

    #[test]
    fn test_table_order_decides_ambiguous_labels() {
        let resolver = CandidateResolver::default();
        let r = resolver.resolve("Amazon ECS (Fargate)");
        assert_eq!(r.candidate, Candidate::Ecs);
        assert!(!r.via_fallback);
    }

    #[test]
    fn test_unknown_label_goes_to_fallback() {
        let resolver = CandidateResolver::default();
        let r = resolver.resolve("Google Cloud Run");
        assert_eq!(r.candidate, DEFAULT_FALLBACK);
        assert!(r.via_fallback);

        let r = resolver.resolve("");
        assert_eq!(r.candidate, DEFAULT_FALLBACK);
        assert!(r.via_fallback);
    }

    #[test]
    fn test_custom_fallback() {
        let resolver = CandidateResolver::new(Candidate::Fargate);
        assert_eq!(resolver.resolve("App Runner").candidate, Candidate::Fargate);
        assert_eq!(resolver.fallback(), Candidate::Fargate);
    }
}
