// ==========================================
// 计算服务选型助手 - 推荐说明生成
// ==========================================
// 职责: 重新评分后生成面向用户的多行说明文本
// 格式:
//   <标题>
//
//   - <service>: +<n> matching condition(s) (<reason>)   (规则输入顺序)
//
//   Recommended service: <CANDIDATE_KEY_UPPER>
// ==========================================

use crate::domain::candidate::Candidate;
use crate::engine::orchestrator::Evaluation;
use crate::i18n::t_in;

/// 摘要行前缀（固定英文,前端按此前缀解析）
pub const SUMMARY_PREFIX: &str = "Recommended service: ";

/// 摘要行; 全部 0 分时排名第一的是规范顺序第一个候选
pub fn summary_line(top: Candidate) -> String {
    format!("{}{}", SUMMARY_PREFIX, top.key().to_uppercase())
}

/// 根据评估结果生成说明
///
/// # 参数
/// - `evaluation`: 评估结果（排名至少需 1 名才能给出推荐）
/// - `rule_count`: 规则库条数（0 表示规则尚未加载）
/// - `locale`: 说明语言
pub fn build_explanation(evaluation: &Evaluation, rule_count: usize, locale: &str) -> String {
    let mut lines: Vec<String> = vec![t_in(locale, "explain.header", &[]), String::new()];

    if rule_count == 0 {
        lines.push(t_in(locale, "explain.no_rules", &[]));
    } else if evaluation.sheet.matches.is_empty() {
        lines.push(t_in(locale, "explain.no_match", &[]));
    } else {
        for m in &evaluation.sheet.matches {
            let count = m.matched_conditions.to_string();
            lines.push(t_in(
                locale,
                "explain.rule_line",
                &[
                    ("service", m.label.as_str()),
                    ("count", count.as_str()),
                    ("reason", m.reason.as_str()),
                ],
            ));
        }
    }

    let top = evaluation
        .result
        .top()
        .map(|s| s.candidate)
        .unwrap_or(Candidate::ALL[0]);

    lines.push(String::new());
    lines.push(summary_line(top));
    lines.join("\n")
}
