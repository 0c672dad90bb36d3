// ==========================================
// 引擎间集成测试
// ==========================================
// 职责: 验证 规则库 -> 评分 -> 排名 -> 轨迹 -> 说明 的数据流转
// 场景: 使用仓库自带的示例规则 data/rules.json
// ==========================================


use compute_advisor::domain::types::{BudgetFocus, TrafficPattern};
use compute_advisor::domain::{Candidate, Criteria};
use compute_advisor::engine::{CostEstimator, RecommendationEngine};
use test_helpers::*;

#[tokio::test]
async fn test_sample_rules_spiky_event_driven() {
    let store = load_sample_store().await;
    let rules = store.snapshot();
    let engine = RecommendationEngine::default();

    let result = engine.score_and_rank(&spiky_event_driven(), &rules, 3);

    let ranked: Vec<(Candidate, u32, u8)> = result
        .ranked
        .iter()
        .map(|s| (s.candidate, s.raw_score, s.confidence))
        .collect();
    assert_eq!(
        ranked,
        vec![
            (Candidate::Lambda, 2, 100),
            (Candidate::Ecs, 1, 50),
            (Candidate::Ec2, 0, 0),
        ]
    );
    assert_eq!(
        result.reasoning_trace,
        "AWS Lambda matched 2 condition(s) | Amazon ECS (Fargate) matched 1 condition(s)"
    );
}

#[tokio::test]
async fn test_sample_rules_high_predictable() {
    let store = load_sample_store().await;
    let result =
        RecommendationEngine::default().score_and_rank(&high_predictable_monolith(), &store.snapshot(), 3);

    assert_eq!(result.top().map(|s| s.candidate), Some(Candidate::Ec2));
    assert_eq!(result.ranked[0].raw_score, 3);
    assert_eq!(result.reasoning_trace, "Amazon EC2 matched 3 condition(s)");
}

#[tokio::test]
async fn test_two_rules_for_same_candidate_accumulate() {
    let store = load_sample_store().await;
    let criteria: Criteria = serde_json::from_str(
        r#"{"trafficPattern":"consistent","budgetFocus":"lowest","teamExperience":"intermediate","architecture":"microservices"}"#,
    )
    .unwrap();

    let evaluation = RecommendationEngine::default().evaluate(&criteria, &store.snapshot(), 3);

    assert_eq!(evaluation.sheet.raw_score(Candidate::Ecs), 3);
    assert_eq!(evaluation.sheet.matches.len(), 2);
    assert_eq!(evaluation.result.ranked[0].candidate, Candidate::Ecs);
    assert_eq!(evaluation.result.ranked[0].confidence, 100);
    assert_eq!(
        evaluation.result.reasoning_trace,
        "Amazon ECS (Fargate) matched 2 condition(s) | Amazon ECS matched 1 condition(s)"
    );
}

#[test]
fn test_empty_rules_score_everything_zero() {
    let result = RecommendationEngine::default().score_and_rank(&spiky_event_driven(), &[], 3);

    assert_eq!(result.ranked.len(), 3);
    assert!(result
        .ranked
        .iter()
        .all(|s| s.raw_score == 0 && s.confidence == 0));
    assert_eq!(result.reasoning_trace, "");
}

#[test]
fn test_single_lambda_rule_scenario() {
    let rules = vec![lambda_rule()];
    let result = RecommendationEngine::default().score_and_rank(&spiky_event_driven(), &rules, 4);

    assert_eq!(result.ranked[0].candidate, Candidate::Lambda);
    assert_eq!(result.ranked[0].raw_score, 2);
    assert_eq!(result.ranked[0].confidence, 100);
    assert!(result.ranked[1..]
        .iter()
        .all(|s| s.raw_score == 0 && s.confidence == 0));
    assert_eq!(result.reasoning_trace, "AWS Lambda matched 2 condition(s)");
}

#[tokio::test]
async fn test_score_and_rank_is_idempotent() {
    let store = load_sample_store().await;
    let rules = store.snapshot();
    let engine = RecommendationEngine::default();

    let first = engine.score_and_rank(&spiky_event_driven(), &rules, 3);
    let second = engine.score_and_rank(&spiky_event_driven(), &rules, 3);
    assert_eq!(first, second);
}

#[test]
fn test_usage_cost_is_monotonic_in_traffic() {
    let estimator = CostEstimator::default();

    for candidate in [Candidate::Lambda, Candidate::Fargate] {
        let costs: Vec<f64> = TrafficPattern::ALL
            .iter()
            .map(|t| estimator.estimate_for(candidate, *t, BudgetFocus::Lowest))
            .collect();
        assert!(
            costs.windows(2).all(|w| w[0] <= w[1]),
            "{} 成本未随流量单调递增: {:?}",
            candidate,
            costs
        );
    }
}

#[tokio::test]
async fn test_explanation_from_sample_rules() {
    let api = api_with_store(load_sample_store().await);
    let text = api.explain(&high_predictable_monolith()).explanation;

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Based on your selected inputs:");
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with("- Amazon EC2: +3 matching condition(s) ("));
    assert_eq!(lines.last().copied(), Some("Recommended service: EC2"));
}
