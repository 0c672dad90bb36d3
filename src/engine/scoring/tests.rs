use super::ScoringEngine;
use crate::domain::candidate::Candidate;
use crate::domain::criteria::Criteria;
use crate::domain::rule::Rule;
use crate::domain::types::{Architecture, BudgetFocus, TeamExperience, TrafficPattern};
use crate::engine::resolver::CandidateResolver;
use proptest::prelude::*;

// ==========================================
// 测试辅助函数
// ==========================================

fn spiky_beginner_event_driven() -> Criteria {
    Criteria::new(
        TrafficPattern::Spiky,
        BudgetFocus::Lowest,
        TeamExperience::Beginner,
        Architecture::EventDriven,
    )
}

fn lambda_rule() -> Rule {
    Rule::new("AWS Lambda", "x")
        .with_condition("trafficPattern", ["spiky"])
        .with_condition("architecture", ["event-driven"])
}

// ==========================================
// 正常案例测试
// ==========================================

#[test]
fn test_scenario_01_single_rule_two_matches() {
    let engine = ScoringEngine::default();
    let sheet = engine.score(&spiky_beginner_event_driven(), &[lambda_rule()]);

    assert_eq!(sheet.raw_score(Candidate::Lambda), 2);
    assert_eq!(sheet.raw_score(Candidate::Ec2), 0);
    assert_eq!(sheet.raw_score(Candidate::Ecs), 0);
    assert_eq!(sheet.raw_score(Candidate::Fargate), 0);
    assert_eq!(sheet.trace_entries(), vec!["AWS Lambda matched 2 condition(s)"]);
}

#[test]
fn test_scenario_02_rules_accumulate_additively() {
    let engine = ScoringEngine::default();
    let rules = vec![
        lambda_rule(),
        Rule::new("Lambda (event)", "y").with_condition("budgetFocus", ["lowest"]),
    ];
    let sheet = engine.score(&spiky_beginner_event_driven(), &rules);

    assert_eq!(sheet.raw_score(Candidate::Lambda), 3);
    assert_eq!(sheet.total_score(), 3);
    assert_eq!(
        sheet.scores[&Candidate::Lambda].matched_rule_descriptions,
        vec![
            "AWS Lambda matched 2 condition(s)".to_string(),
            "Lambda (event) matched 1 condition(s)".to_string(),
        ]
    );
}

#[test]
fn test_scenario_03_trace_follows_rule_order() {
    let engine = ScoringEngine::default();
    let rules = vec![
        Rule::new("Amazon EC2", "a").with_condition("budgetFocus", ["lowest"]),
        lambda_rule(),
        Rule::new("Amazon ECS", "b").with_condition("architecture", ["microservices"]),
        Rule::new("AWS Fargate", "c").with_condition("teamExperience", ["beginner"]),
    ];
    let sheet = engine.score(&spiky_beginner_event_driven(), &rules);

    assert_eq!(
        sheet.trace_entries(),
        vec![
            "Amazon EC2 matched 1 condition(s)",
            "AWS Lambda matched 2 condition(s)",
            "AWS Fargate matched 1 condition(s)",
        ]
    );
    let indices: Vec<usize> = sheet.matches.iter().map(|m| m.rule_index).collect();
    assert_eq!(indices, vec![0, 1, 3]);
}

// ==========================================
// 边界案例测试
// ==========================================

#[test]
fn test_empty_rules_yield_zero_for_every_candidate() {
    let engine = ScoringEngine::default();
    let sheet = engine.score(&spiky_beginner_event_driven(), &[]);

    assert_eq!(sheet.scores.len(), Candidate::ALL.len());
    assert!(sheet.scores.values().all(|s| s.raw_score == 0));
    assert!(sheet.matches.is_empty());
}

#[test]
fn test_unconditional_rule_never_contributes() {
    let engine = ScoringEngine::default();
    let sheet = engine.score(&spiky_beginner_event_driven(), &[Rule::new("Amazon EC2", "all")]);

    assert_eq!(sheet.total_score(), 0);
    assert!(sheet.matches.is_empty());
}

#[test]
fn test_absent_criteria_value_matches_nothing() {
    let engine = ScoringEngine::default();
    let criteria = Criteria {
        traffic_pattern: None,
        ..spiky_beginner_event_driven()
    };
    let sheet = engine.score(&criteria, &[lambda_rule()]);

    // 仅 architecture 命中
    assert_eq!(sheet.raw_score(Candidate::Lambda), 1);
}

#[test]
fn test_out_of_domain_spelling_matches_nothing() {
    let criteria: Criteria = serde_json::from_str(
        r#"{"trafficPattern":"SPIKY","budgetFocus":" lowest ","architecture":"Event_Driven"}"#,
    )
    .unwrap();
    let rules = vec![
        lambda_rule(),
        Rule::new("Amazon EC2", "y").with_condition("budgetFocus", ["lowest"]),
    ];

    let sheet = ScoringEngine::default().score(&criteria, &rules);

    assert_eq!(sheet.raw_score(Candidate::Lambda), 0);
    assert_eq!(sheet.raw_score(Candidate::Ec2), 0);
    assert!(sheet.matches.is_empty());
}

#[test]
fn test_non_string_value_does_not_drop_other_dimensions() {
    let criteria: Criteria =
        serde_json::from_str(r#"{"trafficPattern":5,"architecture":"event-driven"}"#).unwrap();

    let sheet = ScoringEngine::default().score(&criteria, &[lambda_rule()]);

    assert_eq!(sheet.raw_score(Candidate::Lambda), 1);
}

#[test]
fn test_unknown_dimension_key_matches_nothing() {
    let engine = ScoringEngine::default();
    let rule = Rule::new("AWS Lambda", "region").with_condition("region", ["spiky"]);
    let sheet = engine.score(&spiky_beginner_event_driven(), &[rule]);

    assert_eq!(sheet.total_score(), 0);
}

#[test]
fn test_unresolved_label_lands_in_fallback_bucket() {
    let engine = ScoringEngine::new(CandidateResolver::new(Candidate::Fargate));
    let rule = Rule::new("Google Cloud Run", "other cloud").with_condition("budgetFocus", ["lowest"]);
    let sheet = engine.score(&spiky_beginner_event_driven(), &[rule]);

    assert_eq!(sheet.raw_score(Candidate::Fargate), 1);
    assert_eq!(sheet.fallback_matches(), 1);
    assert!(sheet.matches[0].via_fallback);
    assert_eq!(sheet.matches[0].label, "Google Cloud Run");
}

#[test]
fn test_score_is_idempotent() {
    let engine = ScoringEngine::default();
    let rules = vec![lambda_rule(), Rule::new("Amazon ECS", "b").with_condition("budgetFocus", ["lowest"])];
    let criteria = spiky_beginner_event_driven();

    assert_eq!(engine.score(&criteria, &rules), engine.score(&criteria, &rules));
}

// ==========================================
// 性质测试: 得分守恒
// ==========================================

const DIMENSIONS: [&str; 5] = [
    "trafficPattern",
    "budgetFocus",
    "teamExperience",
    "architecture",
    "region",
];

const VALUES: [&str; 12] = [
    "low",
    "spiky",
    "consistent",
    "high",
    "lowest",
    "predictable",
    "beginner",
    "intermediate",
    "strong-devops",
    "event-driven",
    "microservices",
    "monolith",
];

const LABELS: [&str; 6] = [
    "AWS Lambda",
    "Amazon EC2",
    "Amazon ECS",
    "AWS Fargate",
    "Amazon ECS (Fargate)",
    "Something Else",
];

fn arb_rule() -> impl Strategy<Value = Rule> {
    (
        0..LABELS.len(),
        prop::collection::vec((0..DIMENSIONS.len(), prop::collection::vec(0..VALUES.len(), 0..4)), 0..5),
    )
        .prop_map(|(label, conditions)| {
            conditions
                .into_iter()
                .fold(Rule::new(LABELS[label], "generated"), |rule, (dim, values)| {
                    rule.with_condition(DIMENSIONS[dim], values.into_iter().map(|v| VALUES[v]))
                })
        })
}

fn arb_criteria() -> impl Strategy<Value = Criteria> {
    (
        prop::option::of(prop::sample::select(TrafficPattern::ALL.to_vec())),
        prop::option::of(prop::sample::select(BudgetFocus::ALL.to_vec())),
        prop::option::of(prop::sample::select(TeamExperience::ALL.to_vec())),
        prop::option::of(prop::sample::select(Architecture::ALL.to_vec())),
    )
        .prop_map(|(traffic_pattern, budget_focus, team_experience, architecture)| Criteria {
            traffic_pattern,
            budget_focus,
            team_experience,
            architecture,
        })
}

proptest! {
    #[test]
    fn prop_score_mass_is_conserved(criteria in arb_criteria(), rules in prop::collection::vec(arb_rule(), 0..12)) {
        let engine = ScoringEngine::default();
        let sheet = engine.score(&criteria, &rules);

        let expected: u32 = rules
            .iter()
            .map(|rule| ScoringEngine::count_matches(&criteria, rule))
            .sum();

        prop_assert_eq!(sheet.total_score(), expected);
        prop_assert_eq!(sheet.scores.len(), Candidate::ALL.len());
        prop_assert_eq!(
            sheet.matches.iter().map(|m| m.matched_conditions).sum::<u32>(),
            expected
        );
    }
}
