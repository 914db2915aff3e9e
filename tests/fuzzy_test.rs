use std::io::Write;

use trust_modal::{
    eval::{fuzzy::fuzzy_negation, EvalError, FuzzyFrame},
    fuzzy_evaluate, parse, Error,
};

fn evaluate(formula: &str, frame: &FuzzyFrame, agent: &str) -> Result<f64, Error> {
    fuzzy_evaluate(&parse(formula)?, frame, agent)
}

#[test]
fn it_evaluates_diamond_over_self_trust() {
    let frame = FuzzyFrame::from_json(
        r#"{"A": {"agent1": 1.0}, "relation": {"agent1": {"agent1": 1.0}}}"#,
    )
    .unwrap();
    assert_eq!(evaluate("<> A", &frame, "agent1").unwrap(), 1.0);
}

#[test]
fn it_defaults_missing_variables_to_zero() {
    let frame = FuzzyFrame::new();
    assert_eq!(evaluate("B", &frame, "agent1").unwrap(), 0.0);
    assert_eq!(evaluate("B | ~B", &frame, "agent1").unwrap(), 1.0);
}

#[test]
fn it_collapses_negation() {
    let frame = FuzzyFrame::new().with_degree("p", "a", 0.01);
    assert_eq!(evaluate("~p", &frame, "a").unwrap(), 0.0);
    assert_eq!(evaluate("~~p", &frame, "a").unwrap(), 1.0);
    assert_eq!(fuzzy_negation(-0.5), 1.0);
}

#[test]
fn it_evaluates_implications() {
    let frame = FuzzyFrame::new()
        .with_degree("p", "a", 0.3)
        .with_degree("q", "a", 0.7);
    assert_eq!(evaluate("p -> q", &frame, "a").unwrap(), 0.7);
    assert_eq!(evaluate("q -> p", &frame, "a").unwrap(), 1.0);
    assert_eq!(evaluate("p -< q", &frame, "a").unwrap(), 0.0);
    assert_eq!(evaluate("q -< p", &frame, "a").unwrap(), 0.7);
}

#[test]
fn it_walks_trust_chains() {
    // alice trusts bob, bob trusts carol
    let frame = FuzzyFrame::new()
        .with_trust("alice", "bob", 0.8)
        .with_trust("bob", "carol", 0.6)
        .with_degree("p", "carol", 0.9);
    // <>p at bob: min(0.6, 0.9) = 0.6; <><>p at alice: min(0.8, 0.6)
    assert_eq!(evaluate("<><> p", &frame, "alice").unwrap(), 0.6);
    // carol trusts no one
    assert!(matches!(
        evaluate("<><><> p", &frame, "alice"),
        Err(Error::Eval(EvalError::EmptyRelation { ref agent })) if agent == "carol"
    ));
}

#[test]
fn it_rejects_modalities_without_trusted_agents() {
    let frame = FuzzyFrame::new().with_degree("p", "agent1", 1.0);
    assert!(matches!(
        evaluate("<> p", &frame, "agent1"),
        Err(Error::Eval(EvalError::EmptyRelation { .. }))
    ));
    assert!(matches!(
        evaluate("[] p", &frame, "agent1"),
        Err(Error::Eval(EvalError::EmptyRelation { .. }))
    ));
}

#[test]
fn it_loads_frames_from_files() {
    let path = std::env::temp_dir().join(format!("trust-modal-frame-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{"p": {{"a": 0.25}}, "relation": {{"a": {{"a": 0.5}}}}}}"#
    )
    .unwrap();
    drop(file);

    let frame = FuzzyFrame::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    // 0.5 > 0.25, so the box keeps the degree
    assert_eq!(evaluate("[] p", &frame, "a").unwrap(), 0.25);
    assert!(matches!(
        FuzzyFrame::from_file(&path),
        Err(Error::Config(_))
    ));
}
