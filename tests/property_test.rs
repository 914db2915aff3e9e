//! Property-based tests for the connective algebra and the parser.

use proptest::prelude::*;
use trust_modal::{
    eval::{
        fuzzy::{fuzzy_conjunction, fuzzy_disjunction},
        StructuredEvaluator,
    },
    model::KripkeModel,
    parse,
    tokenizer::symbol::Operator,
    Expression,
};

const VARIABLES: [&str; 3] = ["p", "q", "r"];

/// Generate formulas whose left operands are variables, the shape the parser produces
fn formula_strategy() -> impl Strategy<Value = Expression> {
    let leaf = prop::sample::select(VARIABLES.to_vec()).prop_map(Expression::variable);
    leaf.clone().prop_recursive(6, 48, 2, move |inner| {
        prop_oneof![
            (
                prop::sample::select(vec![Operator::Negation, Operator::Box, Operator::Diamond]),
                inner.clone()
            )
                .prop_filter_map("prefix operator", |(op, operand)| {
                    Expression::unary(op, operand)
                }),
            (
                prop::sample::select(vec![
                    Operator::Conjunction,
                    Operator::Disjunction,
                    Operator::Implication,
                    Operator::Coimplication,
                ]),
                leaf.clone(),
                inner
            )
                .prop_filter_map("connective", |(op, left, right)| {
                    Expression::binary(op, left, right)
                }),
        ]
    })
}

/// Generate random models over `VARIABLES` with up to five worlds
fn model_strategy() -> impl Strategy<Value = KripkeModel> {
    (1usize..=5).prop_flat_map(|size| {
        let bits = move || prop::collection::vec(0i64..=1, size);
        (
            prop::collection::vec(bits(), size),
            prop::collection::vec((bits(), bits()), VARIABLES.len()),
        )
            .prop_map(move |(relation, valuations)| {
                let mut builder = KripkeModel::builder(size).relation(relation);
                for (name, (positive, negative)) in VARIABLES.iter().zip(valuations) {
                    builder = builder.valuation1(name, positive).valuation2(name, negative);
                }
                builder.build().expect("generated model is valid")
            })
    })
}

proptest! {
    #[test]
    fn test_fuzzy_conjunction_is_min(x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
        let z = fuzzy_conjunction(x, y);
        prop_assert_eq!(z, x.min(y));
        prop_assert!((0.0..=1.0).contains(&z));
    }

    #[test]
    fn test_fuzzy_disjunction_is_max(x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
        let z = fuzzy_disjunction(x, y);
        prop_assert_eq!(z, x.max(y));
        prop_assert!((0.0..=1.0).contains(&z));
    }

    #[test]
    fn test_double_negation_is_identity(
        formula in formula_strategy(),
        model in model_strategy(),
    ) {
        let evaluator = StructuredEvaluator::new(&model);
        let doubled = !!formula.clone();
        for world in 0..model.worlds_size() {
            prop_assert_eq!(
                evaluator.evaluate(&doubled, world),
                evaluator.evaluate(&formula, world)
            );
        }
    }

    #[test]
    fn test_display_parses_back(formula in formula_strategy()) {
        prop_assert_eq!(parse(&formula.to_string()).unwrap(), formula);
    }
}
