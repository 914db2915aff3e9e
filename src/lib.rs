//! # trust-modal: Trust and Epistemic Modal Logic
//!
//! Parses propositional modal formulas and evaluates them under two semantics:
//! a fuzzy trust frame, where agents hold degrees of belief and trust one another, and
//! a paraconsistent Kripke model, where every world records evidence for and against
//! each variable separately.
//!
//! ## Formula Processing Pipeline
//!
//! ```text
//! Formula Text → Tokenizer → Parser → Expression → Fuzzy / Structured Evaluator
//! ```
//!
//! ### Stage 1: Tokenization
//!
//! The [`tokenizer`] module turns the formula text into tokens: single-letter
//! variables, the connectives `& | -> -<`, the prefix operators `~ [] <>` and
//! parentheses. Every token carries its source span.
//!
//! ### Stage 2: Parsing
//!
//! The [`analyzer`] module builds an [`Expression`] tree from the token stream with
//! parser combinators. The grammar has no precedence: prefix operators take the rest
//! of the formula and binary connectives nest to the right.
//!
//! ### Stage 3: Evaluation
//!
//! The [`eval`] module walks the tree. [`eval::FuzzyEvaluator`] yields a degree in
//! `[0, 1]` for an agent of a [`eval::FuzzyFrame`]; [`eval::StructuredEvaluator`]
//! yields a [`eval::Valuation`] pair at a world of a [`model::KripkeModel`].
//!
//! ## Example
//!
//! ```
//! use trust_modal::{eval::FuzzyFrame, fuzzy_evaluate, parse};
//!
//! let frame = FuzzyFrame::new()
//!     .with_degree("A", "agent1", 1.0)
//!     .with_trust("agent1", "agent1", 1.0);
//! let formula = parse("<> A").unwrap();
//! assert_eq!(fuzzy_evaluate(&formula, &frame, "agent1").unwrap(), 1.0);
//! ```

pub mod analyzer;
pub mod ast;
pub mod config;
pub mod error;
pub mod eval;
pub mod model;
pub mod tokenizer;

// Re-exports
pub use ast::*;
pub use error::*;

use tracing::{debug, error};

use crate::analyzer::Parser;
use crate::analyzer::parsers::parse_formula;
use crate::config::EngineConfig;
use crate::eval::{FuzzyEvaluator, FuzzyFrame, StructuredEvaluator};
use crate::model::KripkeModel;
use crate::tokenizer::token::{tokenize, Span, Token};

/// Parses a formula with the default [`EngineConfig`].
pub fn parse(input: &str) -> InternalResult<Expression> {
    parse_with_config(input, &EngineConfig::default())
}

#[tracing::instrument(level = "debug", skip(config))]
pub fn parse_with_config(input: &str, config: &EngineConfig) -> InternalResult<Expression> {
    let tokens = tokenize(input).inspect_err(|e| error!("{}", e))?;
    let (tokens, spans): (Vec<Token>, Vec<Span>) =
        tokens.into_iter().map(|t| (t.token, t.span)).unzip();

    match parse_formula(config.max_formula_depth).parse(&tokens, 0) {
        Ok((_, expression)) => {
            debug!("parsed: {}", expression);
            Ok(expression)
        }
        Err(source) => {
            let span = spans
                .get(source.get_position())
                .or(spans.last())
                .copied()
                .unwrap_or_default();
            error!("{} at {}", source, span);
            Err(Error::Parse { source, span })
        }
    }
}

/// Degree of `expression` at `agent` of the fuzzy trust frame.
pub fn fuzzy_evaluate(
    expression: &Expression,
    frame: &FuzzyFrame,
    agent: &str,
) -> InternalResult<f64> {
    Ok(FuzzyEvaluator::new(frame).evaluate(expression, agent)?)
}

/// `(valuation1, valuation2)` of `expression` at `world` of the Kripke model.
pub fn structured_evaluate(
    expression: &Expression,
    model: &KripkeModel,
    world: usize,
) -> InternalResult<(bool, bool)> {
    Ok(StructuredEvaluator::new(model)
        .evaluate(expression, world)?
        .into())
}
