//! # Formula Evaluation
//!
//! Two independent semantics over the same [`Expression`](crate::ast::Expression) tree:
//!
//! * [`fuzzy`]: a degree in `[0, 1]` for an agent of a fuzzy trust frame, where the
//!   modalities range over the agents it trusts.
//! * [`structured`]: a pair of booleans (evidence for, evidence against) at a world of
//!   a [`KripkeModel`](crate::model::KripkeModel).
//!
//! Both walk the tree recursively and stop at the configured maximum depth.

pub mod fuzzy;
pub mod structured;

pub use fuzzy::{FuzzyEvaluator, FuzzyFrame};
pub use structured::{StructuredEvaluator, Valuation};

use thiserror::Error;

use crate::model::ValuationTable;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Empty relation: agent '{agent}' has no trusted agents")]
    EmptyRelation { agent: String },
    #[error("Unknown variable: '{name}' is not defined in {table}")]
    UnknownVariable { name: String, table: ValuationTable },
    #[error("World out of range: world {world} in a model of {worlds_size} worlds")]
    WorldOutOfRange { world: usize, worlds_size: usize },
    #[error("Formula nesting exceeds the maximum depth of {max_depth}")]
    DepthLimitExceeded { max_depth: usize },
}

pub type EvalResult<T> = Result<T, EvalError>;

pub(crate) fn check_depth(depth: usize, max_depth: usize) -> EvalResult<()> {
    if depth > max_depth {
        Err(EvalError::DepthLimitExceeded { max_depth })
    } else {
        Ok(())
    }
}
