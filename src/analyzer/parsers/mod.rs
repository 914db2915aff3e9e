pub mod formula;

pub use formula::{parse_formula, ExpressionParser};
