//! # Formula Analyzer (Parser)
//!
//! Transforms the token stream produced by the [`tokenizer`](crate::tokenizer) into an
//! [`Expression`](crate::ast::Expression) tree using a small parser combinator core.
//!
//! ## Core Components
//!
//! * **Parser Trait**: [`Parser`] parses a token slice from a position
//! * **Combinators**: building blocks in [`combinators`], constructed through [`prelude`]
//! * **Grammar**: the formula rule in [`parsers::formula`]
//!
//! ## Position in the Pipeline
//!
//! ```text
//! Formula Text → Tokenizer → Analyzer → {Fuzzy | Structured} Evaluator
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use trust_modal::analyzer::{parsers::parse_formula, Parser};
//! use trust_modal::ast::Expression;
//! use trust_modal::tokenizer::token::{tokenize, Token};
//!
//! let tokens: Vec<Token> = tokenize("~a").unwrap().into_iter().map(|t| t.token).collect();
//! let (_, expr) = parse_formula(32).parse(&tokens, 0).unwrap();
//! assert_eq!(expr, Expression::negation(Expression::variable("a")));
//! ```

pub mod combinators;
pub mod core;
pub mod parsers;
pub mod prelude;

pub use core::ParseError;
pub use core::ParseResult;
pub use core::Parser;
