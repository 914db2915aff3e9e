//! # Core Parser Definitions
//!
//! This module defines the parser interface and error types that the formula
//! grammar is built from.

use thiserror::Error;

/// Parser trait defines the core parsing interface.
///
/// A parser takes an input slice and a position, and returns either the position
/// after the consumed input together with the parsed value, or a parse error.
/// Parsers never mutate their input, so the position is the only cursor.
///
/// # Type Parameters
///
/// * `I` - The input token type
/// * `O` - The output value type
pub trait Parser<I, O> {
    /// Attempts to parse the input starting at the given position.
    ///
    /// # Returns
    ///
    /// * `Ok((new_pos, output))` - If parsing succeeds
    /// * `Err(error)` - If parsing fails
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O>;
}

/// Result type for parsing operations.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

/// Error type for parsing operations.
///
/// Positions are token indices into the parsed slice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended where a token was required
    #[error("Unexpected EOF: expected {expected} at position {position}, context: {context:?}")]
    UnexpectedEOF {
        expected: String,
        position: usize,
        context: Option<String>,
    },
    /// A token that matches none of the admissible alternatives
    #[error(
        "Unexpected token: expected {expected}, found {found} at position {position}, context: {context:?}"
    )]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
        context: Option<String>,
    },
    /// Formula nesting deeper than the configured limit
    #[error("Formula nesting exceeds the maximum depth of {max_depth} at position {position}")]
    DepthLimitExceeded { max_depth: usize, position: usize },
}

impl ParseError {
    /// Appends a context breadcrumb, innermost first.
    pub fn with_context(self, ctx: &str) -> Self {
        let extend = |context: Option<String>| match context {
            Some(c) => Some(format!("{} -> {}", c, ctx)),
            None => Some(ctx.to_string()),
        };
        match self {
            ParseError::UnexpectedEOF {
                expected,
                position,
                context,
            } => ParseError::UnexpectedEOF {
                expected,
                position,
                context: extend(context),
            },
            ParseError::UnexpectedToken {
                expected,
                found,
                position,
                context,
            } => ParseError::UnexpectedToken {
                expected,
                found,
                position,
                context: extend(context),
            },
            // the limit is a property of the whole formula, not of where it was hit
            depth @ ParseError::DepthLimitExceeded { .. } => depth,
        }
    }

    pub fn get_position(&self) -> usize {
        match self {
            ParseError::UnexpectedEOF { position, .. } => *position,
            ParseError::UnexpectedToken { position, .. } => *position,
            ParseError::DepthLimitExceeded { position, .. } => *position,
        }
    }
}
