//! # Whitespace Handling
//!
//! Whitespace only separates tokens in formulas, so unlike symbols it never becomes a
//! token. The lexer skips it before every token and uses the consumed slice to keep
//! its line and column counters current.

use nom::{bytes::complete::take_while, error::context};

use super::token::ParserResult;

/// Consumes any run of whitespace (possibly empty), including newlines.
///
/// # Examples
///
/// ```
/// # use trust_modal::tokenizer::whitespace::parse_whitespace;
/// let (rest, skipped) = parse_whitespace(" \t\na").unwrap();
/// assert_eq!(skipped, " \t\n");
/// assert_eq!(rest, "a");
/// ```
pub fn parse_whitespace(input: &str) -> ParserResult<&str> {
    context("whitespace", take_while(char::is_whitespace))(input)
}
