//! # Symbol Token Handling
//!
//! This module defines the symbols (operators and delimiters) of the formula language
//! and provides the `nom` parsers that recognize them.
//!
//! ## Symbol Types
//!
//! * [`Operator`]: unary prefixes (`~`, `[]`, `<>`) and binary connectives
//!   (`&`, `|`, `->`, `-<`)
//! * [`Delimiter`]: grouping parentheses
//!
//! ## Parsing Strategy
//!
//! Composite symbols are matched whole with a single `tag`, so the tokenizer never
//! produces half of `->`, `-<`, `[]` or `<>`. A leading `-`, `[` or `<` that is not
//! followed by its partner fails here and is reported by the lexer as an incomplete
//! symbol.

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, value},
    error::context,
};
use strum_macros::{Display, EnumString};

use super::token::{ParserResult, Token};

/// Operators of the formula language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
pub enum Operator {
    /// Negation (`~`)
    #[strum(serialize = "~")]
    Negation,
    /// Necessity (`[]`)
    #[strum(serialize = "[]")]
    Box,
    /// Possibility (`<>`)
    #[strum(serialize = "<>")]
    Diamond,

    /// Conjunction (`&`)
    #[strum(serialize = "&")]
    Conjunction,
    /// Disjunction (`|`)
    #[strum(serialize = "|")]
    Disjunction,
    /// Residuum-style implication (`->`)
    #[strum(serialize = "->")]
    Implication,
    /// Co-implication (`-<`)
    #[strum(serialize = "-<")]
    Coimplication,
}

impl Operator {
    /// Prefix operators that take the whole remaining formula as operand.
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            Operator::Negation | Operator::Box | Operator::Diamond
        )
    }
}

/// Grouping delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
pub enum Delimiter {
    /// Opening parenthesis (`(`)
    #[strum(serialize = "(")]
    OpenParen,
    /// Closing parenthesis (`)`)
    #[strum(serialize = ")")]
    CloseParen,
}

/// Parses an operator token from the input string.
///
/// # Examples
///
/// ```
/// # use trust_modal::tokenizer::symbol::{parse_operator, Operator};
/// # use trust_modal::tokenizer::token::Token;
/// let (rest, token) = parse_operator("-> b").unwrap();
/// assert_eq!(token, Token::Operator(Operator::Implication));
/// assert_eq!(rest, " b");
/// ```
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_operator(input: &str) -> ParserResult<Token> {
    context(
        "operator",
        map(
            alt((
                // Composite symbols
                value(Operator::Implication, tag("->")),
                value(Operator::Coimplication, tag("-<")),
                value(Operator::Box, tag("[]")),
                value(Operator::Diamond, tag("<>")),
                // Single-character symbols
                value(Operator::Conjunction, tag("&")),
                value(Operator::Disjunction, tag("|")),
                value(Operator::Negation, tag("~")),
            )),
            Token::Operator,
        ),
    )(input)
}

/// Parses a delimiter token from the input string.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_delimiter(input: &str) -> ParserResult<Token> {
    context(
        "delimiter",
        map(
            alt((
                value(Delimiter::OpenParen, tag("(")),
                value(Delimiter::CloseParen, tag(")")),
            )),
            Token::Delimiter,
        ),
    )(input)
}

/// Leading characters of composite symbols.
///
/// When one of these fails to parse as an operator, the partner character is
/// missing or wrong.
pub(crate) fn composite_partner(lead: char) -> Option<&'static str> {
    match lead {
        '-' => Some("'>' or '<'"),
        '[' => Some("']'"),
        '<' => Some("'>'"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_operators() {
        let test_cases = [
            ("&", Operator::Conjunction),
            ("|", Operator::Disjunction),
            ("->", Operator::Implication),
            ("-<", Operator::Coimplication),
            ("~", Operator::Negation),
            ("[]", Operator::Box),
            ("<>", Operator::Diamond),
        ];

        for (input, expected) in test_cases.iter() {
            let (rest, token) = parse_operator(input).unwrap();
            assert_eq!(token, Token::Operator(*expected));
            assert_eq!(rest, "");
            // strum serialization matches the surface symbol
            assert_eq!(expected.to_string(), *input);
            assert_eq!(Operator::from_str(input).unwrap(), *expected);
        }
    }

    #[test]
    fn test_delimiters() {
        let (rest, token) = parse_delimiter("(a").unwrap();
        assert_eq!(token, Token::Delimiter(Delimiter::OpenParen));
        assert_eq!(rest, "a");

        let (rest, token) = parse_delimiter(")").unwrap();
        assert_eq!(token, Token::Delimiter(Delimiter::CloseParen));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_half_composite_is_rejected() {
        assert!(parse_operator("-x").is_err());
        assert!(parse_operator("[ ]").is_err());
        assert!(parse_operator("<").is_err());
        assert!(parse_operator("-").is_err());
    }

    #[test]
    fn test_arity() {
        assert!(Operator::Negation.is_unary());
        assert!(Operator::Box.is_unary());
        assert!(Operator::Diamond.is_unary());
        assert!(!Operator::Conjunction.is_unary());
        assert!(!Operator::Coimplication.is_unary());
    }
}
