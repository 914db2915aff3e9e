//! Formula grammar.
//!
//! ```text
//! expr      := unary-op expr
//!            | VARIABLE ( binary-op expr )?
//!            | '(' expr ')'
//! unary-op  := '~' | '[]' | '<>'
//! binary-op := '&' | '|' | '->' | '-<'
//! ```
//!
//! There is a single rule and no precedence: a prefix operator takes the whole
//! remaining formula (`[] a & b` is `[](a & b)`), and binary chains nest to the right
//! (`a & b | c` is `a & (b | c)`). The left operand of a connective is always a
//! variable.

use crate::analyzer::{prelude::*, ParseError, ParseResult, Parser};
use crate::ast::Expression;
use crate::tokenizer::{
    symbol::{Delimiter, Operator},
    token::Token,
};

type UnaryBuilder = fn(Expression) -> Expression;
type BinaryBuilder = fn(Expression, Expression) -> Expression;

/// Parses a complete formula: one expression followed by end of input.
pub fn parse_formula(max_depth: usize) -> impl Parser<Token, Expression> {
    with_context(
        map(
            tuple2(ExpressionParser::new(max_depth), parse_eof()),
            |(expression, _): (Expression, ())| expression,
        ),
        "formula",
    )
}

/// Recursive-descent parser for `expr`, tracking its nesting depth.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionParser {
    depth: usize,
    max_depth: usize,
}

impl ExpressionParser {
    pub fn new(max_depth: usize) -> Self {
        Self {
            depth: 1,
            max_depth,
        }
    }

    fn nested(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..*self
        }
    }
}

impl Parser<Token, Expression> for ExpressionParser {
    fn parse(&self, input: &[Token], pos: usize) -> ParseResult<Expression> {
        if self.depth > self.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                max_depth: self.max_depth,
                position: pos,
            });
        }

        // one token of lookahead selects the branch
        match input.get(pos) {
            Some(Token::Operator(op)) if op.is_unary() => {
                parse_unary_expression(self.nested()).parse(input, pos)
            }
            Some(Token::Variable(_)) => VariableExpression {
                right: self.nested(),
            }
            .parse(input, pos),
            Some(Token::Delimiter(Delimiter::OpenParen)) => {
                parse_parenthesized(self.nested()).parse(input, pos)
            }
            // an exhausted slice; a tokenized formula always ends in `Token::Eof`,
            // which is reported as an unexpected token like every other mismatch
            None => Err(ParseError::UnexpectedEOF {
                expected: "formula".to_string(),
                position: pos,
                context: None,
            }),
            Some(found) => Err(ParseError::UnexpectedToken {
                expected: "variable, '~', '[]', '<>' or '('".to_string(),
                found: found.to_string(),
                position: pos,
                context: None,
            }),
        }
    }
}

fn parse_unary_expression(operand: ExpressionParser) -> impl Parser<Token, Expression> {
    with_context(
        map(
            tuple2(parse_unary_operator(), operand),
            |(build, operand): (UnaryBuilder, Expression)| build(operand),
        ),
        "unary formula",
    )
}

/// `VARIABLE ( binary-op expr )?`
///
/// The connective is a single-token lookahead. Once it matched, the right operand is
/// required and its errors propagate.
struct VariableExpression {
    right: ExpressionParser,
}

impl Parser<Token, Expression> for VariableExpression {
    fn parse(&self, input: &[Token], pos: usize) -> ParseResult<Expression> {
        let (pos, name) = parse_variable().parse(input, pos)?;
        let left = Expression::Variable(name);
        match optional(parse_binary_operator()).parse(input, pos)? {
            (pos, None) => Ok((pos, left)),
            (pos, Some(build)) => {
                let (pos, right) = with_context(self.right, "right operand").parse(input, pos)?;
                Ok((pos, build(left, right)))
            }
        }
    }
}

fn parse_parenthesized(inner: ExpressionParser) -> impl Parser<Token, Expression> {
    with_context(
        delimited(
            as_unit(parse_open_paren()),
            inner,
            as_unit(parse_close_paren()),
        ),
        "parenthesized formula",
    )
}

fn parse_variable() -> impl Parser<Token, String> {
    satisfy("variable", |token: &Token| match token {
        Token::Variable(name) => Some(name.clone()),
        _ => None,
    })
}

fn parse_unary_operator() -> impl Parser<Token, UnaryBuilder> {
    satisfy("'~', '[]' or '<>'", |token: &Token| match token {
        Token::Operator(Operator::Negation) => Some(Expression::negation as UnaryBuilder),
        Token::Operator(Operator::Box) => Some(Expression::box_modality as UnaryBuilder),
        Token::Operator(Operator::Diamond) => Some(Expression::diamond_modality as UnaryBuilder),
        _ => None,
    })
}

fn parse_binary_operator() -> impl Parser<Token, BinaryBuilder> {
    satisfy("'&', '|', '->' or '-<'", |token: &Token| match token {
        Token::Operator(Operator::Conjunction) => Some(Expression::conjunction as BinaryBuilder),
        Token::Operator(Operator::Disjunction) => Some(Expression::disjunction as BinaryBuilder),
        Token::Operator(Operator::Implication) => Some(Expression::implication as BinaryBuilder),
        Token::Operator(Operator::Coimplication) => {
            Some(Expression::coimplication as BinaryBuilder)
        }
        _ => None,
    })
}

fn parse_open_paren() -> impl Parser<Token, Token> {
    equal(Token::Delimiter(Delimiter::OpenParen))
}

fn parse_close_paren() -> impl Parser<Token, Token> {
    equal(Token::Delimiter(Delimiter::CloseParen))
}

fn parse_eof() -> impl Parser<Token, ()> {
    as_unit(equal(Token::Eof))
}
