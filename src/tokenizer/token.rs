use std::fmt;

use nom::{
    branch::alt,
    character::complete::satisfy,
    combinator::map,
    error::{context, VerboseError},
    IResult,
};
use thiserror::Error;

use super::{
    symbol::{composite_partner, parse_delimiter, parse_operator, Delimiter, Operator},
    whitespace::parse_whitespace,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Propositional variables, always a single letter
    Variable(String),
    // Symbols
    Operator(Operator),
    Delimiter(Delimiter),
    // End of input, repeated forever once reached
    Eof,
}

impl Token {
    /// The source text this token was read from.
    pub fn literal(&self) -> String {
        match self {
            Token::Variable(name) => name.clone(),
            Token::Operator(op) => op.to_string(),
            Token::Delimiter(delimiter) => delimiter.to_string(),
            Token::Eof => String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => write!(f, "EOF"),
            other => write!(f, "'{}'", other.literal()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenSpan {
    pub token: Token,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line: {}, column: {}, start: {}, end: {}",
            self.line, self.column, self.start, self.end
        )
    }
}

/// Cursor-based lexer with a single token of lookahead.
///
/// The input buffer is never modified; the lexer only advances a byte offset into it,
/// so independent formulas can be lexed in parallel by independent lexers.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    lookahead: Option<TokenSpan>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            line: 1,   // 1-based
            column: 1, // 1-based
            lookahead: None,
        }
    }

    /// Consumes and returns the next token.
    ///
    /// Once the input is exhausted every call returns [`Token::Eof`].
    pub fn next_token(&mut self) -> TokenizerResult<TokenSpan> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.lex_token(),
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> TokenizerResult<&TokenSpan> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.lex_token()?,
        };
        Ok(&*self.lookahead.insert(token))
    }

    fn lex_token(&mut self) -> TokenizerResult<TokenSpan> {
        let input = self.input;

        if let Ok((_, skipped)) = parse_whitespace(&input[self.position..]) {
            self.update_position(skipped);
        }

        let remaining = &input[self.position..];
        let start = self.current_span();

        let Some(lead) = remaining.chars().next() else {
            return Ok(TokenSpan {
                token: Token::Eof,
                span: start,
            });
        };

        match alt((parse_variable, parse_operator, parse_delimiter))(remaining) {
            Ok((rest, token)) => {
                let consumed = &remaining[..(remaining.len() - rest.len())];
                self.update_position(consumed);
                tracing::trace!("lexed {} at {}", token, start);
                Ok(TokenSpan {
                    token,
                    span: Span {
                        end: self.position,
                        ..start
                    },
                })
            }
            Err(_) => {
                let error = Self::classify_error(lead, remaining, start);
                tracing::error!("{}", error);
                Err(error)
            }
        }
    }

    fn classify_error(lead: char, remaining: &str, start: Span) -> TokenizerError {
        let mut span = Span {
            end: start.start + lead.len_utf8(),
            ..start
        };
        match composite_partner(lead) {
            Some(expected) => {
                let found = remaining[lead.len_utf8()..].chars().next();
                if let Some(c) = found {
                    span.end += c.len_utf8();
                }
                TokenizerError::IncompleteSymbol {
                    symbol: lead,
                    expected: expected.to_string(),
                    found,
                    span,
                }
            }
            None => TokenizerError::InvalidCharacter { found: lead, span },
        }
    }

    fn current_span(&self) -> Span {
        Span {
            start: self.position,
            end: self.position,
            line: self.line,
            column: self.column,
        }
    }

    fn update_position(&mut self, text: &str) {
        for c in text.chars() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

/// Tokenizes a whole formula. The returned stream always ends with [`Token::Eof`].
#[tracing::instrument(level = "debug", skip(input))]
pub fn tokenize(input: &str) -> TokenizerResult<Vec<TokenSpan>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.token == Token::Eof;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}

fn parse_variable(input: &str) -> ParserResult<Token> {
    context(
        "variable",
        map(satisfy(|c: char| c.is_alphabetic()), |c| {
            Token::Variable(c.to_string())
        }),
    )(input)
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

pub type TokenizerResult<T> = Result<T, TokenizerError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenizerError {
    #[error("Invalid character: '{found}' at position {span}")]
    InvalidCharacter { found: char, span: Span },
    #[error("Incomplete symbol: '{symbol}' must be followed by {expected}, found {} at position {span}", describe_found(.found))]
    IncompleteSymbol {
        symbol: char,
        expected: String,
        found: Option<char>,
        span: Span,
    },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}

impl TokenizerError {
    pub fn span(&self) -> Span {
        match self {
            TokenizerError::InvalidCharacter { span, .. } => *span,
            TokenizerError::IncompleteSymbol { span, .. } => *span,
        }
    }
}
