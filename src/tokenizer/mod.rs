//! # Tokenizer Component
//!
//! Lexical analysis of formula text into a stream of typed tokens.
//!
//! ## Design Principles
//!
//! * **Single-letter variables**: every alphabetic character is its own variable
//!   token, so `ab` is two variables. The grammar relies on this.
//! * **Whole composite symbols**: `->`, `-<`, `[]` and `<>` are recognized in one step
//!   and a dangling half is reported as [`TokenizerError::IncompleteSymbol`](token::TokenizerError).
//! * **Positions**: each token carries a [`Span`](token::Span) for error reporting.
//! * **Immutable input**: [`Lexer`](token::Lexer) is a cursor over a borrowed buffer
//!   with one token of lookahead.
//!
//! ## Component Structure
//!
//! * [`token`]: token types, the lexer, and [`tokenize`](token::tokenize)
//! * [`symbol`]: operators and delimiters
//! * [`whitespace`]: token separators
//!
//! ## Usage Example
//!
//! ```rust
//! use trust_modal::tokenizer::token::{tokenize, Token};
//!
//! let tokens = tokenize("[] a & b").unwrap();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens.last().unwrap().token, Token::Eof);
//! ```

pub mod symbol;
pub mod token;
pub mod whitespace;
