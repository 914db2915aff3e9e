use thiserror::Error;

use crate::analyzer::ParseError;
use crate::eval::EvalError;
use crate::model::ModelError;
use crate::tokenizer::token::{Span, TokenizerError};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] TokenizerError),
    // parse errors carry the source span of the offending token
    #[error("Parse error: {source} at {span}")]
    Parse {
        #[source]
        source: ParseError,
        span: Span,
    },
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
    #[error("Eval error: {0}")]
    Eval(#[from] EvalError),
    #[error("Config error: {0}")]
    Config(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Tokenize(e) => Some(e.span()),
            Error::Parse { span, .. } => Some(*span),
            _ => None,
        }
    }
}
