//! Error type shared by every stage of the huffpack pipeline.
//!
//! Nothing inside the library recovers from these. They are handed straight back to the
//! caller, which decides whether to log, retry the I/O, or give up.

use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum HuffError {
    /// There were no symbols to build a tree from.
    EmptyInput,
    /// A symbol was handed to the encoder that has no codeword in the codebook.
    UnknownSymbol(u8),
    /// The packed stream (or its container) could not be decoded.
    MalformedStream(String),
    /// Failure in the file layer around the codec.
    Io(std::io::Error),
}

impl HuffError {
    pub(crate) fn malformed<S: Into<String>>(reason: S) -> Self {
        HuffError::MalformedStream(reason.into())
    }
}

impl Display for HuffError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HuffError::EmptyInput => write!(f, "nothing to compress: the input is empty"),
            HuffError::UnknownSymbol(sym) => {
                write!(f, "symbol {:#04x} has no codeword in the codebook", sym)
            }
            HuffError::MalformedStream(reason) => write!(f, "malformed stream: {}", reason),
            HuffError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for HuffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HuffError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HuffError {
    fn from(e: std::io::Error) -> Self {
        HuffError::Io(e)
    }
}
