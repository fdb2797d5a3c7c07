use core::fmt;
use core::ops::Range;

use thiserror::Error;

/// The kind of an input error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("not an integer or integer overflow `{0}`")]
    NotInteger(&'static str),
    #[error("not utf-8")]
    NotUtf8,
    #[error("bad array; expected {0}, but got {1}")]
    BadArray(usize, usize),
    #[error("expected character")]
    NotChar,
    #[error("expected line")]
    NotLine,
    #[error("expected tuple of length `{0}`")]
    ExpectedTuple(usize),
    #[error("unexpected eof")]
    UnexpectedEof,
    #[error("string out of capacity ({0})")]
    StringCapacity(usize),
    #[error("array out of capacity ({0})")]
    ArrayCapacity(usize),
    #[error("{0}")]
    Boxed(anyhow::Error),
}

/// Error raised during input processing.
#[derive(Debug)]
pub struct InputError {
    span: Range<usize>,
    kind: ErrorKind,
}

impl InputError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The byte span of the input which raised the error.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for InputError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for InputError {
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}
