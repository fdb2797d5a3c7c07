use core::fmt;
use std::ops::Range;

use crate::input::{Input, InputError};

/// Attach the input position of an error to its context chain.
pub fn error_context<E>(path: &'static str, input: Input, error: E) -> anyhow::Error
where
    anyhow::Error: From<E>,
{
    let error = anyhow::Error::from(error);
    let span = find_span(&error);
    let pos = LineCol::from_offset(input.as_data(), span.start);

    error.context(ErrorContext { path, pos })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    /// Calculate the line and column of the given byte offset.
    pub(crate) fn from_offset(data: &[u8], offset: usize) -> Self {
        let offset = offset.min(data.len());
        let line = memchr::memchr_iter(b'\n', &data[..offset]).count();

        let column = match memchr::memrchr(b'\n', &data[..offset]) {
            Some(nl) => offset - nl - 1,
            None => offset,
        };

        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        write!(f, "{line}:{}", self.column)
    }
}

/// Errors may be wrapped through multiple layers of processing, so look
/// through the whole chain for span information.
fn find_span(error: &anyhow::Error) -> Range<usize> {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<InputError>() {
            return e.span();
        }
    }

    0..0
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::LineCol;

    #[test]
    fn line_col() {
        let data = b"abc\nde\nf";
        assert_eq!(LineCol::from_offset(data, 0).to_string(), "1:0");
        assert_eq!(LineCol::from_offset(data, 2).to_string(), "1:2");
        assert_eq!(LineCol::from_offset(data, 4).to_string(), "2:0");
        assert_eq!(LineCol::from_offset(data, 7).to_string(), "3:0");
        assert_eq!(LineCol::from_offset(data, 100).to_string(), "3:1");
    }
}
