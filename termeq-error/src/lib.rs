//! Contains the common [`ErrorKind`] trait used by all parse errors to display user-facing error
//! messages, and the span-carrying [`Error`] type built from it.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight pieces of the offending term.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while parsing a term.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of the input term that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the input term that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the spans within `input`, the term the error
    /// originated from.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        self.build_report("input")
            .eprint(("input", Source::from(input)))
            .unwrap();
    }
}
