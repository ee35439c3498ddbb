//! The kinds of errors the parser can produce.

use ariadne::{Fmt, Label, Report, ReportKind};
use crate::tokenizer::TokenKind;
use std::ops::Range;
use termeq_error::{ErrorKind, EXPR};

/// Builds a single-label report in the house style: the message as the headline, one colored
/// label per span, and an optional help line.
fn report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: String,
    labels: Vec<String>,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let mut builder = Report::build(ReportKind::Error, src_id, spans[0].start)
        .with_message(message)
        .with_labels(
            labels
                .into_iter()
                .enumerate()
                .map(|(i, label_str)| {
                    let mut label = Label::new((src_id, spans[i].clone())).with_color(EXPR);

                    if !label_str.is_empty() {
                        label = label.with_message(label_str);
                    }

                    label
                })
                .collect::<Vec<_>>(),
        );

    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}

/// The input contained no factor where one was required: the whole term was empty, or an
/// operator was missing an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyExpression;

impl ErrorKind for EmptyExpression {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "missing expression".to_string(),
            vec![format!("I expected to see a {} here", "term".fg(EXPR))],
            None,
        )
    }
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyParenthesis;

impl ErrorKind for EmptyParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "missing expression inside parenthesis".to_string(),
            vec!["add an expression here".to_string()],
            None,
        )
    }
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "unclosed parenthesis".to_string(),
            vec!["this parenthesis is not closed".to_string()],
            Some(
                if self.opening {
                    "add a closing parenthesis `)` somewhere after this"
                } else {
                    "add an opening parenthesis `(` somewhere before this"
                }
                .to_string(),
            ),
        )
    }
}

/// An unexpected token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

impl ErrorKind for UnexpectedToken {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "unexpected token".to_string(),
            vec![format!(
                "expected one of: {}",
                self.expected
                    .iter()
                    .map(|t| format!("{:?}", t))
                    .collect::<Vec<_>>()
                    .join(", "),
            )],
            Some(format!("found {:?}", self.found)),
        )
    }
}

/// A character outside the term grammar's alphabet was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrecognizedSymbol;

impl ErrorKind for UnrecognizedSymbol {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "unrecognized symbol".to_string(),
            vec!["this character cannot appear in a term".to_string()],
            Some(format!(
                "terms consist of digits, the letters {}, the operators {}, and parentheses",
                "a-z".fg(EXPR),
                "+ - *".fg(EXPR),
            )),
        )
    }
}

/// The term was nested more deeply than the parser's recursion bound allows.
#[derive(Debug, Clone, PartialEq)]
pub struct RecursionDepthExceeded {
    /// The configured recursion bound.
    pub max_depth: usize,
}

impl ErrorKind for RecursionDepthExceeded {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "term is nested too deeply".to_string(),
            vec!["while parsing this".to_string()],
            Some(format!(
                "the parser gives up after {} levels of recursion",
                self.max_depth,
            )),
        )
    }
}
