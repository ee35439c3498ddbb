//! The right-to-left recursive-descent parser.
//!
//! The grammar has no operator precedence, so the natural algorithm works from the **right end**
//! of the token stream backward: strip the last factor (a trailing integer, a trailing letter, or
//! a parenthesized group found with a backward nesting scan), require a binary operator
//! immediately to its left, recursively parse everything left of that operator, and combine the
//! two polynomials. Left-to-right evaluation order falls out of the recursion unwinding, and
//! subtraction in particular is always `(parsed so far) - (last factor)`, matching a
//! left-to-right reading of the term.

pub mod kind;

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use termeq_algebra::{primitive::int_from_str, Op, Polynomial, Step, StepCollector, Variable};
use termeq_error::Error;

/// The default bound on parser recursion depth. One level is consumed per operator and per
/// parenthesized group, so this comfortably covers terms a few hundred characters long while
/// keeping adversarial input from exhausting the stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// The tokens allowed to end a factor.
const FACTOR_ENDS: &[TokenKind] = &[TokenKind::Int, TokenKind::Letter, TokenKind::CloseParen];

/// The binary operator tokens.
const OPERATORS: &[TokenKind] = &[TokenKind::Add, TokenKind::Sub, TokenKind::Mul];

/// Parses a term into its canonical polynomial normal form.
///
/// This is the primary entry point of the crate. Whitespace in the source is ignored; any other
/// deviation from the grammar fails with a parse error.
pub fn parse(source: &str) -> Result<Polynomial, Error> {
    Parser::new(source).parse_full(&mut ())
}

/// A parser for a single term.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens of the source, with whitespace already filtered out. Token spans still index
    /// the original source.
    tokens: Box<[Token<'source>]>,

    /// The length of the source, used to point errors past its end.
    eof: usize,

    /// The bound on recursion depth.
    max_depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source)
                .into_vec()
                .into_iter()
                .filter(|token| !token.is_whitespace())
                .collect(),
            eof: source.len(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replaces the recursion depth bound.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the entire token stream into a polynomial, reporting every intermediate polynomial
    /// operation to `steps`.
    pub fn parse_full<C: StepCollector<Step>>(&self, steps: &mut C) -> Result<Polynomial, Error> {
        self.parse_term(&self.tokens, self.eof..self.eof, 0, steps)
    }

    /// Parses the given token slice as a term. `at` is the span to blame when the slice is
    /// empty, e.g. the span of the operator whose operand is missing.
    fn parse_term<C: StepCollector<Step>>(
        &self,
        tokens: &[Token<'source>],
        at: Range<usize>,
        depth: usize,
        steps: &mut C,
    ) -> Result<Polynomial, Error> {
        if depth >= self.max_depth {
            return Err(Error::new(
                vec![slice_span(tokens).unwrap_or(at)],
                kind::RecursionDepthExceeded { max_depth: self.max_depth },
            ));
        }

        let Some((last, rest)) = tokens.split_last() else {
            return Err(Error::new(vec![at], kind::EmptyExpression));
        };

        // strip the last factor, leaving everything to its left in `rest`
        let (factor, rest) = match last.kind {
            TokenKind::Int => (Polynomial::constant(int_from_str(last.lexeme)), rest),
            TokenKind::Letter => {
                let Some(var) = last.lexeme.chars().next().and_then(Variable::from_char) else {
                    return Err(Error::new(vec![last.span.clone()], kind::UnrecognizedSymbol));
                };
                (Polynomial::variable(var), rest)
            },
            TokenKind::CloseParen => {
                let open = self.matching_open(rest, &last.span)?;
                let inner = &rest[open + 1..];
                let group_span = rest[open].span.start..last.span.end;
                if inner.is_empty() {
                    return Err(Error::new(vec![group_span], kind::EmptyParenthesis));
                }
                (self.parse_term(inner, group_span, depth + 1, steps)?, &rest[..open])
            },
            TokenKind::OpenParen => {
                return Err(Error::new(
                    vec![last.span.clone()],
                    kind::UnclosedParenthesis { opening: true },
                ));
            },
            TokenKind::Symbol => {
                return Err(Error::new(vec![last.span.clone()], kind::UnrecognizedSymbol));
            },
            found => {
                return Err(Error::new(
                    vec![last.span.clone()],
                    kind::UnexpectedToken { expected: FACTOR_ENDS, found },
                ));
            },
        };

        // base case: the factor was the entire term
        let Some((op_token, left)) = rest.split_last() else {
            return Ok(factor);
        };

        let op = match op_token.kind {
            TokenKind::Add => Op::Add,
            TokenKind::Sub => Op::Sub,
            TokenKind::Mul => Op::Mul,
            TokenKind::OpenParen => {
                return Err(Error::new(
                    vec![op_token.span.clone()],
                    kind::UnclosedParenthesis { opening: true },
                ));
            },
            TokenKind::Symbol => {
                return Err(Error::new(
                    vec![op_token.span.clone()],
                    kind::UnrecognizedSymbol,
                ));
            },
            found => {
                return Err(Error::new(
                    vec![op_token.span.clone()],
                    kind::UnexpectedToken { expected: OPERATORS, found },
                ));
            },
        };

        let lhs = self.parse_term(left, op_token.span.clone(), depth + 1, steps)?;
        let result = op.apply(&lhs, &factor);
        steps.push(Step { lhs, op, rhs: factor, result: result.clone() });
        Ok(result)
    }

    /// Finds the opening parenthesis in `tokens` matching a closing parenthesis just past its
    /// end, by scanning backward with a nesting counter. Returns the index of the match, or an
    /// error pointing at the closing parenthesis if the counter never returns to zero.
    fn matching_open(
        &self,
        tokens: &[Token<'source>],
        close_span: &Range<usize>,
    ) -> Result<usize, Error> {
        let mut nesting = 1usize;
        for (index, token) in tokens.iter().enumerate().rev() {
            match token.kind {
                TokenKind::CloseParen => nesting += 1,
                TokenKind::OpenParen => {
                    nesting -= 1;
                    if nesting == 0 {
                        return Ok(index);
                    }
                },
                _ => (),
            }
        }

        Err(Error::new(
            vec![close_span.clone()],
            kind::UnclosedParenthesis { opening: false },
        ))
    }
}

/// The span covering an entire token slice.
fn slice_span(tokens: &[Token]) -> Option<Range<usize>> {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => Some(first.span.start..last.span.end),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use termeq_algebra::primitive::int;

    #[test]
    fn parses_constant() {
        assert_eq!(parse("42").unwrap(), Polynomial::constant(int(42)));
    }

    #[test]
    fn parses_bare_zero() {
        assert_eq!(parse("0").unwrap(), Polynomial::zero());
    }

    #[test]
    fn parses_variable_case_insensitively() {
        assert_eq!(parse("A*a").unwrap(), parse("a*a").unwrap());
    }

    #[test]
    fn left_to_right_no_precedence() {
        // (2+3)*4 = 20, not 2+12
        assert_eq!(parse("2+3*4").unwrap(), Polynomial::constant(int(20)));
        assert_eq!(parse("5-3-1").unwrap(), Polynomial::constant(int(1)));
    }

    #[test]
    fn subtraction_folds_left() {
        assert_eq!(parse("a-b-c").unwrap(), parse("a-(b+c)").unwrap());
    }

    #[test]
    fn parentheses_group() {
        assert_eq!(parse("2+(3*4)").unwrap(), Polynomial::constant(int(14)));
        assert_eq!(parse("((a))").unwrap(), parse("a").unwrap());
    }

    #[test]
    fn cancellation() {
        assert_eq!(parse("a+b-b").unwrap(), parse("a").unwrap());
        assert!(parse("a-a").unwrap().is_zero());
    }

    #[test]
    fn distributive_expansion() {
        assert_eq!(parse("(a+b)*(a-b)").unwrap(), parse("a*a-b*b").unwrap());
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(parse(" a +\tb ").unwrap(), parse("a+b").unwrap());
    }

    #[test]
    fn rendering_is_grouping_independent() {
        assert_eq!(
            parse("a+b+c").unwrap().to_string(),
            parse("(a+b)+c").unwrap().to_string(),
        );
    }

    #[test]
    fn round_trip() {
        let polynomial = parse("a+b+7").unwrap();
        assert_eq!(parse(&polynomial.to_string()).unwrap(), polynomial);
    }

    #[test]
    fn collects_steps() {
        let mut steps = Vec::new();
        let result = Parser::new("1+2*3").parse_full(&mut steps).unwrap();

        assert_eq!(result, Polynomial::constant(int(9)));
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].to_string(), "Op: (1) + (2) = 3");
        assert_eq!(steps[1].to_string(), "Op: (3) * (3) = 9");

        // collecting steps never changes the outcome
        assert_eq!(result, parse("1+2*3").unwrap());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse("").is_err());
        assert!(parse("  \t").is_err());
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert!(parse("(a+b").is_err());
        assert!(parse("a+b)").is_err());
        assert!(parse("()").is_err());
    }

    #[test]
    fn rejects_missing_operators() {
        assert!(parse("ab").is_err());
        assert!(parse("2a").is_err());
        assert!(parse("(a)(b)").is_err());
    }

    #[test]
    fn rejects_dangling_operators() {
        assert!(parse("+a").is_err());
        assert!(parse("a+").is_err());
        assert!(parse("a+*b").is_err());
    }

    #[test]
    fn rejects_unrecognized_symbols() {
        assert!(parse("a$b").is_err());
        assert!(parse("a/b").is_err());
    }

    #[test]
    fn recursion_depth_bound() {
        let deep = format!("{}a{}", "(".repeat(8), ")".repeat(8));
        assert!(Parser::new(&deep).with_max_depth(4).parse_full(&mut ()).is_err());
        assert!(Parser::new(&deep).parse_full(&mut ()).is_ok());
    }

    #[test]
    fn large_coefficients() {
        // 10^38 as repeated multiplication, well past u64
        let big = format!("1{}", "*10".repeat(38));
        let expected = format!("1{}", "0".repeat(38));
        assert_eq!(parse(&big).unwrap(), parse(&expected).unwrap());
    }
}
