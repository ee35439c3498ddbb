//! The equivalence decision procedure.
//!
//! Two terms are equivalent exactly when their canonical polynomial normal forms are equal.
//! Parse errors always propagate to the caller; a term that fails to parse is never interpreted
//! as "not equivalent".

use crate::parser::Parser;
use termeq_algebra::{Polynomial, Step, StepCollector};
use termeq_error::Error;

/// The side of a pair of terms an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The outcome of comparing a pair of terms: both canonical normal forms, ready to be rendered
/// by a verbose caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub left: Polynomial,
    pub right: Polynomial,
}

impl Comparison {
    /// Returns true if the two terms are equivalent.
    pub fn equivalent(&self) -> bool {
        self.left == self.right
    }
}

/// Decides whether two terms are equivalent under left-to-right evaluation.
pub fn are_equivalent(left: &str, right: &str) -> Result<bool, Error> {
    check(left, right, &mut ())
        .map(|comparison| comparison.equivalent())
        .map_err(|(_, error)| error)
}

/// Parses both terms of a pair, reporting every intermediate polynomial operation to `steps`.
/// An error is attributed to the side it came from so the caller can highlight the right source
/// string.
pub fn check<C: StepCollector<Step>>(
    left: &str,
    right: &str,
    steps: &mut C,
) -> Result<Comparison, (Side, Error)> {
    let left = Parser::new(left)
        .parse_full(steps)
        .map_err(|error| (Side::Left, error))?;
    let right = Parser::new(right)
        .parse_full(steps)
        .map_err(|error| (Side::Right, error))?;
    Ok(Comparison { left, right })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commutativity() {
        assert!(are_equivalent("a+b", "b+a").unwrap());
        assert!(are_equivalent("a*b", "b*a").unwrap());
    }

    #[test]
    fn cancellation_to_zero() {
        assert!(are_equivalent("a+b-b", "a").unwrap());
        assert!(are_equivalent("a-a", "0").unwrap());
    }

    #[test]
    fn distributivity() {
        assert!(are_equivalent("(a+b)*(a-b)", "a*a-b*b").unwrap());
    }

    #[test]
    fn non_equivalence() {
        assert!(!are_equivalent("a", "b").unwrap());
        assert!(!are_equivalent("a*a", "a").unwrap());
        assert!(!are_equivalent("2+3*4", "14").unwrap());
    }

    #[test]
    fn errors_propagate() {
        assert!(are_equivalent("(a+b", "a").is_err());
        assert!(are_equivalent("a", "").is_err());
    }

    #[test]
    fn errors_name_the_failing_side() {
        let (side, _) = check("(", "a", &mut ()).unwrap_err();
        assert_eq!(side, Side::Left);

        let (side, _) = check("a", "(", &mut ()).unwrap_err();
        assert_eq!(side, Side::Right);
    }

    #[test]
    fn collecting_steps_does_not_change_the_verdict() {
        let mut steps = Vec::new();
        let traced = check("(a+b)*(a-b)", "a*a-b*b", &mut steps).unwrap();
        let silent = check("(a+b)*(a-b)", "a*a-b*b", &mut ()).unwrap();

        assert!(!steps.is_empty());
        assert_eq!(traced, silent);
        assert!(traced.equivalent());
    }
}
