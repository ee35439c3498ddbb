//! Observation of the intermediate algebra performed while normalizing a term.
//!
//! The parser is referentially transparent: rather than consulting a global verbose flag, it
//! reports each polynomial operation to an explicit [`StepCollector`] supplied by the caller.
//! Passing `()` discards the steps and costs nothing at the call sites.

use crate::polynomial::Polynomial;
use std::fmt;

/// A binary operation on polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
}

impl Op {
    /// The operator's symbol in the input grammar.
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
        }
    }

    /// Applies the operation to the given operands, returning a new polynomial.
    pub fn apply(self, lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
        match self {
            Op::Add => lhs.clone() + rhs.clone(),
            Op::Sub => lhs.clone() - rhs.clone(),
            Op::Mul => lhs.clone() * rhs.clone(),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single polynomial operation performed while normalizing a term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub lhs: Polynomial,
    pub op: Op,
    pub rhs: Polynomial,
    pub result: Polynomial,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Op: ({}) {} ({}) = {}",
            self.lhs, self.op, self.rhs, self.result,
        )
    }
}

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// want to know the steps taken by an algorithm.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
