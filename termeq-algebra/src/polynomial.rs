//! The canonical polynomial normal form of a term.

use crate::monomial::{Monomial, Variable};
use rug::Integer;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A finite sum of (coefficient, monomial) pairs with distinct monomials and nonzero
/// coefficients.
///
/// This is the canonical representative of a term's value under left-to-right evaluation: two
/// terms are equivalent exactly when their polynomials compare equal, which is why a monomial
/// whose net coefficient reaches 0 is always removed from the sum.
///
/// Coefficients are arbitrary-precision [`Integer`]s, so repeated multiplication cannot
/// overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    /// Maps each monomial of the sum to its nonzero coefficient.
    terms: BTreeMap<Monomial, Integer>,
}

impl Polynomial {
    /// Creates the zero polynomial, which has no terms at all.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates a constant polynomial. The constant 0 yields the zero polynomial.
    pub fn constant(value: Integer) -> Self {
        let mut polynomial = Self::zero();
        polynomial.add_term(Monomial::unit(), value);
        polynomial
    }

    /// Creates the polynomial consisting of a single variable with coefficient 1.
    pub fn variable(var: Variable) -> Self {
        let mut polynomial = Self::zero();
        polynomial.add_term(Monomial::variable(var), Integer::from(1));
        polynomial
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns an iterator over the (monomial, coefficient) pairs of the sum, in canonical
    /// monomial order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Integer)> {
        self.terms.iter()
    }

    /// Accumulates `coefficient` onto the given monomial, removing the entry if the sum cancels
    /// to 0.
    fn add_term(&mut self, monomial: Monomial, coefficient: Integer) {
        if coefficient == 0 {
            return;
        }

        match self.terms.entry(monomial) {
            Entry::Vacant(entry) => {
                entry.insert(coefficient);
            },
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coefficient;
                if *entry.get() == 0 {
                    entry.remove();
                }
            },
        }
    }
}

/// Adds two polynomials by accumulating the right operand's terms onto the left's. Monomials
/// whose coefficients cancel are dropped.
impl Add for Polynomial {
    type Output = Polynomial;

    fn add(mut self, rhs: Self) -> Self::Output {
        for (monomial, coefficient) in rhs.terms {
            self.add_term(monomial, coefficient);
        }
        self
    }
}

/// Subtracts the right polynomial from the left by accumulating negated coefficients.
impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(mut self, rhs: Self) -> Self::Output {
        for (monomial, coefficient) in rhs.terms {
            self.add_term(monomial, -coefficient);
        }
        self
    }
}

/// Multiplies two polynomials by full distributive expansion: every pair of monomials is
/// multiplied and the coefficient products are accumulated under the resulting monomial.
impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut product = Polynomial::zero();
        for (lhs_monomial, lhs_coefficient) in &self.terms {
            for (rhs_monomial, rhs_coefficient) in &rhs.terms {
                product.add_term(
                    lhs_monomial.clone() * rhs_monomial.clone(),
                    Integer::from(lhs_coefficient * rhs_coefficient),
                );
            }
        }
        product
    }
}

/// Renders the sum with `" + "` separators, one `<coefficient><monomial>` pair per term in
/// canonical monomial order. A coefficient of 1 is omitted when its monomial is not the constant
/// monomial. The zero polynomial renders as `0`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        let mut iter = self.terms.iter();
        if let Some((monomial, coefficient)) = iter.next() {
            write_term(f, monomial, coefficient)?;
            for (monomial, coefficient) in iter {
                write!(f, " + ")?;
                write_term(f, monomial, coefficient)?;
            }
        }
        Ok(())
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, monomial: &Monomial, coefficient: &Integer) -> fmt::Result {
    if monomial.is_unit() {
        write!(f, "{}", coefficient)
    } else if *coefficient == 1 {
        write!(f, "{}", monomial)
    } else {
        write!(f, "{}{}", coefficient, monomial)
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::int;
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(letter: char) -> Polynomial {
        Polynomial::variable(Variable::from_char(letter).unwrap())
    }

    #[test]
    fn constant_zero_is_zero() {
        assert_eq!(Polynomial::constant(int(0)), Polynomial::zero());
        assert!(Polynomial::constant(int(0)).is_zero());
        assert!(!Polynomial::constant(int(3)).is_zero());
    }

    #[test]
    fn addition_is_commutative() {
        assert_eq!(var('a') + var('b'), var('b') + var('a'));
    }

    #[test]
    fn subtraction_cancels() {
        assert_eq!(var('a') + var('b') - var('b'), var('a'));
        assert!((var('a') - var('a')).is_zero());
    }

    #[test]
    fn multiplication_distributes() {
        // (a + b) * (a - b) = a*a - b*b
        let expanded = (var('a') + var('b')) * (var('a') - var('b'));
        let expected = var('a') * var('a') - var('b') * var('b');
        assert_eq!(expanded, expected);
    }

    #[test]
    fn multiplication_accumulates_cross_terms() {
        // (a + b) * (a + b) = a^2 + 2ab + b^2
        let squared = (var('a') + var('b')) * (var('a') + var('b'));
        assert_eq!(squared.to_string(), "a^2 + 2ab + b^2");
    }

    #[test]
    fn multiplication_by_zero() {
        assert!(((var('a') + Polynomial::constant(int(7))) * Polynomial::zero()).is_zero());
    }

    #[test]
    fn display_canonical_order() {
        // variables sort before the constant term, and rendering is deterministic
        let polynomial = Polynomial::constant(int(3)) + var('b') + var('a') * var('a');
        assert_eq!(polynomial.to_string(), "a^2 + b + 3");

        // construction order does not leak into the rendering
        let reordered = var('a') * var('a') + Polynomial::constant(int(3)) + var('b');
        assert_eq!(reordered.to_string(), "a^2 + b + 3");
    }

    #[test]
    fn display_omits_unit_coefficient() {
        assert_eq!((var('a') + Polynomial::constant(int(1))).to_string(), "a + 1");
        assert_eq!((Polynomial::constant(int(2)) * var('a')).to_string(), "2a");
    }

    #[test]
    fn display_negative_coefficients() {
        let polynomial = var('a') - Polynomial::constant(int(2)) * var('b');
        assert_eq!(polynomial.to_string(), "a + -2b");
    }

    #[test]
    fn display_zero() {
        assert_eq!(Polynomial::zero().to_string(), "0");
    }
}
