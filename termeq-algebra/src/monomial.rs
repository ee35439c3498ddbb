//! Variables and products of variables.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Mul;

/// One of the 26 variables `a` through `z`.
///
/// Variables are totally ordered alphabetically. Input is accepted in either case; rendering is
/// always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(u8);

impl Variable {
    /// Creates a variable from its letter, accepting either case. Returns [`None`] if the
    /// character is not an ASCII letter.
    pub fn from_char(letter: char) -> Option<Self> {
        letter
            .is_ascii_alphabetic()
            .then(|| Self(letter.to_ascii_lowercase() as u8 - b'a'))
    }

    /// Returns an iterator over all 26 variables in alphabetical order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0u8..26).map(Self)
    }

    /// The lowercase letter of this variable.
    pub fn as_char(self) -> char {
        (b'a' + self.0) as char
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A product of variables, each raised to a positive integer exponent, such as `a^3 b`.
///
/// The empty product is the constant monomial, used for the constant term of a
/// [`Polynomial`](crate::Polynomial). A variable absent from the product has implicit exponent 0;
/// zero exponents are never stored, so equality of the backing maps is equality of monomials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Monomial {
    /// The exponent of each variable present in the product. Every stored exponent is >= 1.
    exponents: BTreeMap<Variable, u32>,
}

impl Monomial {
    /// Creates the empty monomial, the multiplicative unit.
    pub fn unit() -> Self {
        Self::default()
    }

    /// Creates the monomial consisting of a single variable with exponent 1.
    pub fn variable(var: Variable) -> Self {
        Self {
            exponents: BTreeMap::from([(var, 1)]),
        }
    }

    /// Returns true if this is the empty monomial.
    pub fn is_unit(&self) -> bool {
        self.exponents.is_empty()
    }

    /// The exponent of the given variable, 0 if it is absent from the product.
    pub fn exponent_of(&self, var: Variable) -> u32 {
        self.exponents.get(&var).copied().unwrap_or(0)
    }
}

/// Multiplies two monomials by adding the exponents of their variables. Exponents are positive,
/// so the product never needs to drop an entry.
impl Mul for Monomial {
    type Output = Monomial;

    fn mul(mut self, rhs: Self) -> Self::Output {
        for (var, exp) in rhs.exponents {
            *self.exponents.entry(var).or_insert(0) += exp;
        }
        self
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The canonical ordering of monomials: compare exponents variable-by-variable from `a` to `z`;
/// at the first variable where they differ, the monomial with the *larger* exponent sorts first.
///
/// This yields `a^3 < a^2 < ab < b^2 < c`, and in particular places the constant monomial after
/// every monomial that mentions a variable.
impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        for var in Variable::all() {
            match self.exponent_of(var).cmp(&other.exponent_of(var)) {
                Ordering::Equal => continue,
                ord => return ord.reverse(),
            }
        }
        Ordering::Equal
    }
}

/// Renders each variable in alphabetical order, followed by `^n` for an exponent n >= 2. An
/// exponent with two or more digits is parenthesized (`a^(12)`) so the rendering can be re-read
/// unambiguously. The empty monomial renders as the empty string.
impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (var, exp) in &self.exponents {
            match exp {
                1 => write!(f, "{}", var)?,
                2..=9 => write!(f, "{}^{}", var, exp)?,
                _ => write!(f, "{}^({})", var, exp)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(letter: char) -> Variable {
        Variable::from_char(letter).unwrap()
    }

    /// Builds a monomial from one letter per variable occurrence, e.g. `"aab"` is `a^2 b`.
    fn monomial(letters: &str) -> Monomial {
        letters
            .chars()
            .map(|letter| Monomial::variable(var(letter)))
            .fold(Monomial::unit(), |acc, next| acc * next)
    }

    #[test]
    fn case_insensitive_variables() {
        assert_eq!(var('A'), var('a'));
        assert_eq!(var('Z').as_char(), 'z');
        assert_eq!(Variable::from_char('3'), None);
    }

    #[test]
    fn multiplication_adds_exponents() {
        let product = monomial("ab") * monomial("abb");
        assert_eq!(product.exponent_of(var('a')), 2);
        assert_eq!(product.exponent_of(var('b')), 3);
        assert_eq!(product.exponent_of(var('c')), 0);
    }

    #[test]
    fn unit_is_multiplicative_identity() {
        assert_eq!(Monomial::unit() * monomial("ab"), monomial("ab"));
        assert!(Monomial::unit().is_unit());
        assert!(!monomial("a").is_unit());
    }

    #[test]
    fn canonical_ordering() {
        // a^3 < a^2 < ab < b^2 < c < 1
        let chain = ["aaa", "aa", "ab", "bb", "c", ""];
        for pair in chain.windows(2) {
            assert!(
                monomial(pair[0]) < monomial(pair[1]),
                "expected {:?} to sort before {:?}",
                pair[0],
                pair[1],
            );
        }
    }

    #[test]
    fn ordering_consistent_with_equality() {
        assert_eq!(monomial("ab").cmp(&monomial("ba")), Ordering::Equal);
        assert_eq!(monomial("ab"), monomial("ba"));
    }

    #[test]
    fn display() {
        assert_eq!(Monomial::unit().to_string(), "");
        assert_eq!(monomial("a").to_string(), "a");
        assert_eq!(monomial("aab").to_string(), "a^2b");
        assert_eq!(monomial(&"z".repeat(12)).to_string(), "z^(12)");
    }
}
