//! Value types for the canonical polynomial normal form of algebra terms.
//!
//! An input term such as `(a+b)*(a-b)` is normalized into a [`Polynomial`]: a finite sum of
//! integer coefficients attached to [`Monomial`]s (products of variables raised to positive
//! exponents). The normal form is canonical, so two terms are equivalent under left-to-right
//! evaluation exactly when their polynomials compare equal.
//!
//! All types in this crate are pure values: once constructed they never change, and the algebra
//! operators always return new instances.
//!
//! ```
//! use termeq_algebra::{Polynomial, Variable};
//!
//! let a = Polynomial::variable(Variable::from_char('a').unwrap());
//! let b = Polynomial::variable(Variable::from_char('b').unwrap());
//!
//! // (a + b) * (a - b) = a^2 - b^2
//! let product = (a.clone() + b.clone()) * (a - b);
//! assert_eq!(product.to_string(), "a^2 + -1b^2");
//! ```

pub mod monomial;
pub mod polynomial;
pub mod primitive;
pub mod step;

pub use monomial::{Monomial, Variable};
pub use polynomial::Polynomial;
pub use step::{Op, Step, StepCollector};
