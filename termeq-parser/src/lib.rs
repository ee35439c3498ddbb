//! Parser and equivalence engine for algebra terms evaluated left to right.
//!
//! Terms are built from integer constants, the variables `a` through `z`, the operators `+`, `-`
//! and `*`, and parentheses. There is **no** operator precedence: `2+3*4` means `(2+3)*4`. Each
//! term is reduced to its canonical [`Polynomial`](termeq_algebra::Polynomial) normal form, and
//! two terms are equivalent exactly when their normal forms are equal.
//!
//! ```
//! use termeq_parser::are_equivalent;
//!
//! assert!(are_equivalent("(a+b)*(a-b)", "a*a-b*b").unwrap());
//!
//! // left-to-right evaluation: 2+3*4 = (2+3)*4 = 20, not 14
//! assert!(are_equivalent("2+3*4", "20").unwrap());
//! assert!(!are_equivalent("2+3*4", "14").unwrap());
//! ```

pub mod equiv;
pub mod parser;
pub mod tokenizer;

pub use equiv::are_equivalent;
pub use parser::parse;
