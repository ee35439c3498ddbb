//! Functions to construct [`Integer`] coefficients from various types.

use rug::Integer;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates an [`Integer`] from a string slice of decimal digits.
pub fn int_from_str(s: &str) -> Integer {
    Integer::from_str_radix(s, 10).unwrap()
}
