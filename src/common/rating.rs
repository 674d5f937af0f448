//! Supplier quality rating.

use std::fmt;

use crate::common::config::{MAX_RATING, MIN_RATING};
use crate::common::{Error, Result};

/// A quality rating in `MIN_RATING..=MAX_RATING` (1 to 5).
///
/// The only ways to build one are [`Rating::new`] and [`Rating::parse`], both
/// of which reject out-of-range values, so a `Rating` held by a record is
/// always valid.
///
/// # Example
/// ```
/// use supplierdb::Rating;
///
/// let rating = Rating::parse(" 4 ").unwrap();
/// assert_eq!(rating.get(), 4);
/// assert!(Rating::parse("6").is_err());
/// assert!(Rating::parse("five").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// Create a rating, rejecting values outside the accepted range.
    pub fn new(value: u8) -> Result<Self> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(invalid(value.to_string()))
        }
    }

    /// Parse rating text as typed by a user.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer in
    /// range, including negative numbers and values too large for `u8`, is
    /// reported as [`Error::InvalidRating`].
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        match trimmed.parse::<i64>() {
            Ok(value) if value >= MIN_RATING as i64 && value <= MAX_RATING as i64 => {
                Ok(Rating(value as u8))
            }
            _ => Err(invalid(trimmed.to_string())),
        }
    }

    /// Build a rating from a value known to be in range.
    ///
    /// Reserved for fixed in-crate data such as the sample suppliers.
    pub(crate) const fn new_unchecked(value: u8) -> Self {
        debug_assert!(value >= MIN_RATING && value <= MAX_RATING);
        Rating(value)
    }

    /// The numeric rating.
    #[inline]
    pub fn get(&self) -> u8 {
        self.0
    }
}

fn invalid(input: String) -> Error {
    Error::InvalidRating {
        input,
        min: MIN_RATING,
        max: MAX_RATING,
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert_eq!(Rating::new(1).unwrap().get(), 1);
        assert_eq!(Rating::new(5).unwrap().get(), 5);
        assert!(Rating::new(6).is_err());
    }

    #[test]
    fn test_rating_parse() {
        assert_eq!(Rating::parse("3").unwrap().get(), 3);
        assert_eq!(Rating::parse("  5\n").unwrap().get(), 5);
        assert!(Rating::parse("0").is_err());
        assert!(Rating::parse("-1").is_err());
        assert!(Rating::parse("9").is_err());
        assert!(Rating::parse("300").is_err());
        assert!(Rating::parse("4.5").is_err());
        assert!(Rating::parse("").is_err());
    }

    #[test]
    fn test_rating_parse_error_keeps_input() {
        match Rating::parse(" abc ") {
            Err(Error::InvalidRating { input, min, max }) => {
                assert_eq!(input, "abc");
                assert_eq!((min, max), (1, 5));
            }
            other => panic!("Expected InvalidRating, got {:?}", other),
        }
    }
}
