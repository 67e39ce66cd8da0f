//! Bounded integer rating for notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much the user liked the content a note points at.
///
/// Ratings are integers in the inclusive range `-1..=10`. The value `-1`
/// is reserved for content that has not been consumed yet.
///
/// # Examples
///
/// ```
/// use ratenote::domain::Rating;
///
/// let rating: Rating = " 7 ".parse().unwrap();
/// assert_eq!(rating.get(), 7);
///
/// assert!("7.5".parse::<Rating>().is_err());
/// assert!(Rating::new(11).is_err());
/// assert!(Rating::UNCONSUMED.is_unconsumed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(i8);

/// Error returned when a rating is not an integer or is out of range.
#[derive(Debug, Clone)]
pub struct ParseRatingError(String);

impl fmt::Display for ParseRatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseRatingError {}

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: i64 = -1;

    /// Highest accepted rating.
    pub const MAX: i64 = 10;

    /// Rating for content that has not been consumed yet.
    pub const UNCONSUMED: Rating = Rating(-1);

    /// Creates a rating from an integer.
    ///
    /// # Errors
    ///
    /// Returns `ParseRatingError` if the value is outside `-1..=10`.
    pub fn new(value: i64) -> Result<Self, ParseRatingError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ParseRatingError(format!(
                "invalid rating {}: must be between {} and {}",
                value,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value as i8))
    }

    /// Returns the rating as an integer.
    pub fn get(self) -> i64 {
        i64::from(self.0)
    }

    /// Returns true for the "not yet consumed" rating.
    pub fn is_unconsumed(self) -> bool {
        self == Self::UNCONSUMED
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::UNCONSUMED
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Rating {
    type Err = ParseRatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed.parse::<i64>().map_err(|_| {
            ParseRatingError(format!("invalid rating '{}': expected an integer", trimmed))
        })?;
        Self::new(value)
    }
}

impl TryFrom<i64> for Rating {
    type Error = ParseRatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
