//! Integer note identifier assigned by the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unique identifier for a stored note.
///
/// Ids are assigned by the store on insertion. They increase
/// monotonically and are never reused, even after the note holding the
/// highest id is deleted.
///
/// # Examples
///
/// ```
/// use ratenote::domain::NoteId;
///
/// let id: NoteId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wraps a raw row id.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId({})", self.0)
    }
}

impl From<i64> for NoteId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Error returned when parsing a note id that is not an integer.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': expected an integer", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(NoteId)
            .map_err(|_| ParseNoteIdError {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_integer() {
        let id: NoteId = "17".parse().unwrap();
        assert_eq!(id, NoteId::new(17));
    }

    #[test]
    fn parse_trims_whitespace() {
        let id: NoteId = " 3 ".parse().unwrap();
        assert_eq!(id.get(), 3);
    }

    #[test]
    fn parse_rejects_non_integer() {
        let err = "abc".parse::<NoteId>().unwrap_err();
        assert_eq!(err.invalid_value(), "abc");
        assert!(err.to_string().contains("expected an integer"));
    }

    #[test]
    fn parse_rejects_empty() {
        assert!("".parse::<NoteId>().is_err());
    }

    #[test]
    fn ids_order_numerically() {
        assert!(NoteId::new(2) < NoteId::new(10));
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&NoteId::new(5)).unwrap();
        assert_eq!(json, "5");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", NoteId::new(9)), "NoteId(9)");
    }
}
