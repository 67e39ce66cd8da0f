//! Builder for notes seeded directly into a test database.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use ratenote::domain::{NewNote, Rating};

/// Fluent builder for a note to insert before running the CLI.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: Option<String>,
    body: Option<String>,
    rating: Rating,
}

impl TestNote {
    /// Creates an unrated note with the given title.
    pub fn new(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            body: None,
            rating: Rating::UNCONSUMED,
        }
    }

    /// Creates an unrated note with neither title nor body.
    pub fn untitled() -> Self {
        Self {
            title: None,
            body: None,
            rating: Rating::UNCONSUMED,
        }
    }

    /// Sets the body text.
    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Sets the rating.
    ///
    /// # Panics
    ///
    /// Panics if the rating is outside -1..=10.
    pub fn rating(mut self, rating: i64) -> Self {
        self.rating = Rating::new(rating).expect("test rating must be in range");
        self
    }

    /// Converts to the store's creation request.
    pub fn to_new_note(&self) -> NewNote {
        NewNote::new(self.body.as_deref(), self.title.as_deref(), self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults_to_unconsumed() {
        let note = TestNote::new("Title").to_new_note();
        assert!(note.rating().is_unconsumed());
        assert_eq!(note.title(), Some("Title"));
        assert_eq!(note.body(), None);
    }

    #[test]
    fn test_note_builder_sets_fields() {
        let note = TestNote::new("Title").body("text").rating(7).to_new_note();
        assert_eq!(note.body(), Some("text"));
        assert_eq!(note.rating().get(), 7);
    }

    #[test]
    fn test_note_untitled() {
        let note = TestNote::untitled().to_new_note();
        assert_eq!(note.title(), None);
    }
}
