//! Note records and the request objects that create and modify them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{NoteId, Rating};

/// A note as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    id: NoteId,
    created_at: DateTime<Utc>,
    body: Option<String>,
    title: Option<String>,
    rating: Rating,
}

impl Note {
    /// Creates a Note with all fields.
    pub fn new(
        id: NoteId,
        created_at: DateTime<Utc>,
        body: Option<String>,
        title: Option<String>,
        rating: Rating,
    ) -> Self {
        Self {
            id,
            created_at,
            body,
            title,
            rating,
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns when the note was stored.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the note's body, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the note's title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the note's rating.
    pub fn rating(&self) -> Rating {
        self.rating
    }
}

/// Request to store a new note.
///
/// Body and title are trimmed of surrounding whitespace on construction.
/// A value that is blank after trimming is kept as an empty string, not
/// turned into `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    body: Option<String>,
    title: Option<String>,
    rating: Rating,
}

impl NewNote {
    pub fn new(body: Option<&str>, title: Option<&str>, rating: Rating) -> Self {
        Self {
            body: body.map(|b| b.trim().to_string()),
            title: title.map(|t| t.trim().to_string()),
            rating,
        }
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}

/// Column used to select the notes a rating update applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKey<'a> {
    /// Exact match on the body column.
    Body(&'a str),
    /// Exact match on the title column.
    Title(&'a str),
}

/// Request to change the rating of every note matching a body or title.
///
/// When both keys are given the body wins and the title is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingUpdate {
    rating: Rating,
    body: Option<String>,
    title: Option<String>,
}

impl RatingUpdate {
    pub fn new(rating: Rating, body: Option<&str>, title: Option<&str>) -> Self {
        Self {
            rating,
            body: body.map(str::to_string),
            title: title.map(str::to_string),
        }
    }

    /// Shorthand for an update keyed on the body.
    pub fn by_body(rating: Rating, body: &str) -> Self {
        Self::new(rating, Some(body), None)
    }

    /// Shorthand for an update keyed on the title.
    pub fn by_title(rating: Rating, title: &str) -> Self {
        Self::new(rating, None, Some(title))
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the key to match on, or `None` when neither was given.
    pub fn match_key(&self) -> Option<MatchKey<'_>> {
        match (&self.body, &self.title) {
            (Some(body), _) => Some(MatchKey::Body(body)),
            (None, Some(title)) => Some(MatchKey::Title(title)),
            (None, None) => None,
        }
    }
}

/// Direction for rating-ordered listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Returns the SQL keyword for this order.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}
