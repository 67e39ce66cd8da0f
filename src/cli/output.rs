//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;
use crate::store::ScoredNote;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: i64,
    pub created_at: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub rating: i64,
}

impl From<&Note> for NoteListing {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id().get(),
            created_at: note.created_at().to_rfc3339(),
            title: note.title().map(str::to_string),
            body: note.body().map(str::to_string),
            rating: note.rating().get(),
        }
    }
}

/// A search hit in listing output.
#[derive(Debug, Serialize)]
pub struct SearchListing {
    #[serde(flatten)]
    pub note: NoteListing,
    pub score: u8,
}

impl From<&ScoredNote> for SearchListing {
    fn from(hit: &ScoredNote) -> Self {
        Self {
            note: NoteListing::from(hit.note()),
            score: hit.score(),
        }
    }
}
