//! Ranking of note titles against a search term.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ratio;

/// How many ranked titles a search keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TruncationPolicy {
    /// Keep every ranked title.
    #[default]
    Full,
    /// Keep only the top `floor(n / 2)` distinct titles.
    ///
    /// Lower-ranked titles are dropped even when they match well. This
    /// mirrors how earlier releases behaved and is opt-in.
    HalfCut,
}

impl TruncationPolicy {
    /// Picks `HalfCut` when `half_cut` is set, `Full` otherwise.
    pub fn from_half_cut(half_cut: bool) -> Self {
        if half_cut { Self::HalfCut } else { Self::Full }
    }

    /// Number of ranked titles kept out of `total`.
    pub fn keep(self, total: usize) -> usize {
        match self {
            Self::Full => total,
            Self::HalfCut => total / 2,
        }
    }
}

/// A distinct title with its similarity to the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTitle {
    pub title: String,
    pub score: u8,
}

/// Normalizes a search term or title for scoring.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Scores distinct `titles` against `term` and returns them best first.
///
/// Both sides are normalized before scoring, so matching ignores case and
/// surrounding whitespace. Duplicate titles are scored once. The sort is
/// stable on score alone: titles with equal scores keep the order they
/// were first seen in, and callers should treat that order as unspecified.
pub fn rank_titles<'a, I>(term: &str, titles: I, policy: TruncationPolicy) -> Vec<RankedTitle>
where
    I: IntoIterator<Item = &'a str>,
{
    let term = normalize(term);
    let mut seen = HashSet::new();

    let mut ranked: Vec<RankedTitle> = titles
        .into_iter()
        .filter(|title| seen.insert(*title))
        .map(|title| RankedTitle {
            title: title.to_string(),
            score: ratio(&term, &normalize(title)),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(policy.keep(ranked.len()));
    ranked
}
