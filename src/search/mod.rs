//! Fuzzy title matching: similarity ratio and ranking

mod rank;
mod ratio;

pub use rank::{RankedTitle, TruncationPolicy, normalize, rank_titles};
pub use ratio::ratio;
