/// Ranking Module
///
/// Orders candidate projects by their text similarity to a user profile.
///
/// # Workflow
/// 1. Vectorize every skill and interest once
/// 2. Vectorize each candidate's `title + " " + description`
/// 3. Sum the cosine similarities against all profile vectors
/// 4. Stable sort by the sum, descending
pub mod recommender;

pub use recommender::{recommend, RankingLayer};

use thiserror::Error;

/// Failures at the input boundary. Ranking itself cannot fail.
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed request: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RankingError>;
