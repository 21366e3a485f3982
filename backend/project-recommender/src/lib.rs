//! Project Recommender - ranks projects against a user's skills and interests
//!
//! Pipeline:
//! - Normalizer: lowercase, strip punctuation, trim
//! - Vectorizer: bag-of-words term frequencies
//! - Similarity: cosine similarity over term-frequency vectors
//! - Ranking: sum of similarities per project, stable descending sort

pub mod config;
pub mod models;
pub mod services;

pub use config::Config;
pub use models::{Candidate, Profile, Project, ProjectId, RankedProject, RecommendationRequest};
pub use services::ranking::{recommend, RankingError, RankingLayer};
pub use services::similarity::cosine_similarity;
pub use services::text::{normalize, to_term_vector, TermVector};
