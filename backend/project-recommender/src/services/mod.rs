pub mod ranking;
pub mod similarity;
pub mod text;

pub use ranking::RankingLayer;
pub use similarity::cosine_similarity;
pub use text::{normalize, to_term_vector, TermVector};
