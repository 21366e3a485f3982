// ============================================
// Text Processing (文本處理)
// ============================================
//
// Normalizer: lowercase, drop non-word characters, trim
// Vectorizer: whitespace tokens -> term frequency counts
//
// A word character is any Unicode letter, digit or underscore.

pub mod normalizer;
pub mod vectorizer;

pub use normalizer::normalize;
pub use vectorizer::{to_term_vector, TermVector};
