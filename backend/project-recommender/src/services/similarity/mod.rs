//! Cosine similarity over term-frequency vectors.
//!
//! Terms missing from one side contribute zero to the dot product, so only
//! the shared terms need to be visited. Counts are summed in integer space,
//! which keeps the result bit-identical when the arguments are swapped.

use crate::services::text::TermVector;

/// Cosine of the angle between `a` and `b` in term-frequency space.
///
/// Returns a value in `[0, 1]`. An empty vector has zero norm; the
/// similarity against it is defined as `0.0` rather than NaN.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot_product: u64 = smaller
        .iter()
        .map(|(term, count)| u64::from(count) * u64::from(larger.get(term)))
        .sum();

    if dot_product == 0 {
        return 0.0;
    }

    let norm_product = (a.norm_squared() as f64 * b.norm_squared() as f64).sqrt();
    dot_product as f64 / norm_product
}
