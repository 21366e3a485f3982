use super::normalizer::normalize;
use std::collections::HashMap;

/// Bag-of-words representation: term -> occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    counts: HashMap<String, u32>,
}

impl TermVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Sum of squared counts (squared L2 norm)
    pub fn norm_squared(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c) * u64::from(c)).sum()
    }

    fn add(&mut self, term: &str) {
        *self.counts.entry(term.to_string()).or_insert(0) += 1;
    }
}

impl<'a> FromIterator<&'a str> for TermVector {
    fn from_iter<I: IntoIterator<Item = &'a str>>(tokens: I) -> Self {
        let mut vector = TermVector::new();
        for token in tokens {
            vector.add(token);
        }
        vector
    }
}

/// Normalize `text`, split on whitespace and count each token
pub fn to_term_vector(text: &str) -> TermVector {
    normalize(text).split_whitespace().collect()
}
