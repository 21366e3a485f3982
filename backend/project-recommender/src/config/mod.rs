//! Configuration for the project recommender
use serde::Deserialize;

/// Main configuration struct, loaded from environment variables
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// JSON request file; the bundled sample request is used when unset
    #[serde(default)]
    pub input_path: Option<String>,

    /// Maximum projects to return after sorting
    #[serde(default)]
    pub top_k: Option<usize>,

    /// Emit projects together with their aggregate scores
    #[serde(default)]
    pub include_scores: bool,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
