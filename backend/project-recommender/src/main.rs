//! Project Recommender - command line entry point
//!
//! Reads a recommendation request (`INPUT_PATH`, or the bundled sample),
//! ranks the projects and prints them as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use project_recommender::config::LogFormat;
use project_recommender::{Config, RankingLayer, RecommendationRequest};
use std::fs::File;
use std::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(config.log_format);

    info!(
        "Configuration loaded: input={}, top_k={:?}, include_scores={}",
        config.input_path.as_deref().unwrap_or("<sample>"),
        config.top_k,
        config.include_scores
    );

    let request = load_request(&config).map_err(|e| {
        error!("Failed to load request: {:#}", e);
        e
    })?;

    let layer = RankingLayer::from_config(&config);
    let output = if config.include_scores {
        let ranked = layer.rank_with_scores(&request.user, request.projects);
        serde_json::to_string_pretty(&ranked)?
    } else {
        let ranked = layer.rank(&request.user, request.projects);
        serde_json::to_string_pretty(&ranked)?
    };

    println!("{}", output);
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "project_recommender=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn load_request(config: &Config) -> Result<RecommendationRequest> {
    match &config.input_path {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
            let request = RecommendationRequest::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse {}", path))?;
            info!(
                projects = request.projects.len(),
                "Loaded request from {}", path
            );
            Ok(request)
        }
        None => Ok(RecommendationRequest::sample()),
    }
}
