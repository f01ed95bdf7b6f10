//! Configuration for the ProfitPoke client.
//!
//! Everything is loaded from environment variables (a `.env` file is read
//! at startup via dotenvy).

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the recommendation service, e.g. "http://127.0.0.1:5003".
    pub base_url: String,
    /// Anti-forgery token issued with the session, sent verbatim in each
    /// request body.
    pub csrf_token: String,
    /// Override for the saved-recommendations directory. Defaults to
    /// ~/.profitpoke when unset.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("PROFITPOKE_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5003".to_string());

        let csrf_token = env::var("PROFITPOKE_CSRF_TOKEN")
            .context("PROFITPOKE_CSRF_TOKEN must be set (token issued with the session)")?;

        let data_dir = env::var("PROFITPOKE_DATA_DIR").ok().map(PathBuf::from);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            csrf_token,
            data_dir,
        })
    }
}
