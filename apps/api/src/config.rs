use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory the exported PDF is written into. Defaults to the working directory.
    pub export_dir: PathBuf,
    /// Optional bearer token for the Hugging Face inference endpoint.
    pub hf_api_token: Option<String>,
    pub hf_hub_url: String,
    pub hf_inference_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            export_dir: std::env::var("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            hf_api_token: optional_env("HF_API_TOKEN"),
            hf_hub_url: std::env::var("HF_HUB_URL")
                .unwrap_or_else(|_| "https://huggingface.co".to_string()),
            hf_inference_url: std::env::var("HF_INFERENCE_URL")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
