use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_THEME_STORE_PATH: &str = ".portfolio-theme.json";

/// Application configuration loaded from environment variables.
/// Startup fails if the email delivery identifiers are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,
    /// Optional server-side access token; EmailJS only requires it when "strict mode" is on.
    pub emailjs_private_key: Option<String>,
    /// Overrides the embedded content document when set.
    pub content_path: Option<PathBuf>,
    pub theme_store_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            emailjs_service_id: require_env("EMAILJS_SERVICE_ID")?,
            emailjs_template_id: require_env("EMAILJS_TEMPLATE_ID")?,
            emailjs_public_key: require_env("EMAILJS_PUBLIC_KEY")?,
            emailjs_private_key: optional_env("EMAILJS_PRIVATE_KEY"),
            content_path: optional_env("CONTENT_PATH").map(PathBuf::from),
            theme_store_path: optional_env("THEME_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_THEME_STORE_PATH)),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
