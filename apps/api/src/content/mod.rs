//! Static portfolio content: biography, skills, projects, and experience.
//!
//! Embedded at compile time; `CONTENT_PATH` swaps in a different document at startup.

pub mod handlers;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::content::PortfolioContent;

const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.json");

pub async fn load_content(path: Option<&Path>) -> Result<PortfolioContent> {
    let content: PortfolioContent = match path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read content file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid content document {}", path.display()))?
        }
        None => serde_json::from_str(EMBEDDED_CONTENT).context("Invalid embedded content")?,
    };

    info!(
        "Content loaded: {} skill categories, {} projects, {} companies",
        content.skills.len(),
        content.projects.len(),
        content.experiences.len()
    );
    Ok(content)
}
