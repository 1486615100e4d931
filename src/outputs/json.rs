//! JSON output of the section mapping.
//!
//! The file is pretty-printed with two-space indentation and keeps Cyrillic
//! text as-is. An existing file at the target path is overwritten.

use crate::models::NewsBySection;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Write headlines to a JSON file.
///
/// # Arguments
///
/// * `news` - Headlines grouped by section
/// * `path` - Target file; replaced if it exists
///
/// # Returns
///
/// `Ok(())` on success, or the serialization or I/O error.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_news(news: &NewsBySection, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(news)?;

    fs::write(path, json).await?;
    info!(
        sections = news.section_count(),
        items = news.total_items(),
        "Wrote news JSON"
    );
    Ok(())
}
