//! Command-line interface definitions.
//!
//! Arguments are parsed with `clap`; nothing is read from the environment
//! apart from `RUST_LOG`, which only controls log filtering.

use clap::Parser;

/// Archived Izvestia news feed scraped when no URL is given.
pub const DEFAULT_URL: &str = "https://web.archive.org/web/20230903112115/https://iz.ru/news";

/// Scrape a news listing page and group its headlines by section.
///
/// # Examples
///
/// ```sh
/// # Archived Izvestia feed into ./news.json
/// izvestia_sections
///
/// # Any other site, custom output file
/// izvestia_sections https://example.com/news -o example.json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// URL of the listing page to scrape
    #[arg(default_value = DEFAULT_URL)]
    pub url: String,

    /// File to save the grouped headlines to
    #[arg(short, long, default_value = "news.json")]
    pub output: String,
}
