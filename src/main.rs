//! # Izvestia Sections
//!
//! Scrapes one news listing page, files every headline under a topical section
//! by keyword matching, prints the grouped list and saves it as JSON.
//!
//! ## Usage
//!
//! ```sh
//! izvestia_sections https://iz.ru/news -o news.json
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: one GET with a browser `User-Agent` and a 10 second timeout
//! 2. **Extraction**: the Izvestia tier cascade for `iz.ru` URLs, the universal
//!    selector scan for anything else
//! 3. **Classification**: first matching keyword group wins
//! 4. **Output**: console report, then a JSON file when anything was found
//!
//! Every failure is reported and the process still exits with status 0.

use clap::Parser;
use std::error::Error;
use std::io::{self, Write};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod classifier;
mod cli;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use fetch::{HttpFetcher, PageFetcher};
use models::NewsBySection;
use outputs::{json, report};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(url = %args.url, output = %args.output, "Parsed CLI arguments");

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client");
            println!("Ошибка при загрузке страницы: {e}");
            return Ok(());
        }
    };

    run(&fetcher, &args, &mut io::stdout()).await;

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}

/// Scrape, report and save.
///
/// # Arguments
///
/// * `fetcher` - Source of the page body
/// * `args` - Target URL and output path
/// * `out` - Where the user-facing report goes (stdout in the binary)
///
/// # Returns
///
/// The headlines that were found, possibly none. The JSON file is written
/// only when at least one headline was found.
async fn run<F: PageFetcher, W: Write>(fetcher: &F, args: &Cli, out: &mut W) -> NewsBySection {
    match report_and_save(fetcher, args, out).await {
        Ok(news) => news,
        Err(e) => {
            error!(error = %e, "Failed writing report to stdout");
            NewsBySection::new()
        }
    }
}

async fn report_and_save<F: PageFetcher, W: Write>(
    fetcher: &F,
    args: &Cli,
    out: &mut W,
) -> io::Result<NewsBySection> {
    writeln!(out, "Парсим новости с: {}", args.url)?;
    out.flush()?;

    let news = scrapers::parse_news(fetcher, &args.url).await;
    report::print_news(&news, out)?;

    if news.is_empty() {
        warn!(url = %args.url, "No headlines found; nothing saved");
        writeln!(out, "{}.", report::NO_NEWS_MESSAGE)?;
        return Ok(news);
    }

    debug!(sections = ?news.labels().collect::<Vec<_>>(), "Sections found");
    match json::write_news(&news, &args.output).await {
        Ok(()) => {
            writeln!(out, "Новости сохранены в файл: {}", args.output)?;
            writeln!(out, "Всего разделов: {}", news.section_count())?;
            writeln!(out, "Всего новостей: {}", news.total_items())?;
        }
        Err(e) => {
            error!(path = %args.output, error = %e, "Failed writing news JSON");
            writeln!(out, "Ошибка при сохранении файла {}: {e}", args.output)?;
        }
    }
    Ok(news)
}
