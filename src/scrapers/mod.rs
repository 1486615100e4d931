//! Listing-page scrapers and the orchestration around them.
//!
//! One page is fetched, parsed with `scraper`, and handed to exactly one
//! extraction strategy chosen from the URL:
//!
//! | Strategy | Module | Chosen when | Behaviour |
//! |----------|--------|-------------|-----------|
//! | Izvestia | [`iz`] | URL contains `iz.ru` | tier cascade, stops at first non-empty tier |
//! | Universal | [`universal`] | anything else | every selector applied, results accumulated |
//!
//! Every strategy classifies each accepted headline with
//! [`classify`](crate::classifier::classify) and stores it under the returned
//! section with an absolute URL.
//!
//! [`parse_news`] is the single error boundary: fetch and extraction failures
//! are logged, reported to the user and turned into an empty result.

use crate::classifier::classify;
use crate::fetch::{FetchError, PageFetcher};
use crate::models::{NewsBySection, NewsItem};
use crate::utils::{resolve_href, truncate_for_log};
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::{debug, error, info, instrument};
use url::Url;

pub mod iz;
pub mod universal;

/// URL fragment that selects the Izvestia strategy.
pub const IZ_SITE_MARKER: &str = "iz.ru";

/// Headlines must be longer than this many characters.
pub const MIN_TITLE_CHARS: usize = 15;

/// Failure while navigating or extracting from a parsed page.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid page URL {url}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector {
        selector: &'static str,
        reason: String,
    },
}

/// Any failure in the fetch, parse, extract pipeline.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Ошибка при загрузке страницы: {0}")]
    Fetch(#[from] FetchError),

    #[error("Ошибка при парсинге: {0}")]
    Parse(#[from] ExtractError),
}

/// Scrape `url` and group its headlines by section.
///
/// Never fails: any [`ScrapeError`] is logged, printed as a diagnostic line
/// and replaced by an empty result.
///
/// # Arguments
///
/// * `fetcher` - Source of the page body
/// * `url` - Listing page; `iz.ru` URLs get the Izvestia cascade
///
/// # Returns
///
/// Headlines grouped by section in order of discovery, or an empty mapping
/// when the page yielded nothing or could not be fetched or parsed.
#[instrument(level = "info", skip(fetcher))]
pub async fn parse_news<F: PageFetcher>(fetcher: &F, url: &str) -> NewsBySection {
    match scrape(fetcher, url).await {
        Ok(news) => news,
        Err(e) => {
            match &e {
                ScrapeError::Fetch(cause) => error!(error = %cause, "Page fetch failed"),
                ScrapeError::Parse(cause) => error!(error = %cause, "Page extraction failed"),
            }
            println!("{e}");
            NewsBySection::new()
        }
    }
}

/// Fallible core of [`parse_news`].
///
/// # Errors
///
/// [`ScrapeError::Fetch`] when the page could not be downloaded,
/// [`ScrapeError::Parse`] when extraction could not run at all.
pub async fn scrape<F: PageFetcher>(fetcher: &F, url: &str) -> Result<NewsBySection, ScrapeError> {
    let body = fetcher.fetch(url).await?;
    Ok(extract(&body, url)?)
}

/// Parse `body` and run the strategy matching `url`.
///
/// # Arguments
///
/// * `body` - Decoded HTML of the page
/// * `url` - Page URL, used both for strategy choice and href resolution
///
/// # Errors
///
/// Returns [`ExtractError::BaseUrl`] if `url` is not absolute.
pub fn extract(body: &str, url: &str) -> Result<NewsBySection, ExtractError> {
    let base = Url::parse(url).map_err(|source| ExtractError::BaseUrl {
        url: url.to_string(),
        source,
    })?;
    let document = Html::parse_document(body);

    let news = if url.contains(IZ_SITE_MARKER) {
        debug!("Using Izvestia strategy");
        iz::parse_iz(&document, &base)?
    } else {
        debug!("Using universal strategy");
        universal::parse_universal(&document, &base)?
    };

    info!(
        sections = news.section_count(),
        items = news.total_items(),
        "Extraction finished"
    );
    Ok(news)
}

/// Compile a static selector, reporting failures as [`ExtractError`].
pub(crate) fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector {
        selector: css,
        reason: e.to_string(),
    })
}

/// Classify `title` and file it under its section with `href` made absolute.
///
/// Hrefs that cannot be resolved are skipped.
pub(crate) fn push_headline(news: &mut NewsBySection, base: &Url, title: String, href: &str) {
    let Some(url) = resolve_href(base, href) else {
        debug!(href, "Skipping unresolvable href");
        return;
    };
    let section = classify(&title);
    debug!(%section, title = %truncate_for_log(&title, 60), %url, "Accepted headline");
    news.push(section, NewsItem { title, url });
}
