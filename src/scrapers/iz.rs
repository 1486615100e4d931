//! Izvestia (`iz.ru`) listing scraper.
//!
//! Izvestia markup varies between the live site and its web.archive.org
//! snapshots, so headlines are located with a cascade of progressively looser
//! tiers. The first tier that yields anything wins; later tiers are not run.
//!
//! 1. [`direct_links`]: anchors pointing at `/news/` or `/document/`
//! 2. [`generic_containers`]: `div`/`li` blocks whose class mentions news
//! 3. [`aggressive_links`]: any news anchor with a long, non-boilerplate title
//!
//! Before the cascade the known list-item containers are counted for the logs
//! only; they do not feed any tier.

use super::{push_headline, selector, ExtractError, MIN_TITLE_CHARS};
use crate::models::NewsBySection;
use crate::utils::{longer_than, stripped_text};
use scraper::{ElementRef, Html};
use tracing::{debug, info, instrument};
use url::Url;

/// Href fragments that identify an article link.
const ARTICLE_PATHS: [&str; 2] = ["/news/", "/document/"];

/// Class fragments that mark a headline container.
const CONTAINER_CLASS_WORDS: [&str; 3] = ["news", "item", "lenta"];

/// Link captions that are navigation rather than headlines.
const BOILERPLATE_PHRASES: [&str; 3] = ["читать далее", "подробнее", "смотреть"];

/// The aggressive tier wants longer titles than the others.
const AGGRESSIVE_MIN_TITLE_CHARS: usize = 20;

pub(crate) type Tier = fn(&Html, &Url) -> Result<NewsBySection, ExtractError>;

/// Cascade tiers in the order they are tried.
pub(crate) const TIERS: [(&str, Tier); 3] = [
    ("direct_links", direct_links),
    ("generic_containers", generic_containers),
    ("aggressive_links", aggressive_links),
];

/// Scrape an Izvestia listing page.
///
/// # Arguments
///
/// * `document` - Parsed listing page
/// * `base` - Page URL that relative hrefs are resolved against
///
/// # Returns
///
/// The result of the first tier that found anything, or an empty mapping.
#[instrument(level = "info", skip_all, fields(base = %base))]
pub fn parse_iz(document: &Html, base: &Url) -> Result<NewsBySection, ExtractError> {
    let containers = count_list_containers(document)?;
    debug!(containers, "Structured list containers on page");

    run_cascade(&TIERS, document, base)
}

/// Run `tiers` in order until one returns a non-empty result.
///
/// When every tier comes back empty the last tier's result is returned.
pub(crate) fn run_cascade(
    tiers: &[(&str, Tier)],
    document: &Html,
    base: &Url,
) -> Result<NewsBySection, ExtractError> {
    let mut news = NewsBySection::new();
    for (name, tier) in tiers {
        news = tier(document, base)?;
        if !news.is_empty() {
            info!(tier = *name, items = news.total_items(), "Tier produced headlines");
            break;
        }
        debug!(tier = *name, "Tier found nothing");
    }
    Ok(news)
}

fn count_list_containers(document: &Html) -> Result<usize, ExtractError> {
    let containers = selector("div.lenta_news__item, div.news, div.news-item")?;
    Ok(document.select(&containers).count())
}

fn is_article_href(href: &str) -> bool {
    ARTICLE_PATHS.iter().any(|path| href.contains(path))
}

/// Anchors whose href points at an article, titles over 15 characters.
pub(crate) fn direct_links(document: &Html, base: &Url) -> Result<NewsBySection, ExtractError> {
    let anchors = selector("a[href]")?;
    let mut news = NewsBySection::new();

    for link in document.select(&anchors) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !is_article_href(href) {
            continue;
        }
        let title = stripped_text(link);
        if longer_than(&title, MIN_TITLE_CHARS) {
            push_headline(&mut news, base, title, href);
        }
    }
    Ok(news)
}

fn has_container_class(element: &ElementRef<'_>) -> bool {
    element
        .value()
        .classes()
        .any(|class| CONTAINER_CLASS_WORDS.iter().any(|word| class.contains(word)))
}

/// First link or heading inside each news-ish `div`/`li`.
pub(crate) fn generic_containers(document: &Html, base: &Url) -> Result<NewsBySection, ExtractError> {
    let blocks = selector("div, li")?;
    let title_elements = selector("a, h2, h3, h4")?;
    let mut news = NewsBySection::new();

    for container in document.select(&blocks).filter(has_container_class) {
        let Some(title_elem) = container.select(&title_elements).next() else {
            continue;
        };
        let title = stripped_text(title_elem);
        match title_elem.value().attr("href") {
            Some(href) if longer_than(&title, MIN_TITLE_CHARS) => {
                push_headline(&mut news, base, title, href)
            }
            _ => {}
        }
    }
    Ok(news)
}

/// Every article anchor with a long title that is not a "read more" caption.
pub(crate) fn aggressive_links(document: &Html, base: &Url) -> Result<NewsBySection, ExtractError> {
    let anchors = selector("a[href]")?;
    let mut news = NewsBySection::new();

    for link in document.select(&anchors) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let title = stripped_text(link);
        let lowered = title.to_lowercase();

        let is_news_link = is_article_href(href)
            && longer_than(&title, AGGRESSIVE_MIN_TITLE_CHARS)
            && !BOILERPLATE_PHRASES.iter().any(|phrase| lowered.contains(phrase));

        if is_news_link {
            push_headline(&mut news, base, title, href);
        }
    }
    Ok(news)
}
