//! Best-effort scraper for sites without a dedicated strategy.
//!
//! Every selector in [`NEWS_SELECTORS`] is applied in turn and all matches are
//! kept. Selectors overlap on purpose (`.news-item` is also
//! `[class*="news"]`), so one block can contribute the same headline more
//! than once. Output order is selector order, then document order.

use super::{push_headline, selector, ExtractError, MIN_TITLE_CHARS};
use crate::models::NewsBySection;
use crate::utils::{longer_than, stripped_text};
use scraper::Html;
use tracing::{debug, instrument};
use url::Url;

/// Candidate headline containers, in application order.
pub const NEWS_SELECTORS: [&str; 8] = [
    "article",
    ".news-item",
    ".news",
    ".item-news",
    r#"[class*="news"]"#,
    r#"[class*="item"]"#,
    ".card",
    ".post",
];

const TITLE_ELEMENTS: &str = "a, h1, h2, h3, h4";

/// Scrape an arbitrary listing page.
///
/// # Arguments
///
/// * `document` - Parsed listing page
/// * `base` - Page URL that relative hrefs are resolved against
///
/// # Returns
///
/// Every accepted headline from every selector, duplicates included.
#[instrument(level = "info", skip_all, fields(base = %base))]
pub fn parse_universal(document: &Html, base: &Url) -> Result<NewsBySection, ExtractError> {
    let title_elements = selector(TITLE_ELEMENTS)?;
    let mut news = NewsBySection::new();

    for css in NEWS_SELECTORS {
        let containers = selector(css)?;
        let before = news.total_items();

        for container in document.select(&containers) {
            let Some(title_elem) = container.select(&title_elements).next() else {
                continue;
            };
            let title = stripped_text(title_elem);
            if let Some(href) = title_elem.value().attr("href") {
                if longer_than(&title, MIN_TITLE_CHARS) {
                    push_headline(&mut news, base, title, href);
                }
            }
        }

        debug!(selector = css, added = news.total_items() - before, "Applied selector");
    }
    Ok(news)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewsItem, SectionLabel};

    fn base() -> Url {
        Url::parse("https://example.com/world/").unwrap()
    }

    fn parse(html: &str) -> NewsBySection {
        parse_universal(&Html::parse_document(html), &base()).unwrap()
    }

    #[test]
    fn test_all_selectors_compile() {
        for css in NEWS_SELECTORS {
            assert!(selector(css).is_ok(), "{css}");
        }
        assert!(selector(TITLE_ELEMENTS).is_ok());
    }

    #[test]
    fn test_article_with_link() {
        let news = parse(
            r#"<article><a href="story-1.html">Премьера фильма состоялась в Каннах</a></article>"#,
        );
        assert_eq!(
            news.get(SectionLabel::Culture).unwrap(),
            &[NewsItem {
                title: "Премьера фильма состоялась в Каннах".to_string(),
                url: "https://example.com/world/story-1.html".to_string(),
            }]
        );
    }

    #[test]
    fn test_two_selectors_on_one_element_duplicate() {
        let news = parse(
            r#"<article class="card"><a href="/p/1">Министр финансов представил бюджет</a></article>"#,
        );
        let politics = news.get(SectionLabel::Politics).unwrap();
        assert_eq!(politics.len(), 2);
        assert_eq!(politics[0], politics[1]);
        assert_eq!(politics[0].url, "https://example.com/p/1");
    }

    #[test]
    fn test_overlapping_class_selectors_accumulate() {
        // .news-item, [class*="news"] and [class*="item"] all match.
        let news = parse(
            r#"<div class="news-item"><a href="/n/1">Новый смартфон поступил в продажу</a></div>"#,
        );
        assert_eq!(news.get(SectionLabel::Technology).unwrap().len(), 3);
    }

    #[test]
    fn test_short_title_or_missing_href_is_skipped() {
        let news = parse(
            r#"
            <article><a href="/n/1">Новости 10</a></article>
            <article><h2>Заголовок статьи без всякой ссылки</h2></article>
            <div class="post"><h3>Ещё один заголовок без ссылки</h3><a href="/n/2">Подпись ссылки достаточно длинная</a></div>
            "#,
        );
        assert!(news.is_empty());
    }

    #[test]
    fn test_titles_must_exceed_fifteen_chars() {
        let news = parse(
            r#"
            <article><a href="/n/1">Курс рубля упал</a></article>
            <article><a href="/n/2">Курс рубля вырос</a></article>
            "#,
        );
        let economy = news.get(SectionLabel::Economy).unwrap();
        assert_eq!(economy.len(), 1);
        assert_eq!(economy[0].title, "Курс рубля вырос");
        assert_eq!(news.total_items(), 1);
    }

    #[test]
    fn test_results_follow_selector_order() {
        let news = parse(
            r#"
            <div class="post"><a href="/b">Второй по порядку селектор заголовок</a></div>
            <article><a href="/a">Первый по порядку селектор заголовок</a></article>
            "#,
        );
        let general = news.get(SectionLabel::General).unwrap();
        assert_eq!(general[0].url, "https://example.com/a");
        assert_eq!(general[1].url, "https://example.com/b");
    }

    #[test]
    fn test_identical_markup_gives_identical_output() {
        let html = r#"
            <article class="card"><a href="/p/1">Министр финансов представил бюджет</a></article>
            <li class="item"><a href="/p/2">Концерт симфонического оркестра</a></li>
        "#;
        let first = serde_json::to_string(&parse(html)).unwrap();
        let second = serde_json::to_string(&parse(html)).unwrap();
        assert_eq!(first, second);
    }
}
