//! Data models for scraped headlines and their section grouping.
//!
//! - [`NewsItem`]: a single headline with its absolute link
//! - [`SectionLabel`]: the closed set of topical sections
//! - [`NewsBySection`]: headlines grouped by section, in order of discovery
//!
//! `NewsBySection` serializes to a JSON object keyed by the Russian section
//! label. Keys keep the order in which sections were first encountered, so the
//! map is backed by a `Vec` rather than a hash map.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A headline scraped from a listing page.
///
/// `url` is always absolute: relative hrefs are resolved against the page URL
/// before the item is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    /// Visible text of the link or heading, whitespace-stripped.
    pub title: String,
    /// Absolute URL of the article.
    pub url: String,
}

/// Topical section a headline is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionLabel {
    Sport,
    Health,
    Politics,
    Economy,
    Culture,
    Society,
    Technology,
    Military,
    General,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section label: {0}")]
pub struct UnknownSection(pub String);

impl SectionLabel {
    pub const ALL: [SectionLabel; 9] = [
        SectionLabel::Sport,
        SectionLabel::Health,
        SectionLabel::Politics,
        SectionLabel::Economy,
        SectionLabel::Culture,
        SectionLabel::Society,
        SectionLabel::Technology,
        SectionLabel::Military,
        SectionLabel::General,
    ];

    /// The label text used in reports and as the JSON key.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionLabel::Sport => "Спорт",
            SectionLabel::Health => "Здоровье",
            SectionLabel::Politics => "Политика",
            SectionLabel::Economy => "Экономика",
            SectionLabel::Culture => "Культура",
            SectionLabel::Society => "Общество",
            SectionLabel::Technology => "Технологии",
            SectionLabel::Military => "Армия",
            SectionLabel::General => "Общие новости",
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionLabel {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Headlines grouped by section.
///
/// Sections appear in the order they were first pushed to; items within a
/// section keep insertion order. Duplicates are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsBySection {
    sections: Vec<(SectionLabel, Vec<NewsItem>)>,
}

impl NewsBySection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` to `label`, creating the section at the end if needed.
    pub fn push(&mut self, label: SectionLabel, item: NewsItem) {
        self.section_mut(label).push(item);
    }

    fn section_mut(&mut self, label: SectionLabel) -> &mut Vec<NewsItem> {
        let idx = match self.sections.iter().position(|(l, _)| *l == label) {
            Some(idx) => idx,
            None => {
                self.sections.push((label, Vec::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionLabel, &[NewsItem])> {
        self.sections
            .iter()
            .map(|(label, items)| (*label, items.as_slice()))
    }

    pub fn labels(&self) -> impl Iterator<Item = SectionLabel> + '_ {
        self.sections.iter().map(|(label, _)| *label)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn total_items(&self) -> usize {
        self.sections.iter().map(|(_, items)| items.len()).sum()
    }
}

#[cfg(test)]
impl NewsBySection {
    pub fn get(&self, label: SectionLabel) -> Option<&[NewsItem]> {
        self.sections
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, items)| items.as_slice())
    }
}

impl Serialize for NewsBySection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (label, items) in &self.sections {
            map.serialize_entry(label.as_str(), items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NewsBySection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = NewsBySection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of section labels to news items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut news = NewsBySection::new();
                while let Some((key, items)) = access.next_entry::<String, Vec<NewsItem>>()? {
                    let label = key.parse::<SectionLabel>().map_err(serde::de::Error::custom)?;
                    news.section_mut(label).extend(items);
                }
                Ok(news)
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, url: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_label_text_round_trips() {
        for label in SectionLabel::ALL {
            assert_eq!(label.as_str().parse::<SectionLabel>(), Ok(label));
        }
        assert_eq!(SectionLabel::General.to_string(), "Общие новости");
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "Погода".parse::<SectionLabel>().unwrap_err();
        assert_eq!(err, UnknownSection("Погода".to_string()));
    }

    #[test]
    fn test_sections_keep_first_encounter_order() {
        let mut news = NewsBySection::new();
        news.push(SectionLabel::Economy, item("a", "https://iz.ru/1"));
        news.push(SectionLabel::Sport, item("b", "https://iz.ru/2"));
        news.push(SectionLabel::Economy, item("c", "https://iz.ru/3"));

        let labels: Vec<_> = news.labels().collect();
        assert_eq!(labels, vec![SectionLabel::Economy, SectionLabel::Sport]);
        assert_eq!(news.section_count(), 2);
        assert_eq!(news.total_items(), 3);

        let economy = news.get(SectionLabel::Economy).unwrap();
        assert_eq!(economy[0].title, "a");
        assert_eq!(economy[1].title, "c");
        assert!(news.get(SectionLabel::Culture).is_none());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut news = NewsBySection::new();
        news.push(SectionLabel::General, item("same", "https://example.com/x"));
        news.push(SectionLabel::General, item("same", "https://example.com/x"));
        assert_eq!(news.get(SectionLabel::General).unwrap().len(), 2);
    }

    #[test]
    fn test_serialization_preserves_order_and_cyrillic() {
        let mut news = NewsBySection::new();
        news.push(SectionLabel::Politics, item("Президент", "https://iz.ru/p"));
        news.push(SectionLabel::Sport, item("Матч", "https://iz.ru/s"));

        let json = serde_json::to_string(&news).unwrap();
        assert_eq!(
            json,
            r#"{"Политика":[{"title":"Президент","url":"https://iz.ru/p"}],"Спорт":[{"title":"Матч","url":"https://iz.ru/s"}]}"#
        );
    }

    #[test]
    fn test_deserialization_preserves_order() {
        let json = r#"{
            "Армия": [{"title": "t1", "url": "https://iz.ru/1"}],
            "Культура": [{"title": "t2", "url": "https://iz.ru/2"}, {"title": "t3", "url": "https://iz.ru/3"}]
        }"#;

        let news: NewsBySection = serde_json::from_str(json).unwrap();
        let labels: Vec<_> = news.labels().collect();
        assert_eq!(labels, vec![SectionLabel::Military, SectionLabel::Culture]);
        assert_eq!(news.get(SectionLabel::Culture).unwrap()[1].title, "t3");
    }

    #[test]
    fn test_deserialization_rejects_unknown_section() {
        let json = r#"{"Погода": []}"#;
        let result: Result<NewsBySection, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
