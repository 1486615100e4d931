//! Keyword-based section classification for headlines.
//!
//! A headline is lowercased and checked against each keyword group in
//! [`SECTION_KEYWORDS`] order; the first group with a matching substring wins.
//! Several stems appear in more than one group (`власт` is both politics and
//! society), so the table order is significant.

use crate::models::SectionLabel;

/// Keyword stems per section, in priority order.
pub const SECTION_KEYWORDS: &[(SectionLabel, &[&str])] = &[
    (
        SectionLabel::Sport,
        &["футбол", "хоккей", "спорт", "матч", "олимпи", "чемпионат", "сборная", "игр"],
    ),
    (
        SectionLabel::Health,
        &["здоров", "медицин", "врач", "болезн", "вирус", "ковид", "вакцин", "больни", "лечен"],
    ),
    (
        SectionLabel::Politics,
        &["политик", "правительств", "президент", "министр", "госдум", "выбор", "власт", "путин"],
    ),
    (
        SectionLabel::Economy,
        &["экономик", "финанс", "бизнес", "рынок", "доллар", "рубл", "инфляц", "цен", "компани"],
    ),
    (
        SectionLabel::Culture,
        &["культур", "искусств", "кино", "театр", "музык", "выставк", "концерт", "фильм"],
    ),
    (
        SectionLabel::Society,
        &["общест", "город", "регион", "власт", "транспорт", "дорог", "школ", "образовани", "москв"],
    ),
    (
        SectionLabel::Technology,
        &["технолог", "интернет", "смартфон", "компьютер", "искусс", "интеллект"],
    ),
    (
        SectionLabel::Military,
        &["арми", "воен", "оборон", "нато", "украин", "сири", "конфликт"],
    ),
];

/// Pick the section for a headline. Falls back to [`SectionLabel::General`].
pub fn classify(title: &str) -> SectionLabel {
    let lowered = title.to_lowercase();
    SECTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(label, _)| *label)
        .unwrap_or(SectionLabel::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_keyword() {
        assert_eq!(classify("Сборная выиграла чемпionship"), SectionLabel::Sport);
        assert_eq!(classify("ХОККЕЙНЫЙ клуб сменил тренера"), SectionLabel::Sport);
    }

    #[test]
    fn test_each_group_matches() {
        assert_eq!(classify("Врачи предупредили о новом штамме"), SectionLabel::Health);
        assert_eq!(classify("Министр посетил Казань"), SectionLabel::Politics);
        assert_eq!(classify("Инфляция замедлилась в октябре"), SectionLabel::Economy);
        assert_eq!(classify("Театр представил премьеру"), SectionLabel::Culture);
        assert_eq!(classify("В регионе открыли новую школу"), SectionLabel::Society);
        assert_eq!(classify("Смартфон нового поколения"), SectionLabel::Technology);
        assert_eq!(classify("Учения НАТО у границы"), SectionLabel::Military);
    }

    #[test]
    fn test_default_is_general() {
        assert_eq!(classify("Погода на выходные"), SectionLabel::General);
        assert_eq!(classify(""), SectionLabel::General);
    }

    #[test]
    fn test_politics_beats_economy() {
        let titles = [
            "Президент обсудил курс доллара",
            "Правительство и бизнес договорились",
            "Госдума приняла закон о рынке труда",
        ];
        for title in titles {
            assert_eq!(classify(title), SectionLabel::Politics, "{title}");
        }
    }

    #[test]
    fn test_shared_stem_resolves_to_earlier_group() {
        // "власт" belongs to both politics and society.
        assert_eq!(classify("Местные власти перекрыли улицу"), SectionLabel::Politics);
    }

    #[test]
    fn test_sport_beats_everything() {
        assert_eq!(classify("Путин посетил футбольный матч"), SectionLabel::Sport);
    }

    #[test]
    fn test_table_order_is_fixed() {
        let order: Vec<_> = SECTION_KEYWORDS.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            order,
            vec![
                SectionLabel::Sport,
                SectionLabel::Health,
                SectionLabel::Politics,
                SectionLabel::Economy,
                SectionLabel::Culture,
                SectionLabel::Society,
                SectionLabel::Technology,
                SectionLabel::Military,
            ]
        );
    }
}
