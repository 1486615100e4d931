//! Console report of headlines grouped by section.

use crate::models::NewsBySection;
use std::fmt::Write;
use std::io;

/// Printed in place of a report when nothing was found.
pub const NO_NEWS_MESSAGE: &str = "Новости не найдены";

const RULE_WIDTH: usize = 60;

/// Render the report exactly as [`print_news`] prints it.
///
/// # Arguments
///
/// * `news` - Headlines grouped by section
///
/// # Returns
///
/// The total count line, then for every section a ruled header with its item
/// count and the numbered title and URL pairs. An empty mapping renders as
/// [`NO_NEWS_MESSAGE`] alone.
pub fn render_news(news: &NewsBySection) -> String {
    if news.is_empty() {
        return format!("{NO_NEWS_MESSAGE}\n");
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Всего найдено новостей: {}", news.total_items());

    for (label, items) in news.iter() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{} ({} новостей)", label.as_str().to_uppercase(), items.len());
        let _ = writeln!(out, "{rule}");

        for (i, item) in items.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, item.title);
            let _ = writeln!(out, "   {}", item.url);
        }
    }
    out
}

/// Write the report to `out` (stdout in the binary).
pub fn print_news<W: io::Write>(news: &NewsBySection, out: &mut W) -> io::Result<()> {
    out.write_all(render_news(news).as_bytes())
}
