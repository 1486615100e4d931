//! Output generation for scraped headlines.
//!
//! # Submodules
//!
//! - [`report`]: Human-readable console listing grouped by section
//! - [`json`]: Writes the section mapping to a pretty-printed JSON file
//!
//! # JSON Shape
//!
//! ```text
//! {
//!   "Политика": [
//!     { "title": "...", "url": "https://..." }
//!   ],
//!   "Спорт": [ ... ]
//! }
//! ```

pub mod json;
pub mod report;
