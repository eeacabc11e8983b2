//! Render sink: pure projection from a project record to display strings
//!
//! No network, timers, or shared state; everything here is a function of its
//! arguments so the rotation controller can call it from inside a transition
//! without ordering concerns.

use crate::types::{DisplayModel, ProjectRecord};

/// Fallback shown when a project has no description
pub const NO_DESCRIPTION_FALLBACK: &str = "No description available";

/// Ellipsis appended to truncated titles (single character, not "...")
const ELLIPSIS: char = '\u{2026}';

/// Options controlling the display projection
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Maximum title length in characters before truncation
    pub title_max_chars: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { title_max_chars: 30 }
    }
}

/// Project a record into its display representation
pub fn render(item: &ProjectRecord, options: &RenderOptions) -> DisplayModel {
    DisplayModel {
        image_url: item.image_url.clone(),
        title_text: truncate_title(&item.name, options.title_max_chars),
        player_count_text: group_thousands(item.playing),
        visit_count_text: group_thousands(item.visits),
        description_text: item
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION_FALLBACK.to_string()),
        link_href: item.link_url.clone(),
    }
}

/// Truncate a title to `max_chars` characters, appending an ellipsis
///
/// Character-based, not byte-based, so multi-byte names truncate cleanly.
/// Titles at or under the limit pass through unchanged.
pub fn truncate_title(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let mut truncated: String = name.chars().take(max_chars).collect();
        truncated.push(ELLIPSIS);
        truncated
    } else {
        name.to_string()
    }
}

/// Format an integer with comma thousands grouping ("1234567" -> "1,234,567")
///
/// en-US grouping only; the page is English-only and expects commas.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
