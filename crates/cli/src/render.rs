//! Plain-text rendering of pages for the terminal.

use std::fmt::Write as _;

use dashboard_core::{Card, Page, ToCard};

pub(crate) const EMPTY_MESSAGE: &str = "No records available";

fn write_card(out: &mut String, card: &Card) {
    let _ = writeln!(out, "{}", card.title);
    for line in [&card.subtitle, &card.body, &card.footer] {
        if !line.is_empty() {
            let _ = writeln!(out, "  {line}");
        }
    }
}

/// One card per record, separated by blank lines.
pub(crate) fn render_cards<T: ToCard>(records: &[T]) -> String {
    if records.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_card(&mut out, &record.to_card());
    }
    out
}

/// `« 1 [2] 3 »`, with `(«)` / `(»)` when the control is disabled.
pub(crate) fn page_controls<T>(page: &Page<T>) -> String {
    let mut parts = Vec::with_capacity(page.total_pages + 2);
    parts.push(if page.has_previous { "«".to_owned() } else { "(«)".to_owned() });
    parts.extend(page.page_numbers().map(|n| {
        if n == page.page { format!("[{n}]") } else { n.to_string() }
    }));
    parts.push(if page.has_next { "»".to_owned() } else { "(»)".to_owned() });
    parts.join(" ")
}

pub(crate) fn render_page<T: ToCard>(title: &str, page: &Page<T>) -> String {
    if page.total_items == 0 {
        return format!("{EMPTY_MESSAGE}\n");
    }
    let mut out = format!(
        "{title}: page {} of {} ({} items, {} per page)\n\n",
        page.page, page.total_pages, page.total_items, page.page_size
    );
    out.push_str(&render_cards(&page.records));
    let _ = writeln!(out, "\n{}", page_controls(page));
    out
}
