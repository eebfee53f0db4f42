//! Display helpers shared by the renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Human readable size using 1024-based units and at most two decimals.
///
/// `format_file_size(1536) == "1.5 KB"`, `format_file_size(0) == "0 Bytes"`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rendered = format!("{value:.2}");
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Icon class for a file extension (case-insensitive).
#[must_use]
pub fn file_icon(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "pdf" => "bi-file-earmark-pdf",
        "doc" | "docx" => "bi-file-earmark-word",
        "xls" | "xlsx" => "bi-file-earmark-excel",
        "ppt" | "pptx" => "bi-file-earmark-ppt",
        "csv" => "bi-file-earmark-spreadsheet",
        "jpg" | "jpeg" | "png" | "gif" | "svg" => "bi-file-image",
        "mp3" | "wav" => "bi-file-music",
        "mp4" | "webm" => "bi-file-play",
        "zip" | "rar" => "bi-file-zip",
        "txt" => "bi-file-text",
        "html" | "htm" | "js" | "json" | "css" => "bi-file-code",
        _ => "bi-file-earmark",
    }
}

/// Whether a browser can display files with this extension inline.
#[must_use]
pub fn is_viewable(extension: &str) -> bool {
    matches!(
        extension.to_lowercase().as_str(),
        "pdf"
            | "jpg"
            | "jpeg"
            | "png"
            | "gif"
            | "svg"
            | "txt"
            | "html"
            | "htm"
            | "mp4"
            | "webm"
            | "mp3"
            | "wav"
    )
}

/// Calendar colour for an event category; unknown categories are grey.
#[must_use]
pub fn category_color(category: &str) -> &'static str {
    match category.trim().to_lowercase().as_str() {
        "reunion" | "meeting" => "#4285F4",
        "feriado" | "holiday" => "#34A853",
        "importante" | "important" => "#EA4335",
        "personal" => "#FBBC05",
        "conferencia" | "conference" => "#9C27B0",
        "taller" | "workshop" => "#00ACC1",
        "entrega" | "deadline" => "#FF6D00",
        _ => "#757575",
    }
}

/// Parses the date shapes found in the JSON documents.
///
/// Accepts RFC 3339 (wall-clock time of the given offset is kept),
/// `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]` and bare `YYYY-MM-DD`.
#[must_use]
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    const FORMATS: [&str; 4] =
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Long-form date for cards, e.g. `Monday, March 3, 2025` (`... 14:30` with time).
///
/// Blank input renders as an empty string; unparsable input is returned as-is.
#[must_use]
pub fn format_date(raw: &str, with_time: bool) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let Some(dt) = parse_datetime(raw) else {
        return raw.to_owned();
    };
    let pattern = if with_time { "%A, %B %-d, %Y %H:%M" } else { "%A, %B %-d, %Y" };
    dt.format(pattern).to_string()
}
