use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::card::{Card, ToCard};
use super::{non_blank, string_or_number};
use crate::format::{category_color, format_date, parse_datetime};

pub const DEFAULT_EVENT_CATEGORY: &str = "general";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default, alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "rol")]
    pub role: String,
}

/// A calendar entry as stored in the events document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, alias = "titulo")]
    pub title: Option<String>,
    #[serde(default, alias = "inicio")]
    pub start: Option<String>,
    #[serde(default, alias = "fin")]
    pub end: Option<String>,
    #[serde(default, alias = "todoElDia")]
    pub all_day: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(default, alias = "ubicacion")]
    pub location: Option<String>,
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
    #[serde(default, alias = "participantes")]
    pub participants: Vec<Participant>,
}

impl CalendarEvent {
    /// Fills every display field so renderers never see gaps.
    ///
    /// Missing ids get a fresh UUID, a missing start becomes "now", and the
    /// colour is derived from the category unless set explicitly.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if non_blank(self.id.as_deref()).is_none() {
            self.id = Some(uuid::Uuid::new_v4().to_string());
        }
        if non_blank(self.title.as_deref()).is_none() {
            self.title = Some("Untitled event".to_owned());
        }
        if non_blank(self.start.as_deref()).is_none() {
            self.start = Some(chrono::Utc::now().to_rfc3339());
        }
        let category = non_blank(self.category.as_deref())
            .unwrap_or(DEFAULT_EVENT_CATEGORY)
            .to_owned();
        if non_blank(self.color.as_deref()).is_none() {
            self.color = Some(category_color(&category).to_owned());
        }
        self.category = Some(category);
        if non_blank(self.description.as_deref()).is_none() {
            self.description = Some("No description available".to_owned());
        }
        if non_blank(self.location.as_deref()).is_none() {
            self.location = Some("Location not specified".to_owned());
        }
        self
    }

    fn start_date(&self) -> Option<NaiveDate> {
        parse_datetime(self.start.as_deref()?).map(|dt| dt.date())
    }

    fn end_date(&self) -> Option<NaiveDate> {
        self.end.as_deref().and_then(parse_datetime).map(|dt| dt.date())
    }

    /// Whether the event touches any day in `from..=to`.
    ///
    /// Events without a parsable start never match. An event without an end is
    /// treated as a single-day event.
    #[must_use]
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        let Some(start) = self.start_date() else {
            return false;
        };
        let end = self.end_date().filter(|end| *end >= start).unwrap_or(start);
        start <= to && end >= from
    }
}

impl ToCard for CalendarEvent {
    fn to_card(&self) -> Card {
        let with_time = !self.all_day;
        let start = format_date(self.start.as_deref().unwrap_or_default(), with_time);
        let footer = match self.end.as_deref().and_then(|end| non_blank(Some(end))) {
            Some(end) => format!("{start} - {}", format_date(end, with_time)),
            None if self.all_day => format!("{start} (all day)"),
            None => start,
        };
        let mut body = non_blank(self.description.as_deref()).unwrap_or_default().to_owned();
        if let Some(location) = non_blank(self.location.as_deref()) {
            if !body.is_empty() {
                body.push_str(" @ ");
            }
            body.push_str(location);
        }
        Card {
            title: non_blank(self.title.as_deref()).unwrap_or("Untitled event").to_owned(),
            subtitle: non_blank(self.category.as_deref())
                .unwrap_or(DEFAULT_EVENT_CATEGORY)
                .to_owned(),
            body,
            footer,
        }
    }
}
