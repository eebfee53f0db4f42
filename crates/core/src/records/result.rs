use serde::{Deserialize, Serialize};

use super::card::{Card, ToCard};
use super::{non_blank, string_or_number};
use crate::format::format_date;

/// One entry of the results list.
///
/// Older documents use Spanish field names; both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, alias = "titulo")]
    pub title: Option<String>,
    #[serde(default, alias = "categoria")]
    pub category: Option<String>,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(default, alias = "fecha")]
    pub date: Option<String>,
    #[serde(default, alias = "url_imagen")]
    pub image_url: Option<String>,
}

impl ResultRecord {
    #[must_use]
    pub fn display_title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or("Untitled")
    }

    #[must_use]
    pub fn display_category(&self) -> &str {
        non_blank(self.category.as_deref()).unwrap_or("Uncategorized")
    }

    #[must_use]
    pub fn display_description(&self) -> &str {
        non_blank(self.description.as_deref()).unwrap_or("No description")
    }
}

impl ToCard for ResultRecord {
    fn to_card(&self) -> Card {
        Card {
            title: self.display_title().to_owned(),
            subtitle: self.display_category().to_owned(),
            body: self.display_description().to_owned(),
            footer: format_date(self.date.as_deref().unwrap_or_default(), false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_legacy_field_names() {
        let record: ResultRecord = serde_json::from_value(json!({
            "id": 3,
            "titulo": "Laptop",
            "descripcion": "Precio: 499",
            "url_imagen": "https://img.example/laptop.png"
        }))
        .unwrap();
        assert_eq!(record.id.as_deref(), Some("3"));
        assert_eq!(record.display_title(), "Laptop");
        assert_eq!(record.display_description(), "Precio: 499");
        assert_eq!(record.display_category(), "Uncategorized");
        assert_eq!(record.image_url.as_deref(), Some("https://img.example/laptop.png"));
    }

    #[test]
    fn test_accepts_current_field_names() {
        let record: ResultRecord = serde_json::from_value(json!({
            "title": "Quarterly report",
            "category": "Finance",
            "description": "Q3 numbers",
            "date": "2025-03-03"
        }))
        .unwrap();
        let card = record.to_card();
        assert_eq!(card.title, "Quarterly report");
        assert_eq!(card.subtitle, "Finance");
        assert_eq!(card.body, "Q3 numbers");
        assert_eq!(card.footer, "Monday, March 3, 2025");
    }

    #[test]
    fn test_blank_fields_fall_back() {
        let record: ResultRecord = serde_json::from_value(json!({"title": "  "})).unwrap();
        let card = record.to_card();
        assert_eq!(card.title, "Untitled");
        assert_eq!(card.body, "No description");
        assert_eq!(card.footer, "");
    }
}
