use serde::{Deserialize, Serialize};

use super::card::{Card, ToCard};
use super::{lenient_size, non_blank, string_or_number};
use crate::format::{file_icon, format_file_size, is_viewable};

/// A downloadable file shown in the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, alias = "nombre_archivo", alias = "name")]
    pub filename: String,
    #[serde(default, rename = "type", alias = "tipo")]
    pub file_type: Option<String>,
    /// Size in bytes, when the source reports it.
    #[serde(default, deserialize_with = "lenient_size")]
    pub size: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
}

impl FileRecord {
    /// Lower-cased extension taken from the filename; empty when there is none.
    #[must_use]
    pub fn extension(&self) -> String {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        file_icon(&self.extension())
    }

    /// Whether a browser can open the file inline instead of downloading it.
    #[must_use]
    pub fn is_viewable(&self) -> bool {
        is_viewable(&self.extension())
    }

    #[must_use]
    pub fn formatted_size(&self) -> Option<String> {
        self.size.map(format_file_size)
    }

    /// Declared type, or the upper-cased extension when the source omits it.
    #[must_use]
    pub fn display_type(&self) -> String {
        non_blank(self.file_type.as_deref())
            .map_or_else(|| self.extension().to_uppercase(), str::to_owned)
    }
}

impl ToCard for FileRecord {
    fn to_card(&self) -> Card {
        let action = if self.is_viewable() { "view" } else { "download" };
        let footer = match self.url.as_deref() {
            Some(url) => format!("{action}: {url}"),
            None => String::new(),
        };
        Card {
            title: self.filename.clone(),
            subtitle: format!("{} {}", self.icon(), self.display_type()),
            body: self.formatted_size().unwrap_or_default(),
            footer,
        }
    }
}
