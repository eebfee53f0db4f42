use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Where a JSON document (or a directory of them) lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Absolute `http://` or `https://` URL.
    Http(String),
    /// Local path.
    File(PathBuf),
}

impl DataSource {
    /// `http://` and `https://` become [`DataSource::Http`]; anything else is a path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(raw.trim_end_matches('/').to_owned())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Whether this source already names a single `.json` document.
    #[must_use]
    pub fn is_document(&self) -> bool {
        match self {
            Self::Http(url) => {
                let path = url.split(['?', '#']).next().unwrap_or(url.as_str());
                path.to_ascii_lowercase().ends_with(".json")
            },
            Self::File(path) => {
                path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
            },
        }
    }

    /// Resolves `resource` (e.g. `results.json`) against a directory or base URL.
    ///
    /// A source that already names a document is returned unchanged.
    #[must_use]
    pub fn resolve(&self, resource: &str) -> Self {
        if self.is_document() {
            return self.clone();
        }
        match self {
            Self::Http(base) => Self::Http(format!("{}/{resource}", base.trim_end_matches('/'))),
            Self::File(dir) => Self::File(dir.join(resource)),
        }
    }
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<&str> for DataSource {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distinguishes_urls_and_paths() {
        assert_eq!(
            DataSource::parse("http://localhost:5500/data/"),
            DataSource::Http("http://localhost:5500/data".to_owned())
        );
        assert_eq!(
            DataSource::parse("HTTPS://example.com/results.json"),
            DataSource::Http("HTTPS://example.com/results.json".to_owned())
        );
        assert_eq!(DataSource::parse("data"), DataSource::File(PathBuf::from("data")));
    }

    #[test]
    fn test_resolve_against_directory() {
        let source = DataSource::parse("data");
        assert_eq!(
            source.resolve("files.json"),
            DataSource::File(PathBuf::from("data").join("files.json"))
        );
        let source = DataSource::parse("http://localhost:5500/data");
        assert_eq!(
            source.resolve("events.json"),
            DataSource::Http("http://localhost:5500/data/events.json".to_owned())
        );
    }

    #[test]
    fn test_resolve_keeps_documents() {
        let source = DataSource::parse("/srv/export/results.JSON");
        assert!(source.is_document());
        assert_eq!(source.resolve("results.json"), source);

        let source = DataSource::parse("http://host/api/results.json?v=2");
        assert!(source.is_document());
        assert_eq!(source.resolve("results.json"), source);
    }
}
