//! Runtime configuration read from the environment.

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
use crate::env_config::{env_parse_with_default, env_string_with_default};

pub const DATA_ENV: &str = "DASHBOARD_DATA";
pub const PAGE_SIZE_ENV: &str = "DASHBOARD_PAGE_SIZE";
pub const HTTP_TIMEOUT_ENV: &str = "DASHBOARD_HTTP_TIMEOUT_SECS";

/// One of the page sizes offered by the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeOption(usize);

impl PageSizeOption {
    /// Returns `None` unless `size` is one of [`PAGE_SIZE_OPTIONS`].
    #[must_use]
    pub fn parse(size: usize) -> Option<Self> {
        PAGE_SIZE_OPTIONS.contains(&size).then_some(Self(size))
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Self> {
        PAGE_SIZE_OPTIONS.into_iter().map(Self)
    }
}

impl Default for PageSizeOption {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Directory path or base URL holding the JSON documents.
    pub data: String,
    pub page_size: PageSizeOption,
    pub http_timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA_DIR.to_owned(),
            page_size: PageSizeOption::default(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl DashboardConfig {
    /// Reads `DASHBOARD_DATA`, `DASHBOARD_PAGE_SIZE` and
    /// `DASHBOARD_HTTP_TIMEOUT_SECS`, falling back to defaults.
    ///
    /// A page size outside the offered options is logged and replaced by the
    /// default.
    #[must_use]
    pub fn from_env() -> Self {
        let requested = env_parse_with_default(PAGE_SIZE_ENV, DEFAULT_PAGE_SIZE);
        let page_size = PageSizeOption::parse(requested).unwrap_or_else(|| {
            tracing::warn!(
                requested,
                options = ?PAGE_SIZE_OPTIONS,
                "unsupported page size, using default"
            );
            PageSizeOption::default()
        });
        Self {
            data: env_string_with_default(DATA_ENV, DEFAULT_DATA_DIR),
            page_size,
            http_timeout_secs: env_parse_with_default(HTTP_TIMEOUT_ENV, DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_config::tests::{env_lock, remove_env, set_env};

    #[test]
    fn test_page_size_option_parse() {
        assert_eq!(PageSizeOption::parse(25).map(PageSizeOption::get), Some(25));
        assert!(PageSizeOption::parse(0).is_none());
        assert!(PageSizeOption::parse(30).is_none());
        assert_eq!(PageSizeOption::all().map(PageSizeOption::get).collect::<Vec<_>>(), vec![
            10, 25, 50, 100
        ]);
    }

    #[test]
    fn test_from_env_defaults() {
        let _guard = env_lock();
        remove_env(DATA_ENV);
        remove_env(PAGE_SIZE_ENV);
        remove_env(HTTP_TIMEOUT_ENV);
        assert_eq!(DashboardConfig::from_env(), DashboardConfig::default());
    }

    #[test]
    fn test_from_env_overrides() {
        let _guard = env_lock();
        set_env(DATA_ENV, "http://localhost:5500/data");
        set_env(PAGE_SIZE_ENV, "50");
        set_env(HTTP_TIMEOUT_ENV, "5");
        let config = DashboardConfig::from_env();
        remove_env(DATA_ENV);
        remove_env(PAGE_SIZE_ENV);
        remove_env(HTTP_TIMEOUT_ENV);

        assert_eq!(config.data, "http://localhost:5500/data");
        assert_eq!(config.page_size.get(), 50);
        assert_eq!(config.http_timeout_secs, 5);
    }

    #[test]
    fn test_from_env_rejects_unlisted_page_size() {
        let _guard = env_lock();
        set_env(PAGE_SIZE_ENV, "7");
        let config = DashboardConfig::from_env();
        remove_env(PAGE_SIZE_ENV);
        assert_eq!(config.page_size.get(), DEFAULT_PAGE_SIZE);
    }
}
