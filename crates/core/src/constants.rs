//! Shared constants for the dashboard.

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Page size used until the user picks another option.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Directory (or base URL) the JSON documents are read from by default.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Timeout for HTTP data fetches, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

pub const RESULTS_RESOURCE: &str = "results.json";
pub const FILES_RESOURCE: &str = "files.json";
pub const EVENTS_RESOURCE: &str = "events.json";

/// Notification shown once when the results document cannot be loaded.
pub const RESULTS_LOAD_FAILED: &str = "Failed to load results. Please try again later.";

/// Notification shown once when the files document cannot be loaded.
pub const FILES_LOAD_FAILED: &str = "Failed to load files. Please try again later.";

/// Notification shown once when the calendar events cannot be loaded.
pub const EVENTS_LOAD_FAILED: &str = "Could not load events. Please try again later.";
