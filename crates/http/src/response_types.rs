//! Response types (Serialize)

use serde::Serialize;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PageSizesResponse {
    pub options: Vec<usize>,
    pub default: usize,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub collection: &'static str,
    pub total_items: usize,
    pub total_pages: usize,
}
