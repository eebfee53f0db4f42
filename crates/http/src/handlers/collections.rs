use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use dashboard_core::{DEFAULT_PAGE_SIZE, PageSizeOption};
use dashboard_service::{Collection, CollectionRecord, CollectionService};
use serde::Serialize;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::PageQuery;
use crate::response_types::{PageSizesResponse, ReloadResponse};

fn parse_collection(name: &str) -> Result<Collection, ApiError> {
    name.parse().map_err(|_| ApiError::NotFound(format!("unknown collection '{name}'")))
}

async fn page_of<T: CollectionRecord + Serialize>(
    service: &CollectionService<T>,
    query: &PageQuery,
) -> Result<Response, ApiError> {
    let page = service.view(query.page, query.page_size).await?;
    Ok(Json(page).into_response())
}

/// `GET /api/{collection}?page=&page_size=`
pub async fn get_page(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let collection = parse_collection(&name)?;
    let Query(query) = query?;
    let dashboard = &state.dashboard;
    match collection {
        Collection::Results => page_of(&dashboard.results, &query).await,
        Collection::Files => page_of(&dashboard.files, &query).await,
        Collection::Events => page_of(&dashboard.events, &query).await,
    }
}

/// `POST /api/{collection}/reload`
pub async fn reload(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ReloadResponse>, ApiError> {
    let collection = parse_collection(&name)?;
    let dashboard = &state.dashboard;
    let (total_items, total_pages) = match collection {
        Collection::Results => {
            let page = dashboard.results.reload().await?;
            (page.total_items, page.total_pages)
        },
        Collection::Files => {
            let page = dashboard.files.reload().await?;
            (page.total_items, page.total_pages)
        },
        Collection::Events => {
            let page = dashboard.events.reload().await?;
            (page.total_items, page.total_pages)
        },
    };
    Ok(Json(ReloadResponse { collection: collection.as_str(), total_items, total_pages }))
}

/// `GET /api/page-sizes`
pub async fn page_sizes() -> Json<PageSizesResponse> {
    Json(PageSizesResponse {
        options: PageSizeOption::all().map(PageSizeOption::get).collect(),
        default: DEFAULT_PAGE_SIZE,
    })
}
