use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use dashboard_core::CalendarEvent;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::RangeQuery;

/// `GET /api/events/range?from=YYYY-MM-DD&to=YYYY-MM-DD`
pub async fn events_in_range(
    State(state): State<Arc<AppState>>,
    range: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let Query(range) = range?;
    let events = state.dashboard.events_between(range.from, range.to).await?;
    Ok(Json(events))
}
