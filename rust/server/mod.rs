//! REST surface for the business-seconds calculation (axum).

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use crate::scheduling::count_business_seconds;

/// Create the REST router.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/calculate", get(calculate))
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

#[derive(Debug, Deserialize)]
struct CalculateQuery {
    start_time: Option<String>,
    end_time: Option<String>,
}

/// Boundary validation errors. The counting logic itself is total and raises nothing;
/// all error detection happens here before it is invoked.
#[derive(Debug, Error)]
enum CalculateError {
    #[error("Error: Please provide both 'start_time' and 'end_time' parameters.")]
    MissingParameters,
    #[error("Error: Invalid ISO-8601 format for start_time or end_time.")]
    InvalidTimestamp,
}

impl IntoResponse for CalculateError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

async fn calculate(Query(query): Query<CalculateQuery>) -> Result<Json<i64>, CalculateError> {
    let (start_time, end_time) = match (query.start_time.as_deref(), query.end_time.as_deref()) {
        (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => (start, end),
        _ => return Err(CalculateError::MissingParameters),
    };
    let start = parse_instant(start_time)?;
    let end = parse_instant(end_time)?;
    // `start < end` is not enforced here: an inverted range counts zero.
    Ok(Json(count_business_seconds(&start, &end)))
}

/// Parse an extended ISO-8601 timestamp with an optional zone designator.
///
/// The clock time is taken as given; no zone arithmetic is performed.
fn parse_instant(value: &str) -> Result<NaiveDateTime, CalculateError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .or_else(|_| value.parse::<NaiveDateTime>())
        .map_err(|_| CalculateError::InvalidTimestamp)
}
