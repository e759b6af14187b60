//! Status Check Routes
//!
//! Heartbeat pings recorded by client applications.
//!
//! Routes:
//! - POST /status - Record a status check
//! - GET /status - List recorded status checks

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use super::JsonBody;
use crate::models::{StatusCheck, StatusCheckCreate, STATUS_CHECK_SCHEMA};
use crate::services::validation;
use crate::{AppState, Result};

/// Maximum number of status checks returned by a single list call.
const LIST_LIMIT: i64 = 1000;

/// Build status check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/status",
        get(list_status_checks)
            .post(create_status_check)
            .fallback(super::method_not_supported),
    )
}

/// Record a status check.
///
/// POST /status
///
/// Validates the body, assigns an id and timestamp, stores the record and
/// echoes it back unchanged.
async fn create_status_check(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<StatusCheck>> {
    validation::validate(&body, STATUS_CHECK_SCHEMA)?;
    let input: StatusCheckCreate = serde_json::from_value(body)?;

    let check = StatusCheck::from_create(input);
    crate::db::insert_status_check(&state.db, &check).await?;

    Ok(Json(check))
}

/// List recorded status checks in insertion order.
///
/// GET /status
async fn list_status_checks(State(state): State<AppState>) -> Result<Json<Vec<StatusCheck>>> {
    let checks = crate::db::list_status_checks(&state.db, LIST_LIMIT).await?;
    Ok(Json(checks))
}
