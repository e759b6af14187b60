//! Contact Form Routes
//!
//! Inquiries submitted through the public contact form.
//!
//! Routes:
//! - POST /contact - Submit the contact form
//! - GET /contact - List submissions, newest first (admin endpoint)

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use super::JsonBody;
use crate::models::{ContactSubmission, ContactSubmissionCreate, CONTACT_SUBMISSION_SCHEMA};
use crate::services::{notify, validation};
use crate::{AppState, Result};

/// Maximum number of submissions returned by a single list call.
const LIST_LIMIT: i64 = 100;

/// Build contact form routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/contact",
        get(list_contact_submissions)
            .post(submit_contact_form)
            .fallback(super::method_not_supported),
    )
}

/// Submit the contact form.
///
/// POST /contact
///
/// Validates every field constraint before any I/O, assigns an id and
/// timestamp, stores the record and echoes it back unchanged. The
/// notification hook runs after the write and cannot fail the request.
async fn submit_contact_form(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<ContactSubmission>> {
    validation::validate(&body, CONTACT_SUBMISSION_SCHEMA)?;
    let input: ContactSubmissionCreate = serde_json::from_value(body)?;

    let submission = ContactSubmission::from_create(input);
    crate::db::insert_contact_submission(&state.db, &submission).await?;

    notify::contact_submission_received(&submission);

    Ok(Json(submission))
}

/// List contact submissions, newest first (admin endpoint).
///
/// GET /contact
async fn list_contact_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactSubmission>>> {
    let submissions = crate::db::list_contact_submissions(&state.db, LIST_LIMIT).await?;
    Ok(Json(submissions))
}
