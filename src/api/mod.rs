//! API Routes for Roastery
//!
//! This module combines all API routes into a single router. Every
//! endpoint lives under the /api prefix:
//! - GET /api/ - Hello world
//! - POST /api/status, GET /api/status - Status check pings
//! - POST /api/contact, GET /api/contact - Contact form submissions
//!
//! Unknown paths return 404. A known path hit with an unsupported method,
//! or a malformed JSON body, reports a validation failure instead of
//! crashing the request.

mod contact;
mod status;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::{Method, Uri};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::{AppState, Error};

/// Path prefix shared by every route.
pub const API_PREFIX: &str = "/api";

/// Build the complete API router.
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .route("/", get(root).fallback(method_not_supported))
        .merge(status::routes())
        .merge(contact::routes());

    Router::new().nest(API_PREFIX, api).fallback(not_found)
}

/// Hello world.
///
/// GET /api/
async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// Fallback for paths that match no route.
async fn not_found(uri: Uri) -> Error {
    Error::NotFound(uri.path().to_string())
}

/// Fallback for known paths hit with an unsupported method.
async fn method_not_supported(method: Method, uri: Uri) -> Error {
    Error::UnsupportedMethod(format!("{} {}", method, uri.path()))
}

/// JSON body extractor that reports malformed payloads as validation
/// failures instead of axum's default rejection.
pub struct JsonBody(pub Value);

#[axum::async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| Error::InvalidBody(rejection.body_text()))?;
        Ok(Self(value))
    }
}
