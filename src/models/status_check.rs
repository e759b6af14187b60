//! Status check model: heartbeat pings recorded by client applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::validation::{FieldKind, FieldSpec};

/// Field constraints for an inbound status check.
pub const STATUS_CHECK_SCHEMA: &[FieldSpec] = &[FieldSpec {
    name: "client_name",
    kind: FieldKind::Text { min: 1, max: None },
}];

/// Request model for recording a status check.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// A stored status check. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Create from a validated request, assigning a fresh id and timestamp.
    pub fn from_create(data: StatusCheckCreate) -> Self {
        Self {
            id: super::new_id(),
            client_name: data.client_name,
            timestamp: super::now(),
        }
    }
}
