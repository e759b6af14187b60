//! Contact submission model: inquiries captured from the public contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::validation::{FieldKind, FieldSpec};

/// Field constraints for an inbound contact submission.
pub const CONTACT_SUBMISSION_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        kind: FieldKind::Text { min: 1, max: Some(100) },
    },
    FieldSpec {
        name: "email",
        kind: FieldKind::Email,
    },
    FieldSpec {
        name: "phone",
        kind: FieldKind::OptionalText { max: 20 },
    },
    FieldSpec {
        name: "subject",
        kind: FieldKind::Text { min: 1, max: Some(200) },
    },
    FieldSpec {
        name: "message",
        kind: FieldKind::Text { min: 10, max: Some(2000) },
    },
];

/// Request model for submitting the contact form.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmissionCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// A stored contact submission. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ContactSubmission {
    /// Create from a validated request, assigning a fresh id and timestamp.
    /// Caller-supplied fields are carried over untouched.
    pub fn from_create(data: ContactSubmissionCreate) -> Self {
        Self {
            id: super::new_id(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            subject: data.subject,
            message: data.message,
            timestamp: super::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> ContactSubmissionCreate {
        ContactSubmissionCreate {
            name: "José María O'Connor-Smith".to_string(),
            email: "jose.maria@example.com".to_string(),
            phone: None,
            subject: "Catering".to_string(),
            message: "Do you cater weekend events?".to_string(),
        }
    }

    #[test]
    fn test_from_create_preserves_fields() {
        let submission = ContactSubmission::from_create(create());

        assert!(!submission.id.is_empty());
        assert_eq!(submission.name, "José María O'Connor-Smith");
        assert_eq!(submission.email, "jose.maria@example.com");
        assert_eq!(submission.phone, None);
        assert_eq!(submission.subject, "Catering");
    }

    #[test]
    fn test_from_create_assigns_distinct_ids() {
        let a = ContactSubmission::from_create(create());
        let b = ContactSubmission::from_create(create());
        assert_ne!(a.id, b.id);
    }
}
