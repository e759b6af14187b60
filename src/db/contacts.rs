//! Contact submission queries.

use tracing::error;

use super::DbPool;
use crate::models::ContactSubmission;
use crate::{Error, Result};

/// Insert a contact submission.
///
/// The record is stored verbatim; the caller echoes it back unchanged.
pub async fn insert_contact_submission(
    pool: &DbPool,
    submission: &ContactSubmission,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO contact_submissions (id, name, email, phone, subject, message, timestamp)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&submission.id)
    .bind(&submission.name)
    .bind(&submission.email)
    .bind(&submission.phone)
    .bind(&submission.subject)
    .bind(&submission.message)
    .bind(submission.timestamp)
    .execute(pool)
    .await
    .map_err(|e| {
        error!(error = %e, "contact_submissions insert failed");
        Error::Database(e)
    })?;

    Ok(())
}

/// List contact submissions newest first, up to `limit`.
///
/// Ties on timestamp fall back to reverse insertion order so the listing
/// stays stable under sub-millisecond collisions.
pub async fn list_contact_submissions(
    pool: &DbPool,
    limit: i64,
) -> Result<Vec<ContactSubmission>> {
    sqlx::query_as::<_, ContactSubmission>(
        r#"
        SELECT id, name, email, phone, subject, message, timestamp
        FROM contact_submissions
        ORDER BY timestamp DESC, seq DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        error!(error = %e, "contact_submissions list failed");
        Error::Database(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_pool, initialize_schema};
    use crate::models::{ContactSubmission, ContactSubmissionCreate};

    async fn setup_test_db() -> DbPool {
        let pool = init_pool(":memory:").await.unwrap();
        initialize_schema(&pool).await.unwrap();
        pool
    }

    fn submission(subject: &str) -> ContactSubmission {
        ContactSubmission::from_create(ContactSubmissionCreate {
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            phone: Some("+1-555-123-4567".to_string()),
            subject: subject.to_string(),
            message: "I would like to book the back room.".to_string(),
        })
    }

    #[tokio::test]
    async fn test_insert_and_round_trip() {
        let pool = setup_test_db().await;

        let stored = submission("Booking");
        insert_contact_submission(&pool, &stored).await.unwrap();

        let listed = list_contact_submissions(&pool, 100).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, stored.id);
        assert_eq!(listed[0].name, stored.name);
        assert_eq!(listed[0].email, stored.email);
        assert_eq!(listed[0].phone, stored.phone);
        assert_eq!(listed[0].subject, stored.subject);
        assert_eq!(listed[0].message, stored.message);
        assert_eq!(listed[0].timestamp, stored.timestamp);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let pool = setup_test_db().await;

        insert_contact_submission(&pool, &submission("first"))
            .await
            .unwrap();
        insert_contact_submission(&pool, &submission("second"))
            .await
            .unwrap();
        insert_contact_submission(&pool, &submission("third"))
            .await
            .unwrap();

        let listed = list_contact_submissions(&pool, 100).await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].subject, "third");
        assert_eq!(listed[2].subject, "first");
        for pair in listed.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[tokio::test]
    async fn test_identical_timestamps_use_insertion_tie_break() {
        let pool = setup_test_db().await;

        // Two records sharing one timestamp: latest inserted wins
        let first = submission("tie-first");
        let mut second = submission("tie-second");
        second.timestamp = first.timestamp;

        insert_contact_submission(&pool, &first).await.unwrap();
        insert_contact_submission(&pool, &second).await.unwrap();

        let listed = list_contact_submissions(&pool, 100).await.unwrap();
        assert_eq!(listed[0].subject, "tie-second");
        assert_eq!(listed[1].subject, "tie-first");
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let pool = setup_test_db().await;

        for i in 0..4 {
            insert_contact_submission(&pool, &submission(&format!("subject-{}", i)))
                .await
                .unwrap();
        }

        let listed = list_contact_submissions(&pool, 2).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].subject, "subject-3");
    }
}
