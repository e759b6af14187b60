//! Status check queries.

use tracing::error;

use super::DbPool;
use crate::models::StatusCheck;
use crate::{Error, Result};

/// Insert a status check.
///
/// The record is stored verbatim; the caller echoes it back unchanged.
pub async fn insert_status_check(pool: &DbPool, check: &StatusCheck) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO status_checks (id, client_name, timestamp)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&check.id)
    .bind(&check.client_name)
    .bind(check.timestamp)
    .execute(pool)
    .await
    .map_err(|e| {
        error!(error = %e, "status_checks insert failed");
        Error::Database(e)
    })?;

    Ok(())
}

/// List status checks in insertion order, up to `limit`.
pub async fn list_status_checks(pool: &DbPool, limit: i64) -> Result<Vec<StatusCheck>> {
    sqlx::query_as::<_, StatusCheck>(
        r#"
        SELECT id, client_name, timestamp
        FROM status_checks
        ORDER BY seq ASC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        error!(error = %e, "status_checks list failed");
        Error::Database(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_pool, initialize_schema};
    use crate::models::{StatusCheck, StatusCheckCreate};

    async fn setup_test_db() -> DbPool {
        let pool = init_pool(":memory:").await.unwrap();
        initialize_schema(&pool).await.unwrap();
        pool
    }

    fn check(client_name: &str) -> StatusCheck {
        StatusCheck::from_create(StatusCheckCreate {
            client_name: client_name.to_string(),
        })
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let pool = setup_test_db().await;

        let first = check("client-a");
        let second = check("client-b");
        insert_status_check(&pool, &first).await.unwrap();
        insert_status_check(&pool, &second).await.unwrap();

        let checks = list_status_checks(&pool, 1000).await.unwrap();
        assert_eq!(checks.len(), 2);
        // Insertion order
        assert_eq!(checks[0].id, first.id);
        assert_eq!(checks[1].id, second.id);
        assert_eq!(checks[0].client_name, "client-a");
        assert_eq!(checks[0].timestamp, first.timestamp);
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let pool = setup_test_db().await;
        let checks = list_status_checks(&pool, 1000).await.unwrap();
        assert!(checks.is_empty());
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let pool = setup_test_db().await;

        for i in 0..5 {
            insert_status_check(&pool, &check(&format!("client-{}", i)))
                .await
                .unwrap();
        }

        let checks = list_status_checks(&pool, 3).await.unwrap();
        assert_eq!(checks.len(), 3);
        assert_eq!(checks[0].client_name, "client-0");
    }
}
