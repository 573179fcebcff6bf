//! Subscriber operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Subscriber;

/// Insert a subscriber, or replace the location and timestamp of an existing one.
///
/// The phone number is the primary key, so re-subscribing never creates a
/// second row. `subscribed_at` is set to the current time by SQLite in the
/// same statement.
pub async fn upsert(pool: &SqlitePool, phone_number: &str, location: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO subscribers (phone_number, location, subscribed_at)
        VALUES (?, ?, CAST(strftime('%s', 'now') AS INTEGER))
        ON CONFLICT(phone_number) DO UPDATE SET
            location = excluded.location,
            subscribed_at = excluded.subscribed_at
        "#,
    )
    .bind(phone_number)
    .bind(location)
    .execute(pool)
    .await?;

    tracing::debug!(phone_number, location, "Subscriber upserted");
    Ok(())
}

/// Get a subscriber by phone number.
pub async fn get(pool: &SqlitePool, phone_number: &str) -> Result<Subscriber> {
    sqlx::query_as::<_, Subscriber>(
        r#"
        SELECT phone_number, location, subscribed_at
        FROM subscribers
        WHERE phone_number = ?
        "#,
    )
    .bind(phone_number)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Subscriber",
        id: phone_number.to_string(),
    })
}

/// List every subscriber. No ordering is guaranteed.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Subscriber>> {
    let subscribers = sqlx::query_as::<_, Subscriber>(
        r#"
        SELECT phone_number, location, subscribed_at
        FROM subscribers
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(subscribers)
}

/// Count subscribers.
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM subscribers
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_upsert_then_list() {
        let db = test_db().await;

        upsert(db.pool(), "+15550001", "Ludhiana").await.unwrap();
        upsert(db.pool(), "+15550002", "Amritsar").await.unwrap();

        let mut subscribers = list_all(db.pool()).await.unwrap();
        subscribers.sort_by(|a, b| a.phone_number.cmp(&b.phone_number));

        assert_eq!(subscribers.len(), 2);
        assert_eq!(subscribers[0].phone_number, "+15550001");
        assert_eq!(subscribers[0].location, "Ludhiana");
        assert!(subscribers[0].subscribed_at > 0);
        assert_eq!(subscribers[1].location, "Amritsar");
    }

    #[tokio::test]
    async fn test_resubscribe_replaces_location() {
        let db = test_db().await;

        upsert(db.pool(), "+15550001", "Ludhiana").await.unwrap();
        upsert(db.pool(), "+15550001", "Patiala").await.unwrap();
        upsert(db.pool(), "+15550001", "Patiala").await.unwrap();

        let subscribers = list_all(db.pool()).await.unwrap();
        assert_eq!(subscribers.len(), 1);
        assert_eq!(subscribers[0].location, "Patiala");
        assert_eq!(count(db.pool()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_subscriber() {
        let db = test_db().await;

        let result = get(db.pool(), "+15559999").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_upserts_and_scans() {
        let db = Database::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        db.migrate().await.unwrap();

        let writes = (0..20).map(|i| {
            let pool = db.pool().clone();
            async move {
                let number = format!("+1555{:04}", i % 10);
                upsert(&pool, &number, &format!("loc-{}", i)).await
            }
        });
        let reads = (0..5).map(|_| {
            let pool = db.pool().clone();
            async move { list_all(&pool).await.map(|_| ()) }
        });

        let (writes, reads) = futures::join!(
            futures::future::join_all(writes),
            futures::future::join_all(reads)
        );
        assert!(writes.iter().all(|r| r.is_ok()));
        assert!(reads.iter().all(|r| r.is_ok()));

        assert_eq!(count(db.pool()).await.unwrap(), 10);
    }
}
