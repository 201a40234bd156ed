//! Tests for database initialization

use encore_common::db::init_database;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("encore.db");

    let result = init_database(&db_path).await;

    assert!(
        result.is_ok(),
        "Database initialization failed: {:?}",
        result.err()
    );
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("encore.db");

    let pool1 = init_database(&db_path).await;
    assert!(pool1.is_ok());
    drop(pool1);

    // Open database second time (should succeed)
    let pool2 = init_database(&db_path).await;
    assert!(
        pool2.is_ok(),
        "Failed to open existing database: {:?}",
        pool2.err()
    );
}

#[tokio::test]
async fn test_schema_tables_created() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("encore.db");

    let pool = init_database(&db_path).await.unwrap();

    for table in ["venues", "artists", "shows"] {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(count, 1, "Expected table '{}' to exist", table);
    }
}

#[tokio::test]
async fn test_foreign_keys_enforced() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("encore.db");

    let pool = init_database(&db_path).await.unwrap();

    let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(enabled, 1, "foreign_keys pragma should be on");

    // A show pointing at nothing must be rejected
    let result = sqlx::query(
        "INSERT INTO shows (guid, artist_id, venue_id, start_time)
         VALUES ('s1', 'no-such-artist', 'no-such-venue', '2030-01-01 20:00:00')",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err(), "Dangling show insert should fail");
}
