//! Integration tests for the seeded admin account.

mod common;

use boxoffice_server::auth::password;
use boxoffice_server::store::admin;

#[tokio::test]
async fn seed_creates_the_account_once() {
    let db = common::setup().await;

    admin::seed(&db.pool, "admin", "admin123").await.unwrap();
    // A second startup must not duplicate or overwrite the record.
    admin::seed(&db.pool, "admin", "different-password")
        .await
        .unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admins")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let account = admin::find_by_username(&db.pool, "admin")
        .await
        .unwrap()
        .unwrap();
    assert!(password::verify_password("admin123", &account.password_hash).unwrap());
}

#[tokio::test]
async fn seeded_password_verifies_and_wrong_password_does_not() {
    let db = common::setup().await;
    admin::seed(&db.pool, "admin", "admin123").await.unwrap();

    let account = admin::find_by_username(&db.pool, "admin")
        .await
        .unwrap()
        .unwrap();

    assert!(password::verify_password("admin123", &account.password_hash).unwrap());
    assert!(!password::verify_password("wrong", &account.password_hash).unwrap());
}

#[tokio::test]
async fn unknown_username_is_absent() {
    let db = common::setup().await;
    admin::seed(&db.pool, "admin", "admin123").await.unwrap();

    assert!(admin::find_by_username(&db.pool, "root")
        .await
        .unwrap()
        .is_none());
}
