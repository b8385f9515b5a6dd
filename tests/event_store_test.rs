//! Integration tests for event administration against the store.

mod common;

use boxoffice_server::models::EventFields;
use boxoffice_server::store::{bookings, events};
use boxoffice_server::utils::error::AppError;
use uuid::Uuid;

#[tokio::test]
async fn list_orders_events_by_date_ascending() {
    let db = common::setup().await;

    events::create(&db.pool, &common::event_fields("Third", 21, 10))
        .await
        .unwrap();
    events::create(&db.pool, &common::event_fields("First", 3, 10))
        .await
        .unwrap();
    events::create(&db.pool, &common::event_fields("Second", 12, 10))
        .await
        .unwrap();

    let listed = events::list(&db.pool).await.unwrap();
    let titles: Vec<&str> = listed.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
}

#[tokio::test]
async fn create_rejects_negative_inventory_and_blank_fields() {
    let db = common::setup().await;

    let negative = common::event_fields("Bad", 1, -1);
    assert!(matches!(
        events::create(&db.pool, &negative).await,
        Err(AppError::Validation(_))
    ));

    let blank = EventFields {
        title: "   ".into(),
        ..common::event_fields("Blank", 1, 5)
    };
    assert!(matches!(
        events::create(&db.pool, &blank).await,
        Err(AppError::Validation(_))
    ));

    assert!(events::list(&db.pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_every_mutable_field() {
    let db = common::setup().await;
    let event = common::seed_event(&db.pool, "Before", 10).await;

    let replacement = EventFields {
        title: "After".into(),
        description: None,
        date: common::event_date(28),
        location: "New Venue".into(),
        available_tickets: 42,
    };
    events::update(&db.pool, event.id, &replacement).await.unwrap();

    let updated = events::find(&db.pool, event.id).await.unwrap().unwrap();
    assert_eq!(updated.title, "After");
    assert_eq!(updated.description, None);
    assert_eq!(updated.date, common::event_date(28));
    assert_eq!(updated.location, "New Venue");
    assert_eq!(updated.available_tickets, 42);
}

#[tokio::test]
async fn update_of_unknown_event_is_not_found() {
    let db = common::setup().await;

    let result = events::update(&db.pool, Uuid::new_v4(), &common::event_fields("X", 1, 5)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_removes_event_from_listing() {
    let db = common::setup().await;
    let keep = common::seed_event(&db.pool, "Keep", 10).await;
    let doomed = common::seed_event(&db.pool, "Drop", 10).await;

    events::delete(&db.pool, doomed.id).await.unwrap();

    let listed = events::list(&db.pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);
    assert!(events::find(&db.pool, doomed.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_of_unknown_event_is_not_found() {
    let db = common::setup().await;

    let result = events::delete(&db.pool, Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_leaves_prior_bookings_orphaned_and_unchanged() {
    let db = common::setup().await;
    let event = common::seed_event(&db.pool, "Doomed", 10).await;

    let booking = bookings::book(&db.pool, event.id, "Ada", "ada@example.com", 2)
        .await
        .unwrap();

    events::delete(&db.pool, event.id).await.unwrap();

    // The booking row survives the event, untouched.
    let orphans = bookings::list_for_event(&db.pool, event.id).await.unwrap();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].id, booking.id);
    assert_eq!(orphans[0].tickets, 2);
    assert_eq!(orphans[0].name, "Ada");
}
