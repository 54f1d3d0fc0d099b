//! The original registration flow looked an email up and inserted when
//! nothing came back. Nothing in storage enforces uniqueness, so two
//! interleaved registrations can both pass the lookup and both insert.
//! These tests document that behavior rather than masking it.

use rowboat::Query;
use tests::models::User;
use tests::{models, setup};

#[tokio::test]
async fn two_saves_with_one_email_both_succeed() {
    let db = setup(&mut models!(User)).await;

    let mut first = User {
        email: Some("shared@example.com".into()),
        ..Default::default()
    };
    let mut second = User {
        email: Some("shared@example.com".into()),
        ..Default::default()
    };

    db.save(&mut first).await.unwrap();
    db.save(&mut second).await.unwrap();
    assert_ne!(first.id, second.id);

    let matches: Vec<User> = db
        .find_all::<User>(Query::new().filter("email = ?").bind("shared@example.com"))
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(matches.len(), 2);
}

#[tokio::test]
async fn check_then_insert_races_are_not_detected() {
    let db = setup(&mut models!(User)).await;

    // Both tasks run the lookup before either inserts, the way two
    // concurrent registration requests would.
    let existing = db
        .find_all::<User>(Query::new().filter("email = ?").bind("late@example.com"))
        .await
        .unwrap();
    assert_eq!(existing.remaining(), 0);

    let mut racer = User {
        email: Some("late@example.com".into()),
        ..Default::default()
    };
    db.save(&mut racer).await.unwrap();

    // The check that already happened is stale, and a second insert
    // sails through.
    let mut other = User {
        email: Some("late@example.com".into()),
        ..Default::default()
    };
    db.save(&mut other).await.unwrap();
}
