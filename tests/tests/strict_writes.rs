use tests::models::User;
use tests::{models, setup};

#[tokio::test]
async fn strict_mode_turns_zero_affected_rows_into_an_error() {
    let mut builder = models!(User);
    builder.strict_writes(true);
    let db = setup(&mut builder).await;

    let mut user = User {
        email: Some("strict@example.com".into()),
        ..Default::default()
    };
    db.save(&mut user).await.unwrap();
    db.delete(&user).await.unwrap();

    let err = db.delete(&user).await.unwrap_err();
    assert!(err.is_row_count());
    assert_eq!(err.to_string(), "expected 1 row affected, got 0");
}

#[tokio::test]
async fn strict_mode_catches_updates_of_absent_rows() {
    let mut builder = models!(User);
    builder.strict_writes(true);
    let db = setup(&mut builder).await;

    let user = User {
        id: Some("u-never-saved".into()),
        email: Some("ghost@example.com".into()),
        ..Default::default()
    };

    let err = db.update(&user).await.unwrap_err();
    assert!(err.is_row_count());
}

#[tokio::test]
async fn default_mode_lets_zero_affected_rows_pass() {
    let db = setup(&mut models!(User)).await;

    let user = User {
        id: Some("u-never-saved-either".into()),
        email: Some("ghost@example.com".into()),
        ..Default::default()
    };

    // Both operations affect zero rows; without strict writes that is
    // logged, not raised.
    db.update(&user).await.unwrap();
    db.delete(&user).await.unwrap();
}
