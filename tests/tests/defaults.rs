use rowboat::Model;
use tests::models::User;
use tests::{models, setup};

#[tokio::test]
async fn save_materializes_defaults_on_the_instance() {
    let db = setup(&mut models!(User)).await;

    let mut user = User {
        email: Some("rower@example.com".into()),
        ..Default::default()
    };
    assert_eq!(user.admin, None);
    assert_eq!(user.visits, None);

    db.save(&mut user).await.unwrap();

    // Built-in defaults for the boolean and integer kinds, the factory for
    // the key and the timestamp. The text field has no default and stays
    // unset.
    assert!(user.id.is_some());
    assert_eq!(user.admin, Some(false));
    assert_eq!(user.visits, Some(0));
    assert!(user.created_at.is_some());
    assert_eq!(user.bio, None);
}

#[tokio::test]
async fn unset_fields_without_defaults_store_null() {
    let db = setup(&mut models!(User)).await;

    let mut user = User::default();
    db.save(&mut user).await.unwrap();

    let found = db
        .find::<User>(user.id.clone().unwrap().as_str())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.email, None);
    assert_eq!(found.bio, None);
}

#[tokio::test]
async fn value_or_default_is_idempotent_across_saves() {
    let db = setup(&mut models!(User)).await;

    let mut user = User {
        email: Some("stable@example.com".into()),
        ..Default::default()
    };
    db.save(&mut user).await.unwrap();

    let id_after_save = user.id.clone();
    let stamp_after_save = user.created_at;

    // Resolving again returns the stored values; the factories do not run
    // a second time.
    let resolved_id = user.value_or_default("id").unwrap();
    let resolved_stamp = user.value_or_default("created_at").unwrap();

    assert_eq!(resolved_id, id_after_save.into());
    assert_eq!(resolved_stamp, stamp_after_save.into());
}

#[tokio::test]
async fn explicit_values_survive_defaulting() {
    let db = setup(&mut models!(User)).await;

    let mut user = User {
        email: Some("admin@example.com".into()),
        admin: Some(true),
        visits: Some(41),
        ..Default::default()
    };
    db.save(&mut user).await.unwrap();

    let found = db
        .find::<User>(user.id.clone().unwrap().as_str())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.admin, Some(true));
    assert_eq!(found.visits, Some(41));
}
