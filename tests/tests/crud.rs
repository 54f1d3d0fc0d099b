use pretty_assertions::assert_eq;
use tests::models::User;
use tests::{models, setup};

#[tokio::test]
async fn save_generates_the_key_and_round_trips() {
    let db = setup(&mut models!(User)).await;

    let mut user = User {
        email: Some("john@example.com".into()),
        bio: Some("oarsman".into()),
        ..Default::default()
    };
    db.save(&mut user).await.unwrap();

    let id = user.id.clone().expect("save resolves the generated key");
    let found = db
        .find::<User>(id.as_str())
        .await
        .unwrap()
        .expect("saved row exists");

    assert_eq!(found, user);
    assert_eq!(found.admin, Some(false));
    assert_eq!(found.visits, Some(0));
}

#[tokio::test]
async fn find_for_an_absent_key_is_none() {
    let db = setup(&mut models!(User)).await;
    assert!(db.find::<User>("u-9999").await.unwrap().is_none());
}

#[tokio::test]
async fn update_overwrites_the_stored_row() {
    let db = setup(&mut models!(User)).await;

    let mut user = User {
        email: Some("ada@example.com".into()),
        bio: Some("original".into()),
        ..Default::default()
    };
    db.save(&mut user).await.unwrap();

    user.email = Some("countess@example.com".into());
    user.bio = None;
    db.update(&user).await.unwrap();

    let found = db
        .find::<User>(user.id.clone().unwrap().as_str())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.email.as_deref(), Some("countess@example.com"));
    // Update binds values as they are; the unset bio became NULL instead
    // of resolving a default.
    assert_eq!(found.bio, None);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let db = setup(&mut models!(User)).await;

    let mut user = User {
        email: Some("gone@example.com".into()),
        ..Default::default()
    };
    db.save(&mut user).await.unwrap();
    let id = user.id.clone().unwrap();

    db.delete(&user).await.unwrap();
    assert!(db.find::<User>(id.as_str()).await.unwrap().is_none());

    // A second delete affects zero rows; the default mode only logs.
    db.delete(&user).await.unwrap();
}

#[tokio::test]
async fn find_all_returns_every_row() {
    let db = setup(&mut models!(User)).await;

    for n in 0..3 {
        let mut user = User {
            email: Some(format!("crew-{n}@example.com")),
            ..Default::default()
        };
        db.save(&mut user).await.unwrap();
    }

    let all: Vec<User> = db
        .find_all::<User>(rowboat::Query::new())
        .await
        .unwrap()
        .collect()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn saving_the_same_instance_twice_hits_the_key_constraint() {
    let db = setup(&mut models!(User)).await;

    let mut user = User {
        email: Some("once@example.com".into()),
        ..Default::default()
    };
    db.save(&mut user).await.unwrap();

    // The generated key resolved on the first save and is not regenerated,
    // so the second insert collides with the stored row.
    let err = db.save(&mut user).await.unwrap_err();
    assert!(err.is_driver_operation_failed());
}
