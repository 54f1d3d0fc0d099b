use tests::models;
use tests::models::User;

#[tokio::test]
async fn file_backed_database_persists_across_gateways() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blog.sqlite");
    let url = format!("sqlite:{}", path.display());

    let id = {
        let db = models!(User).connect(&url).await.unwrap();
        db.create_tables().await.unwrap();

        let mut user = User {
            email: Some("durable@example.com".into()),
            ..Default::default()
        };
        db.save(&mut user).await.unwrap();
        db.close();
        user.id.unwrap()
    };

    let db = models!(User).connect(&url).await.unwrap();
    let found = db
        .find::<User>(id.as_str())
        .await
        .unwrap()
        .expect("row survives reopening the file");
    assert_eq!(found.email.as_deref(), Some("durable@example.com"));
}
