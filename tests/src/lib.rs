pub mod models;

/// Builds a `Db` builder with each listed model registered.
#[macro_export]
macro_rules! models {
    ( $( $model:ty ),* $(,)? ) => {{
        let mut builder = rowboat::Db::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}

/// Connects an in-memory SQLite gateway and creates the registered tables.
pub async fn setup(builder: &mut rowboat::db::Builder) -> rowboat::Db {
    let db = builder
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    db.create_tables().await.expect("create tables");
    db
}
