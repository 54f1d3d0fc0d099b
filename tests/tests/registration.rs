use rowboat::{Error, Field, Model, ModelDef, Result, Row, Value};
use tests::models;

struct NoKey;

impl Model for NoKey {
    fn definition() -> ModelDef {
        ModelDef::new("NoKey", "no_keys").field("email", Field::string())
    }

    fn load(_row: &Row) -> Result<Self> {
        Ok(NoKey)
    }

    fn get(&self, field: &str) -> Result<Value> {
        Err(Error::unknown_field("NoKey", field))
    }

    fn set(&mut self, field: &str, _value: Value) -> Result<()> {
        Err(Error::unknown_field("NoKey", field))
    }
}

struct TwoKeys;

impl Model for TwoKeys {
    fn definition() -> ModelDef {
        ModelDef::new("TwoKeys", "two_keys")
            .field("serial", Field::integer().primary_key())
            .field("alias", Field::string().primary_key())
    }

    fn load(_row: &Row) -> Result<Self> {
        Ok(TwoKeys)
    }

    fn get(&self, field: &str) -> Result<Value> {
        Err(Error::unknown_field("TwoKeys", field))
    }

    fn set(&mut self, field: &str, _value: Value) -> Result<()> {
        Err(Error::unknown_field("TwoKeys", field))
    }
}

#[tokio::test]
async fn missing_primary_key_fails_the_build() {
    let err = models!(NoKey)
        .connect("sqlite::memory:")
        .await
        .unwrap_err();
    assert!(err.is_missing_primary_key());
    assert_eq!(err.to_string(), "model NoKey declares no primary-key field");
}

#[tokio::test]
async fn duplicate_primary_key_fails_the_build() {
    let err = models!(TwoKeys)
        .connect("sqlite::memory:")
        .await
        .unwrap_err();
    assert!(err.is_duplicate_primary_key());
    assert_eq!(
        err.to_string(),
        "duplicate primary key for field alias on model TwoKeys"
    );
}

#[tokio::test]
async fn definitions_are_checked_before_connecting() {
    // The URL points into a directory that does not exist; a definition
    // error still wins because validation happens before the pool opens
    // anything.
    let err = models!(NoKey)
        .connect("sqlite:/this/path/does/not/exist/blog.sqlite")
        .await
        .unwrap_err();
    assert!(err.is_missing_primary_key());
}

#[tokio::test]
async fn registering_a_model_twice_fails_the_build() {
    let mut builder = rowboat::Db::builder();
    builder
        .register::<models::User>()
        .register::<models::User>();

    let err = builder.connect("sqlite::memory:").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "model User registered more than once");
}

#[tokio::test]
async fn operations_on_unregistered_models_fail() {
    let db = tests::setup(&mut models!(models::User)).await;

    let err = db.find::<models::Post>("p-0001").await.unwrap_err();
    assert!(err.is_unregistered_model());
    assert_eq!(err.to_string(), "model Post is not registered");
}
