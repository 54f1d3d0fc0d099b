//! Shared model declarations used across the behavioral tests.

use rowboat::{Error, Field, FromValue, Model, ModelDef, Result, Row, Value};

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_USER: AtomicU64 = AtomicU64::new(1);
static NEXT_POST: AtomicU64 = AtomicU64::new(1);

fn next_user_id() -> String {
    format!("u-{:04}", NEXT_USER.fetch_add(1, Ordering::Relaxed))
}

fn next_post_id() -> String {
    format!("p-{:04}", NEXT_POST.fetch_add(1, Ordering::Relaxed))
}

fn stamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}

/// Exercises every field kind: a generated string key, plain strings, a
/// boolean and an integer with built-in defaults, a text field with none,
/// and a factory-defaulted float.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: Option<String>,
    pub email: Option<String>,
    pub admin: Option<bool>,
    pub visits: Option<i64>,
    pub bio: Option<String>,
    pub created_at: Option<f64>,
}

impl Model for User {
    fn definition() -> ModelDef {
        ModelDef::new("User", "users")
            .field(
                "id",
                Field::string()
                    .column_type("varchar(50)")
                    .primary_key()
                    .default_fn(next_user_id),
            )
            .field("email", Field::string())
            .field("admin", Field::boolean())
            .field("visits", Field::integer())
            .field("bio", Field::text())
            .field("created_at", Field::float().default_fn(stamp))
    }

    fn load(row: &Row) -> Result<Self> {
        Ok(User {
            id: row.get("id")?,
            email: row.get("email")?,
            admin: row.get("admin")?,
            visits: row.get("visits")?,
            bio: row.get("bio")?,
            created_at: row.get("created_at")?,
        })
    }

    fn get(&self, field: &str) -> Result<Value> {
        match field {
            "id" => Ok(self.id.clone().into()),
            "email" => Ok(self.email.clone().into()),
            "admin" => Ok(self.admin.into()),
            "visits" => Ok(self.visits.into()),
            "bio" => Ok(self.bio.clone().into()),
            "created_at" => Ok(self.created_at.into()),
            _ => Err(Error::unknown_field("User", field)),
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "id" => self.id = FromValue::from_value(value)?,
            "email" => self.email = FromValue::from_value(value)?,
            "admin" => self.admin = FromValue::from_value(value)?,
            "visits" => self.visits = FromValue::from_value(value)?,
            "bio" => self.bio = FromValue::from_value(value)?,
            "created_at" => self.created_at = FromValue::from_value(value)?,
            _ => return Err(Error::unknown_field("User", field)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub title: Option<String>,
}

impl Model for Post {
    fn definition() -> ModelDef {
        ModelDef::new("Post", "posts")
            .field(
                "id",
                Field::string()
                    .column_type("varchar(50)")
                    .primary_key()
                    .default_fn(next_post_id),
            )
            .field("user_id", Field::string().column_type("varchar(50)"))
            .field("title", Field::string())
    }

    fn load(row: &Row) -> Result<Self> {
        Ok(Post {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            title: row.get("title")?,
        })
    }

    fn get(&self, field: &str) -> Result<Value> {
        match field {
            "id" => Ok(self.id.clone().into()),
            "user_id" => Ok(self.user_id.clone().into()),
            "title" => Ok(self.title.clone().into()),
            _ => Err(Error::unknown_field("Post", field)),
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "id" => self.id = FromValue::from_value(value)?,
            "user_id" => self.user_id = FromValue::from_value(value)?,
            "title" => self.title = FromValue::from_value(value)?,
            _ => return Err(Error::unknown_field("Post", field)),
        }
        Ok(())
    }
}
