//! The blog's model declarations: users, posts, and comments.

use rowboat::{Error, Field, FromValue, Model, ModelDef, Result, Row, Value};

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Generates a chronologically sortable row id: a zero-padded millisecond
/// timestamp, a UUIDv4 in hex, and a constant `000` tail. 50 characters,
/// matching the key columns' `varchar(50)`.
pub fn next_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0);
    format!("{millis:015}{}000", Uuid::new_v4().simple())
}

/// Timestamps are stored as float seconds since the epoch.
pub fn now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    pub id: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub admin: Option<bool>,
    pub name: Option<String>,
    pub image: Option<String>,
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
                    .default_fn(next_id),
            )
            .field("email", Field::string().column_type("varchar(50)"))
            .field("password", Field::string().column_type("varchar(50)"))
            .field("admin", Field::boolean())
            .field("name", Field::string().column_type("varchar(50)"))
            .field("image", Field::string().column_type("varchar(500)"))
            .field("created_at", Field::float().default_fn(now))
    }

    fn load(row: &Row) -> Result<Self> {
        Ok(User {
            id: row.get("id")?,
            email: row.get("email")?,
            password: row.get("password")?,
            admin: row.get("admin")?,
            name: row.get("name")?,
            image: row.get("image")?,
            created_at: row.get("created_at")?,
        })
    }

    fn get(&self, field: &str) -> Result<Value> {
        match field {
            "id" => Ok(self.id.clone().into()),
            "email" => Ok(self.email.clone().into()),
            "password" => Ok(self.password.clone().into()),
            "admin" => Ok(self.admin.into()),
            "name" => Ok(self.name.clone().into()),
            "image" => Ok(self.image.clone().into()),
            "created_at" => Ok(self.created_at.into()),
            _ => Err(Error::unknown_field("User", field)),
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "id" => self.id = FromValue::from_value(value)?,
            "email" => self.email = FromValue::from_value(value)?,
            "password" => self.password = FromValue::from_value(value)?,
            "admin" => self.admin = FromValue::from_value(value)?,
            "name" => self.name = FromValue::from_value(value)?,
            "image" => self.image = FromValue::from_value(value)?,
            "created_at" => self.created_at = FromValue::from_value(value)?,
            _ => return Err(Error::unknown_field("User", field)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blog {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_image: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<f64>,
}

impl Model for Blog {
    fn definition() -> ModelDef {
        ModelDef::new("Blog", "blogs")
            .field(
                "id",
                Field::string()
                    .column_type("varchar(50)")
                    .primary_key()
                    .default_fn(next_id),
            )
            .field("user_id", Field::string().column_type("varchar(50)"))
            .field("user_name", Field::string().column_type("varchar(50)"))
            .field("user_image", Field::string().column_type("varchar(500)"))
            .field("title", Field::string().column_type("varchar(50)"))
            .field("summary", Field::string().column_type("varchar(200)"))
            .field("content", Field::text())
            .field("created_at", Field::float().default_fn(now))
    }

    fn load(row: &Row) -> Result<Self> {
        Ok(Blog {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            user_name: row.get("user_name")?,
            user_image: row.get("user_image")?,
            title: row.get("title")?,
            summary: row.get("summary")?,
            content: row.get("content")?,
            created_at: row.get("created_at")?,
        })
    }

    fn get(&self, field: &str) -> Result<Value> {
        match field {
            "id" => Ok(self.id.clone().into()),
            "user_id" => Ok(self.user_id.clone().into()),
            "user_name" => Ok(self.user_name.clone().into()),
            "user_image" => Ok(self.user_image.clone().into()),
            "title" => Ok(self.title.clone().into()),
            "summary" => Ok(self.summary.clone().into()),
            "content" => Ok(self.content.clone().into()),
            "created_at" => Ok(self.created_at.into()),
            _ => Err(Error::unknown_field("Blog", field)),
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "id" => self.id = FromValue::from_value(value)?,
            "user_id" => self.user_id = FromValue::from_value(value)?,
            "user_name" => self.user_name = FromValue::from_value(value)?,
            "user_image" => self.user_image = FromValue::from_value(value)?,
            "title" => self.title = FromValue::from_value(value)?,
            "summary" => self.summary = FromValue::from_value(value)?,
            "content" => self.content = FromValue::from_value(value)?,
            "created_at" => self.created_at = FromValue::from_value(value)?,
            _ => return Err(Error::unknown_field("Blog", field)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comment {
    pub id: Option<String>,
    pub blog_id: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_image: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<f64>,
}

impl Model for Comment {
    fn definition() -> ModelDef {
        ModelDef::new("Comment", "comments")
            .field(
                "id",
                Field::string()
                    .column_type("varchar(50)")
                    .primary_key()
                    .default_fn(next_id),
            )
            .field("blog_id", Field::string().column_type("varchar(50)"))
            .field("user_id", Field::string().column_type("varchar(50)"))
            .field("user_name", Field::string().column_type("varchar(50)"))
            .field("user_image", Field::string().column_type("varchar(500)"))
            .field("content", Field::text())
            .field("created_at", Field::float().default_fn(now))
    }

    fn load(row: &Row) -> Result<Self> {
        Ok(Comment {
            id: row.get("id")?,
            blog_id: row.get("blog_id")?,
            user_id: row.get("user_id")?,
            user_name: row.get("user_name")?,
            user_image: row.get("user_image")?,
            content: row.get("content")?,
            created_at: row.get("created_at")?,
        })
    }

    fn get(&self, field: &str) -> Result<Value> {
        match field {
            "id" => Ok(self.id.clone().into()),
            "blog_id" => Ok(self.blog_id.clone().into()),
            "user_id" => Ok(self.user_id.clone().into()),
            "user_name" => Ok(self.user_name.clone().into()),
            "user_image" => Ok(self.user_image.clone().into()),
            "content" => Ok(self.content.clone().into()),
            "created_at" => Ok(self.created_at.into()),
            _ => Err(Error::unknown_field("Comment", field)),
        }
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        match field {
            "id" => self.id = FromValue::from_value(value)?,
            "blog_id" => self.blog_id = FromValue::from_value(value)?,
            "user_id" => self.user_id = FromValue::from_value(value)?,
            "user_name" => self.user_name = FromValue::from_value(value)?,
            "user_image" => self.user_image = FromValue::from_value(value)?,
            "content" => self.content = FromValue::from_value(value)?,
            "created_at" => self.created_at = FromValue::from_value(value)?,
            _ => return Err(Error::unknown_field("Comment", field)),
        }
        Ok(())
    }
}
