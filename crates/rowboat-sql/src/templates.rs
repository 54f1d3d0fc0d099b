use crate::writer::Writer;

use rowboat_core::{schema::ModelSchema, Field, Flavor};

/// The statements generated for a model when it is registered.
///
/// Placeholders are rendered for the target dialect, column order follows
/// the model's declaration order, and the `insert`/`update`/`delete`
/// argument positions line up with how the gateway binds values: non-key
/// values first, the key last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    /// `SELECT key, fields.. FROM table`, no WHERE clause
    pub select: String,
    /// `INSERT INTO table (fields.., key) VALUES (..)`
    pub insert: String,
    /// `UPDATE table SET field = .., .. WHERE key = ..`
    pub update: String,
    /// `DELETE FROM table WHERE key = ..`
    pub delete: String,
}

impl Templates {
    pub fn generate(schema: &ModelSchema, flavor: Flavor) -> Templates {
        Templates {
            select: select(schema, flavor),
            insert: insert(schema, flavor),
            update: update(schema, flavor),
            delete: delete(schema, flavor),
        }
    }
}

fn key_column(schema: &ModelSchema) -> &str {
    schema
        .primary_key_field()
        .name
        .as_deref()
        .unwrap_or_else(|| schema.primary_key())
}

fn column<'a>(attr: &'a str, field: &'a Field) -> &'a str {
    field.name.as_deref().unwrap_or(attr)
}

fn select(schema: &ModelSchema, flavor: Flavor) -> String {
    let mut w = Writer::new(flavor);
    w.push("SELECT ");
    w.ident(key_column(schema));
    for (attr, field) in schema.non_key_fields() {
        w.push(", ");
        w.ident(column(attr, field));
    }
    w.push(" FROM ");
    w.ident(schema.table());
    w.into_sql()
}

fn insert(schema: &ModelSchema, flavor: Flavor) -> String {
    let mut w = Writer::new(flavor);
    w.push("INSERT INTO ");
    w.ident(schema.table());
    w.push(" (");
    for (attr, field) in schema.non_key_fields() {
        w.ident(column(attr, field));
        w.push(", ");
    }
    w.ident(key_column(schema));
    w.push(") VALUES (");
    let values = schema.non_key_fields().count() + 1;
    for i in 0..values {
        if i > 0 {
            w.push(", ");
        }
        w.placeholder();
    }
    w.push(")");
    w.into_sql()
}

fn update(schema: &ModelSchema, flavor: Flavor) -> String {
    let mut w = Writer::new(flavor);
    w.push("UPDATE ");
    w.ident(schema.table());
    w.push(" SET ");
    for (i, (attr, field)) in schema.non_key_fields().enumerate() {
        if i > 0 {
            w.push(", ");
        }
        w.ident(column(attr, field));
        w.push(" = ");
        w.placeholder();
    }
    w.push(" WHERE ");
    w.ident(key_column(schema));
    w.push(" = ");
    w.placeholder();
    w.into_sql()
}

fn delete(schema: &ModelSchema, flavor: Flavor) -> String {
    let mut w = Writer::new(flavor);
    w.push("DELETE FROM ");
    w.ident(schema.table());
    w.push(" WHERE ");
    w.ident(key_column(schema));
    w.push(" = ");
    w.placeholder();
    w.into_sql()
}

/// Renders the CREATE TABLE statement for a model.
///
/// The column type comes verbatim from each field descriptor. Only the key
/// column is NOT NULL; an unset field with no default is stored as NULL.
pub fn create_table(schema: &ModelSchema, flavor: Flavor) -> String {
    let mut w = Writer::new(flavor);
    w.push("CREATE TABLE ");
    w.ident(schema.table());
    w.push(" (\n");
    for (attr, field) in schema.fields() {
        w.push("    ");
        w.ident(column(attr, field));
        w.push(" ");
        w.push(&field.column_type);
        if field.primary_key {
            w.push(" NOT NULL");
        }
        w.push(",\n");
    }
    w.push("    PRIMARY KEY (");
    w.ident(key_column(schema));
    w.push(")\n);");
    w.into_sql()
}
