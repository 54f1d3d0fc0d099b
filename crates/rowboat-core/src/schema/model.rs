use super::Field;
use crate::{Error, Result};

use indexmap::IndexMap;

/// A model definition: the model name, its table, and its fields in
/// declaration order.
///
/// Definitions are plain data. Registration validates them into a
/// [`ModelSchema`].
#[derive(Debug, Clone)]
pub struct ModelDef {
    name: &'static str,
    table: String,
    fields: Vec<(String, Field)>,
}

impl ModelDef {
    /// Starts a definition for the model `name`, mapped to `table`.
    pub fn new(name: &'static str, table: impl Into<String>) -> ModelDef {
        ModelDef {
            name,
            table: table.into(),
            fields: Vec::new(),
        }
    }

    /// Declares a field under the attribute `attr`. Declaration order is
    /// preserved and drives column order in generated SQL.
    pub fn field(mut self, attr: impl Into<String>, field: Field) -> ModelDef {
        self.fields.push((attr.into(), field));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(attr, field)| (attr.as_str(), field))
    }
}

/// A validated model schema.
///
/// Guarantees exactly one primary-key field, unique attribute names, and a
/// resolved column name on every field.
#[derive(Debug, Clone)]
pub struct ModelSchema {
    name: &'static str,
    table: String,
    primary_key: String,
    fields: IndexMap<String, Field>,
}

impl ModelSchema {
    pub fn from_def(def: ModelDef) -> Result<ModelSchema> {
        let ModelDef {
            name,
            table,
            fields: declared,
        } = def;

        let mut fields = IndexMap::with_capacity(declared.len());
        let mut primary_key: Option<String> = None;

        for (attr, mut field) in declared {
            if field.name.is_none() {
                field.name = Some(attr.clone());
            }
            tracing::trace!(model = name, attr = %attr, field = %field, "found mapping");

            if field.primary_key {
                if primary_key.is_some() {
                    return Err(Error::duplicate_primary_key(name, attr));
                }
                primary_key = Some(attr.clone());
            }

            if fields.insert(attr.clone(), field).is_some() {
                return Err(Error::validation(format!(
                    "field {attr} declared more than once on model {name}"
                )));
            }
        }

        let Some(primary_key) = primary_key else {
            return Err(Error::missing_primary_key(name));
        };

        tracing::debug!(
            model = name,
            table = %table,
            primary_key = %primary_key,
            "found model"
        );

        Ok(ModelSchema {
            name,
            table,
            primary_key,
            fields,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Attribute name of the primary-key field.
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    /// The primary-key descriptor.
    pub fn primary_key_field(&self) -> &Field {
        &self.fields[self.primary_key.as_str()]
    }

    /// All fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(attr, field)| (attr.as_str(), field))
    }

    /// Non-key fields in declaration order.
    pub fn non_key_fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields().filter(|(_, field)| !field.primary_key)
    }

    /// Looks up a field by attribute name.
    pub fn field(&self, attr: &str) -> Option<&Field> {
        self.fields.get(attr)
    }

    /// Resolved column name for `attr`.
    pub fn column(&self, attr: &str) -> Option<&str> {
        self.fields.get(attr).and_then(|field| field.name.as_deref())
    }
}
