use crate::Model;
use rowboat_core::{Error, ModelSchema, Result};
use rowboat_sql::Templates;

use indexmap::IndexMap;
use std::any::TypeId;

/// The models known to a gateway, keyed by type, in registration order.
///
/// Populated once while the `Db` is built and read-only afterwards.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    models: IndexMap<TypeId, ModelEntry>,
}

/// Validated schema and precomputed statements for one registered model.
#[derive(Debug)]
pub(crate) struct ModelEntry {
    pub(crate) schema: ModelSchema,
    pub(crate) templates: Templates,
}

impl ModelEntry {
    /// Resolved column name of the primary key.
    pub(crate) fn key_column(&self) -> &str {
        self.schema
            .primary_key_field()
            .name
            .as_deref()
            .unwrap_or_else(|| self.schema.primary_key())
    }
}

impl Registry {
    pub(crate) fn insert(&mut self, type_id: TypeId, entry: ModelEntry) -> Option<ModelEntry> {
        self.models.insert(type_id, entry)
    }

    pub(crate) fn get<M: Model>(&self) -> Result<&ModelEntry> {
        match self.models.get(&TypeId::of::<M>()) {
            Some(entry) => Ok(entry),
            None => Err(Error::unregistered_model(M::definition().name())),
        }
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = &ModelEntry> {
        self.models.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.models.len()
    }
}
