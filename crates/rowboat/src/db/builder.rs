use super::{Connect, Db, ModelEntry, Pool, PoolConfig, Registry, Shared};
use crate::{Model, Result};
use rowboat_core::{Driver, Error, ModelDef, ModelSchema};
use rowboat_sql::Templates;

use std::any::TypeId;
use std::sync::Arc;

/// Configures and constructs a [`Db`].
#[derive(Default)]
pub struct Builder {
    /// Registered model definitions, in registration order.
    definitions: Vec<(TypeId, ModelDef)>,

    /// Connection pool settings.
    pool: PoolConfig,

    /// Promote unexpected affected-row counts from warnings to errors.
    strict_writes: bool,
}

impl Builder {
    /// Registers a model type with the gateway being built.
    pub fn register<M: Model>(&mut self) -> &mut Self {
        self.definitions.push((TypeId::of::<M>(), M::definition()));
        self
    }

    /// Overrides the connection pool configuration.
    pub fn pool_config(&mut self, config: PoolConfig) -> &mut Self {
        self.pool = config;
        self
    }

    /// Fails writes that do not affect exactly one row, instead of logging
    /// a warning.
    pub fn strict_writes(&mut self, strict: bool) -> &mut Self {
        self.strict_writes = strict;
        self
    }

    /// Builds the gateway, connecting to the database named by `url`.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connect::new(url)?).await
    }

    /// Builds the gateway on an explicitly constructed driver.
    ///
    /// Definitions are validated and statement templates rendered for the
    /// driver's dialect here, before any connection is opened; a bad model
    /// definition never reaches the database.
    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let flavor = driver.flavor();

        let mut registry = Registry::default();
        for (type_id, def) in self.definitions.iter().cloned() {
            let name = def.name();
            let schema = ModelSchema::from_def(def)?;
            let templates = Templates::generate(&schema, flavor);

            let entry = ModelEntry { schema, templates };
            if registry.insert(type_id, entry).is_some() {
                return Err(Error::validation(format!(
                    "model {name} registered more than once"
                )));
            }
        }

        let pool = Pool::new(driver, &self.pool).await?;

        Ok(Db {
            shared: Arc::new(Shared {
                registry,
                pool,
                strict_writes: self.strict_writes,
            }),
        })
    }
}
