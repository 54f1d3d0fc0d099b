mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

mod pool;
pub(crate) use pool::Pool;
pub use pool::{PoolConfig, Timeouts};

mod registry;
pub(crate) use registry::{ModelEntry, Registry};

use crate::{Cursor, Model};
use rowboat_core::{Connection as _, Error, Flavor, Query, Result, Row, Value};
use rowboat_sql as sql;

use std::sync::Arc;

/// Handle to a database gateway.
///
/// A `Db` owns the connection pool and the metadata of every registered
/// model. It is cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

struct Shared {
    registry: Registry,
    pool: Pool,
    strict_writes: bool,
}

impl Db {
    /// Creates a builder for configuring a gateway.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Finds one row by primary key, rehydrated into `M`.
    ///
    /// A key that matches nothing is `Ok(None)`, not an error.
    pub async fn find<M: Model>(&self, key: impl Into<Value>) -> Result<Option<M>> {
        let entry = self.shared.registry.get::<M>()?;
        let stmt = sql::select_by_key(&entry.templates.select, entry.key_column(), self.flavor());

        let rows = self.select(&stmt, &[key.into()], Some(1)).await?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(M::load(&row)?)),
            None => Ok(None),
        }
    }

    /// Finds every row matching `query`, as a lazily-rehydrating cursor.
    ///
    /// `query` may add a `WHERE` filter with bound arguments, a raw
    /// `ORDER BY` clause, and a limit to the model's select statement.
    pub async fn find_all<M: Model>(&self, query: Query) -> Result<Cursor<M>> {
        let entry = self.shared.registry.get::<M>()?;
        let (stmt, args) = sql::select_all(&entry.templates.select, &query, self.flavor());

        let rows = self.select(&stmt, &args, None).await?;
        Ok(Cursor::new(rows))
    }

    /// Inserts `model` as a new row.
    ///
    /// Unset fields resolve through their declared defaults first, so a
    /// generated primary key is visible on the instance afterwards.
    pub async fn save<M: Model>(&self, model: &mut M) -> Result<()> {
        let entry = self.shared.registry.get::<M>()?;

        let mut args = Vec::new();
        for (attr, _) in entry.schema.non_key_fields() {
            args.push(model.value_or_default(attr)?);
        }
        args.push(model.value_or_default(entry.schema.primary_key())?);

        let affected = self.execute(&entry.templates.insert, &args).await?;
        self.expect_one_row("save", affected)
    }

    /// Writes `model`'s current values over its stored row, by primary key.
    ///
    /// Values are bound as they are: an unset field writes NULL rather than
    /// resolving its default.
    pub async fn update<M: Model>(&self, model: &M) -> Result<()> {
        let entry = self.shared.registry.get::<M>()?;

        let mut args = Vec::new();
        for (attr, _) in entry.schema.non_key_fields() {
            args.push(model.get(attr)?);
        }
        args.push(model.get(entry.schema.primary_key())?);

        let affected = self.execute(&entry.templates.update, &args).await?;
        self.expect_one_row("update", affected)
    }

    /// Deletes `model`'s stored row, by primary key.
    pub async fn delete<M: Model>(&self, model: &M) -> Result<()> {
        let entry = self.shared.registry.get::<M>()?;
        let args = [model.get(entry.schema.primary_key())?];

        let affected = self.execute(&entry.templates.delete, &args).await?;
        self.expect_one_row("delete", affected)
    }

    /// Creates a table for every registered model, in registration order.
    pub async fn create_tables(&self) -> Result<()> {
        for entry in self.shared.registry.entries() {
            let ddl = sql::create_table(&entry.schema, self.flavor());
            tracing::info!(table = entry.schema.table(), "creating table");
            self.execute(&ddl, &[]).await?;
        }
        Ok(())
    }

    /// Runs a query on a pooled connection, returning mapped rows.
    ///
    /// At most `row_limit` rows are fetched when a limit is given. The
    /// connection returns to the pool when the call completes, on success
    /// and on error alike.
    pub async fn select(
        &self,
        sql: &str,
        args: &[Value],
        row_limit: Option<usize>,
    ) -> Result<Vec<Row>> {
        tracing::debug!(sql, args = ?args, "select");

        let mut connection = self.shared.pool.get().await?;
        let rows = connection.select(sql, args, row_limit).await?;

        tracing::debug!(rows = rows.len(), "rows returned");
        Ok(rows)
    }

    /// Runs a write statement on a pooled connection, returning the
    /// affected-row count.
    pub async fn execute(&self, sql: &str, args: &[Value]) -> Result<u64> {
        tracing::debug!(sql, args = ?args, "execute");

        let mut connection = self.shared.pool.get().await?;
        connection.execute(sql, args).await
    }

    /// Shuts the gateway down, closing the connection pool.
    ///
    /// In-flight operations finish; new ones fail at pool checkout.
    pub fn close(&self) {
        self.shared.pool.close();
    }

    fn flavor(&self) -> Flavor {
        self.shared.pool.flavor()
    }

    fn expect_one_row(&self, operation: &'static str, affected: u64) -> Result<()> {
        if affected == 1 {
            return Ok(());
        }
        if self.shared.strict_writes {
            return Err(Error::row_count(1, affected));
        }
        tracing::warn!(operation, affected, "expected to affect a single row");
        Ok(())
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("models", &self.shared.registry.len())
            .field("flavor", &self.flavor())
            .finish()
    }
}
