//! Connection pooling for driver connections.

use std::ops::{Deref, DerefMut};

pub use deadpool::managed::Timeouts;
use rowboat_core::{driver::Connection, Driver, Error, Flavor};

/// Get the default maximum size of a pool, which is `cpu_core_count * 2`
/// including logical cores (Hyper-Threading).
fn get_default_pool_max_size() -> usize {
    deadpool::managed::PoolConfig::default().max_size
}

/// Configuration for connection pool behavior.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_size: usize,
    pub timeouts: Timeouts,
}

impl PoolConfig {
    /// Creates a new pool configuration with default settings.
    pub fn new() -> Self {
        Self {
            max_size: get_default_pool_max_size(),
            timeouts: Default::default(),
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A connection pool that manages driver connections.
///
/// Checked-out connections return to the pool when the guard drops, on
/// every exit path.
#[derive(Debug)]
pub(crate) struct Pool {
    inner: deadpool::managed::Pool<Manager>,
    flavor: Flavor,
}

impl Pool {
    /// Creates a new connection pool from the given driver.
    pub(crate) async fn new(driver: impl Driver, config: &PoolConfig) -> crate::Result<Self> {
        tracing::debug!(max_size = config.max_size, "creating database connection pool");

        let flavor = driver.flavor();
        let max_connections = driver.max_connections();

        let mut builder = deadpool::managed::Pool::builder(Manager {
            driver: Box::new(driver),
        })
        .runtime(deadpool::Runtime::Tokio1)
        .max_size(config.max_size)
        .create_timeout(config.timeouts.create)
        .wait_timeout(config.timeouts.wait)
        .recycle_timeout(config.timeouts.recycle);

        // A driver cap overrides the configured size. In-memory SQLite only
        // exists on its single connection.
        if let Some(max_connections) = max_connections {
            builder = builder.max_size(max_connections);
        }

        let inner = builder.build().map_err(Error::connection_pool)?;

        // Check out one connection so connectivity problems surface here
        // rather than on the first query.
        let connection = inner.get().await.map_err(Error::connection_pool)?;
        drop(connection);

        Ok(Self { inner, flavor })
    }

    /// Retrieves a connection from the pool.
    pub(crate) async fn get(&self) -> crate::Result<PoolConnection> {
        let connection = self.inner.get().await.map_err(Error::connection_pool)?;
        Ok(PoolConnection { inner: connection })
    }

    pub(crate) fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Closes the pool. Pending and future checkouts fail; idle connections
    /// drop immediately and checked-out ones as they are returned.
    pub(crate) fn close(&self) {
        self.inner.close();
    }
}

#[derive(Debug)]
struct Manager {
    driver: Box<dyn Driver>,
}

impl deadpool::managed::Manager for Manager {
    type Type = Box<dyn Connection>;
    type Error = crate::Error;

    async fn create(&self) -> Result<Self::Type, Self::Error> {
        self.driver.connect().await
    }

    async fn recycle(
        &self,
        _obj: &mut Self::Type,
        _metrics: &deadpool::managed::Metrics,
    ) -> deadpool::managed::RecycleResult<Self::Error> {
        Ok(())
    }
}

/// A connection retrieved from a pool.
///
/// When dropped, the connection is returned to the pool for reuse.
pub(crate) struct PoolConnection {
    inner: deadpool::managed::Object<Manager>,
}

impl Deref for PoolConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PoolConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
