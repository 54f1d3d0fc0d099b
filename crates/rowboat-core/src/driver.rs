use crate::{async_trait, Result, Row, Value};

use std::fmt::Debug;

/// The SQL dialect a driver speaks.
///
/// The dialect decides placeholder style and identifier quoting when
/// statements are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    MySql,
    PostgreSql,
    Sqlite,
}

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The dialect statements should be rendered in for this driver.
    fn flavor(&self) -> Flavor;

    /// Opens a new connection to the database.
    async fn connect(&self) -> Result<Box<dyn Connection>>;

    /// Upper bound on concurrently open connections, if the backend imposes
    /// one.
    fn max_connections(&self) -> Option<usize> {
        None
    }
}

/// A single database connection.
///
/// Implementations take `&mut self`: a connection serves one statement at a
/// time, and concurrency comes from pooling.
#[async_trait]
pub trait Connection: Debug + Send {
    /// Runs a query, returning at most `row_limit` rows when one is given.
    async fn select(
        &mut self,
        sql: &str,
        args: &[Value],
        row_limit: Option<usize>,
    ) -> Result<Vec<Row>>;

    /// Runs a write statement, returning the number of affected rows.
    async fn execute(&mut self, sql: &str, args: &[Value]) -> Result<u64>;
}
