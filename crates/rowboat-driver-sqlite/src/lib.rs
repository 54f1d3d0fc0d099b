mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use std::path::{Path, PathBuf};

use rowboat_core::{async_trait, driver, Driver, Flavor, Result, Row};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(rowboat_core::Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(rowboat_core::Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn flavor(&self) -> Flavor {
        Flavor::Sqlite
    }

    async fn connect(&self) -> Result<Box<dyn driver::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }

    fn max_connections(&self) -> Option<usize> {
        // Every in-memory connection is a distinct empty database, so the
        // pool must hand out the same one.
        matches!(self, Self::InMemory).then_some(1)
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory()
            .map_err(rowboat_core::Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path)
            .map_err(rowboat_core::Error::driver_operation_failed)?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl driver::Connection for Connection {
    async fn select(
        &mut self,
        sql: &str,
        args: &[rowboat_core::Value],
        row_limit: Option<usize>,
    ) -> Result<Vec<Row>> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(rowboat_core::Error::driver_operation_failed)?;

        let column_names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();

        let params: Vec<Value> = args.iter().map(|value| Value::from(value.clone())).collect();
        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(rowboat_core::Error::driver_operation_failed)?;

        let mut out = Vec::new();
        loop {
            if row_limit.is_some_and(|limit| out.len() >= limit) {
                break;
            }

            match rows.next() {
                Ok(Some(row)) => {
                    let mut record = Row::new();
                    for (index, name) in column_names.iter().enumerate() {
                        let value: Value = row
                            .get(index)
                            .map_err(rowboat_core::Error::driver_operation_failed)?;
                        record.insert(name.clone(), value.into_inner());
                    }
                    out.push(record);
                }
                Ok(None) => break,
                Err(err) => {
                    return Err(rowboat_core::Error::driver_operation_failed(err));
                }
            }
        }

        Ok(out)
    }

    async fn execute(&mut self, sql: &str, args: &[rowboat_core::Value]) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(rowboat_core::Error::driver_operation_failed)?;

        let params: Vec<Value> = args.iter().map(|value| Value::from(value.clone())).collect();
        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(rowboat_core::Error::driver_operation_failed)?;

        Ok(count as u64)
    }
}
