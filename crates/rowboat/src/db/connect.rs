use rowboat_core::{async_trait, driver::Connection, Driver, Error, Flavor, Result};

use url::Url;

/// A driver chosen from a connection URL's scheme, wrapping the concrete
/// driver implementation.
///
/// Driver crates are compiled in behind cargo features; a URL for a driver
/// that is not enabled fails here rather than at the database.
#[derive(Debug)]
pub struct Connect {
    driver: Box<dyn Driver>,
}

impl Connect {
    pub fn new(url: &str) -> Result<Self> {
        let parsed =
            Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        let driver = match parsed.scheme() {
            "mysql" => connect_mysql(url)?,
            "sqlite" => connect_sqlite(url)?,
            "postgresql" => {
                return Err(Error::invalid_connection_url(
                    "no postgresql driver is built in; pass a driver to the builder instead",
                ))
            }
            scheme => {
                return Err(Error::invalid_connection_url(format!(
                    "unsupported database; scheme={scheme}; url={url}"
                )))
            }
        };

        Ok(Self { driver })
    }
}

#[async_trait]
impl Driver for Connect {
    fn flavor(&self) -> Flavor {
        self.driver.flavor()
    }

    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }

    fn max_connections(&self) -> Option<usize> {
        self.driver.max_connections()
    }
}

#[cfg(feature = "mysql")]
fn connect_mysql(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(rowboat_driver_mysql::MySql::new(url)?))
}

#[cfg(not(feature = "mysql"))]
fn connect_mysql(url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url(format!(
        "`mysql` feature not enabled; url={url}"
    )))
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(rowboat_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_connection_url(format!(
        "`sqlite` feature not enabled; url={url}"
    )))
}
