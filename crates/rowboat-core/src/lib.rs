pub mod driver;
pub use driver::{Connection, Driver, Flavor};

mod error;
pub use error::Error;

pub mod query;
pub use query::{Limit, Query};

mod row;
pub use row::Row;

pub mod schema;
pub use schema::{Field, ModelDef, ModelSchema};

pub mod value;
pub use value::{FromValue, Value};

/// A Result type alias that uses Rowboat's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
