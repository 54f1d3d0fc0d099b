pub mod cursor;
pub use cursor::Cursor;

pub mod db;
pub use db::Db;

mod model;
pub use model::Model;

pub use rowboat_core::{
    async_trait, driver, schema, Driver, Error, Field, Flavor, FromValue, Limit, ModelDef, Query,
    Result, Row, Value,
};
