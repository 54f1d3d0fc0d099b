mod select;
pub use select::{select_all, select_by_key};

mod templates;
pub use templates::{create_table, Templates};

mod writer;
