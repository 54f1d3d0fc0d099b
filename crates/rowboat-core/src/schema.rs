mod field;
pub use field::{Field, FieldDefault, FieldKind};

mod model;
pub use model::{ModelDef, ModelSchema};
