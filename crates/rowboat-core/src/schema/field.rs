use crate::Value;

use std::fmt;
use std::sync::Arc;

/// The declared kind of a model field.
///
/// The kind picks the column type used when none is given explicitly, and
/// the built-in fallback value used when a field is saved without ever being
/// set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    Float,
    Integer,
    Text,
}

impl FieldKind {
    /// The column type used when the field does not override it.
    pub fn default_column_type(self) -> &'static str {
        match self {
            FieldKind::String => "varchar(100)",
            FieldKind::Boolean => "boolean",
            FieldKind::Float => "real",
            FieldKind::Integer => "bigint",
            FieldKind::Text => "mediumtext",
        }
    }

    fn builtin_default(self) -> Option<FieldDefault> {
        match self {
            FieldKind::Boolean => Some(FieldDefault::Value(Value::Bool(false))),
            FieldKind::Float => Some(FieldDefault::Value(Value::F64(0.0))),
            FieldKind::Integer => Some(FieldDefault::Value(Value::I64(0))),
            // Strings carry no fallback; an unset string saves as NULL.
            FieldKind::String | FieldKind::Text => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::String => "StringField",
            FieldKind::Boolean => "BooleanField",
            FieldKind::Float => "FloatField",
            FieldKind::Integer => "IntegerField",
            FieldKind::Text => "TextField",
        })
    }
}

/// The default applied when a field is saved without an explicit value.
#[derive(Clone)]
pub enum FieldDefault {
    /// A fixed value.
    Value(Value),
    /// A factory invoked at resolution time, e.g. for generated ids or
    /// current timestamps.
    Factory(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl FieldDefault {
    /// Produces the default value. Factories run once per call.
    pub fn resolve(&self) -> Value {
        match self {
            FieldDefault::Value(value) => value.clone(),
            FieldDefault::Factory(factory) => factory(),
        }
    }
}

impl fmt::Debug for FieldDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldDefault::Value(value) => f.debug_tuple("Value").field(value).finish(),
            FieldDefault::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// A column descriptor on a model.
#[derive(Debug, Clone)]
pub struct Field {
    /// The declared kind
    pub kind: FieldKind,

    /// The column name. `None` until registration resolves it to the
    /// attribute name the field was declared under.
    pub name: Option<String>,

    /// The column type, verbatim DDL
    pub column_type: String,

    /// True if this field is the model's primary key
    pub primary_key: bool,

    /// Default applied when saving an unset field
    pub default: Option<FieldDefault>,
}

impl Field {
    fn new(kind: FieldKind) -> Field {
        Field {
            kind,
            name: None,
            column_type: kind.default_column_type().to_string(),
            primary_key: false,
            default: kind.builtin_default(),
        }
    }

    /// A string field, stored as `varchar(100)` unless overridden.
    pub fn string() -> Field {
        Field::new(FieldKind::String)
    }

    /// A boolean field, defaulting to `false`.
    pub fn boolean() -> Field {
        Field::new(FieldKind::Boolean)
    }

    /// A float field, defaulting to `0.0`.
    pub fn float() -> Field {
        Field::new(FieldKind::Float)
    }

    /// An integer field, defaulting to `0`.
    pub fn integer() -> Field {
        Field::new(FieldKind::Integer)
    }

    /// A long text field, stored as `mediumtext`.
    pub fn text() -> Field {
        Field::new(FieldKind::Text)
    }

    /// Overrides the column name. By default the column is named after the
    /// attribute the field is declared under.
    pub fn column(mut self, name: impl Into<String>) -> Field {
        self.name = Some(name.into());
        self
    }

    /// Overrides the column type, e.g. `varchar(50)`.
    pub fn column_type(mut self, column_type: impl Into<String>) -> Field {
        self.column_type = column_type.into();
        self
    }

    /// Marks the field as the model's primary key.
    pub fn primary_key(mut self) -> Field {
        self.primary_key = true;
        self
    }

    /// Sets a fixed default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Field {
        self.default = Some(FieldDefault::Value(value.into()));
        self
    }

    /// Sets a default produced by a factory when an unset field is saved.
    pub fn default_fn<F, T>(mut self, factory: F) -> Field
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Into<Value>,
    {
        self.default = Some(FieldDefault::Factory(Arc::new(move || factory().into())));
        self
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, {}:{}>",
            self.kind,
            self.column_type,
            self.name.as_deref().unwrap_or("?")
        )
    }
}
