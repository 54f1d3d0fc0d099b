use rowboat_core::{ModelDef, Result, Row, Value};

/// A persistable record type.
///
/// Implementations describe their table and fields through [`definition`]
/// and expose their state dynamically, keyed by attribute name. The dynamic
/// accessors are what let the database operations stay generic: `save`
/// walks the declared fields and reads each one without knowing the
/// concrete struct.
///
/// [`definition`]: Model::definition
pub trait Model: Sized + Send + 'static {
    /// The model's definition: name, table, and field descriptors in
    /// declaration order.
    fn definition() -> ModelDef;

    /// Load an instance of the model, populating fields using the given row.
    fn load(row: &Row) -> Result<Self>;

    /// Returns the value currently held by `field`.
    ///
    /// An unset field reads as [`Value::Null`]. Referring to a field the
    /// model does not declare is an error, never a silent null.
    fn get(&self, field: &str) -> Result<Value>;

    /// Writes `field` from a dynamic value, converting to the field's
    /// concrete type.
    fn set(&mut self, field: &str, value: Value) -> Result<()>;

    /// Returns the value held by `field`, resolving the field's declared
    /// default when unset.
    ///
    /// A resolved default is also stored back on the instance, so a factory
    /// default (a generated id, a timestamp) runs at most once and repeated
    /// reads are stable. A field with no declared default resolves to
    /// [`Value::Null`] and the instance is left untouched.
    fn value_or_default(&mut self, field: &str) -> Result<Value> {
        let current = self.get(field)?;
        if !current.is_null() {
            return Ok(current);
        }

        let definition = Self::definition();
        let default = definition
            .fields()
            .find(|(attr, _)| *attr == field)
            .and_then(|(_, descriptor)| descriptor.default.as_ref());
        match default {
            Some(default) => {
                let value = default.resolve();
                tracing::debug!(field, value = ?value, "using default value");
                self.set(field, value.clone())?;
                Ok(value)
            }
            None => Ok(Value::Null),
        }
    }
}
