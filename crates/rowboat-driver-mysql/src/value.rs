use mysql_async::prelude::ToValue;

use rowboat_core::{Result, Value as CoreValue};

/// Adapter between rowboat values and the mysql wire values.
#[derive(Debug)]
pub(crate) struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub(crate) fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Takes the value at `index` out of a result row.
    pub(crate) fn from_sql(row: &mut mysql_async::Row, index: usize) -> Result<Self> {
        let value: mysql_async::Value = row
            .take(index)
            .ok_or_else(|| anyhow::anyhow!("no value at column index {index}"))?;

        let core_value = match value {
            mysql_async::Value::NULL => CoreValue::Null,
            // The text protocol hands strings back as raw bytes
            mysql_async::Value::Bytes(bytes) => CoreValue::String(
                String::from_utf8(bytes).map_err(rowboat_core::Error::driver_operation_failed)?,
            ),
            mysql_async::Value::Int(value) => CoreValue::I64(value),
            mysql_async::Value::UInt(value) => CoreValue::I64(value as i64),
            mysql_async::Value::Float(value) => CoreValue::F64(value as f64),
            mysql_async::Value::Double(value) => CoreValue::F64(value),
            value => return Err(anyhow::anyhow!("unsupported MySQL value: {value:?}").into()),
        };

        Ok(Value(core_value))
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::Bool(value) => value.to_value(),
            CoreValue::I64(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
            CoreValue::Null => mysql_async::Value::NULL,
        }
    }
}
