use super::Error;

/// Error when a result row does not contain an expected column.
#[derive(Debug)]
pub(super) struct MissingColumn {
    pub(super) column: Box<str>,
}

impl std::error::Error for MissingColumn {}

impl core::fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "row has no column {}", self.column)
    }
}

impl Error {
    pub fn missing_column(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingColumn(MissingColumn {
            column: column.into().into(),
        }))
    }

    pub fn is_missing_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingColumn(_))
    }
}
