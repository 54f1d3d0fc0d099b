mod connection_pool;
mod driver_operation_failed;
mod duplicate_primary_key;
mod invalid_connection_url;
mod missing_column;
mod missing_primary_key;
mod row_count;
mod type_conversion;
mod unknown_field;
mod unregistered_model;
mod validation;

use connection_pool::ConnectionPoolError;
use driver_operation_failed::DriverOperationFailed;
use duplicate_primary_key::DuplicatePrimaryKey;
use invalid_connection_url::InvalidConnectionUrl;
use missing_column::MissingColumn;
use missing_primary_key::MissingPrimaryKey;
use row_count::RowCount;
use type_conversion::TypeConversionError;
use unknown_field::UnknownField;
use unregistered_model::UnregisteredModel;
use validation::ValidationError;

/// An error that can occur in Rowboat.
pub struct Error {
    kind: Box<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    ConnectionPool(ConnectionPoolError),
    DriverOperationFailed(DriverOperationFailed),
    DuplicatePrimaryKey(DuplicatePrimaryKey),
    InvalidConnectionUrl(InvalidConnectionUrl),
    MissingColumn(MissingColumn),
    MissingPrimaryKey(MissingPrimaryKey),
    RowCount(RowCount),
    TypeConversion(TypeConversionError),
    UnknownField(UnknownField),
    UnregisteredModel(UnregisteredModel),
    Validation(ValidationError),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::ConnectionPool(err) => Some(err),
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            ConnectionPool(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            DuplicatePrimaryKey(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            MissingColumn(err) => core::fmt::Display::fmt(err, f),
            MissingPrimaryKey(err) => core::fmt::Display::fmt(err, f),
            RowCount(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnknownField(err) => core::fmt::Display::fmt(err, f),
            UnregisteredModel(err) => core::fmt::Display::fmt(err, f),
            Validation(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind: Box::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}
