use super::Error;

/// Error when a model definition declares no primary-key field.
#[derive(Debug)]
pub(super) struct MissingPrimaryKey {
    pub(super) model: Box<str>,
}

impl std::error::Error for MissingPrimaryKey {}

impl core::fmt::Display for MissingPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model {} declares no primary-key field", self.model)
    }
}

impl Error {
    pub fn missing_primary_key(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKey {
            model: model.into().into(),
        }))
    }

    pub fn is_missing_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingPrimaryKey(_))
    }
}
