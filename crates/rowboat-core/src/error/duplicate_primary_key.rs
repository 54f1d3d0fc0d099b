use super::Error;

/// Error when a model definition flags more than one field as the primary key.
#[derive(Debug)]
pub(super) struct DuplicatePrimaryKey {
    pub(super) model: Box<str>,
    pub(super) field: Box<str>,
}

impl std::error::Error for DuplicatePrimaryKey {}

impl core::fmt::Display for DuplicatePrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate primary key for field {} on model {}",
            self.field, self.model
        )
    }
}

impl Error {
    pub fn duplicate_primary_key(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicatePrimaryKey(DuplicatePrimaryKey {
            model: model.into().into(),
            field: field.into().into(),
        }))
    }

    pub fn is_duplicate_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicatePrimaryKey(_))
    }
}
