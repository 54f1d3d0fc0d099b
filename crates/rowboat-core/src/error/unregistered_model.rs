use super::Error;

/// Error when an operation references a model that was never registered.
#[derive(Debug)]
pub(super) struct UnregisteredModel {
    pub(super) model: Box<str>,
}

impl std::error::Error for UnregisteredModel {}

impl core::fmt::Display for UnregisteredModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model {} is not registered", self.model)
    }
}

impl Error {
    pub fn unregistered_model(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnregisteredModel(UnregisteredModel {
            model: model.into().into(),
        }))
    }

    pub fn is_unregistered_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnregisteredModel(_))
    }
}
