use super::Error;

/// Error when a write statement affected an unexpected number of rows.
#[derive(Debug)]
pub(super) struct RowCount {
    pub(super) expected: u64,
    pub(super) actual: u64,
}

impl std::error::Error for RowCount {}

impl core::fmt::Display for RowCount {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "expected {} row affected, got {}",
            self.expected, self.actual
        )
    }
}

impl Error {
    pub fn row_count(expected: u64, actual: u64) -> Error {
        Error::from(super::ErrorKind::RowCount(RowCount { expected, actual }))
    }

    pub fn is_row_count(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RowCount(_))
    }
}
