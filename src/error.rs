/// Errors that can occur when constructing a PartitionedMap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The partition count is invalid (must be greater than 0).
    InvalidPartitionCount,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidPartitionCount => write!(f, "partition count must be greater than 0"),
        }
    }
}

impl std::error::Error for Error {}
