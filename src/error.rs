/// Error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The window was configured with zero buckets.
    InvalidSize,

    /// The bucket interval was zero, or too long to be expressed in
    /// nanoseconds as a `u64`.
    InvalidInterval,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSize => {
                write!(f, "InvalidSize: window needs at least one bucket")
            }
            Self::InvalidInterval => {
                write!(
                    f,
                    "InvalidInterval: bucket interval must be > 0 and fit into u64 nanoseconds"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
