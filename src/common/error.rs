//! Error types for SupplierDB.

use crate::common::SupplierId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in SupplierDB.
///
/// The index itself never fails; every variant here is raised by the
/// registry, the configuration loader or the interactive shell.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A checked insert found a supplier with the same ID already present.
    #[error("Supplier ID {0} already exists")]
    DuplicateKey(SupplierId),

    /// No supplier with this ID is reachable in the index.
    #[error("Supplier with ID {0} not found")]
    NotFound(SupplierId),

    /// Rating text that is not an integer in the accepted range.
    #[error("Rating must be between {min}-{max}, got {input:?}")]
    InvalidRating { input: String, min: u8, max: u8 },

    /// Non-numeric text where the shell needed a number.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The input stream closed while the shell was waiting for a line.
    #[error("Input stream closed")]
    EndOfInput,

    /// Configuration file could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error from the terminal or the configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl Error {
    /// Whether the interactive session can keep going after this error.
    ///
    /// Terminal failures and a closed input stream end the session; every
    /// other error is reported to the user and the menu is shown again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::EndOfInput | Error::Io(_))
    }
}
