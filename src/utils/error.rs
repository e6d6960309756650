use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for site generation operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for site generation
#[derive(Debug)]
pub enum SiteError {
    /// IO error wrapper
    Io(io::Error),
    /// Build configuration error
    Config(String),
    /// Invalid or incomplete data file
    Data(String),
    /// Template loading error
    Template(String),
    /// File handling error
    File(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Io(err) => write!(f, "IO error: {}", err),
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SiteError::Data(msg) => write!(f, "Data error: {}", msg),
            SiteError::Template(msg) => write!(f, "Template error: {}", msg),
            SiteError::File(msg) => write!(f, "File error: {}", msg),
            SiteError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for SiteError {}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        SiteError::Io(err)
    }
}

impl From<String> for SiteError {
    fn from(msg: String) -> Self {
        SiteError::Generic(msg)
    }
}

impl From<&str> for SiteError {
    fn from(msg: &str) -> Self {
        SiteError::Generic(msg.to_string())
    }
}
