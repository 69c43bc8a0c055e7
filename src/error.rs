//! Error types for rightsmap

/// The main error type for rightsmap operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RightsError(pub String);

impl std::fmt::Display for RightsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for RightsError {}

/// Result type alias for rightsmap operations
pub type Result<T> = std::result::Result<T, RightsError>;

/// Convert any error to RightsError
pub fn err<E: std::error::Error>(e: E) -> RightsError {
    RightsError(e.to_string())
}
