//! Result type alias for piilog

use super::errors::PiiLogError;

/// Result type alias for piilog operations
///
/// # Examples
///
/// ```
/// use piilog::domain::result::Result;
/// use piilog::domain::errors::PiiLogError;
///
/// fn example_function() -> Result<String> {
///     Ok("name=***;".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PiiLogError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PiiLogError>;
