//! Result type alias for brandpack

use super::errors::BrandpackError;

/// Result type alias for brandpack operations
///
/// # Examples
///
/// ```
/// use brandpack::domain::result::Result;
/// use brandpack::domain::errors::BrandpackError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(BrandpackError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BrandpackError>;
