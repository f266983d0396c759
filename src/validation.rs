//! Parameter checks run before a request is built.
//!
//! Identifiers are embedded into URL paths, so a blank one would silently
//! address a different endpoint (`/zones/` instead of `/zones/{id}`).

use crate::error::ValidationError;

/// Rejects a value that is empty or contains only whitespace.
///
/// Returns the value unchanged (not trimmed) on success.
///
/// # Example
///
/// ```
/// use hetznerdns::validation::require_non_blank;
///
/// assert!(require_non_blank("zone_id", "abc").is_ok());
/// assert!(require_non_blank("zone_id", "   ").is_err());
/// ```
pub fn require_non_blank<'a>(
    parameter: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { parameter });
    }
    Ok(value)
}

/// Rejects an absent value, then applies [`require_non_blank`].
pub fn require_present<'a>(
    parameter: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(value) => require_non_blank(parameter, value),
        None => Err(ValidationError::Missing { parameter }),
    }
}

/// Rejects an identifier that cannot be sent as a single path segment.
///
/// Besides blank values this refuses `.` and `..`, which URL path handling
/// would resolve instead of sending.
pub fn require_segment<'a>(
    parameter: &'static str,
    value: &'a str,
) -> Result<&'a str, ValidationError> {
    let value = require_non_blank(parameter, value)?;
    if matches!(value, "." | "..") {
        return Err(ValidationError::DotSegment { parameter });
    }
    Ok(value)
}
