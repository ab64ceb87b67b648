use crate::server::error::AppError;

/// Parses a Discord snowflake stored as a String into a u64.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalError)` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    value
        .parse::<u64>()
        .map_err(|e| AppError::InternalError(format!("Failed to parse ID from '{}': {}", value, e)))
}
