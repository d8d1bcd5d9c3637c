use crate::server::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake stored as a database string.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Value is not a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|source| InternalError::ParseStringId { value, source })?;

    Ok(result)
}
