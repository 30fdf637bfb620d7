use crate::server::error::{server::ServerError, AppError};

/// Values accepted as an enabled flag, compared case-insensitively.
pub const TRUTHY_FLAGS: [&str; 4] = ["true", "1", "yes", "on"];

/// Values accepted as a disabled flag where an explicit value is required.
pub const FALSY_FLAGS: [&str; 4] = ["false", "0", "no", "off"];

/// Largest slice length the store can bind, SQLite integers being signed 64-bit.
pub const MAX_QUANTITY: u64 = i64::MAX as u64;

/// Interprets an optional query string value as a boolean flag.
///
/// # Arguments
/// - `value` - Raw query value, `None` when the parameter is absent
///
/// # Returns
/// - `true` - Value is one of `true`, `1`, `yes`, `on` in any letter case
/// - `false` - Parameter absent or any other value
pub fn parse_flag(value: Option<&str>) -> bool {
    value.and_then(parse_strict_flag).unwrap_or(false)
}

/// Interprets a value that must be an explicit on/off flag.
///
/// # Returns
/// - `Some(true)` - One of `true`, `1`, `yes`, `on` in any letter case
/// - `Some(false)` - One of `false`, `0`, `no`, `off` in any letter case
/// - `None` - Any other value
pub fn parse_strict_flag(value: &str) -> Option<bool> {
    let value = value.trim();

    if TRUTHY_FLAGS.iter().any(|flag| value.eq_ignore_ascii_case(flag)) {
        Some(true)
    } else if FALSY_FLAGS.iter().any(|flag| value.eq_ignore_ascii_case(flag)) {
        Some(false)
    } else {
        None
    }
}

/// Drops empty query values so `?category=` behaves like an absent parameter.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses the `qty` slice length.
///
/// Values above `MAX_QUANTITY` are clamped to it. A slice that long already covers
/// every stored row, so the result is the same as for the requested length.
///
/// # Arguments
/// - `value` - Raw `qty` text
///
/// # Returns
/// - `Ok(u64)` - Number of leading records to keep, at most `MAX_QUANTITY`
/// - `Err(AppError::ServerErr(InvalidQuantity))` - Text is not a non-negative integer
pub fn parse_quantity(value: &str) -> Result<u64, AppError> {
    value
        .trim()
        .parse::<u64>()
        .map(|qty| qty.min(MAX_QUANTITY))
        .map_err(|_| ServerError::InvalidQuantity(value.to_string()).into())
}

/// Parses a `by_serverid` value into a store identifier.
///
/// # Arguments
/// - `value` - Raw `by_serverid` text
///
/// # Returns
/// - `Ok(i32)` - Identifier in the range of the `server.id` column
/// - `Err(AppError::ServerErr(InvalidId))` - Text is not an integer identifier
pub fn parse_server_id(value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ServerError::InvalidId(value.to_string()).into())
}
