//! Environment variable parsing helpers
//!
//! Lets configuration loaders read optional numeric settings without unwrap().

use std::str::FromStr;

/// Parse an environment variable, falling back to `default` when it is
/// missing or does not parse.
///
/// # Example
/// ```ignore
/// let max: u32 = parse_env_with_default("DB_MAX_CONNECTIONS", 20);
/// ```
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    parse_env_optional(key).unwrap_or(default)
}

/// Parse an environment variable, returning `None` if missing or invalid
pub fn parse_env_optional<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Read a boolean flag. Accepts `1/0`, `true/false`, `yes/no`, `on/off`.
pub fn parse_env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
