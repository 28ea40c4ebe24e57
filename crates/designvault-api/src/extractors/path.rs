//! Typed path and query parameter helpers.

use designvault_core::error::AppError;

/// Parses a version identifier from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid version id: {s}")))
}

/// Parses a version number. Numbers start at 1.
pub fn parse_version_number(s: &str) -> Result<i32, AppError> {
    match s.trim().parse::<i32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::validation(format!("Invalid versionNumber: {s}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_number() {
        assert_eq!(parse_version_number("3").unwrap(), 3);
        assert!(parse_version_number("0").is_err());
        assert!(parse_version_number("-1").is_err());
        assert!(parse_version_number("abc").is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("4.2").is_err());
    }
}
