//! Input validation helpers shared by the console forms and CLI.

use once_cell::sync::Lazy;
use regex::Regex;

/// Strict dotted-quad CIDR pattern. The backend stores routes verbatim, so
/// the console is the only gate against garbage entries.
static CIDR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+/\d+$").expect("invalid CIDR pattern"));

/// Validates a route entry against the dotted-quad CIDR form `a.b.c.d/len`.
///
/// A bare address without a prefix length is rejected, as is anything
/// non-numeric or empty.
pub fn validate_cidr(route: &str) -> Result<(), String> {
    if CIDR_RE.is_match(route) {
        Ok(())
    } else {
        Err(format!("invalid CIDR format: {:?}", route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_cidr_accepts_dotted_quad_with_prefix() {
        assert!(validate_cidr("192.168.1.0/24").is_ok());
        assert!(validate_cidr("10.0.0.0/8").is_ok());
    }

    #[test]
    fn test_validate_cidr_rejects_bare_address() {
        assert!(validate_cidr("192.168.1.0").is_err());
    }

    #[test]
    fn test_validate_cidr_rejects_non_numeric() {
        assert!(validate_cidr("abc/24").is_err());
    }

    #[test]
    fn test_validate_cidr_rejects_empty() {
        assert!(validate_cidr("").is_err());
    }

    #[test]
    fn test_validate_cidr_rejects_trailing_garbage() {
        assert!(validate_cidr("192.168.1.0/24 ").is_err());
        assert!(validate_cidr("x192.168.1.0/24").is_err());
    }
}
