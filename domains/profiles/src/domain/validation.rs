//! Validation helpers and constants for profile handlers

use regex::Regex;

lazy_static::lazy_static! {
    /// Display-name validation regex: 3-16 alphanumeric or underscore
    /// characters, matching the platform's player-name rules.
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_]{3,16}$").unwrap();
}

/// Validate a display name according to the rules
pub fn validate_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        // Valid names
        assert!(validate_username("abc"));
        assert!(validate_username("Player_One"));
        assert!(validate_username("Player_uuid12"));
        assert!(validate_username("x_1"));
        assert!(validate_username("ABCDEFGHIJKLMNOP")); // 16 chars

        // Too short / too long
        assert!(!validate_username(""));
        assert!(!validate_username("ab"));
        assert!(!validate_username("ABCDEFGHIJKLMNOPQ")); // 17 chars

        // Invalid characters
        assert!(!validate_username("player one"));
        assert!(!validate_username("player-one"));
        assert!(!validate_username("pläyer"));
        assert!(!validate_username("player!"));
    }
}
