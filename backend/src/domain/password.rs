//! Password strength rule and the hashed credential newtype.

use std::fmt;

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Message shown when a password fails [`is_strong_password`].
pub const WEAK_PASSWORD_MESSAGE: &str = "Password must have at least one uppercase letter, \
     one lowercase letter and one number. The length should be at least 8 characters.";

/// Return `true` when `value` has a lowercase letter, an uppercase letter, a
/// digit and at least [`PASSWORD_MIN_LEN`] characters.
///
/// # Examples
/// ```
/// use cookbook::domain::is_strong_password;
///
/// assert!(is_strong_password("Abc12345"));
/// assert!(!is_strong_password("abc12345"));
/// assert!(!is_strong_password("Abc1234"));
/// ```
pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_LEN
        && value.chars().any(char::is_lowercase)
        && value.chars().any(char::is_uppercase)
        && value.chars().any(|ch| ch.is_ascii_digit())
}

/// Opaque hashed credential produced by a `PasswordHasher` adapter.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
