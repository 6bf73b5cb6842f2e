//! Login credentials submitted by authors.

use zeroize::Zeroizing;

use super::{FieldErrorCode, FieldErrors};

pub(crate) const REQUIRED_MESSAGE: &str = "This field must not be empty";
pub(crate) const PASSWORD_REQUIRED_MESSAGE: &str = "Password must not be empty";

/// Validated login credentials used by the authentication service.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use cookbook::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada ", "Secret123").expect("valid");
/// assert_eq!(creds.username(), "ada");
///
/// let errors = LoginCredentials::try_from_parts("", "").expect_err("both blank");
/// assert_eq!(errors.fields().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw inputs, reporting every missing field together.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        let username = username.trim();
        if username.is_empty() {
            errors.push("username", FieldErrorCode::Required, REQUIRED_MESSAGE);
        }
        if password.is_empty() {
            errors.push("password", FieldErrorCode::Required, PASSWORD_REQUIRED_MESSAGE);
        }

        errors.into_result(|| Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
