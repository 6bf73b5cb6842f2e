//! Author registration form and its validator.
//!
//! Validation is pure: the uniqueness lookups are run by the service first
//! and handed in as [`RegistrationLookups`], so storage failures never turn
//! into field errors and the same input always yields the same report.

use zeroize::Zeroizing;

use super::auth::{PASSWORD_REQUIRED_MESSAGE, REQUIRED_MESSAGE};
use super::{
    Email, FieldErrorCode, FieldErrors, NAME_MAX, UserValidationError, Username,
    WEAK_PASSWORD_MESSAGE, is_strong_password,
};

pub(crate) const PASSWORD_MISMATCH_MESSAGE: &str = "Password and Password Confirm must match";
pub(crate) const EMAIL_TAKEN_MESSAGE: &str = "User e-mail is already in use";
pub(crate) const USERNAME_TAKEN_MESSAGE: &str = "A user with that username already exists.";
const INVALID_USERNAME_MESSAGE: &str = "Enter a valid username. This value may contain only \
     letters, numbers, and @/./+/-/_ characters.";
const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address.";

/// Raw registration submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: Zeroizing<String>,
    pub password2: Zeroizing<String>,
}

impl RegistrationForm {
    /// Trimmed username used for lookups and storage.
    pub fn normalised_username(&self) -> &str {
        self.username.trim()
    }

    /// Trimmed e-mail, `None` when left blank.
    pub fn normalised_email(&self) -> Option<&str> {
        Some(self.email.trim()).filter(|email| !email.is_empty())
    }
}

/// Results of the storage lookups the validator depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationLookups {
    pub email_taken: bool,
    pub username_taken: bool,
}

/// A registration that passed every rule. Only the password survives in
/// plaintext, zeroised on drop, until the service hashes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRegistration {
    pub first_name: String,
    pub last_name: String,
    pub username: Username,
    pub email: Option<Email>,
    pub password: Zeroizing<String>,
}

/// Apply every registration rule, reporting all failures together.
///
/// # Examples
/// ```
/// use cookbook::domain::{RegistrationForm, RegistrationLookups, validate_registration};
///
/// let form = RegistrationForm {
///     username: "ada".into(),
///     password: String::from("Secret123").into(),
///     password2: String::from("Secret124").into(),
///     ..RegistrationForm::default()
/// };
/// let errors = validate_registration(&form, RegistrationLookups::default())
///     .expect_err("confirmation differs");
/// assert_eq!(
///     errors.messages("password2"),
///     vec!["Password and Password Confirm must match"]
/// );
/// ```
pub fn validate_registration(
    form: &RegistrationForm,
    lookups: RegistrationLookups,
) -> Result<ValidatedRegistration, FieldErrors> {
    let mut errors = FieldErrors::default();

    check_name("firstName", &form.first_name, &mut errors);
    check_name("lastName", &form.last_name, &mut errors);
    let username = check_username(form, lookups.username_taken, &mut errors);
    let email = check_email(form, lookups.email_taken, &mut errors);
    check_password(&form.password, &mut errors);
    check_confirmation(&form.password, &form.password2, &mut errors);

    match (username, errors.is_empty()) {
        (Some(username), true) => Ok(ValidatedRegistration {
            first_name: form.first_name.trim().to_owned(),
            last_name: form.last_name.trim().to_owned(),
            username,
            email,
            password: form.password.clone(),
        }),
        _ => Err(errors),
    }
}

fn too_long_message(length: usize) -> String {
    format!("Ensure this value has at most {NAME_MAX} characters (it has {length}).")
}

fn check_name(field: &'static str, value: &str, errors: &mut FieldErrors) {
    let length = value.trim().chars().count();
    if length > NAME_MAX {
        errors.push(field, FieldErrorCode::MaxLength, too_long_message(length));
    }
}

fn check_username(
    form: &RegistrationForm,
    taken: bool,
    errors: &mut FieldErrors,
) -> Option<Username> {
    let raw = form.normalised_username();
    match Username::new(raw) {
        Ok(_) if taken => {
            errors.push("username", FieldErrorCode::Unique, USERNAME_TAKEN_MESSAGE);
            None
        }
        Ok(username) => Some(username),
        Err(UserValidationError::EmptyUsername) => {
            errors.push("username", FieldErrorCode::Required, REQUIRED_MESSAGE);
            None
        }
        Err(UserValidationError::UsernameTooLong { .. }) => {
            errors.push(
                "username",
                FieldErrorCode::MaxLength,
                too_long_message(raw.chars().count()),
            );
            None
        }
        Err(_) => {
            errors.push("username", FieldErrorCode::Invalid, INVALID_USERNAME_MESSAGE);
            None
        }
    }
}

fn check_email(form: &RegistrationForm, taken: bool, errors: &mut FieldErrors) -> Option<Email> {
    let raw = form.normalised_email()?;
    match Email::new(raw) {
        Ok(email) => {
            if taken {
                errors.push("email", FieldErrorCode::Invalid, EMAIL_TAKEN_MESSAGE);
            }
            Some(email)
        }
        Err(_) => {
            errors.push("email", FieldErrorCode::Invalid, INVALID_EMAIL_MESSAGE);
            None
        }
    }
}

fn check_password(password: &str, errors: &mut FieldErrors) {
    if password.is_empty() {
        errors.push("password", FieldErrorCode::Required, PASSWORD_REQUIRED_MESSAGE);
    } else if !is_strong_password(password) {
        errors.push("password", FieldErrorCode::WeakPassword, WEAK_PASSWORD_MESSAGE);
    }
}

fn check_confirmation(password: &str, confirmation: &str, errors: &mut FieldErrors) {
    if confirmation.is_empty() {
        errors.push("password2", FieldErrorCode::Required, PASSWORD_REQUIRED_MESSAGE);
    } else if password.as_bytes() != confirmation.as_bytes() {
        errors.push(
            "password2",
            FieldErrorCode::PasswordMismatch,
            PASSWORD_MISMATCH_MESSAGE,
        );
    }
}
