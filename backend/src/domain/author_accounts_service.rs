//! Author registration and login service.
//!
//! Implements the [`AuthorAccounts`] driving port on top of the user
//! repository and password hasher ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    AuthorAccounts, PasswordHashError, PasswordHasher, UserPersistenceError, UserRepository,
};
use crate::domain::registration::{EMAIL_TAKEN_MESSAGE, USERNAME_TAKEN_MESSAGE};
use crate::domain::{
    Author, AuthorAccount, Email, Error, FieldErrorCode, FieldErrors, LoginCredentials,
    RegistrationForm, RegistrationLookups, UserId, Username, validate_registration,
};

const INVALID_LOGIN_MESSAGE: &str = "Invalid username or password";

/// Account service implementing the driving port.
#[derive(Clone)]
pub struct AuthorAccountsService<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> AuthorAccountsService<U, H> {
    /// Create a new service with the given repository and hasher.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

impl<U, H> AuthorAccountsService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    fn map_user_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::Duplicate { field } => Self::duplicate_error(&field),
        }
    }

    fn map_hash_error(error: PasswordHashError) -> Error {
        Error::internal(error.to_string())
    }

    /// A unique value claimed between lookup and insert is still a field
    /// error from the caller's point of view.
    fn duplicate_error(field: &str) -> Error {
        let mut errors = FieldErrors::default();
        match field {
            "email" => errors.push("email", FieldErrorCode::Invalid, EMAIL_TAKEN_MESSAGE),
            "username" => errors.push("username", FieldErrorCode::Unique, USERNAME_TAKEN_MESSAGE),
            other => return Error::internal(format!("unexpected duplicate column: {other}")),
        }
        errors.into()
    }

    async fn lookups(&self, form: &RegistrationForm) -> Result<RegistrationLookups, Error> {
        let email_taken = match form.normalised_email().map(Email::new) {
            Some(Ok(email)) => self
                .users
                .exists_by_email(&email)
                .await
                .map_err(Self::map_user_error)?,
            _ => false,
        };
        let username_taken = match Username::new(form.normalised_username()) {
            Ok(username) => self
                .users
                .exists_by_username(&username)
                .await
                .map_err(Self::map_user_error)?,
            Err(_) => false,
        };
        Ok(RegistrationLookups {
            email_taken,
            username_taken,
        })
    }
}

#[async_trait]
impl<U, H> AuthorAccounts for AuthorAccountsService<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, form: RegistrationForm) -> Result<Author, Error> {
        let lookups = self.lookups(&form).await?;
        let registration = validate_registration(&form, lookups)?;

        let password_hash = self
            .hasher
            .hash(&registration.password)
            .await
            .map_err(Self::map_hash_error)?;
        let author = Author {
            id: UserId::random(),
            username: registration.username,
            email: registration.email,
            first_name: registration.first_name,
            last_name: registration.last_name,
        };
        let account = AuthorAccount {
            author: author.clone(),
            password_hash,
        };
        self.users
            .insert(&account)
            .await
            .map_err(Self::map_user_error)?;

        info!(user_id = %author.id, username = %author.username, "author registered");
        Ok(author)
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Author, Error> {
        let account = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(Self::map_user_error)?;
        let Some(account) = account else {
            warn!("login attempt for unknown username");
            return Err(Error::unauthorized(INVALID_LOGIN_MESSAGE));
        };

        let verified = self
            .hasher
            .verify(credentials.password(), &account.password_hash)
            .await
            .map_err(Self::map_hash_error)?;
        if !verified {
            warn!(user_id = %account.author.id, "login attempt with wrong password");
            return Err(Error::unauthorized(INVALID_LOGIN_MESSAGE));
        }

        Ok(account.author)
    }
}

#[cfg(test)]
#[path = "author_accounts_service_tests.rs"]
mod tests;
