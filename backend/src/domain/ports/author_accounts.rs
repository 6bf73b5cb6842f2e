//! Driving port for author registration and login.
//!
//! Inbound adapters call this port to create accounts and authenticate
//! credentials without knowing which repository or hasher backs them.

use async_trait::async_trait;

use crate::domain::{Author, Error, LoginCredentials, RegistrationForm};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorAccounts: Send + Sync {
    /// Validate the submission and create the account.
    ///
    /// Field failures surface as `invalid_request` with `fieldErrors`
    /// details; storage failures surface as infrastructure errors.
    async fn register(&self, form: RegistrationForm) -> Result<Author, Error>;

    /// Resolve credentials to an author or fail with `unauthorized`.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Author, Error>;
}
