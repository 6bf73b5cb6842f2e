//! Port abstraction for author account persistence.
use async_trait::async_trait;

use crate::domain::{AuthorAccount, Email, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A unique column (username or e-mail) already holds the value.
        Duplicate { field: String } => "user repository rejected duplicate {field}",
    }
}

/// Storage of author accounts.
///
/// Comparison semantics for the existence checks (case folding, collation)
/// belong to the adapter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Whether an account already uses `email`.
    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserPersistenceError>;

    /// Whether an account already uses `username`.
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserPersistenceError>;

    /// Store a new account.
    ///
    /// Returns [`UserPersistenceError::Duplicate`] when a unique value was
    /// claimed between the existence check and the insert.
    async fn insert(&self, account: &AuthorAccount) -> Result<(), UserPersistenceError>;

    /// Fetch the account registered under `username`.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AuthorAccount>, UserPersistenceError>;
}
