//! In-memory `UserRepository` adapter.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{AuthorAccount, Email, Username};

/// Accounts keyed by username. Usernames and e-mails compare exactly.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    accounts: RwLock<HashMap<String, AuthorAccount>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

fn email_in_use(accounts: &HashMap<String, AuthorAccount>, email: &Email) -> bool {
    accounts
        .values()
        .any(|account| account.author.email.as_ref() == Some(email))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserPersistenceError> {
        Ok(email_in_use(&*self.accounts.read().await, email))
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserPersistenceError> {
        Ok(self.accounts.read().await.contains_key(username.as_ref()))
    }

    async fn insert(&self, account: &AuthorAccount) -> Result<(), UserPersistenceError> {
        let mut accounts = self.accounts.write().await;
        let username = account.author.username.as_ref();
        if accounts.contains_key(username) {
            return Err(UserPersistenceError::duplicate("username"));
        }
        let email_taken = account
            .author
            .email
            .as_ref()
            .is_some_and(|email| email_in_use(&accounts, email));
        if email_taken {
            return Err(UserPersistenceError::duplicate("email"));
        }
        accounts.insert(username.to_owned(), account.clone());
        debug!(user_id = %account.author.id, "account stored");
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AuthorAccount>, UserPersistenceError> {
        Ok(self.accounts.read().await.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{Author, PasswordHash, UserId};

    fn account(username: &str, email: Option<&str>) -> AuthorAccount {
        AuthorAccount {
            author: Author {
                id: UserId::random(),
                username: Username::new(username).expect("valid username"),
                email: email.map(|raw| Email::new(raw).expect("valid email")),
                first_name: String::new(),
                last_name: String::new(),
            },
            password_hash: PasswordHash::new("hash"),
        }
    }

    #[fixture]
    fn repository() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn stored_accounts_are_found_and_counted(repository: InMemoryUserRepository) {
        repository
            .insert(&account("ada", Some("ada@example.com")))
            .await
            .expect("insert");

        let username = Username::new("ada").expect("valid");
        let email = Email::new("ada@example.com").expect("valid");
        assert!(repository.exists_by_username(&username).await.expect("lookup"));
        assert!(repository.exists_by_email(&email).await.expect("lookup"));
        let found = repository
            .find_by_username("ada")
            .await
            .expect("lookup")
            .expect("account present");
        assert_eq!(found.author.username, username);
        assert_eq!(repository.len().await, 1);
        assert!(repository.find_by_username("grace").await.expect("lookup").is_none());
    }

    #[rstest]
    #[case(account("ada", None), "username")]
    #[case(account("lovelace", Some("ada@example.com")), "email")]
    #[tokio::test]
    async fn duplicates_are_rejected(
        repository: InMemoryUserRepository,
        #[case] clash: AuthorAccount,
        #[case] field: &str,
    ) {
        repository
            .insert(&account("ada", Some("ada@example.com")))
            .await
            .expect("first insert");

        let error = repository.insert(&clash).await.expect_err("duplicate");
        assert_eq!(error, UserPersistenceError::duplicate(field));
        assert_eq!(repository.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn accounts_without_email_do_not_clash(repository: InMemoryUserRepository) {
        repository.insert(&account("ada", None)).await.expect("first");
        repository.insert(&account("grace", None)).await.expect("second");
        assert_eq!(repository.len().await, 2);
    }
}
