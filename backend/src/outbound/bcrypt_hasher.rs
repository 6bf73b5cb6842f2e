//! bcrypt-backed `PasswordHasher`.

use async_trait::async_trait;
use bcrypt::DEFAULT_COST;
use tokio::task;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Hashes on the blocking pool so request workers stay responsive.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl BcryptPasswordHasher {
    /// Use a custom work factor. bcrypt accepts 4 to 31.
    pub const fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        let password = password.to_owned();
        let cost = self.cost;
        let encoded = task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?;
        Ok(PasswordHash::new(encoded))
    }

    async fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        let password = password.to_owned();
        let encoded = hash.as_str().to_owned();
        task::spawn_blocking(move || bcrypt::verify(password, &encoded))
            .await
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?
            .map_err(|err| PasswordHashError::malformed_hash(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::with_cost(4)
    }

    #[rstest]
    #[tokio::test]
    async fn hashes_verify_against_their_password(hasher: BcryptPasswordHasher) {
        let hash = hasher.hash("Analytical1").await.expect("hash");

        assert_ne!(hash.as_str(), "Analytical1");
        assert!(hasher.verify("Analytical1", &hash).await.expect("verify"));
        assert!(!hasher.verify("analytical1", &hash).await.expect("verify"));
    }

    #[rstest]
    #[tokio::test]
    async fn hashes_are_salted(hasher: BcryptPasswordHasher) {
        let first = hasher.hash("Analytical1").await.expect("hash");
        let second = hasher.hash("Analytical1").await.expect("hash");
        assert_ne!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_hashes_are_reported(hasher: BcryptPasswordHasher) {
        let error = hasher
            .verify("Analytical1", &PasswordHash::new("not-a-bcrypt-hash"))
            .await
            .expect_err("malformed");
        assert!(matches!(error, PasswordHashError::MalformedHash { .. }));
    }
}
