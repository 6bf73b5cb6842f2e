//! Outbound adapters implementing the driven domain ports.
//!
//! - **memory**: `RwLock`-guarded repositories for users and recipes
//! - **bcrypt_hasher**: password hashing on the blocking thread pool
//!
//! Adapters translate between domain types and storage. They contain no
//! business rules.

mod bcrypt_hasher;
pub mod memory;

pub use bcrypt_hasher::BcryptPasswordHasher;
pub use memory::{InMemoryRecipeRepository, InMemoryUserRepository};
