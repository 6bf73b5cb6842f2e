//! Process-local repositories. State lives for the lifetime of the server.

mod recipe_repository;
mod user_repository;

pub use recipe_repository::InMemoryRecipeRepository;
pub use user_repository::InMemoryUserRepository;
