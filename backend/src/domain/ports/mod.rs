//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`UserRepository`, `RecipeRepository`, `PasswordHasher`)
//! describe what the domain needs from infrastructure and expose typed
//! errors. Driving ports (`AuthorAccounts`, `AuthorRecipes`,
//! `RecipeCatalogue`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod author_accounts;
mod author_recipes;
mod password_hasher;
mod recipe_catalogue;
mod recipe_repository;
mod user_repository;

#[cfg(test)]
pub use author_accounts::MockAuthorAccounts;
pub use author_accounts::AuthorAccounts;
#[cfg(test)]
pub use author_recipes::MockAuthorRecipes;
pub use author_recipes::AuthorRecipes;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use recipe_catalogue::MockRecipeCatalogue;
pub use recipe_catalogue::{CategoryListing, RecipeCatalogue, SearchListing};
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
pub use recipe_repository::{
    PublishedRecipeFilter, RecipeOrder, RecipePersistenceError, RecipeRepository,
};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
