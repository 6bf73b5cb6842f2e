//! Wiring of domain services onto the outbound adapters.

use std::sync::Arc;

use mockable::Clock;
use pagination::PaginationConfig;

use crate::domain::{AuthorAccountsService, AuthorRecipesService, RecipeCatalogueService};
use crate::inbound::http::state::HttpState;
use crate::outbound::{BcryptPasswordHasher, InMemoryRecipeRepository, InMemoryUserRepository};

/// Storage and hashing adapters shared by every service.
///
/// Callers keep a clone to reach editorial operations such as
/// [`InMemoryRecipeRepository::publish`] that have no HTTP route.
#[derive(Clone, Default)]
pub struct CookbookAdapters {
    pub users: Arc<InMemoryUserRepository>,
    pub recipes: Arc<InMemoryRecipeRepository>,
    pub hasher: Arc<BcryptPasswordHasher>,
}

impl CookbookAdapters {
    /// Adapters with a custom bcrypt cost, for fast tests.
    #[must_use]
    pub fn with_hash_cost(cost: u32) -> Self {
        Self {
            hasher: Arc::new(BcryptPasswordHasher::with_cost(cost)),
            ..Self::default()
        }
    }
}

/// Build handler state from the adapters.
pub fn build_http_state(
    adapters: &CookbookAdapters,
    pagination: PaginationConfig,
    clock: Arc<dyn Clock>,
) -> HttpState {
    let accounts = AuthorAccountsService::new(adapters.users.clone(), adapters.hasher.clone());
    let recipes = AuthorRecipesService::new(adapters.recipes.clone(), clock);
    let catalogue = RecipeCatalogueService::new(adapters.recipes.clone(), pagination);
    HttpState::new(Arc::new(accounts), Arc::new(recipes), Arc::new(catalogue))
}
