//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and stay testable without storage.

use std::sync::Arc;

use crate::domain::ports::{AuthorAccounts, AuthorRecipes, RecipeCatalogue};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AuthorAccounts>,
    pub recipes: Arc<dyn AuthorRecipes>,
    pub catalogue: Arc<dyn RecipeCatalogue>,
}

impl HttpState {
    /// Bundle the three driving ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use cookbook::domain::{AuthorAccountsService, AuthorRecipesService, RecipeCatalogueService};
    /// use cookbook::inbound::http::state::HttpState;
    /// use cookbook::outbound::{BcryptPasswordHasher, InMemoryRecipeRepository, InMemoryUserRepository};
    /// use pagination::PaginationConfig;
    ///
    /// let users = Arc::new(InMemoryUserRepository::default());
    /// let recipes = Arc::new(InMemoryRecipeRepository::default());
    /// let hasher = Arc::new(BcryptPasswordHasher::default());
    /// let pagination = PaginationConfig::new(6, 4).expect("non-zero config");
    /// let state = HttpState::new(
    ///     Arc::new(AuthorAccountsService::new(users, hasher)),
    ///     Arc::new(AuthorRecipesService::new(recipes.clone(), Arc::new(mockable::DefaultClock))),
    ///     Arc::new(RecipeCatalogueService::new(recipes, pagination)),
    /// );
    /// let _catalogue = state.catalogue.clone();
    /// ```
    pub fn new(
        accounts: Arc<dyn AuthorAccounts>,
        recipes: Arc<dyn AuthorRecipes>,
        catalogue: Arc<dyn RecipeCatalogue>,
    ) -> Self {
        Self {
            accounts,
            recipes,
            catalogue,
        }
    }
}
