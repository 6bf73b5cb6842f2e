//! Driving port for the public recipe catalogue.

use async_trait::async_trait;
use pagination::{Page, PageNumber};

use crate::domain::{Category, CategoryId, Error, Recipe, RecipeId};

/// One page of a category listing together with the category itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub category: Category,
    pub recipes: Page<Recipe>,
}

/// One page of search results; `term` is the trimmed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchListing {
    pub term: String,
    pub recipes: Page<Recipe>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCatalogue: Send + Sync {
    /// Published recipes, newest first.
    async fn home(&self, page: PageNumber) -> Result<Page<Recipe>, Error>;

    /// Published recipes of a category. Unknown categories and categories
    /// without published recipes are `not_found`.
    async fn category(&self, id: CategoryId, page: PageNumber) -> Result<CategoryListing, Error>;

    /// Published recipes matching `term`. A blank term is `not_found`.
    async fn search(&self, term: &str, page: PageNumber) -> Result<SearchListing, Error>;

    /// A single published recipe.
    async fn detail(&self, id: &RecipeId) -> Result<Recipe, Error>;
}
