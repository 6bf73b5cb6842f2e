//! Port abstraction for recipe persistence.
use async_trait::async_trait;

use crate::domain::{Category, CategoryId, Recipe, RecipeId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by recipe repository adapters.
    pub enum RecipePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "recipe repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "recipe repository query failed: {message}",
    }
}

/// Ordering applied to recipe listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeOrder {
    /// Most recently created first.
    #[default]
    NewestFirst,
    /// Oldest first.
    OldestFirst,
}

/// Which published recipes a listing should include.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishedRecipeFilter {
    /// Every published recipe.
    All,
    /// Published recipes assigned to one category.
    Category(CategoryId),
    /// Published recipes whose title or description contains the term,
    /// compared case-insensitively.
    Search(String),
}

/// Storage of recipes and their categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Published recipes matching `filter`, sorted by `order`.
    async fn list_published(
        &self,
        order: RecipeOrder,
        filter: PublishedRecipeFilter,
    ) -> Result<Vec<Recipe>, RecipePersistenceError>;

    /// A published recipe by id.
    async fn find_published(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipePersistenceError>;

    /// A category by id.
    async fn find_category(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, RecipePersistenceError>;

    /// Recipes written by `author` with the given publication state, newest
    /// first.
    async fn list_by_author(
        &self,
        author: &UserId,
        published: bool,
    ) -> Result<Vec<Recipe>, RecipePersistenceError>;

    /// A recipe owned by `author` with the given publication state.
    async fn find_by_author(
        &self,
        author: &UserId,
        id: &RecipeId,
        published: bool,
    ) -> Result<Option<Recipe>, RecipePersistenceError>;

    /// Store a new recipe.
    async fn insert(&self, recipe: &Recipe) -> Result<(), RecipePersistenceError>;

    /// Replace a stored recipe. Returns `false` when no recipe has that id.
    async fn update(&self, recipe: &Recipe) -> Result<bool, RecipePersistenceError>;

    /// Remove a recipe. Returns `false` when no recipe has that id.
    async fn delete(&self, id: &RecipeId) -> Result<bool, RecipePersistenceError>;
}
