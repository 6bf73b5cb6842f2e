//! Driving port for the author dashboard.
//!
//! Every operation is scoped to the calling author's unpublished recipes;
//! published or foreign recipes are reported as `not_found`.

use async_trait::async_trait;

use crate::domain::{Error, Recipe, RecipeForm, RecipeId, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRecipes: Send + Sync {
    /// The author's drafts, newest first.
    async fn list_drafts(&self, author: &UserId) -> Result<Vec<Recipe>, Error>;

    /// Validate and store a new draft.
    async fn create(&self, author: &UserId, form: RecipeForm) -> Result<Recipe, Error>;

    /// Fetch one of the author's drafts for editing.
    async fn get_draft(&self, author: &UserId, id: &RecipeId) -> Result<Recipe, Error>;

    /// Validate and overwrite one of the author's drafts.
    async fn update(&self, author: &UserId, id: &RecipeId, form: RecipeForm)
    -> Result<Recipe, Error>;

    /// Remove one of the author's drafts.
    async fn delete(&self, author: &UserId, id: &RecipeId) -> Result<(), Error>;
}
