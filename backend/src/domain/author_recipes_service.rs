//! Author dashboard service.
//!
//! Authors manage their own unpublished recipes here. Publishing happens
//! elsewhere, so a recipe leaves the dashboard once it is published.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{AuthorRecipes, RecipePersistenceError, RecipeRepository};
use crate::domain::{Error, Recipe, RecipeForm, RecipeId, UserId, validate_recipe};

const DRAFT_NOT_FOUND_MESSAGE: &str = "recipe not found";

/// Dashboard service implementing the [`AuthorRecipes`] driving port.
#[derive(Clone)]
pub struct AuthorRecipesService<R> {
    recipes: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> AuthorRecipesService<R> {
    pub fn new(recipes: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { recipes, clock }
    }
}

pub(crate) fn map_recipe_error(error: RecipePersistenceError) -> Error {
    match error {
        RecipePersistenceError::Connection { message } => {
            Error::service_unavailable(format!("recipe repository unavailable: {message}"))
        }
        RecipePersistenceError::Query { message } => {
            Error::internal(format!("recipe repository error: {message}"))
        }
    }
}

impl<R> AuthorRecipesService<R>
where
    R: RecipeRepository,
{
    async fn owned_draft(&self, author: &UserId, id: &RecipeId) -> Result<Recipe, Error> {
        self.recipes
            .find_by_author(author, id, false)
            .await
            .map_err(map_recipe_error)?
            .ok_or_else(|| Error::not_found(DRAFT_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<R> AuthorRecipes for AuthorRecipesService<R>
where
    R: RecipeRepository,
{
    async fn list_drafts(&self, author: &UserId) -> Result<Vec<Recipe>, Error> {
        self.recipes
            .list_by_author(author, false)
            .await
            .map_err(map_recipe_error)
    }

    async fn create(&self, author: &UserId, form: RecipeForm) -> Result<Recipe, Error> {
        let draft = validate_recipe(&form)?;
        let recipe = Recipe::new_draft(RecipeId::random(), author.clone(), draft, self.clock.utc());
        self.recipes
            .insert(&recipe)
            .await
            .map_err(map_recipe_error)?;
        info!(recipe_id = %recipe.id, author = %author, "draft created");
        Ok(recipe)
    }

    async fn get_draft(&self, author: &UserId, id: &RecipeId) -> Result<Recipe, Error> {
        self.owned_draft(author, id).await
    }

    async fn update(
        &self,
        author: &UserId,
        id: &RecipeId,
        form: RecipeForm,
    ) -> Result<Recipe, Error> {
        let mut recipe = self.owned_draft(author, id).await?;
        let draft = validate_recipe(&form)?;
        recipe.apply_draft(draft, self.clock.utc());

        let updated = self
            .recipes
            .update(&recipe)
            .await
            .map_err(map_recipe_error)?;
        if !updated {
            return Err(Error::not_found(DRAFT_NOT_FOUND_MESSAGE));
        }
        info!(recipe_id = %recipe.id, "draft updated");
        Ok(recipe)
    }

    async fn delete(&self, author: &UserId, id: &RecipeId) -> Result<(), Error> {
        let recipe = self.owned_draft(author, id).await?;
        let deleted = self
            .recipes
            .delete(&recipe.id)
            .await
            .map_err(map_recipe_error)?;
        if !deleted {
            return Err(Error::not_found(DRAFT_NOT_FOUND_MESSAGE));
        }
        info!(recipe_id = %recipe.id, "draft deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "author_recipes_service_tests.rs"]
mod tests;
