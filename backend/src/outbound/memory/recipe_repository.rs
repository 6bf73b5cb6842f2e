//! In-memory `RecipeRepository` adapter.
//!
//! Also owns the editorial operations that have no HTTP surface: seeding
//! categories and publishing drafts.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::ports::{
    PublishedRecipeFilter, RecipeOrder, RecipePersistenceError, RecipeRepository,
};
use crate::domain::{Category, CategoryId, Recipe, RecipeId, UserId};

#[derive(Debug, Default)]
struct Store {
    /// Insertion order; listings sort stably on top of it.
    recipes: Vec<Recipe>,
    categories: BTreeMap<CategoryId, Category>,
}

impl Store {
    fn position(&self, id: &RecipeId) -> Option<usize> {
        self.recipes.iter().position(|recipe| recipe.id == *id)
    }

    fn find_mut(&mut self, id: &RecipeId) -> Option<&mut Recipe> {
        self.recipes.iter_mut().find(|recipe| recipe.id == *id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    store: RwLock<Store>,
}

/// Sort by creation time; equal timestamps keep the most recent insert first
/// for `NewestFirst`.
fn ordered<'a>(recipes: impl DoubleEndedIterator<Item = &'a Recipe>, order: RecipeOrder) -> Vec<Recipe> {
    let mut sorted: Vec<Recipe> = match order {
        RecipeOrder::NewestFirst => recipes.rev().cloned().collect(),
        RecipeOrder::OldestFirst => recipes.cloned().collect(),
    };
    match order {
        RecipeOrder::NewestFirst => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        RecipeOrder::OldestFirst => sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    sorted
}

impl PublishedRecipeFilter {
    fn admits(&self, recipe: &Recipe) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => recipe
                .category
                .as_ref()
                .is_some_and(|category| category.id == *id),
            Self::Search(term) => recipe.matches(term),
        }
    }
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or rename a category.
    pub async fn add_category(&self, category: Category) {
        let mut store = self.store.write().await;
        store.categories.insert(category.id, category);
    }

    /// Publish a stored recipe, optionally assigning a known category.
    ///
    /// Returns `false` when the recipe or the category does not exist.
    pub async fn publish(&self, id: &RecipeId, category: Option<CategoryId>) -> bool {
        let mut store = self.store.write().await;
        let category = match category {
            Some(category_id) => match store.categories.get(&category_id) {
                Some(found) => Some(found.clone()),
                None => return false,
            },
            None => None,
        };
        let Some(recipe) = store.find_mut(id) else {
            return false;
        };
        recipe.is_published = true;
        recipe.category = category;
        info!(recipe_id = %id, "recipe published");
        true
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn list_published(
        &self,
        order: RecipeOrder,
        filter: PublishedRecipeFilter,
    ) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let store = self.store.read().await;
        let matching = store
            .recipes
            .iter()
            .filter(|recipe| recipe.is_published && filter.admits(recipe))
            .collect::<Vec<_>>();
        Ok(ordered(matching.into_iter(), order))
    }

    async fn find_published(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipePersistenceError> {
        let store = self.store.read().await;
        Ok(store
            .recipes
            .iter()
            .find(|recipe| recipe.id == *id && recipe.is_published)
            .cloned())
    }

    async fn find_category(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, RecipePersistenceError> {
        Ok(self.store.read().await.categories.get(&id).cloned())
    }

    async fn list_by_author(
        &self,
        author: &UserId,
        published: bool,
    ) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let store = self.store.read().await;
        let owned = store
            .recipes
            .iter()
            .filter(|recipe| recipe.author == *author && recipe.is_published == published)
            .collect::<Vec<_>>();
        Ok(ordered(owned.into_iter(), RecipeOrder::NewestFirst))
    }

    async fn find_by_author(
        &self,
        author: &UserId,
        id: &RecipeId,
        published: bool,
    ) -> Result<Option<Recipe>, RecipePersistenceError> {
        let store = self.store.read().await;
        Ok(store
            .recipes
            .iter()
            .find(|recipe| {
                recipe.id == *id && recipe.author == *author && recipe.is_published == published
            })
            .cloned())
    }

    async fn insert(&self, recipe: &Recipe) -> Result<(), RecipePersistenceError> {
        let mut store = self.store.write().await;
        if store.position(&recipe.id).is_some() {
            return Err(RecipePersistenceError::query(format!(
                "recipe {} already exists",
                recipe.id
            )));
        }
        store.recipes.push(recipe.clone());
        Ok(())
    }

    async fn update(&self, recipe: &Recipe) -> Result<bool, RecipePersistenceError> {
        let mut store = self.store.write().await;
        let Some(stored) = store.find_mut(&recipe.id) else {
            return Ok(false);
        };
        *stored = recipe.clone();
        Ok(true)
    }

    async fn delete(&self, id: &RecipeId) -> Result<bool, RecipePersistenceError> {
        let mut store = self.store.write().await;
        let Some(index) = store.position(id) else {
            return Ok(false);
        };
        store.recipes.remove(index);
        Ok(true)
    }
}
