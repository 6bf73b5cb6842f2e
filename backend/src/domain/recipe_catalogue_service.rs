//! Public catalogue of published recipes.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageNumber, PaginationConfig, paginate};
use tracing::debug;

use crate::domain::author_recipes_service::map_recipe_error;
use crate::domain::ports::{
    CategoryListing, PublishedRecipeFilter, RecipeCatalogue, RecipeOrder, RecipeRepository,
    SearchListing,
};
use crate::domain::{CategoryId, Error, Recipe, RecipeId};

/// Catalogue service implementing the [`RecipeCatalogue`] driving port.
///
/// Page size and navigation window are fixed at construction.
#[derive(Clone)]
pub struct RecipeCatalogueService<R> {
    recipes: Arc<R>,
    pagination: PaginationConfig,
}

impl<R> RecipeCatalogueService<R> {
    pub fn new(recipes: Arc<R>, pagination: PaginationConfig) -> Self {
        Self {
            recipes,
            pagination,
        }
    }
}

impl<R> RecipeCatalogueService<R>
where
    R: RecipeRepository,
{
    async fn published(&self, filter: PublishedRecipeFilter) -> Result<Vec<Recipe>, Error> {
        self.recipes
            .list_published(RecipeOrder::NewestFirst, filter)
            .await
            .map_err(map_recipe_error)
    }
}

#[async_trait]
impl<R> RecipeCatalogue for RecipeCatalogueService<R>
where
    R: RecipeRepository,
{
    async fn home(&self, page: PageNumber) -> Result<Page<Recipe>, Error> {
        let recipes = self.published(PublishedRecipeFilter::All).await?;
        Ok(paginate(page, recipes, &self.pagination))
    }

    async fn category(&self, id: CategoryId, page: PageNumber) -> Result<CategoryListing, Error> {
        let category = self
            .recipes
            .find_category(id)
            .await
            .map_err(map_recipe_error)?
            .ok_or_else(|| Error::not_found(format!("category {id} not found")))?;

        let recipes = self.published(PublishedRecipeFilter::Category(id)).await?;
        if recipes.is_empty() {
            debug!(category_id = %id, "category has no published recipes");
            return Err(Error::not_found(format!(
                "category {id} has no published recipes"
            )));
        }

        Ok(CategoryListing {
            category,
            recipes: paginate(page, recipes, &self.pagination),
        })
    }

    async fn search(&self, term: &str, page: PageNumber) -> Result<SearchListing, Error> {
        let term = term.trim();
        if term.is_empty() {
            return Err(Error::not_found("search term must not be blank"));
        }

        let recipes = self
            .published(PublishedRecipeFilter::Search(term.to_owned()))
            .await?;
        Ok(SearchListing {
            term: term.to_owned(),
            recipes: paginate(page, recipes, &self.pagination),
        })
    }

    async fn detail(&self, id: &RecipeId) -> Result<Recipe, Error> {
        self.recipes
            .find_published(id)
            .await
            .map_err(map_recipe_error)?
            .ok_or_else(|| Error::not_found("recipe not found"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ports::MockRecipeRepository;
    use crate::domain::{Category, ErrorCode, RecipeForm, UserId, validate_recipe};

    fn recipe(title: &str) -> Recipe {
        let form = RecipeForm {
            title: title.into(),
            description: "Twenty characters or more of description.".into(),
            preparation_time: "10".into(),
            preparation_time_unit: "Minutes".into(),
            servings: "2".into(),
            servings_unit: "People".into(),
            preparation_steps: "x".repeat(120),
            cover: None,
        };
        let draft = validate_recipe(&form).expect("valid draft");
        let mut recipe = Recipe::new_draft(
            RecipeId::random(),
            UserId::random(),
            draft,
            Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        );
        recipe.is_published = true;
        recipe
    }

    #[fixture]
    fn pagination() -> PaginationConfig {
        PaginationConfig::new(2, 4).expect("non-zero config")
    }

    fn catalogue(
        recipes: MockRecipeRepository,
        pagination: PaginationConfig,
    ) -> RecipeCatalogueService<MockRecipeRepository> {
        RecipeCatalogueService::new(Arc::new(recipes), pagination)
    }

    #[rstest]
    #[tokio::test]
    async fn home_paginates_newest_first(pagination: PaginationConfig) {
        let mut repo = MockRecipeRepository::new();
        repo.expect_list_published()
            .withf(|order, filter| {
                *order == RecipeOrder::NewestFirst && *filter == PublishedRecipeFilter::All
            })
            .return_once(|_, _| {
                Ok(vec![
                    recipe("Recipe number one"),
                    recipe("Recipe number two"),
                    recipe("Recipe number three"),
                ])
            });

        let page = catalogue(repo, pagination)
            .home(PageNumber::new(2))
            .await
            .expect("home listing");

        assert_eq!(page.current_page(), 2);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.items().len(), 1);
        assert_eq!(page.items()[0].title, "Recipe number three");
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_category_is_not_found(pagination: PaginationConfig) {
        let mut repo = MockRecipeRepository::new();
        repo.expect_find_category().return_once(|_| Ok(None));
        repo.expect_list_published().never();

        let error = catalogue(repo, pagination)
            .category(CategoryId::new(9), PageNumber::FIRST)
            .await
            .expect_err("unknown category");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_category_is_not_found(pagination: PaginationConfig) {
        let mut repo = MockRecipeRepository::new();
        repo.expect_find_category().return_once(|id| {
            Ok(Some(Category {
                id,
                name: "Desserts".into(),
            }))
        });
        repo.expect_list_published().return_once(|_, _| Ok(Vec::new()));

        let error = catalogue(repo, pagination)
            .category(CategoryId::new(1), PageNumber::FIRST)
            .await
            .expect_err("empty category");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn category_listing_carries_category(pagination: PaginationConfig) {
        let mut repo = MockRecipeRepository::new();
        repo.expect_find_category().return_once(|id| {
            Ok(Some(Category {
                id,
                name: "Desserts".into(),
            }))
        });
        repo.expect_list_published()
            .withf(|_, filter| *filter == PublishedRecipeFilter::Category(CategoryId::new(1)))
            .return_once(|_, _| Ok(vec![recipe("Sticky toffee pudding")]));

        let listing = catalogue(repo, pagination)
            .category(CategoryId::new(1), PageNumber::FIRST)
            .await
            .expect("category listing");
        assert_eq!(listing.category.name, "Desserts");
        assert_eq!(listing.recipes.total_items(), 1);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[tokio::test]
    async fn blank_search_is_not_found(pagination: PaginationConfig, #[case] term: &str) {
        let mut repo = MockRecipeRepository::new();
        repo.expect_list_published().never();

        let error = catalogue(repo, pagination)
            .search(term, PageNumber::FIRST)
            .await
            .expect_err("blank term");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn search_trims_and_echoes_term(pagination: PaginationConfig) {
        let mut repo = MockRecipeRepository::new();
        repo.expect_list_published()
            .withf(|_, filter| *filter == PublishedRecipeFilter::Search("cake".into()))
            .return_once(|_, _| Ok(Vec::new()));

        let listing = catalogue(repo, pagination)
            .search("  cake ", PageNumber::FIRST)
            .await
            .expect("search listing");
        assert_eq!(listing.term, "cake");
        assert!(listing.recipes.items().is_empty());
        assert_eq!(listing.recipes.total_pages(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn detail_of_unpublished_recipe_is_not_found(pagination: PaginationConfig) {
        let mut repo = MockRecipeRepository::new();
        repo.expect_find_published().return_once(|_| Ok(None));

        let error = catalogue(repo, pagination)
            .detail(&RecipeId::random())
            .await
            .expect_err("missing recipe");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
