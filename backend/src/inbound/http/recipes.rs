//! Public recipe catalogue HTTP handlers.
//!
//! ```text
//! GET /api/v1/recipes?page=2
//! GET /api/v1/recipes/search?q=cake&page=1
//! GET /api/v1/recipes/categories/{id}?page=1
//! GET /api/v1/recipes/{id}
//! ```

use actix_web::{get, web};
use pagination::PageNumber;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{CategoryId, Error, RecipeId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::recipes_dto::{
    CategoryListingResponse, RecipePageResponse, RecipeResponse, SearchListingResponse,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Page selector shared by the listings. Anything that is not a positive
/// integer selects the first page.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    #[param(example = "2")]
    pub page: Option<String>,
}

impl PageQuery {
    fn page_number(&self) -> PageNumber {
        PageNumber::parse(self.page.as_deref())
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Search term matched against title and description.
    #[param(example = "cake")]
    pub q: Option<String>,
    pub page: Option<String>,
}

/// Malformed ids name no recipe, so they are reported as missing.
pub(crate) fn parse_recipe_id(raw: &str) -> Result<RecipeId, Error> {
    raw.parse()
        .map_err(|_| Error::not_found("recipe not found"))
}

fn parse_category_id(raw: &str) -> Result<CategoryId, Error> {
    raw.parse::<u32>()
        .map(CategoryId::new)
        .map_err(|_| Error::not_found(format!("category {raw} not found")))
}

/// Published recipes, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    params(PageQuery),
    responses(
        (status = 200, description = "Published recipes", body = RecipePageResponse),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes",
    security([])
)]
#[get("/recipes")]
pub async fn home(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<RecipePageResponse>> {
    let page = state.catalogue.home(query.page_number()).await?;
    Ok(web::Json(page.into()))
}

/// Search published recipes by title or description.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching recipes", body = SearchListingResponse),
        (status = 404, description = "Blank search term", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "searchRecipes",
    security([])
)]
#[get("/recipes/search")]
pub async fn search(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<SearchListingResponse>> {
    let SearchQuery { q, page } = query.into_inner();
    let listing = state
        .catalogue
        .search(q.as_deref().unwrap_or_default(), PageNumber::parse(page.as_deref()))
        .await?;
    Ok(web::Json(SearchListingResponse {
        term: listing.term,
        recipes: listing.recipes.into(),
    }))
}

/// Published recipes of one category.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/categories/{id}",
    params(("id" = u32, Path, description = "Category id"), PageQuery),
    responses(
        (status = 200, description = "Category listing", body = CategoryListingResponse),
        (status = 404, description = "Unknown or empty category", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "listCategoryRecipes",
    security([])
)]
#[get("/recipes/categories/{id}")]
pub async fn category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<CategoryListingResponse>> {
    let id = parse_category_id(&path)?;
    let listing = state.catalogue.category(id, query.page_number()).await?;
    Ok(web::Json(CategoryListingResponse {
        category: listing.category.into(),
        recipes: listing.recipes.into(),
    }))
}

/// A single published recipe.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/{id}",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Recipe", body = RecipeResponse),
        (status = 404, description = "Not found or unpublished", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "getRecipe",
    security([])
)]
#[get("/recipes/{id}")]
pub async fn detail(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RecipeResponse>> {
    let id = parse_recipe_id(&path)?;
    let recipe = state.catalogue.detail(&id).await?;
    Ok(web::Json(recipe.into()))
}

#[cfg(test)]
#[path = "recipes_tests.rs"]
mod tests;
