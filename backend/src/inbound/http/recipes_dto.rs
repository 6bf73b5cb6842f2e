//! Request and response payloads shared by the recipe endpoints.

use pagination::{Page, PageWindow};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{Category, Recipe, RecipeForm};

/// Draft payload for `POST`/`PUT` on the dashboard.
///
/// Numeric fields accept a JSON number or a string so that form-encoded
/// clients and JSON clients get the same validation messages.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeRequest {
    pub title: String,
    pub description: String,
    #[schema(value_type = Object, example = 30)]
    pub preparation_time: Value,
    #[schema(example = "Minutes")]
    pub preparation_time_unit: String,
    #[schema(value_type = Object, example = 4)]
    pub servings: Value,
    #[schema(example = "Portions")]
    pub servings_unit: String,
    pub preparation_steps: String,
    pub cover: Option<String>,
}

fn field_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

impl From<RecipeRequest> for RecipeForm {
    fn from(value: RecipeRequest) -> Self {
        Self {
            title: value.title,
            description: value.description,
            preparation_time: field_text(value.preparation_time),
            preparation_time_unit: value.preparation_time_unit,
            servings: field_text(value.servings),
            servings_unit: value.servings_unit,
            preparation_steps: value.preparation_steps,
            cover: value.cover,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: u32,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
        }
    }
}

/// Recipe as returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub title: String,
    #[schema(example = "lemon-drizzle-cake")]
    pub slug: String,
    pub description: String,
    pub preparation_time: u32,
    pub preparation_time_unit: String,
    pub servings: u32,
    pub servings_unit: String,
    pub preparation_steps: String,
    pub preparation_steps_is_html: bool,
    pub cover: Option<String>,
    pub is_published: bool,
    pub category: Option<CategoryResponse>,
    pub author_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(value: Recipe) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title,
            slug: value.slug,
            description: value.description,
            preparation_time: value.preparation_time,
            preparation_time_unit: value.preparation_time_unit.to_string(),
            servings: value.servings,
            servings_unit: value.servings_unit.to_string(),
            preparation_steps: value.preparation_steps,
            preparation_steps_is_html: value.preparation_steps_is_html,
            cover: value.cover,
            is_published: value.is_published,
            category: value.category.map(CategoryResponse::from),
            author_id: value.author.to_string(),
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// Page numbers to render as navigation links.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    #[schema(example = json!([1, 2, 3, 4]))]
    pub pages: Vec<usize>,
    pub current_page: usize,
    pub total_pages: usize,
    pub first_page_out_of_range: bool,
    pub last_page_out_of_range: bool,
}

impl From<&PageWindow> for NavigationResponse {
    fn from(value: &PageWindow) -> Self {
        Self {
            pages: value.pages().to_vec(),
            current_page: value.current_page(),
            total_pages: value.total_pages(),
            first_page_out_of_range: value.first_page_out_of_range(),
            last_page_out_of_range: value.last_page_out_of_range(),
        }
    }
}

/// One page of published recipes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipePageResponse {
    pub items: Vec<RecipeResponse>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub navigation: NavigationResponse,
}

impl From<Page<Recipe>> for RecipePageResponse {
    fn from(value: Page<Recipe>) -> Self {
        let navigation = NavigationResponse::from(value.navigation());
        let current_page = value.current_page();
        let total_pages = value.total_pages();
        let total_items = value.total_items();
        let page_size = value.page_size();
        Self {
            items: value
                .into_items()
                .into_iter()
                .map(RecipeResponse::from)
                .collect(),
            current_page,
            total_pages,
            total_items,
            page_size,
            navigation,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListingResponse {
    pub category: CategoryResponse,
    pub recipes: RecipePageResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchListingResponse {
    #[schema(example = "cake")]
    pub term: String,
    pub recipes: RecipePageResponse,
}
