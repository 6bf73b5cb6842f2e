//! Author account and dashboard HTTP handlers.
//!
//! ```text
//! POST   /api/v1/authors/register
//! POST   /api/v1/authors/login
//! POST   /api/v1/authors/logout
//! GET    /api/v1/authors/dashboard
//! POST   /api/v1/authors/dashboard/recipes
//! GET    /api/v1/authors/dashboard/recipes/{id}
//! PUT    /api/v1/authors/dashboard/recipes/{id}
//! DELETE /api/v1/authors/dashboard/recipes/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Author, LoginCredentials, RegistrationForm};
use crate::inbound::http::ApiResult;
use crate::inbound::http::recipes::parse_recipe_id;
use crate::inbound::http::recipes_dto::{RecipeRequest, RecipeResponse};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Registration payload. Missing fields count as blank.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub password: String,
    pub password2: String,
}

impl From<RegisterRequest> for RegistrationForm {
    fn from(value: RegisterRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            username: value.username,
            email: value.email,
            password: value.password.into(),
            password2: value.password2.into(),
        }
    }
}

/// Login payload.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    #[schema(example = "ada")]
    pub username: String,
    pub password: String,
}

/// Public view of an author; never carries password material.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

impl From<Author> for AuthorResponse {
    fn from(value: Author) -> Self {
        Self {
            id: value.id.to_string(),
            username: value.username.into(),
            email: value.email.map(String::from),
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

/// Create an author account.
#[utoipa::path(
    post,
    path = "/api/v1/authors/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "registerAuthor",
    security([])
)]
#[post("/authors/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let author = state
        .accounts
        .register(RegistrationForm::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(AuthorResponse::from(author)))
}

/// Authenticate an author and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/authors/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = AuthorResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "login",
    security([])
)]
#[post("/authors/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<AuthorResponse>> {
    let LoginRequest { username, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&username, &password)?;
    let author = state.accounts.authenticate(&credentials).await?;
    session.persist_author(&author.id)?;
    info!(user_id = %author.id, "author logged in");
    Ok(web::Json(AuthorResponse::from(author)))
}

/// End the current session. Succeeds whether or not anyone was signed in.
#[utoipa::path(
    post,
    path = "/api/v1/authors/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["authors"],
    operation_id = "logout"
)]
#[post("/authors/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

/// The signed-in author's unpublished recipes, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/authors/dashboard",
    responses(
        (status = 200, description = "Draft recipes", body = [RecipeResponse]),
        (status = 401, description = "Login required", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "listDrafts"
)]
#[get("/authors/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<RecipeResponse>>> {
    let author = session.require_author()?;
    let drafts = state.recipes.list_drafts(&author).await?;
    Ok(web::Json(
        drafts.into_iter().map(RecipeResponse::from).collect(),
    ))
}

/// Create a draft recipe.
#[utoipa::path(
    post,
    path = "/api/v1/authors/dashboard/recipes",
    request_body = RecipeRequest,
    responses(
        (status = 201, description = "Draft created", body = RecipeResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "createDraft"
)]
#[post("/authors/dashboard/recipes")]
pub async fn create_draft(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<RecipeRequest>,
) -> ApiResult<HttpResponse> {
    let author = session.require_author()?;
    let recipe = state
        .recipes
        .create(&author, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(RecipeResponse::from(recipe)))
}

/// Fetch a draft for editing.
#[utoipa::path(
    get,
    path = "/api/v1/authors/dashboard/recipes/{id}",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 200, description = "Draft recipe", body = RecipeResponse),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Not one of the author's drafts", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "getDraft"
)]
#[get("/authors/dashboard/recipes/{id}")]
pub async fn get_draft(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<RecipeResponse>> {
    let author = session.require_author()?;
    let id = parse_recipe_id(&path)?;
    let recipe = state.recipes.get_draft(&author, &id).await?;
    Ok(web::Json(RecipeResponse::from(recipe)))
}

/// Overwrite a draft.
#[utoipa::path(
    put,
    path = "/api/v1/authors/dashboard/recipes/{id}",
    params(("id" = String, Path, description = "Recipe id")),
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Draft updated", body = RecipeResponse),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Not one of the author's drafts", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "updateDraft"
)]
#[put("/authors/dashboard/recipes/{id}")]
pub async fn update_draft(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<RecipeRequest>,
) -> ApiResult<web::Json<RecipeResponse>> {
    let author = session.require_author()?;
    let id = parse_recipe_id(&path)?;
    let recipe = state
        .recipes
        .update(&author, &id, payload.into_inner().into())
        .await?;
    Ok(web::Json(RecipeResponse::from(recipe)))
}

/// Delete a draft.
#[utoipa::path(
    delete,
    path = "/api/v1/authors/dashboard/recipes/{id}",
    params(("id" = String, Path, description = "Recipe id")),
    responses(
        (status = 204, description = "Draft deleted"),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "Not one of the author's drafts", body = ErrorSchema)
    ),
    tags = ["authors"],
    operation_id = "deleteDraft"
)]
#[delete("/authors/dashboard/recipes/{id}")]
pub async fn delete_draft(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let author = session.require_author()?;
    let id = parse_recipe_id(&path)?;
    state.recipes.delete(&author, &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "authors_tests.rs"]
mod tests;
