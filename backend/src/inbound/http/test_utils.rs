//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use chrono::Utc;

use crate::domain::ports::{MockAuthorAccounts, MockAuthorRecipes, MockRecipeCatalogue};
use crate::domain::{Recipe, RecipeForm, RecipeId, UserId, validate_recipe};
use crate::inbound::http::state::HttpState;

pub const SESSION_COOKIE: &str = "session";

/// Session middleware with a fresh key per invocation and the `Secure` flag
/// disabled for plain HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE.to_owned())
        .cookie_secure(false)
        .build()
}

/// The session cookie set by `response`.
///
/// # Panics
/// Panics when the response carries no session cookie.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Handler state backed by mock driving ports. Unset expectations panic when
/// a handler reaches a port it should not.
pub fn mock_state(
    accounts: MockAuthorAccounts,
    recipes: MockAuthorRecipes,
    catalogue: MockRecipeCatalogue,
) -> HttpState {
    HttpState::new(Arc::new(accounts), Arc::new(recipes), Arc::new(catalogue))
}

/// A valid recipe owned by `author`, unpublished.
pub fn sample_recipe(author: &UserId, title: &str) -> Recipe {
    let form = RecipeForm {
        title: title.to_owned(),
        description: "A dependable weeknight favourite.".to_owned(),
        preparation_time: "25".to_owned(),
        preparation_time_unit: "Minutes".to_owned(),
        servings: "4".to_owned(),
        servings_unit: "People".to_owned(),
        preparation_steps: "Chop, simmer and season. ".repeat(5),
        cover: None,
    };
    let draft = validate_recipe(&form).expect("sample recipe is valid");
    Recipe::new_draft(RecipeId::random(), author.clone(), draft, Utc::now())
}
