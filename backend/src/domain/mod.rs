//! Domain primitives, validators and services.
//!
//! Purpose: define the strongly typed recipe and author model, the pure form
//! validators, and the services that sit between inbound adapters and the
//! storage ports. Nothing here knows about HTTP or a concrete store.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable identifier.
//! - FieldErrors: accumulated per-field validation failures.
//! - Author, Recipe, Category: core aggregates.
//! - validate_registration / validate_recipe: pure form validators.
//! - AuthorAccountsService, AuthorRecipesService, RecipeCatalogueService:
//!   implementations of the driving ports in [`ports`].

pub mod auth;
pub mod author_accounts_service;
pub mod author_recipes_service;
pub mod error;
pub mod field_errors;
pub mod password;
pub mod ports;
pub mod recipe;
pub mod recipe_catalogue_service;
pub mod registration;
pub mod slug;
pub mod trace_id;
pub mod user;

pub use self::auth::LoginCredentials;
pub use self::author_accounts_service::AuthorAccountsService;
pub use self::author_recipes_service::AuthorRecipesService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::field_errors::{FieldError, FieldErrorCode, FieldErrors};
pub use self::password::{PasswordHash, WEAK_PASSWORD_MESSAGE, is_strong_password};
pub use self::recipe::{
    Category, CategoryId, InvalidRecipeId, PreparationTimeUnit, Recipe, RecipeDraft, RecipeForm,
    RecipeId, ServingsUnit, validate_recipe,
};
pub use self::recipe_catalogue_service::RecipeCatalogueService;
pub use self::registration::{
    RegistrationForm, RegistrationLookups, ValidatedRegistration, validate_registration,
};
pub use self::slug::slugify;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Author, AuthorAccount, Email, NAME_MAX, UserId, UserValidationError, Username};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use cookbook::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
