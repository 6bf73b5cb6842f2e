//! Recipe aggregate and its catalogue vocabulary.
//!
//! Authors own [`Recipe`]s; a recipe is a draft until an editor publishes it.
//! Drafts enter the domain through [`RecipeForm`] and leave validation as
//! [`RecipeDraft`].

mod draft;

pub use draft::{RecipeDraft, RecipeForm, validate_recipe};

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;
use super::slug::{is_valid_slug, slugify};

/// Error returned when a recipe identifier cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("recipe id must be a valid UUID")]
pub struct InvalidRecipeId;

/// Stable recipe identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(Uuid);

impl RecipeId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for RecipeId {
    type Err = InvalidRecipeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self).map_err(|_| InvalidRecipeId)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u32);

impl CategoryId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editorial grouping of published recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

macro_rules! choice_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every accepted choice, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.as_str() == s)
                    .ok_or(())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    /// Unit of [`Recipe::preparation_time`].
    pub enum PreparationTimeUnit { Minutes, Hours }
}

choice_enum! {
    /// Unit of [`Recipe::servings`].
    pub enum ServingsUnit { Portions, Unit, People }
}

/// Persisted recipe.
///
/// ## Invariants
/// - `slug` is derived from `title` whenever the title is written.
/// - Recipes written through the author dashboard are unpublished and their
///   steps are plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub preparation_time: u32,
    pub preparation_time_unit: PreparationTimeUnit,
    pub servings: u32,
    pub servings_unit: ServingsUnit,
    pub preparation_steps: String,
    pub preparation_steps_is_html: bool,
    pub cover: Option<String>,
    pub is_published: bool,
    pub category: Option<Category>,
    pub author: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Create an unpublished recipe owned by `author`.
    pub fn new_draft(
        id: RecipeId,
        author: UserId,
        draft: RecipeDraft,
        now: DateTime<Utc>,
    ) -> Self {
        let mut recipe = Self {
            id,
            title: String::new(),
            slug: String::new(),
            description: String::new(),
            preparation_time: 0,
            preparation_time_unit: PreparationTimeUnit::Minutes,
            servings: 0,
            servings_unit: ServingsUnit::Portions,
            preparation_steps: String::new(),
            preparation_steps_is_html: false,
            cover: None,
            is_published: false,
            category: None,
            author,
            created_at: now,
            updated_at: now,
        };
        recipe.apply_draft(draft, now);
        recipe
    }

    /// Overwrite the editable fields from `draft`; the recipe returns to
    /// draft state with plain-text steps.
    pub fn apply_draft(&mut self, draft: RecipeDraft, now: DateTime<Utc>) {
        let RecipeDraft {
            title,
            description,
            preparation_time,
            preparation_time_unit,
            servings,
            servings_unit,
            preparation_steps,
            cover,
        } = draft;

        self.slug = slugify(&title);
        debug_assert!(is_valid_slug(&self.slug), "slugify yields valid slugs");
        self.title = title;
        self.description = description;
        self.preparation_time = preparation_time;
        self.preparation_time_unit = preparation_time_unit;
        self.servings = servings;
        self.servings_unit = servings_unit;
        self.preparation_steps = preparation_steps;
        self.preparation_steps_is_html = false;
        if cover.is_some() {
            self.cover = cover;
        }
        self.is_published = false;
        self.updated_at = now;
    }

    /// Case-insensitive match of `term` against title or description.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests;
