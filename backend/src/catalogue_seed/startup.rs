//! Startup publishing of the seed catalogue.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use mockable::Clock;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::catalogue_seed::config::CatalogueSeedSettings;
use crate::domain::ports::{RecipePersistenceError, RecipeRepository};
use crate::domain::{
    Category, CategoryId, FieldErrors, Recipe, RecipeForm, RecipeId, UserId, validate_recipe,
};
use crate::outbound::InMemoryRecipeRepository;

/// Errors returned while publishing the seed catalogue.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seed file could not be read.
    #[error("failed to read catalogue seed at {path}: {source}")]
    SeedRead {
        /// Path to the seed file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Seed file is not a valid catalogue document.
    #[error("catalogue seed parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A seed recipe fails the draft rules.
    #[error("seed recipe {title:?} is invalid: {errors}")]
    InvalidRecipe {
        /// Title as written in the seed.
        title: String,
        /// Every rule the recipe broke.
        errors: FieldErrors,
    },
    /// A seed recipe names a category the seed does not define.
    #[error("seed recipe {title:?} names unknown category {category}")]
    UnknownCategory {
        /// Title as written in the seed.
        title: String,
        /// The undefined category.
        category: CategoryId,
    },
    /// The repository refused to publish a stored recipe.
    #[error("seed recipe {title:?} could not be published")]
    Unpublished {
        /// Title as written in the seed.
        title: String,
    },
    /// Storing a recipe failed.
    #[error("catalogue seed persistence error: {0}")]
    Persistence(#[from] RecipePersistenceError),
}

/// A catalogue document: categories plus recipes listed oldest first.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueSeed {
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    pub recipes: Vec<SeedRecipe>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCategory {
    pub id: CategoryId,
    pub name: String,
}

/// One published recipe, in the same shape as a dashboard submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecipe {
    pub title: String,
    pub description: String,
    pub preparation_time: u32,
    pub preparation_time_unit: String,
    pub servings: u32,
    pub servings_unit: String,
    pub preparation_steps: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryId>,
}

impl SeedRecipe {
    fn form(&self) -> RecipeForm {
        RecipeForm {
            title: self.title.clone(),
            description: self.description.clone(),
            preparation_time: self.preparation_time.to_string(),
            preparation_time_unit: self.preparation_time_unit.clone(),
            servings: self.servings.to_string(),
            servings_unit: self.servings_unit.clone(),
            preparation_steps: self.preparation_steps.clone(),
            cover: self.cover.clone(),
        }
    }
}

impl CatalogueSeed {
    /// Parse a catalogue document.
    ///
    /// # Errors
    /// Returns [`StartupSeedingError::Parse`] for malformed JSON or fields
    /// of the wrong type, such as a negative serving count.
    pub fn from_json(text: &str) -> Result<Self, StartupSeedingError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// What a seeding run published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Generated author owning every seeded recipe.
    pub author: UserId,
    pub categories: usize,
    pub recipes: usize,
}

/// Publish the seed catalogue on startup when enabled.
///
/// # Examples
///
/// ```rust,no_run
/// use cookbook::catalogue_seed::{CatalogueSeedSettings, seed_catalogue_on_startup};
/// use cookbook::outbound::InMemoryRecipeRepository;
/// use mockable::DefaultClock;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = CatalogueSeedSettings {
///     enabled: true,
///     path: None,
/// };
/// let recipes = InMemoryRecipeRepository::new();
/// let outcome = seed_catalogue_on_startup(&settings, &recipes, &DefaultClock).await?;
/// assert!(outcome.is_some());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Fails when the seed cannot be read or parsed, when any recipe is invalid,
/// or when storage rejects a write.
pub async fn seed_catalogue_on_startup(
    settings: &CatalogueSeedSettings,
    recipes: &InMemoryRecipeRepository,
    clock: &dyn Clock,
) -> Result<Option<SeedOutcome>, StartupSeedingError> {
    if !settings.enabled {
        info!(reason = "disabled", "catalogue seeding skipped");
        return Ok(None);
    }

    let path = settings.path();
    let seed = load_seed(&path)?;
    let outcome = apply_catalogue_seed(&seed, recipes, clock).await?;
    info!(
        path = %path.display(),
        author_id = %outcome.author,
        categories = outcome.categories,
        recipes = outcome.recipes,
        "catalogue seed published"
    );
    Ok(Some(outcome))
}

/// Validate every seed recipe, then store and publish them all under one
/// generated author.
///
/// Nothing is written when any recipe is invalid or names an undefined
/// category.
///
/// # Errors
/// See [`StartupSeedingError`].
pub async fn apply_catalogue_seed(
    seed: &CatalogueSeed,
    recipes: &InMemoryRecipeRepository,
    clock: &dyn Clock,
) -> Result<SeedOutcome, StartupSeedingError> {
    let defined: BTreeSet<CategoryId> =
        seed.categories.iter().map(|category| category.id).collect();
    let author = UserId::random();
    let now = clock.utc();

    let mut staged = Vec::with_capacity(seed.recipes.len());
    for entry in &seed.recipes {
        let draft =
            validate_recipe(&entry.form()).map_err(|errors| StartupSeedingError::InvalidRecipe {
                title: entry.title.clone(),
                errors,
            })?;
        if let Some(category) = entry.category.filter(|id| !defined.contains(id)) {
            return Err(StartupSeedingError::UnknownCategory {
                title: entry.title.clone(),
                category,
            });
        }
        let recipe = Recipe::new_draft(RecipeId::random(), author.clone(), draft, now);
        staged.push((recipe, entry.category));
    }

    for category in &seed.categories {
        recipes
            .add_category(Category {
                id: category.id,
                name: category.name.clone(),
            })
            .await;
    }
    for (recipe, category) in &staged {
        recipes.insert(recipe).await?;
        if !recipes.publish(&recipe.id, *category).await {
            return Err(StartupSeedingError::Unpublished {
                title: recipe.title.clone(),
            });
        }
    }

    Ok(SeedOutcome {
        author,
        categories: seed.categories.len(),
        recipes: staged.len(),
    })
}

fn load_seed(path: &Path) -> Result<CatalogueSeed, StartupSeedingError> {
    let read_error = |source| StartupSeedingError::SeedRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "seed path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    CatalogueSeed::from_json(&contents)
}
