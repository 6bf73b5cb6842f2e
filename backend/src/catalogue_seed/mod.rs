//! Startup wiring for the seed catalogue.
//!
//! Publishing has no HTTP route, so a fresh server only shows recipes when
//! this seed runs.

mod config;
mod startup;

pub use config::CatalogueSeedSettings;
pub use startup::{
    CatalogueSeed, SeedCategory, SeedOutcome, SeedRecipe, StartupSeedingError,
    apply_catalogue_seed, seed_catalogue_on_startup,
};
