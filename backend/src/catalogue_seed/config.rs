//! Catalogue seed configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

fn default_seed_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("catalogue-seed.json")
}

/// Controls publishing a fixed catalogue when the server starts.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOGUE_SEED")]
pub struct CatalogueSeedSettings {
    /// Publish the seed catalogue on startup.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Optional override for the seed file.
    pub path: Option<PathBuf>,
}

impl CatalogueSeedSettings {
    /// Return the configured seed file, falling back to the bundled fixture.
    pub fn path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(default_seed_path)
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> CatalogueSeedSettings {
        CatalogueSeedSettings::load_from_iter([OsString::from("cookbook")])
            .expect("config should load")
    }

    #[rstest]
    fn seeding_is_off_by_default() {
        let _guard = lock_env([
            ("CATALOGUE_SEED_ENABLED", None::<String>),
            ("CATALOGUE_SEED_PATH", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.enabled);
        assert_eq!(settings.path(), default_seed_path());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CATALOGUE_SEED_ENABLED", Some("true".to_owned())),
            ("CATALOGUE_SEED_PATH", Some("/tmp/recipes.json".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.enabled);
        assert_eq!(settings.path(), PathBuf::from("/tmp/recipes.json"));
    }
}
