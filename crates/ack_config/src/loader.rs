use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat, Map};
use tracing::debug;

use crate::{AckConfig, ConfigError, Result};

const ENV_PREFIX: &str = "ACKMATE";

/// Loads [`AckConfig`] from, in increasing priority: built-in defaults, a
/// TOML file, and `ACKMATE_*` environment variables.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    required: bool,
    env: Option<Map<String, String>>,
}

impl Default for ConfigLoader {
    /// Reads `<config dir>/ackmate/ackmate.toml` when it exists.
    fn default() -> Self {
        Self { file: Self::user_config_path(), required: false, env: None }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `path` instead of the user config file. The file must exist.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self.required = true;
        self
    }

    /// Skips the config file entirely.
    pub fn without_file(mut self) -> Self {
        self.file = None;
        self
    }

    /// Reads environment overrides from `vars` instead of the process
    /// environment.
    pub fn env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ackmate").join("ackmate.toml"))
    }

    pub fn load(&self) -> Result<AckConfig> {
        let mut builder = Config::builder();

        if let Some(path) = &self.file {
            if self.required && !path.exists() {
                return Err(ConfigError::NotFound(path.clone()));
            }
            debug!(path = %path.display(), "Loading config file");
            builder = builder
                .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(self.env.clone()),
        );

        Ok(builder.build()?.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::ColorMode;

    fn no_env() -> Vec<(String, String)> {
        Vec::new()
    }

    #[test]
    fn test_defaults_without_sources() {
        let actual = ConfigLoader::new().without_file().env_vars(no_env()).load().unwrap();
        let expected = AckConfig::default();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_file_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ackmate.toml");
        fs::write(&path, "context = 3\ncolor = \"never\"\nmax_count = 10\n").unwrap();

        let actual = ConfigLoader::new().file(&path).env_vars(no_env()).load().unwrap();

        let expected = AckConfig::default()
            .context(3usize)
            .color(ColorMode::Never)
            .max_count(10u64);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ackmate.toml");
        fs::write(&path, "context = 3\nhidden = false\n").unwrap();

        let actual = ConfigLoader::new()
            .file(&path)
            .env_vars([("ACKMATE_CONTEXT", "1"), ("ACKMATE_HIDDEN", "true")])
            .load()
            .unwrap();

        assert_eq!(actual.context, 1);
        assert!(actual.hidden);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let actual = ConfigLoader::new().file(&path).env_vars(no_env()).load();

        assert!(matches!(actual, Err(ConfigError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_invalid_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ackmate.toml");
        fs::write(&path, "color = \"sometimes\"\n").unwrap();

        let actual = ConfigLoader::new().file(&path).env_vars(no_env()).load();

        assert!(matches!(actual, Err(ConfigError::Load(_))));
    }
}
