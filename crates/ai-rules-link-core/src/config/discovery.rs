//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Project config file name, searched from the working directory upwards
pub const PROJECT_CONFIG_FILE: &str = ".ai-rules-link.toml";

/// Global config path relative to the platform config directory
pub const GLOBAL_CONFIG_FILE: &str = "ai-rules-link/config.toml";

/// Configuration file locations in order of precedence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFiles {
    /// Config from CLI flag (highest precedence)
    pub cli: Option<PathBuf>,
    /// Project config
    pub project: Option<PathBuf>,
    /// Global config
    pub global: Option<PathBuf>,
}

impl ConfigFiles {
    /// Discovered files, lowest precedence first
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [&self.global, &self.project, &self.cli]
            .into_iter()
            .filter_map(|path| path.as_deref())
    }
}

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Discover all available configuration files
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given config file does not exist.
    pub fn discover(cli_path: Option<&Path>, start_dir: &Path) -> Result<ConfigFiles> {
        let cli = match cli_path {
            Some(path) if path.is_file() => Some(path.to_path_buf()),
            Some(path) => anyhow::bail!("Config file not found: {}", path.display()),
            None => None,
        };

        Ok(ConfigFiles {
            cli,
            project: Self::find_file(start_dir, PROJECT_CONFIG_FILE),
            global: Self::find_global_config(),
        })
    }

    /// Find a config file in `start` or its ancestors
    fn find_file(start: &Path, name: &str) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Find global config in the platform config directory
    fn find_global_config() -> Option<PathBuf> {
        let global_config = dirs::config_dir()?.join(GLOBAL_CONFIG_FILE);
        global_config.is_file().then_some(global_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_cli_config() {
        let tmp = TempDir::new().unwrap();
        let cli_config = tmp.path().join("custom.toml");
        fs::write(&cli_config, "# config").unwrap();

        let files = ConfigDiscovery::discover(Some(&cli_config), tmp.path()).unwrap();

        assert_eq!(files.cli, Some(cli_config));
    }

    #[test]
    fn test_discover_cli_config_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let result = ConfigDiscovery::discover(Some(&tmp.path().join("absent.toml")), tmp.path());

        assert!(result.is_err());
    }

    #[test]
    fn test_project_config_found_in_ancestor() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join(PROJECT_CONFIG_FILE), "").unwrap();

        let files = ConfigDiscovery::discover(None, &nested).unwrap();

        assert_eq!(files.project, Some(tmp.path().join(PROJECT_CONFIG_FILE)));
        assert!(files.cli.is_none());
    }
}
