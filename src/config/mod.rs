use serde::Deserialize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Polygon data file read when neither the CLI nor a config file names one
pub const DEFAULT_POLYGON_FILE: &str = "tests.txt";

fn default_polygons() -> PathBuf {
    PathBuf::from(DEFAULT_POLYGON_FILE)
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    /// Polygon data file
    #[serde(default = "default_polygons")]
    pub polygons: PathBuf,
    /// Log at debug level
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            polygons: default_polygons(),
            verbose: default_verbose(),
        }
    }
}

/// Result of searching the standard config locations
#[derive(Debug, Default)]
pub struct Discovered {
    pub config: Option<FileConfig>,
    /// Files that exist but could not be read or parsed, with the reason
    pub rejected: Vec<(PathBuf, String)>,
}

impl FileConfig {
    /// Read an explicitly requested config file. A missing file is an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Try the standard locations in order and take the first file that parses
    ///
    /// Nothing is logged here since this runs before the logger is set up;
    /// rejected files are handed back to the caller instead.
    pub fn discover() -> Discovered {
        Self::discover_in(&get_config_paths())
    }

    fn discover_in(paths: &[PathBuf]) -> Discovered {
        let mut discovered = Discovered::default();

        for path in paths {
            if !path.exists() {
                continue;
            }
            let contents = match std::fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(e) => {
                    discovered.rejected.push((path.clone(), e.to_string()));
                    continue;
                }
            };
            match toml::from_str(&contents) {
                Ok(config) => {
                    discovered.config = Some(config);
                    break;
                }
                Err(e) => discovered.rejected.push((path.clone(), e.to_string())),
            }
        }

        discovered
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("polystat.toml"));
    paths.push(PathBuf::from(".polystat.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("polystat").join("config.toml"));
        paths.push(config_dir.join("polystat.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".polystat.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_keys_missing() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert_eq!(config.polygons, PathBuf::from("tests.txt"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig =
            toml::from_str("polygons = \"data/shapes.txt\"\nverbose = true\n").unwrap();
        assert_eq!(config.polygons, PathBuf::from("data/shapes.txt"));
        assert!(config.verbose);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempdir().unwrap();
        let err = FileConfig::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_from_path_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "verbose = \"very\"").unwrap();
        assert!(FileConfig::from_path(&path).is_err());
    }

    #[test]
    fn test_discover_skips_bad_files_and_takes_first_good() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let bad = dir.path().join("bad.toml");
        let good = dir.path().join("good.toml");
        let later = dir.path().join("later.toml");
        fs::write(&bad, "polygons = [").unwrap();
        fs::write(&good, "polygons = \"good.txt\"").unwrap();
        fs::write(&later, "polygons = \"later.txt\"").unwrap();

        let discovered = FileConfig::discover_in(&[missing, bad.clone(), good, later]);

        assert_eq!(
            discovered.config.map(|c| c.polygons),
            Some(PathBuf::from("good.txt"))
        );
        assert_eq!(discovered.rejected.len(), 1);
        assert_eq!(discovered.rejected[0].0, bad);
    }

    #[test]
    fn test_discover_nothing_found() {
        let dir = tempdir().unwrap();
        let discovered = FileConfig::discover_in(&[dir.path().join("a.toml")]);
        assert!(discovered.config.is_none());
        assert!(discovered.rejected.is_empty());
    }
}
