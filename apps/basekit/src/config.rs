//! Configuration discovery and effective settings resolution.
//!
//! basekit reads `basekit.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `prefix`: `Base`
//! - `output`: `human`
//! - `paths.components`: `src/components`
//! - `paths.tests`: `tests/components`
//! - `paths.stories`: `src/components`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{BasekitError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PREFIX: &str = "Base";
pub const DEFAULT_COMPONENTS_DIR: &str = "src/components";
pub const DEFAULT_TESTS_DIR: &str = "tests/components";
pub const DEFAULT_STORIES_DIR: &str = "src/components";

const CONFIG_NAMES: [&str; 3] = ["basekit.toml", "basekit.yaml", "basekit.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Directory layout section under `[paths]`.
pub struct PathsCfg {
    pub components: Option<String>,
    pub tests: Option<String>,
    pub stories: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `basekit.toml|yaml`.
pub struct BasekitConfig {
    pub prefix: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub paths: Option<PathsCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub prefix: String,
    pub output: String,
    pub components_dir: PathBuf,
    pub tests_dir: PathBuf,
    pub stories_dir: PathBuf,
    /// Config file the settings came from, if any.
    pub config_file: Option<PathBuf>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops at a `basekit.toml|yaml|yml`, a `package.json`, or a `.git` entry.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join("package.json").exists() || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Path of the config file under `root`, preferring TOML over YAML.
pub fn config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.is_file())
}

/// Load `BasekitConfig` from `basekit.toml` or `basekit.yaml|yml` if present.
///
/// A config file that cannot be read or parsed is an error, never a silent
/// fallback to defaults.
pub fn load_config(root: &Path) -> Result<Option<BasekitConfig>> {
    let Some(path) = config_file(root) else {
        return Ok(None);
    };
    let s = fs::read_to_string(&path).map_err(|e| BasekitError::io(&path, e))?;
    let is_toml = path.extension().map_or(false, |e| e == "toml");
    let parsed: std::result::Result<BasekitConfig, String> = if is_toml {
        toml::from_str(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&s).map_err(|e| e.to_string())
    };
    parsed
        .map(Some)
        .map_err(|message| BasekitError::Config { path, message })
}

/// Turn `--repo-root` (default `.`) into an absolute starting point.
fn absolute_start(cwd: &Path, cli_repo_root: Option<&str>) -> PathBuf {
    match cli_repo_root {
        Some(p) => cwd.join(p).components().collect(),
        None => cwd.to_path_buf(),
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_components_dir: Option<&str>,
) -> Result<Effective> {
    let cwd = std::env::current_dir().map_err(|e| BasekitError::io(Path::new("."), e))?;
    resolve_effective_in(&cwd, cli_repo_root, cli_output, cli_components_dir)
}

/// Same as [`resolve_effective`] with an explicit working directory.
pub fn resolve_effective_in(
    cwd: &Path,
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_components_dir: Option<&str>,
) -> Result<Effective> {
    let start = absolute_start(cwd, cli_repo_root);
    let repo_root = detect_repo_root(&start);
    let config_path = config_file(&repo_root);
    let cfg = load_config(&repo_root)?.unwrap_or_default();
    let paths = cfg.paths.unwrap_or_default();

    let prefix = cfg
        .prefix
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let components = cli_components_dir
        .map(|s| s.to_string())
        .or(paths.components)
        .unwrap_or_else(|| DEFAULT_COMPONENTS_DIR.to_string());
    let tests = paths
        .tests
        .unwrap_or_else(|| DEFAULT_TESTS_DIR.to_string());
    let stories = paths
        .stories
        .unwrap_or_else(|| DEFAULT_STORIES_DIR.to_string());

    Ok(Effective {
        config_file: config_path,
        components_dir: repo_root.join(components),
        tests_dir: repo_root.join(tests),
        stories_dir: repo_root.join(stories),
        repo_root,
        prefix,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("package.json"), "{}").unwrap();

        let eff = resolve_effective(root.to_str(), None, None).unwrap();
        assert_eq!(eff.prefix, "Base");
        assert_eq!(eff.output, "human");
        assert_eq!(eff.components_dir, root.join("src/components"));
        assert_eq!(eff.tests_dir, root.join("tests/components"));
        assert_eq!(eff.stories_dir, root.join("src/components"));
        assert!(load_config(root).unwrap().is_none());
        assert!(eff.config_file.is_none());
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("basekit.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
prefix = "Ui"
output = "json"
[paths]
components = "lib/ui"
stories = "stories"
    "#
        )
        .unwrap();
        let nested = root.join("lib/ui");
        fs::create_dir_all(&nested).unwrap();

        let eff = resolve_effective(nested.to_str(), None, None).unwrap();
        assert_eq!(eff.repo_root, root);
        assert_eq!(eff.prefix, "Ui");
        assert_eq!(eff.output, "json");
        assert_eq!(eff.components_dir, root.join("lib/ui"));
        assert_eq!(eff.tests_dir, root.join("tests/components"));
        assert_eq!(eff.stories_dir, root.join("stories"));
    }

    #[test]
    fn test_load_yaml_and_cli_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("basekit.yaml"),
            "output: json\npaths:\n  components: packages/ui\n",
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), Some("human"), Some("other/dir")).unwrap();
        assert_eq!(eff.output, "human");
        assert_eq!(eff.components_dir, root.join("other/dir"));
        assert_eq!(eff.prefix, "Base");
    }

    #[test]
    fn test_blank_prefix_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("basekit.toml"), "prefix = \"  \"\n").unwrap();

        let eff = resolve_effective(root.to_str(), None, None).unwrap();
        assert_eq!(eff.prefix, "Base");
    }

    #[test]
    fn test_default_start_walks_up_from_working_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("basekit.toml"), "prefix = \"Ui\"\n").unwrap();
        let deep = root.join("src/deep");
        fs::create_dir_all(&deep).unwrap();

        let eff = resolve_effective_in(&deep, None, None, None).unwrap();
        assert_eq!(eff.repo_root, root);
        assert_eq!(eff.prefix, "Ui");
        assert_eq!(eff.components_dir, root.join("src/components"));
        assert_eq!(eff.config_file, Some(root.join("basekit.toml")));

        // A relative --repo-root is taken from the working directory too.
        let eff = resolve_effective_in(&deep, Some("./.."), None, None).unwrap();
        assert_eq!(eff.repo_root, root);
        assert_eq!(eff.prefix, "Ui");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("basekit.toml"), "prefix = \"Ui\"\npaths = 3\n").unwrap();

        let err = resolve_effective(root.to_str(), None, None).unwrap_err();
        assert!(
            matches!(err, BasekitError::Config { ref path, .. } if path == &root.join("basekit.toml"))
        );
        assert!(load_config(root).is_err());
    }

    #[test]
    fn test_malformed_yaml_config_is_an_error() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("basekit.yml"), "paths: [unclosed\n").unwrap();

        let err = load_config(root).unwrap_err();
        assert!(matches!(err, BasekitError::Config { .. }));
    }
}
