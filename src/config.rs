//! Resolves where the dataset and state files live.
//!
//! Explicit flags win over `LEETPICK_DATASET` / `LEETPICK_STATE`, which win
//! over the built-in defaults. A leading `~` expands to the home directory.

use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATASET: &str = "datasets/nc250_geMed.json";
pub const DEFAULT_STATE: &str = ".state/nc250_geMed_state.json";

pub const DATASET_ENV: &str = "LEETPICK_DATASET";
pub const STATE_ENV: &str = "LEETPICK_STATE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub state_path: PathBuf,
}

impl Config {
    /// Resolves against the process environment.
    pub fn resolve(dataset: Option<PathBuf>, state: Option<PathBuf>) -> Self {
        Self::resolve_with(dataset, state, |key| env::var(key).ok())
    }

    /// Same as `resolve` with an injectable variable lookup.
    pub fn resolve_with(
        dataset: Option<PathBuf>,
        state: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let pick = |flag: Option<PathBuf>, key: &str, default: &str| {
            let chosen = flag
                .or_else(|| {
                    lookup(key)
                        .filter(|v| !v.trim().is_empty())
                        .map(PathBuf::from)
                })
                .unwrap_or_else(|| PathBuf::from(default));
            expand_home(&chosen)
        };

        Self {
            dataset_path: pick(dataset, DATASET_ENV, DEFAULT_DATASET),
            state_path: pick(state, STATE_ENV, DEFAULT_STATE),
        }
    }
}

/// Expands `~` and `~/...`. Other paths, and `~user` forms, are returned as-is.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve_with(None, None, no_env);
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET));
        assert_eq!(config.state_path, PathBuf::from(DEFAULT_STATE));
    }

    #[test]
    fn test_env_overrides_default() {
        let config = Config::resolve_with(None, None, |key| match key {
            DATASET_ENV => Some("bank.json".to_string()),
            STATE_ENV => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.dataset_path, PathBuf::from("bank.json"));
        assert_eq!(config.state_path, PathBuf::from(DEFAULT_STATE));
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = Config::resolve_with(
            Some(PathBuf::from("flag.json")),
            Some(PathBuf::from("flag_state.json")),
            |_| Some("env.json".to_string()),
        );
        assert_eq!(config.dataset_path, PathBuf::from("flag.json"));
        assert_eq!(config.state_path, PathBuf::from("flag_state.json"));
    }

    #[test]
    fn test_expand_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_home(Path::new("~/x/state.json")), home.join("x/state.json"));
        assert_eq!(expand_home(Path::new("~")), home);
        assert_eq!(expand_home(Path::new("a/~/b")), PathBuf::from("a/~/b"));
    }
}
