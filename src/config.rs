//! Environment configuration for the terminal binary.
//!
//! - `WORD_TILES_EXERCISE`: path to a JSON exercise definition
//! - `WORD_TILES_LOG_PATH`: file to receive `tracing` output (off when unset)
//! - `WORD_TILES_TICK_MS`: frame period in milliseconds

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;

use crate::core::ExerciseDef;

/// Frame period when `WORD_TILES_TICK_MS` is unset or invalid.
pub const DEFAULT_TICK_MS: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub exercise_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub tick_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            exercise_path: None,
            log_path: None,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (tests pass a map instead of the process env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        let tick_ms = lookup("WORD_TILES_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(DEFAULT_TICK_MS);

        Self {
            exercise_path: path("WORD_TILES_EXERCISE"),
            log_path: path("WORD_TILES_LOG_PATH"),
            tick_ms,
        }
    }

    /// The configured exercise, or the built-in one.
    pub fn load_exercise(&self) -> Result<ExerciseDef> {
        let Some(path) = &self.exercise_path else {
            return Ok(default_exercise());
        };
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading exercise file {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("parsing exercise file {}", path.display()))
    }

    /// Install a `tracing` subscriber writing to `log_path`.
    ///
    /// The terminal UI owns stdout, so without a log path nothing is installed.
    pub fn init_tracing(&self) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(Level::DEBUG)
            .try_init()
            .map_err(anyhow::Error::msg)
            .context("installing tracing subscriber")
    }
}

/// "The boy eats a red apple", with one distractor.
pub fn default_exercise() -> ExerciseDef {
    ExerciseDef::from_words(&["mange", "Le", "rouge", "une", "chat", "garçon", "pomme"])
        .with_solution(vec![1, 5, 0, 3, 6, 2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn test_reads_and_trims_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("WORD_TILES_EXERCISE", " lesson.json "),
            ("WORD_TILES_LOG_PATH", ""),
            ("WORD_TILES_TICK_MS", "33"),
        ]));
        assert_eq!(config.exercise_path, Some(PathBuf::from("lesson.json")));
        assert_eq!(config.log_path, None);
        assert_eq!(config.tick_ms, 33);
    }

    #[test]
    fn test_invalid_tick_falls_back() {
        for raw in ["0", "-5", "fast"] {
            let config = AppConfig::from_lookup(lookup(&[("WORD_TILES_TICK_MS", raw)]));
            assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        }
    }

    #[test]
    fn test_missing_exercise_file_reports_path() {
        let config = AppConfig {
            exercise_path: Some(PathBuf::from("/nonexistent/lesson.json")),
            ..AppConfig::default()
        };
        let err = config.load_exercise().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/lesson.json"));
    }

    #[test]
    fn test_default_exercise_is_solvable() {
        let def = default_exercise();
        let solution: Vec<&str> = def
            .solution
            .as_ref()
            .unwrap()
            .iter()
            .map(|&i| def.words[i].as_str())
            .collect();
        assert_eq!(solution, ["Le", "garçon", "mange", "une", "pomme", "rouge"]);
    }
}
