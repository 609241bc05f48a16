//! Application configuration.

use crate::consts::cli_consts::{self, word_cloud};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Names of the dataset columns the dashboard reads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnNames {
    pub sentiment: String,
    pub stemmed_text: String,
    pub filtered_text: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            sentiment: cli_consts::SENTIMENT_COLUMN.to_string(),
            stemmed_text: cli_consts::STEMMED_TEXT_COLUMN.to_string(),
            filtered_text: cli_consts::FILTERED_TEXT_COLUMN.to_string(),
        }
    }
}

/// Word-cloud layout parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WordCloudConfig {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub min_font_size: u32,
    /// Starting font size; the canvas height when unset.
    pub max_font_size: Option<u32>,
    pub font_step: u32,
    pub relative_scaling: f64,
    pub prefer_horizontal: f64,
    pub random_state: u64,
    /// Keep purely numeric tokens.
    pub include_numbers: bool,
    /// Shorter tokens are dropped.
    pub min_word_length: usize,
    /// Replaces the built-in English stopword list when set.
    pub stopwords: Option<Vec<String>>,
    /// Fold a trailing `s` into a singular that also occurs.
    pub normalize_plurals: bool,
    /// Keep strongly associated word pairs as two-word terms.
    pub collocations: bool,
    pub collocation_threshold: f64,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            width: word_cloud::WIDTH,
            height: word_cloud::HEIGHT,
            max_words: word_cloud::MAX_WORDS,
            min_font_size: word_cloud::MIN_FONT_SIZE,
            max_font_size: None,
            font_step: word_cloud::FONT_STEP,
            relative_scaling: word_cloud::RELATIVE_SCALING,
            prefer_horizontal: word_cloud::PREFER_HORIZONTAL,
            random_state: word_cloud::RANDOM_STATE,
            include_numbers: false,
            min_word_length: 0,
            stopwords: None,
            normalize_plurals: true,
            collocations: true,
            collocation_threshold: word_cloud::COLLOCATION_THRESHOLD,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub columns: ColumnNames,
    pub title: String,
    pub top_words: usize,
    pub top_trigrams: usize,
    pub word_cloud: WordCloudConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(cli_consts::DEFAULT_DATASET_PATH),
            columns: ColumnNames::default(),
            title: cli_consts::DEFAULT_TITLE.to_string(),
            top_words: cli_consts::TOP_WORDS,
            top_trigrams: cli_consts::TOP_TRIGRAMS,
            word_cloud: WordCloudConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns a `ConfigError` if reading from file fails, the JSON is invalid,
    /// or a value is out of range.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_slice(&buf).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the configuration for a session.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// read if present, otherwise defaults are used.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match get_config_path() {
            Some(path) if path.exists() => {
                log::debug!("Using config file {}", path.display());
                Self::load_from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Checks value ranges serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_words == 0 {
            return Err(invalid("top_words", "must be at least 1"));
        }
        if self.top_trigrams == 0 {
            return Err(invalid("top_trigrams", "must be at least 1"));
        }
        let wc = &self.word_cloud;
        if wc.width == 0 || wc.height == 0 {
            return Err(invalid("word_cloud", "canvas must be non-empty"));
        }
        if wc.font_step == 0 {
            return Err(invalid("word_cloud.font_step", "must be at least 1"));
        }
        if wc.min_font_size == 0 {
            return Err(invalid("word_cloud.min_font_size", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&wc.relative_scaling) {
            return Err(invalid(
                "word_cloud.relative_scaling",
                "must be between 0 and 1",
            ));
        }
        if !(0.0..=1.0).contains(&wc.prefer_horizontal) {
            return Err(invalid(
                "word_cloud.prefer_horizontal",
                "must be between 0 and 1",
            ));
        }
        if !wc.collocation_threshold.is_finite() || wc.collocation_threshold < 0.0 {
            return Err(invalid(
                "word_cloud.collocation_threshold",
                "must be a non-negative number",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}

/// Location of the per-user config file, if a home directory is known.
pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| {
        home.join(cli_consts::CONFIG_DIR)
            .join(cli_consts::CONFIG_FILE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Fields missing from the file should fall back to their defaults.
    fn test_load_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"top_words": 3, "word_cloud": {"width": 400}}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.top_words, 3);
        assert_eq!(config.top_trigrams, cli_consts::TOP_TRIGRAMS);
        assert_eq!(config.word_cloud.width, 400);
        assert_eq!(config.word_cloud.height, word_cloud::HEIGHT);
        assert_eq!(config.columns, ColumnNames::default());
    }

    #[test]
    fn test_load_custom_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"dataset_path": "data.csv", "columns": {"sentiment": "label"}}"#,
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("data.csv"));
        assert_eq!(config.columns.sentiment, "label");
        assert_eq!(config.columns.stemmed_text, cli_consts::STEMMED_TEXT_COLUMN);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Json { .. })));
    }

    #[test]
    fn test_load_rejects_out_of_range_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"word_cloud": {"relative_scaling": 1.5}}"#).unwrap();

        let result = Config::load_from_file(&path);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "word_cloud.relative_scaling",
                ..
            })
        ));
    }

    #[test]
    fn test_load_word_cloud_text_options() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"word_cloud": {"stopwords": ["yang", "dan"], "include_numbers": true, "collocations": false}}"#,
        )
        .unwrap();

        let wc = Config::load_from_file(&path).unwrap().word_cloud;
        assert_eq!(
            wc.stopwords,
            Some(vec!["yang".to_string(), "dan".to_string()])
        );
        assert!(wc.include_numbers);
        assert!(!wc.collocations);
        assert!(wc.normalize_plurals);
        assert_eq!(wc.collocation_threshold, word_cloud::COLLOCATION_THRESHOLD);
    }

    #[test]
    fn test_negative_collocation_threshold_is_rejected() {
        let mut config = Config::default();
        config.word_cloud.collocation_threshold = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "word_cloud.collocation_threshold",
                ..
            })
        ));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(matches!(
            Config::resolve(Some(path.as_path())),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }
}
