//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::analysis::Palette;
use crate::client::{AnalysisClientConfig, DEFAULT_ENDPOINT_URL};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analysis service and chart configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    #[serde(default)]
    pub palette: Palette,
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            palette: Palette::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Client configuration for this analyzer section
    pub fn client_config(&self) -> AnalysisClientConfig {
        AnalysisClientConfig {
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ConfigError::Invalid(format!(
                "unknown output format {other:?} (expected table, json or csv)"
            ))),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Draw the terminal bar chart under the table
    #[serde(default = "default_chart")]
    pub chart: bool,
}

fn default_chart() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            chart: default_chart(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or the first default location that exists,
    /// or defaults. Environment overrides apply in every case.
    ///
    /// An explicit path that fails to load is an error; a broken file at a
    /// default location is logged and skipped.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::resolve_from(explicit, &default_config_paths(), env_var)
    }

    /// [`Config::resolve`] over the given candidate paths and variable lookup
    fn resolve_from<E>(
        explicit: Option<&Path>,
        candidates: &[PathBuf],
        env: E,
    ) -> Result<Self, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            let mut config = Self::load(path)?;
            config.apply_overrides_from(&env)?;
            return Ok(config);
        }

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(mut config) => {
                    config.apply_overrides_from(&env)?;
                    tracing::info!("Loaded config from {:?}", path);
                    return Ok(config);
                }
                Err(e) => {
                    tracing::warn!("Failed to load config from {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        let mut config = Config::default();
        config.apply_overrides_from(&env)?;
        Ok(config)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.analyzer.endpoint_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "endpoint_url must be an http(s) URL, got {:?}",
                self.analyzer.endpoint_url
            )));
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "unknown log format {other:?} (expected pretty or json)"
            ))),
        }
    }

    /// Apply `PUNCTUATION_*` overrides read through `env`, then revalidate
    fn apply_overrides_from<E>(&mut self, env: E) -> Result<(), ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env("PUNCTUATION_ENDPOINT_URL") {
            self.analyzer.endpoint_url = url;
        }

        if let Some(format) = env("PUNCTUATION_OUTPUT_FORMAT") {
            self.output.format = format.parse()?;
        }

        if let Some(level) = env("PUNCTUATION_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = env("PUNCTUATION_LOG_FORMAT") {
            self.logging.format = format;
        }

        self.validate()
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Candidate config file locations, in lookup order
pub fn default_config_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("punctuation").join("config.toml")),
        Some(PathBuf::from("./punctuation.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    let palette = Palette::default()
        .colors()
        .iter()
        .map(|c| format!("    \"{c}\","))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"# Punctuation Analyzer Configuration
#
# Environment variables override these settings:
# - PUNCTUATION_ENDPOINT_URL
# - PUNCTUATION_OUTPUT_FORMAT
# - PUNCTUATION_LOG_LEVEL
# - PUNCTUATION_LOG_FORMAT

[analyzer]
# Analysis service endpoint (receives the file as multipart field "file")
endpoint_url = "{DEFAULT_ENDPOINT_URL}"

# Bar colors, one per category in display order (exactly 18, #RRGGBB)
palette = [
{palette}
]

[output]
# Result format: table, json or csv
format = "table"

# Draw a bar chart under the table
chart = true

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty or json
format = "pretty"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(
            config.analyzer.endpoint_url,
            "https://punctuation-omdx.vercel.app/process-file"
        );
        assert_eq!(config.analyzer.palette, Palette::default());
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.output.chart);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_config_parses_back_to_defaults() {
        let (_dir, path) = write_config(&generate_default_config());
        let config = Config::load(&path).unwrap();

        assert_eq!(config.analyzer.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.analyzer.palette, Palette::default());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let (_dir, path) = write_config(
            r#"
[analyzer]
endpoint_url = "http://localhost:5000/process-file"

[output]
format = "json"
"#,
        );
        let config = Config::load(&path).unwrap();

        assert_eq!(config.analyzer.endpoint_url, "http://localhost:5000/process-file");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.chart);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_short_palette_is_rejected() {
        let (_dir, path) = write_config(
            r##"
[analyzer]
palette = ["#FFFFFF", "#000000"]
"##,
        );
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_non_http_endpoint_is_rejected() {
        let (_dir, path) = write_config(
            r#"
[analyzer]
endpoint_url = "ftp://example.com/process-file"
"#,
        );
        assert!(matches!(Config::load(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    fn env_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_env_overrides_apply() {
        let env = env_from(&[
            ("PUNCTUATION_ENDPOINT_URL", "http://127.0.0.1:9000/process-file"),
            ("PUNCTUATION_OUTPUT_FORMAT", "csv"),
            ("PUNCTUATION_LOG_LEVEL", "debug"),
            ("PUNCTUATION_LOG_FORMAT", "json"),
        ]);
        let mut config = Config::default();
        config.apply_overrides_from(env).unwrap();

        assert_eq!(config.analyzer.endpoint_url, "http://127.0.0.1:9000/process-file");
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let (_dir, path) = write_config(
            r#"
[output]
format = "json"
"#,
        );
        let env = env_from(&[("PUNCTUATION_OUTPUT_FORMAT", "table")]);
        let config = Config::resolve_from(Some(&path), &[], env).unwrap();
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_invalid_env_output_format_is_rejected() {
        let env = env_from(&[("PUNCTUATION_OUTPUT_FORMAT", "xml")]);
        let mut config = Config::default();
        assert!(matches!(
            config.apply_overrides_from(env),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_invalid_env_endpoint_is_rejected() {
        let env = env_from(&[("PUNCTUATION_ENDPOINT_URL", "not-a-url")]);
        assert!(matches!(
            Config::resolve_from(None, &[], env),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let (_explicit_dir, explicit) = write_config(
            r#"
[output]
format = "csv"
"#,
        );
        let (_default_dir, default) = write_config(
            r#"
[output]
format = "json"
"#,
        );
        let config = Config::resolve_from(Some(&explicit), &[default], no_env).unwrap();
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_resolve_uses_first_existing_candidate() {
        let missing = PathBuf::from("/definitely/not/here.toml");
        let (_first_dir, first) = write_config(
            r#"
[output]
format = "json"
"#,
        );
        let (_second_dir, second) = write_config(
            r#"
[output]
format = "csv"
"#,
        );
        let config = Config::resolve_from(None, &[missing, first, second], no_env).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_skips_broken_default_file() {
        let (_broken_dir, broken) = write_config("this is [not toml");
        let (_good_dir, good) = write_config(
            r#"
[output]
format = "csv"
"#,
        );
        let config = Config::resolve_from(None, &[broken.clone(), good], no_env).unwrap();
        assert_eq!(config.output.format, OutputFormat::Csv);

        let config = Config::resolve_from(None, &[broken], no_env).unwrap();
        assert_eq!(config.output.format, OutputFormat::Table);
        assert_eq!(config.analyzer.endpoint_url, DEFAULT_ENDPOINT_URL);
    }

    #[test]
    fn test_resolve_broken_explicit_path_is_fatal() {
        let (_dir, broken) = write_config("this is [not toml");
        assert!(matches!(
            Config::resolve_from(Some(&broken), &[], no_env),
            Err(ConfigError::Parse { .. })
        ));

        let missing = Path::new("/definitely/not/here.toml");
        assert!(matches!(
            Config::resolve_from(Some(missing), &[], no_env),
            Err(ConfigError::Io { .. })
        ));
    }
}
