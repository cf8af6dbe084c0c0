use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Timings shared by every component driven by one `Autocomplete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    pub debounce_ms: u64,
    pub poll_budget_ms: u64,
    pub poll_interval_ms: u64,
    pub announce_delay_ms: u64,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 250,
            poll_budget_ms: 3_000,
            poll_interval_ms: 100,
            announce_delay_ms: 100,
        }
    }
}

impl AutocompleteConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn poll_budget(&self) -> Duration {
        Duration::from_millis(self.poll_budget_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn announce_delay(&self) -> Duration {
        Duration::from_millis(self.announce_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "widget.poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.poll_interval_ms > self.poll_budget_ms && self.poll_budget_ms > 0 {
            return Err(ConfigError::Invalid(format!(
                "widget.poll_interval_ms ({}) exceeds widget.poll_budget_ms ({})",
                self.poll_interval_ms, self.poll_budget_ms
            )));
        }
        Ok(())
    }
}

/// Per-instance behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentOptions {
    /// Restore the synchronized value on blur instead of clearing the field.
    pub sync: bool,
    pub multiselect: bool,
    pub disabled: bool,
}

impl Default for ComponentOptions {
    fn default() -> Self {
        Self {
            sync: true,
            multiselect: false,
            disabled: false,
        }
    }
}

impl ComponentOptions {
    pub fn single() -> Self {
        Self::default()
    }

    /// Multi-select widgets keep chips and always clear the field on blur.
    pub fn multi() -> Self {
        Self {
            sync: false,
            multiselect: true,
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchStrings {
    pub no_results: String,
    pub more_results: String,
    pub available_results: String,
}

impl Default for SearchStrings {
    fn default() -> Self {
        Self {
            no_results: "No results found.".to_string(),
            more_results: "Showing the first {count} results.".to_string(),
            available_results: "{count} results available.".to_string(),
        }
    }
}

impl SearchStrings {
    pub fn available(&self, count: usize) -> String {
        self.available_results.replace("{count}", &count.to_string())
    }

    pub fn more(&self, count: usize) -> String {
        self.more_results.replace("{count}", &count.to_string())
    }
}

/// Settings for the catalog provider used by the demo host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub minimum_search_length: usize,
    pub max_results: Option<usize>,
    pub latency_ms: u64,
    pub strings: SearchStrings,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            minimum_search_length: 3,
            max_results: None,
            latency_ms: 150,
            strings: SearchStrings::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub widget: AutocompleteConfig,
    pub components: IndexMap<String, ComponentOptions>,
    pub search: SearchSettings,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let settings = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml(&raw)?,
            "json" => Self::from_json(&raw)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };
        Ok(settings)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_yaml::from_str(raw)?;
        settings.widget.validate()?;
        Ok(settings)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.widget.validate()?;
        Ok(settings)
    }

    pub fn component_options(&self, id: &str) -> ComponentOptions {
        self.components.get(id).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ComponentOptions, Settings};
    use std::time::Duration;

    #[test]
    fn empty_yaml_uses_defaults() {
        let settings = Settings::from_yaml("{}").expect("defaults");
        assert_eq!(settings.widget.debounce(), Duration::from_millis(250));
        assert_eq!(settings.widget.poll_budget(), Duration::from_millis(3_000));
        assert_eq!(settings.widget.poll_interval(), Duration::from_millis(100));
        assert_eq!(settings.search.minimum_search_length, 3);
    }

    #[test]
    fn yaml_overrides_components_and_timings() {
        let raw = r#"
widget:
  debounce_ms: 50
components:
  country:
    sync: true
  tags:
    multiselect: true
    sync: false
search:
  max_results: 10
  strings:
    no_results: "Nothing here"
"#;
        let settings = Settings::from_yaml(raw).expect("parse");
        assert_eq!(settings.widget.debounce_ms, 50);
        assert_eq!(settings.widget.poll_budget_ms, 3_000);
        assert_eq!(settings.component_options("tags"), ComponentOptions::multi());
        assert!(settings.component_options("country").sync);
        assert_eq!(settings.search.max_results, Some(10));
        assert_eq!(settings.search.strings.no_results, "Nothing here");
    }

    #[test]
    fn unknown_component_gets_default_options() {
        let settings = Settings::default();
        assert_eq!(settings.component_options("missing"), ComponentOptions::default());
    }

    #[test]
    fn json_is_accepted() {
        let settings =
            Settings::from_json(r#"{"widget": {"poll_interval_ms": 50}}"#).expect("json");
        assert_eq!(settings.widget.poll_interval_ms, 50);
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let err = Settings::from_yaml("widget:\n  poll_interval_ms: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn strings_substitute_count() {
        let settings = Settings::default();
        assert_eq!(settings.search.strings.available(4), "4 results available.");
        assert_eq!(settings.search.strings.more(20), "Showing the first 20 results.");
    }
}
