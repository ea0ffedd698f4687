// Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Files checked when no paths are passed on the command line
    #[serde(default)]
    pub files: Vec<String>,

    /// Context lines printed around a parse error
    #[serde(default = "default_context")]
    pub context: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            context: default_context(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Output format (text, json)
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            format: default_format(),
        }
    }
}

// Default values

pub fn default_context() -> usize {
    3
}

fn default_color() -> bool {
    true
}

fn default_format() -> String {
    String::from("text")
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .jsonvetrc (current directory)
        // 2. ~/.jsonvetrc (home directory)
        // 3. .jsonvetrc.toml (current directory)
        // 4. ~/.jsonvetrc.toml (home directory)

        let cwd = std::env::current_dir().ok()?;
        let home = dirs::home_dir()?;

        let paths = [
            cwd.join(".jsonvetrc"),
            home.join(".jsonvetrc"),
            cwd.join(".jsonvetrc.toml"),
            home.join(".jsonvetrc.toml"),
        ];

        for path in &paths {
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        None
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Generate default configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[general]
files = ["questions.json", "extra.json"]
context = 5

[output]
color = false
format = "json"
"#;

        let config = Config::parse(toml).expect("Failed to parse config");
        assert_eq!(config.general.files.len(), 2);
        assert_eq!(config.general.files[0], "questions.json");
        assert_eq!(config.general.context, 5);
        assert!(!config.output.color);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn test_parse_config_defaults() {
        let config = Config::parse("").expect("Failed to parse empty config");
        assert!(config.general.files.is_empty());
        assert_eq!(config.general.context, 3);
        assert!(config.output.color);
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_to_toml_round_trip() {
        let config = Config::default();
        let toml = config.to_toml();
        let parsed = Config::parse(&toml).expect("Failed to parse generated config");
        assert_eq!(parsed.general.context, config.general.context);
    }
}
