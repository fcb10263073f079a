use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_TITLE: &str = "Far Away";

/// Configuration from pack.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// Title shown above the form
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for PackConfig {
    fn default() -> Self {
        PackConfig {
            title: default_title(),
            ui: UiConfig::default(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line at the bottom of the screen
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides by theme slot name, as `#RRGGBB`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}
