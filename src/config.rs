use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{
    core::variants::DEFAULT_SEPARATOR,
    template::{PluralRule, PluralRules},
};

pub const CONFIG_FILE_NAME: &str = ".locstrrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_variant_separator")]
    pub variant_separator: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default)]
    pub fallback_language: Option<String>,
    /// Language code to built-in plural rule name, e.g. `{"pt-PT": "english"}`.
    #[serde(default)]
    pub plural_rules: BTreeMap<String, PluralRule>,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/vendor/**"]
        .map(String::from)
        .to_vec()
}

fn default_variant_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            variant_separator: default_variant_separator(),
            default_language: default_language(),
            fallback_language: None,
            plural_rules: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores` or `includes`
    /// and for an empty variant separator.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if self.variant_separator.is_empty() {
            bail!("'variantSeparator' must not be empty");
        }
        if self.default_language.trim().is_empty() {
            bail!("'defaultLanguage' must not be empty");
        }

        Ok(())
    }

    /// Plural rule registry with the configured overrides.
    pub fn plural_rules(&self) -> PluralRules {
        self.plural_rules
            .iter()
            .fold(PluralRules::new(), |rules, (language, rule)| {
                rules.with_rule(language, *rule)
            })
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
