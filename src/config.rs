use crate::error::{Error, Result};
use crate::utils::random::{self, RandomTextOptions};
use crate::utils::string::{self, CaseMode, PalindromeOptions};
use serde::{Deserialize, Serialize};
use std::env;
#[cfg(feature = "config")]
use std::fs;
#[cfg(feature = "config")]
use std::path::Path;

/// Default settings for the text helpers
///
/// Every field falls back to its default when missing from the TOML source.
///
/// ```toml
/// pad_char = "*"
/// case_mode = "sentence_case"
///
/// [random_text]
/// include_special = false
///
/// [palindrome]
/// ignore_case = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Character used by [`TextConfig::center`]
    pub pad_char: char,

    /// Mode used by [`TextConfig::convert_case`]
    pub case_mode: CaseMode,

    pub random_text: RandomTextOptions,

    pub palindrome: PalindromeOptions,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            pad_char: ' ',
            case_mode: CaseMode::default(),
            random_text: RandomTextOptions::default(),
            palindrome: PalindromeOptions::default(),
        }
    }
}

impl TextConfig {
    /// Parse configuration from a TOML string
    #[cfg(feature = "config")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            Error::config(format!("Failed to parse config: {}. Check TOML syntax.", e))
        })
    }

    /// Load configuration from TOML file
    #[cfg(feature = "config")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let content = fs::read_to_string(path_ref).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}. Make sure the file exists and is readable.",
                path_ref.display(),
                e
            ))
        })?;

        let config: TextConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}. Check TOML syntax.",
                path_ref.display(),
                e
            ))
        })?;

        log::debug!(
            "Successfully loaded text configuration from: {}",
            path_ref.display()
        );
        Ok(config)
    }

    /// Load a config file, apply environment overrides and validate the result
    #[cfg(feature = "config")]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration with environment variable overrides
    pub fn from_env() -> Result<Self> {
        let mut config = TextConfig::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.random_text.is_empty() {
            return Err(Error::config(
                "random_text must include at least one character class",
            ));
        }
        Ok(())
    }

    /// Apply `RUSTF_TEXT_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| env::var(key).ok())
    }

    fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(pad) = lookup("RUSTF_TEXT_PAD_CHAR") {
            let mut chars = pad.chars();
            self.pad_char = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(Error::config(
                        "Invalid RUSTF_TEXT_PAD_CHAR value: expected exactly one character",
                    ))
                }
            };
            log::debug!("Pad character overridden from environment");
        }

        if let Some(mode) = lookup("RUSTF_TEXT_CASE_MODE") {
            self.case_mode = mode.parse().map_err(|_| {
                Error::config(format!("Invalid RUSTF_TEXT_CASE_MODE value: {}", mode))
            })?;
            log::debug!("Case mode overridden from environment: {}", self.case_mode);
        }

        Ok(())
    }

    /// Center text using the configured pad character
    pub fn center(&self, input: &str, total_length: usize) -> String {
        string::center_with(input, total_length, self.pad_char)
    }

    /// Convert text using the configured case mode
    pub fn convert_case(&self, input: &str) -> String {
        string::convert_case(input, self.case_mode)
    }

    /// Check for a palindrome using the configured options
    pub fn is_palindrome(&self, input: &str) -> bool {
        string::is_palindrome_with(input, self.palindrome)
    }

    /// Generate random text from the configured character classes
    pub fn random_text(&self, length: usize) -> String {
        random::generate_random_text_with(length, &self.random_text)
    }
}
