//! Configuration types for path sanitization.
//!
//! This module provides the settings the sanitizers read at call time:
//!
//! - [`Limits`] - Maximum filename and directory name lengths
//! - [`SanitizeConfig`] - Limits plus target platform and default replacement
//!
//! Both deserialize from TOML and default to the macOS values, so an empty
//! file (or no file at all) is a valid configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants;
use crate::sanitize::Platform;

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Non-fatal warnings that should be logged but don't prevent operation.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Returns true if there are any warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Length limits, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum length of a filename, extension included.
    pub max_filename_len: usize,
    /// Maximum length of a directory name or other path part.
    pub max_dirname_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_filename_len: constants::DEFAULT_MAX_FILENAME_LEN,
            max_dirname_len: constants::DEFAULT_MAX_DIRNAME_LEN,
        }
    }
}

impl Limits {
    /// Create limits with explicit filename and dirname maxima.
    #[must_use]
    pub const fn new(max_filename_len: usize, max_dirname_len: usize) -> Self {
        Self {
            max_filename_len,
            max_dirname_len,
        }
    }
}

/// Full sanitizer configuration.
///
/// ```toml
/// platform = "macos"
/// replacement = ":"
///
/// [limits]
/// max_filename_len = 255
/// max_dirname_len = 255
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizeConfig {
    /// Platform profile used by path validation and sanitization.
    pub platform: Platform,
    /// Token substituted for `/` inside names.
    pub replacement: String,
    pub limits: Limits,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            replacement: constants::DEFAULT_REPLACEMENT.to_string(),
            limits: Limits::default(),
        }
    }
}

impl SanitizeConfig {
    /// Load configuration from the specified path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (IO error)
    /// - The file contains invalid TOML syntax
    /// - A field has an invalid type or an unknown name
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML or does not match the
    /// configuration schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SanitizeConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Returns a `ValidationResult` containing any non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if either length limit is zero.
    pub fn validate(&self) -> Result<ValidationResult> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.limits.max_filename_len == 0 {
            errors.push("limits.max_filename_len must be greater than 0".to_string());
        }
        if self.limits.max_dirname_len == 0 {
            errors.push("limits.max_dirname_len must be greater than 0".to_string());
        }

        if self.limits.max_filename_len > constants::MAX_COMPONENT_BYTES {
            warnings.push(format!(
                "limits.max_filename_len = {} exceeds the {}-byte component limit of most filesystems",
                self.limits.max_filename_len,
                constants::MAX_COMPONENT_BYTES
            ));
        }
        if self.limits.max_dirname_len > constants::MAX_COMPONENT_BYTES {
            warnings.push(format!(
                "limits.max_dirname_len = {} exceeds the {}-byte component limit of most filesystems",
                self.limits.max_dirname_len,
                constants::MAX_COMPONENT_BYTES
            ));
        }

        if self.replacement.is_empty() {
            warnings.push(
                "replacement is empty: path separators will be deleted from names".to_string(),
            );
        } else if self.replacement.contains(constants::PATH_SEPARATOR) {
            warnings.push(format!(
                "replacement '{}' contains '{}': sanitized names will still contain separators",
                self.replacement,
                constants::PATH_SEPARATOR
            ));
        }

        if !errors.is_empty() {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }

        Ok(ValidationResult { warnings })
    }
}
