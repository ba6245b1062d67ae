//! Configured facade over the sanitizer functions.

use super::error::PathValidationError;
use super::{filename, filepath, pathpart, platform};
use crate::config::{Limits, SanitizeConfig};

/// Path sanitizer bound to one [`SanitizeConfig`].
///
/// The free functions take their limits and platform as arguments; this type
/// holds them so an export pipeline configures once and passes a single value
/// around. It is cheap to clone and safe to share across threads.
///
/// # Examples
///
/// ```
/// use pathsan::{PathSanitizer, SanitizeConfig};
///
/// let sanitizer = PathSanitizer::new(SanitizeConfig::default());
/// assert_eq!(sanitizer.sanitize_dirname("2024/05 Trip"), "2024:05 Trip");
/// assert!(sanitizer.is_valid_filepath("Export/2024:05 Trip/IMG_0001.jpg"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathSanitizer {
    config: SanitizeConfig,
}

impl PathSanitizer {
    #[must_use]
    pub const fn new(config: SanitizeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SanitizeConfig {
        &self.config
    }

    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.config.limits
    }

    /// See [`is_valid_filepath`](crate::is_valid_filepath).
    #[must_use]
    pub fn is_valid_filepath(&self, path: &str) -> bool {
        filepath::is_valid_filepath(path, self.config.platform)
    }

    /// See [`validate_path`](crate::validate_path).
    ///
    /// # Errors
    ///
    /// Returns the first rule `path` breaks on the configured platform.
    pub fn validate_filepath(&self, path: &str) -> Result<(), PathValidationError> {
        platform::validate_path(path, self.config.platform)
    }

    /// See [`sanitize_filepath`](crate::sanitize_filepath).
    #[must_use]
    pub fn sanitize_filepath(&self, path: &str) -> String {
        filepath::sanitize_filepath(path, self.config.platform)
    }

    /// [`sanitize_filename`](crate::sanitize_filename) with the configured replacement.
    #[must_use]
    pub fn sanitize_filename(&self, name: &str) -> String {
        filename::sanitize_filename(name, &self.config.replacement, &self.config.limits)
    }

    /// See [`sanitize_filestem_with_count`](crate::sanitize_filestem_with_count).
    #[must_use]
    pub fn sanitize_filestem_with_count(&self, stem: &str, suffix: &str) -> String {
        filename::sanitize_filestem_with_count(stem, suffix, &self.config.limits)
    }

    /// [`sanitize_dirname`](crate::sanitize_dirname) with the configured replacement.
    #[must_use]
    pub fn sanitize_dirname(&self, name: &str) -> String {
        pathpart::sanitize_dirname(
            name,
            Some(self.config.replacement.as_str()),
            &self.config.limits,
        )
    }

    /// [`sanitize_pathpart`](crate::sanitize_pathpart) with an explicit replacement.
    #[must_use]
    pub fn sanitize_pathpart(&self, part: &str, replacement: Option<&str>) -> String {
        pathpart::sanitize_pathpart(part, replacement, &self.config.limits)
    }
}
