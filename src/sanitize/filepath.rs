//! Whole-path checks against a platform profile.

use super::platform::{Platform, sanitize_path, validate_path};

/// Returns true if `filepath` satisfies the naming rules of `platform`.
///
/// Use [`validate_path`] to learn which rule failed.
///
/// # Examples
///
/// ```
/// use pathsan::{Platform, is_valid_filepath};
///
/// assert!(is_valid_filepath("Export/AC:DC/01.mp3", Platform::MacOs));
/// assert!(!is_valid_filepath("Export/\0/01.mp3", Platform::MacOs));
/// assert!(!is_valid_filepath("", Platform::MacOs));
/// ```
#[must_use]
pub fn is_valid_filepath(filepath: &str, platform: Platform) -> bool {
    validate_path(filepath, platform).is_ok()
}

/// Repair `filepath` so that it satisfies the naming rules of `platform`.
///
/// Length is governed by the platform profile, not by [`Limits`]; see
/// [`sanitize_path`] for the exact rewriting rules.
///
/// [`Limits`]: crate::Limits
#[must_use]
pub fn sanitize_filepath(filepath: &str, platform: Platform) -> String {
    sanitize_path(filepath, platform)
}
