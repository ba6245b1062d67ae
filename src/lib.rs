//! Sanitize strings into valid filesystem path components.
//!
//! `pathsan` turns user-supplied or metadata-derived strings into safe path
//! segments: it replaces path separators, truncates names that exceed the
//! configured length limits, and validates or repairs whole paths against a
//! platform profile (macOS by default).
//!
//! # Examples
//!
//! ```
//! use pathsan::{Limits, sanitize_filename, sanitize_pathpart};
//!
//! let limits = Limits::default();
//! assert_eq!(sanitize_pathpart("foo/bar", Some(":"), &limits), "foo:bar");
//! assert_eq!(sanitize_pathpart("foo/bar", None, &limits), "foo/bar");
//!
//! let long = format!("{}.jpg", "a".repeat(300));
//! let name = sanitize_filename(&long, ":", &limits);
//! assert_eq!(name.chars().count(), 255);
//! assert!(name.ends_with(".jpg"));
//! ```

pub mod config;
pub mod constants;
pub mod sanitize;

pub use config::{Limits, SanitizeConfig, ValidationResult};
pub use sanitize::{
    PathSanitizer, PathValidationError, Platform, is_valid_filepath, sanitize_dirname,
    sanitize_filename, sanitize_filepath, sanitize_filestem_with_count, sanitize_path,
    sanitize_pathpart, validate_path,
};
