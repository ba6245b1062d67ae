//! Path component sanitization.
//!
//! This module turns arbitrary strings into names that are safe to use as a
//! single path segment, and checks or repairs whole paths against a target
//! platform.
//!
//! # Overview
//!
//! - `error` - Error type for platform validation failures
//! - [`platform`] - Platform profiles, [`validate_path`] and [`sanitize_path`]
//! - `filename` - Extension- and counter-aware filename truncation
//! - `pathpart` - Directory name and path segment truncation
//! - `filepath` - Whole-path checks against a platform
//!
//! # Key Functions
//!
//! - [`sanitize_filename`] - Replaces `/`, truncates keeping the extension
//! - [`sanitize_filestem_with_count`] - Truncates keeping a `(N)` counter
//! - [`sanitize_dirname`] / [`sanitize_pathpart`] - Replaces `/`, truncates
//! - [`is_valid_filepath`] / [`sanitize_filepath`] - Platform rules
//!
//! All lengths in [`Limits`](crate::Limits) count characters; platform limits
//! count UTF-8 bytes.
//!
//! # Examples
//!
//! ```
//! use pathsan::{Limits, Platform, sanitize_dirname, sanitize_filename, is_valid_filepath};
//!
//! let limits = Limits::default();
//! let dir = sanitize_dirname("Summer 2024/Beach", Some(":"), &limits);
//! let file = sanitize_filename("sunset/1.jpg", ":", &limits);
//! assert!(is_valid_filepath(&format!("{dir}/{file}"), Platform::MacOs));
//! ```

mod error;
mod filename;
mod filepath;
mod pathpart;
pub mod platform;
mod sanitizer;
mod truncate;

pub use error::PathValidationError;
pub use filename::{sanitize_filename, sanitize_filestem_with_count};
pub use filepath::{is_valid_filepath, sanitize_filepath};
pub use pathpart::{sanitize_dirname, sanitize_pathpart};
pub use platform::{Platform, sanitize_path, validate_path};
pub use sanitizer::PathSanitizer;
