//! Directory name and path part sanitization.

use tracing::debug;

use super::truncate::{char_len, keep_chars};
use crate::config::Limits;
use crate::constants::PATH_SEPARATOR;

/// Replace path separators in a directory name and truncate it to
/// `limits.max_dirname_len` characters.
///
/// Same as [`sanitize_pathpart`]; empty input is returned unchanged.
#[must_use]
pub fn sanitize_dirname(dirname: &str, replacement: Option<&str>, limits: &Limits) -> String {
    if dirname.is_empty() {
        return String::new();
    }
    sanitize_pathpart(dirname, replacement, limits)
}

/// Replace path separators in one path segment and truncate it to
/// `limits.max_dirname_len` characters.
///
/// With `replacement` set to `None` separators are left in place. Truncation
/// removes characters from the end and has no notion of an extension.
///
/// # Examples
///
/// ```
/// use pathsan::{Limits, sanitize_pathpart};
///
/// let limits = Limits::default();
/// assert_eq!(sanitize_pathpart("foo/bar", Some(":"), &limits), "foo:bar");
/// assert_eq!(sanitize_pathpart("foo/bar", Some(""), &limits), "foobar");
/// assert_eq!(sanitize_pathpart("foo/bar", None, &limits), "foo/bar");
/// ```
#[must_use]
pub fn sanitize_pathpart(pathpart: &str, replacement: Option<&str>, limits: &Limits) -> String {
    if pathpart.is_empty() {
        return String::new();
    }

    let pathpart = match replacement {
        Some(replacement) => pathpart.replace(PATH_SEPARATOR, replacement),
        None => pathpart.to_string(),
    };

    let len = char_len(&pathpart);
    let max = limits.max_dirname_len;
    if len <= max {
        return pathpart;
    }

    debug!(
        original_len = len,
        max_len = max,
        drop = len - max,
        "Truncated path part"
    );
    keep_chars(&pathpart, max).to_string()
}
