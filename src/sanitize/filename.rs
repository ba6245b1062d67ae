//! Filename and counter-suffixed file stem sanitization.
//!
//! Both functions trim from the tail so the meaningful head of a name
//! survives, and both keep the parts of a name that disambiguate it: the
//! extension for [`sanitize_filename`], the `(N)` counter for
//! [`sanitize_filestem_with_count`].

use tracing::debug;

use super::truncate::{char_len, drop_chars, keep_chars};
use crate::config::Limits;
use crate::constants::PATH_SEPARATOR;

/// Replace path separators in a filename and truncate it to
/// `limits.max_filename_len` characters.
///
/// When the name has an extension (anything after the last `.`), the stem is
/// shortened first and the extension is kept. If the stem is too short to
/// absorb the whole excess, the extension is shortened instead, and as a last
/// resort the joined name is cut to the limit.
///
/// Empty input is returned unchanged.
///
/// # Examples
///
/// ```
/// use pathsan::{Limits, sanitize_filename};
///
/// let limits = Limits::new(10, 10);
/// assert_eq!(sanitize_filename("AC/DC.mp3", ":", &limits), "AC:DC.mp3");
/// assert_eq!(sanitize_filename("holiday-photo.jpg", ":", &limits), "holida.jpg");
/// assert_eq!(sanitize_filename("archive.tar.gz", ":", &limits), "archive.gz");
/// ```
#[must_use]
pub fn sanitize_filename(filename: &str, replacement: &str, limits: &Limits) -> String {
    if filename.is_empty() {
        return String::new();
    }

    let filename = filename.replace(PATH_SEPARATOR, replacement);
    let len = char_len(&filename);
    let max = limits.max_filename_len;
    if len <= max {
        return filename;
    }

    let drop = len - max;
    let truncated = match filename.rsplit_once('.') {
        Some((stem, ext)) => {
            let joined = if drop > char_len(stem) {
                format!("{stem}.{}", drop_chars(ext, drop))
            } else {
                format!("{}.{ext}", drop_chars(stem, drop))
            };
            // stem and extension can both be shorter than `drop`
            if char_len(&joined) > max {
                keep_chars(&joined, max).to_string()
            } else {
                joined
            }
        },
        None => drop_chars(&filename, drop).to_string(),
    };

    debug!(
        original_len = len,
        max_len = max,
        drop,
        "Truncated filename"
    );
    truncated
}

/// Shorten a file stem so that `file_stem + file_suffix` fits in
/// `limits.max_filename_len` characters.
///
/// `file_suffix` is everything that will follow the stem, usually the
/// extension with its dot. A trailing counter such as `(1)` or `(23)` added to
/// make a name unique is kept intact; only the text before it is shortened.
/// When that text is shorter than the excess, it is dropped entirely and the
/// bare counter is returned.
///
/// # Examples
///
/// ```
/// use pathsan::{Limits, sanitize_filestem_with_count};
///
/// let limits = Limits::new(12, 12);
/// assert_eq!(sanitize_filestem_with_count("myfile (1)", ".jpg", &limits), "myfil(1)");
/// assert_eq!(sanitize_filestem_with_count("myfile", ".jpg", &limits), "myfile");
/// ```
#[must_use]
pub fn sanitize_filestem_with_count(file_stem: &str, file_suffix: &str, limits: &Limits) -> String {
    let len = char_len(file_stem) + char_len(file_suffix);
    let max = limits.max_filename_len;
    if len <= max {
        return file_stem.to_string();
    }

    let drop = len - max;
    debug!(
        original_len = len,
        max_len = max,
        drop,
        "Truncated file stem"
    );

    match split_counter(file_stem) {
        Some((prefix, counter)) => format!("{}{counter}", drop_chars(prefix, drop)),
        None => drop_chars(file_stem, drop).to_string(),
    }
}

/// Split `"name (12)"` into `("name ", "(12)")`.
///
/// Only the last parenthesized group counts, and it must hold at least one
/// ASCII digit and nothing else.
fn split_counter(stem: &str) -> Option<(&str, &str)> {
    let open = stem.strip_suffix(')')?.rfind('(')?;
    let digits = &stem[open + 1..stem.len() - 1];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(stem.split_at(open))
}
