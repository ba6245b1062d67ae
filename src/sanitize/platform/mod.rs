//! Platform profiles for whole-path validation and repair.
//!
//! A [`Platform`] bundles the naming rules of one target filesystem: which
//! characters are rejected, which component names are reserved, and how long
//! a component or a full path may be. [`validate_path`] reports the first
//! rule a path breaks; [`sanitize_path`] rewrites a path so that it breaks
//! none.
//!
//! | Rule | macOS | Linux | Windows |
//! |---|---|---|---|
//! | rejected characters | NUL, ASCII control | NUL | NUL, ASCII control, `< > : " \| ? *` |
//! | separators | `/` | `/` | `/`, `\` |
//! | reserved names | `:` | - | `CON`, `PRN`, `AUX`, `NUL`, `COM1-9`, `LPT1-9` |
//! | max path bytes | 1024 | 4096 | 260 |
//!
//! Components are limited to 255 bytes everywhere.

mod macos;
mod windows;

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use super::error::PathValidationError;
use super::truncate::keep_bytes;
use crate::constants;

pub use macos::MACOS_RESERVED_NAMES;
pub use windows::WINDOWS_RESERVED_NAMES;

/// Target filesystem naming rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    #[value(name = "macos")]
    MacOs,
    Linux,
    Windows,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl Platform {
    /// Maximum length of a full path in UTF-8 bytes.
    #[must_use]
    pub const fn max_path_bytes(self) -> usize {
        match self {
            Self::MacOs => constants::MACOS_MAX_PATH_BYTES,
            Self::Linux => constants::LINUX_MAX_PATH_BYTES,
            Self::Windows => constants::WINDOWS_MAX_PATH_BYTES,
        }
    }

    /// Returns true if `ch` separates path components.
    #[must_use]
    pub const fn is_separator(self, ch: char) -> bool {
        match self {
            Self::Windows => ch == '/' || ch == '\\',
            Self::MacOs | Self::Linux => ch == '/',
        }
    }

    fn is_invalid_char(self, ch: char, position: usize, drive_letter: bool) -> bool {
        match self {
            Self::MacOs => macos::is_invalid_char(ch),
            Self::Linux => ch == '\0',
            Self::Windows => windows::is_invalid_char(ch, position, drive_letter),
        }
    }

    fn is_reserved_name(self, component: &str) -> bool {
        match self {
            Self::MacOs => macos::is_reserved_name(component),
            Self::Linux => false,
            Self::Windows => windows::is_reserved_name(component),
        }
    }

    fn has_trailing_char(self, component: &str) -> bool {
        self == Self::Windows && windows::has_trailing_char(component)
    }
}

fn starts_with_drive_letter(path: &str) -> bool {
    path.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// Check a path against the naming rules of `platform`.
///
/// Absolute paths, empty components (`a//b`) and `.`/`..` components are
/// accepted on every platform.
///
/// # Errors
///
/// Returns the first [`PathValidationError`] found, checking in order:
/// empty path, null byte, total length, characters, then each component's
/// length, reserved name and trailing character.
///
/// # Examples
///
/// ```
/// use pathsan::{PathValidationError, Platform, validate_path};
///
/// assert!(validate_path("Photos/2024/IMG_0001.heic", Platform::MacOs).is_ok());
/// assert!(validate_path("AC:DC/Back in Black.mp3", Platform::MacOs).is_ok());
/// assert_eq!(
///     validate_path("folder/CON.txt", Platform::Windows),
///     Err(PathValidationError::ReservedName { name: "CON.txt".to_string() })
/// );
/// ```
pub fn validate_path(path: &str, platform: Platform) -> Result<(), PathValidationError> {
    let result = check_path(path, platform);
    if let Err(err) = &result {
        debug!(
            platform = %platform,
            path = %path.escape_debug(),
            reason = err.reason(),
            "Path failed validation"
        );
    }
    result
}

fn check_path(path: &str, platform: Platform) -> Result<(), PathValidationError> {
    if path.is_empty() {
        return Err(PathValidationError::Empty);
    }

    if path.contains('\0') {
        return Err(PathValidationError::NullByte);
    }

    let max = platform.max_path_bytes();
    if path.len() > max {
        return Err(PathValidationError::PathTooLong {
            len: path.len(),
            max,
        });
    }

    let drive_letter = starts_with_drive_letter(path);
    if let Some((position, ch)) = path
        .chars()
        .enumerate()
        .find(|&(position, ch)| platform.is_invalid_char(ch, position, drive_letter))
    {
        return Err(PathValidationError::InvalidCharacter { ch, position });
    }

    for component in path.split(|c: char| platform.is_separator(c)) {
        if component.is_empty() || component == "." || component == ".." {
            continue;
        }

        if component.len() > constants::MAX_COMPONENT_BYTES {
            return Err(PathValidationError::ComponentTooLong {
                len: component.len(),
                max: constants::MAX_COMPONENT_BYTES,
            });
        }

        if platform.is_reserved_name(component) {
            return Err(PathValidationError::ReservedName {
                name: component.to_string(),
            });
        }

        if platform.has_trailing_char(component) {
            return Err(PathValidationError::TrailingCharacter {
                component: component.to_string(),
            });
        }
    }

    Ok(())
}

/// Rewrite a path so that it satisfies the naming rules of `platform`.
///
/// - rejected characters are removed
/// - each component is cut to 255 bytes
/// - on Windows, trailing spaces and periods are trimmed from each component
/// - reserved names get a `_` appended to their stem (`CON.txt` becomes
///   `CON_.txt`, `:` becomes `:_`)
/// - the whole path is cut to the platform's maximum length
///
/// Separators and the absolute or relative shape of the path are kept. A
/// non-empty result always passes [`validate_path`]; the result is empty
/// when the input held nothing but rejected characters.
///
/// # Examples
///
/// ```
/// use pathsan::{Platform, sanitize_path};
///
/// assert_eq!(sanitize_path("Photos/\u{7}Beach\0.jpg", Platform::MacOs), "Photos/Beach.jpg");
/// assert_eq!(sanitize_path("out/CON.txt", Platform::Windows), "out/CON_.txt");
/// assert_eq!(sanitize_path("what?/notes. ", Platform::Windows), "what/notes");
/// ```
#[must_use]
pub fn sanitize_path(path: &str, platform: Platform) -> String {
    let drive_letter = starts_with_drive_letter(path);
    let cleaned: String = path
        .chars()
        .enumerate()
        .filter(|&(position, ch)| !platform.is_invalid_char(ch, position, drive_letter))
        .map(|(_, ch)| ch)
        .collect();

    let components = sanitize_components(&cleaned, platform);
    let max = platform.max_path_bytes();

    // Cutting the path can expose a reserved name in the last component, and
    // renaming it adds a byte, so shrink the budget until the result fits.
    let mut sanitized = components.clone();
    let mut budget = max;
    while sanitized.len() > max {
        sanitized = sanitize_components(keep_bytes(&components, budget), platform);
        budget = budget.saturating_sub(1);
    }

    if sanitized != path {
        debug!(
            platform = %platform,
            original_len = path.len(),
            sanitized_len = sanitized.len(),
            "Sanitized path"
        );
    }
    sanitized
}

fn sanitize_components(path: &str, platform: Platform) -> String {
    let mut out = String::with_capacity(path.len());
    let mut start = 0;
    for (idx, ch) in path.char_indices() {
        if platform.is_separator(ch) {
            out.push_str(&sanitize_component(&path[start..idx], platform));
            out.push(ch);
            start = idx + ch.len_utf8();
        }
    }
    out.push_str(&sanitize_component(&path[start..], platform));
    out
}

fn sanitize_component(component: &str, platform: Platform) -> String {
    if component == "." || component == ".." {
        return component.to_string();
    }

    let trimmed = trim_trailing(keep_bytes(component, constants::MAX_COMPONENT_BYTES), platform);
    if !platform.is_reserved_name(trimmed) {
        return trimmed.to_string();
    }

    let stem_end = trimmed.find('.').unwrap_or(trimmed.len());
    let mut renamed = trimmed.to_string();
    renamed.insert(stem_end, '_');
    // the stem now ends in '_', so trimming cannot reach it
    trim_trailing(keep_bytes(&renamed, constants::MAX_COMPONENT_BYTES), platform).to_string()
}

fn trim_trailing(component: &str, platform: Platform) -> &str {
    if platform.has_trailing_char(component) {
        component.trim_end_matches([' ', '.'])
    } else {
        component
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // PLATFORM
    // =========================================================================

    #[test]
    fn test_platform_default_is_macos() {
        assert_eq!(Platform::default(), Platform::MacOs);
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::MacOs.to_string(), "macos");
        assert_eq!(Platform::Linux.to_string(), "linux");
        assert_eq!(Platform::Windows.to_string(), "windows");
    }

    #[test]
    fn test_platform_separators() {
        assert!(Platform::MacOs.is_separator('/'));
        assert!(!Platform::MacOs.is_separator('\\'));
        assert!(Platform::Windows.is_separator('\\'));
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    #[test]
    fn test_validate_valid_paths() {
        for platform in [Platform::MacOs, Platform::Linux, Platform::Windows] {
            assert!(validate_path("normal_file.txt", platform).is_ok());
            assert!(validate_path("my_folder/file.txt", platform).is_ok());
            assert!(validate_path("/abs/path/file", platform).is_ok());
            assert!(validate_path("./a/../b", platform).is_ok());
            assert!(validate_path("a//b", platform).is_ok());
            assert!(validate_path("日本語/ファイル.txt", platform).is_ok());
        }
        assert!(validate_path("C:\\Users\\me\\file.txt", Platform::Windows).is_ok());
    }

    #[test]
    fn test_validate_empty() {
        for platform in [Platform::MacOs, Platform::Linux, Platform::Windows] {
            assert_eq!(validate_path("", platform), Err(PathValidationError::Empty));
        }
    }

    #[test]
    fn test_validate_null_byte() {
        for platform in [Platform::MacOs, Platform::Linux, Platform::Windows] {
            assert_eq!(
                validate_path("file\0.txt", platform),
                Err(PathValidationError::NullByte)
            );
        }
    }

    #[test]
    fn test_validate_macos_rules() {
        assert!(validate_path("AC:DC", Platform::MacOs).is_ok());
        assert!(validate_path("what?<>|*\\", Platform::MacOs).is_ok());
        assert!(validate_path("CON.txt", Platform::MacOs).is_ok());
        assert!(validate_path("trailing. ", Platform::MacOs).is_ok());
        assert_eq!(
            validate_path("a/:/b", Platform::MacOs),
            Err(PathValidationError::ReservedName {
                name: ":".to_string()
            })
        );
        assert_eq!(
            validate_path("tab\there", Platform::MacOs),
            Err(PathValidationError::InvalidCharacter {
                ch: '\t',
                position: 3
            })
        );
    }

    #[test]
    fn test_validate_linux_rules() {
        assert!(validate_path("tab\there", Platform::Linux).is_ok());
        assert!(validate_path("a/:/b", Platform::Linux).is_ok());
        assert!(validate_path("CON", Platform::Linux).is_ok());
    }

    #[test]
    fn test_validate_windows_rules() {
        assert_eq!(
            validate_path("folder\\NUL.txt", Platform::Windows),
            Err(PathValidationError::ReservedName {
                name: "NUL.txt".to_string()
            })
        );
        assert_eq!(
            validate_path("file.txt:stream", Platform::Windows),
            Err(PathValidationError::InvalidCharacter {
                ch: ':',
                position: 8
            })
        );
        assert_eq!(
            validate_path("why?.txt", Platform::Windows),
            Err(PathValidationError::InvalidCharacter {
                ch: '?',
                position: 3
            })
        );
        assert_eq!(
            validate_path("folder./file", Platform::Windows),
            Err(PathValidationError::TrailingCharacter {
                component: "folder.".to_string()
            })
        );
        assert_eq!(
            validate_path("1:/x", Platform::Windows),
            Err(PathValidationError::InvalidCharacter {
                ch: ':',
                position: 1
            })
        );
    }

    #[test]
    fn test_validate_component_too_long() {
        let long = format!("dir/{}", "a".repeat(256));
        assert_eq!(
            validate_path(&long, Platform::MacOs),
            Err(PathValidationError::ComponentTooLong { len: 256, max: 255 })
        );
        let at_limit = format!("dir/{}", "a".repeat(255));
        assert!(validate_path(&at_limit, Platform::MacOs).is_ok());
    }

    #[test]
    fn test_validate_component_length_in_bytes() {
        // 128 two-byte characters = 256 bytes
        let long = "é".repeat(128);
        assert_eq!(
            validate_path(&long, Platform::Linux),
            Err(PathValidationError::ComponentTooLong { len: 256, max: 255 })
        );
    }

    #[test]
    fn test_validate_path_too_long() {
        let path = vec!["a".repeat(100); 11].join("/");
        assert_eq!(path.len(), 1110);
        assert_eq!(
            validate_path(&path, Platform::MacOs),
            Err(PathValidationError::PathTooLong {
                len: 1110,
                max: 1024
            })
        );
        assert!(validate_path(&path, Platform::Linux).is_ok());
    }

    // =========================================================================
    // SANITIZATION
    // =========================================================================

    #[test]
    fn test_sanitize_valid_path_unchanged() {
        for path in ["Photos/2024/IMG_0001.heic", "/Users/me/a b.txt", "a//b/./c/.."] {
            assert_eq!(sanitize_path(path, Platform::MacOs), path);
        }
        assert_eq!(
            sanitize_path("C:\\Users\\file.txt", Platform::Windows),
            "C:\\Users\\file.txt"
        );
    }

    #[test]
    fn test_sanitize_removes_invalid_chars() {
        assert_eq!(sanitize_path("a\0b\x01c", Platform::MacOs), "abc");
        assert_eq!(sanitize_path("a\0b\x01c", Platform::Linux), "ab\x01c");
        assert_eq!(
            sanitize_path("file.txt:stream<1>", Platform::Windows),
            "file.txtstream1"
        );
        assert_eq!(sanitize_path("C:a:b", Platform::Windows), "C:ab");
    }

    #[test]
    fn test_sanitize_reserved_names() {
        assert_eq!(sanitize_path("a/:/b", Platform::MacOs), "a/:_/b");
        assert_eq!(sanitize_path("CON", Platform::Windows), "CON_");
        assert_eq!(sanitize_path("x/nul.tar.gz", Platform::Windows), "x/nul_.tar.gz");
        assert_eq!(sanitize_path("CON ", Platform::Windows), "CON_");
        assert_eq!(sanitize_path("CON", Platform::Linux), "CON");
    }

    #[test]
    fn test_sanitize_trims_windows_trailing_chars() {
        assert_eq!(sanitize_path("dir. /file...", Platform::Windows), "dir/file");
        assert_eq!(sanitize_path("./../x", Platform::Windows), "./../x");
        assert_eq!(sanitize_path("dir. /file...", Platform::MacOs), "dir. /file...");
    }

    #[test]
    fn test_sanitize_truncates_components() {
        let long = format!("dir/{}.jpg", "a".repeat(300));
        let sanitized = sanitize_path(&long, Platform::MacOs);
        assert_eq!(sanitized, format!("dir/{}", "a".repeat(255)));
        assert!(validate_path(&sanitized, Platform::MacOs).is_ok());
    }

    #[test]
    fn test_sanitize_truncates_path() {
        let path = vec!["a".repeat(100); 11].join("/");
        let sanitized = sanitize_path(&path, Platform::MacOs);
        assert_eq!(sanitized.len(), 1024);
        assert!(validate_path(&sanitized, Platform::MacOs).is_ok());
    }

    #[test]
    fn test_sanitize_truncation_exposing_reserved_name() {
        // cut at 260 bytes leaves "CON" as the last component
        let path = format!("{}/{}/CONSOLE", "d".repeat(200), "e".repeat(55));
        let sanitized = sanitize_path(&path, Platform::Windows);
        assert!(sanitized.len() <= 260);
        assert!(validate_path(&sanitized, Platform::Windows).is_ok());
    }

    #[test]
    fn test_sanitize_only_invalid_chars() {
        assert_eq!(sanitize_path("\0\0", Platform::MacOs), "");
        assert_eq!(sanitize_path("???", Platform::Windows), "");
    }
}
