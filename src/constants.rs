//! Default limits and platform constants.

/// Maximum filename length in characters (macOS).
pub const DEFAULT_MAX_FILENAME_LEN: usize = 255;

/// Maximum directory name length in characters (macOS).
pub const DEFAULT_MAX_DIRNAME_LEN: usize = 255;

/// Token substituted for the path separator when none is configured.
///
/// macOS presents `:` in the POSIX layer as `/` in Finder, so a name like
/// `AC/DC` round-trips visually.
pub const DEFAULT_REPLACEMENT: &str = ":";

/// The separator replaced inside path parts.
pub const PATH_SEPARATOR: char = '/';

/// Maximum length of a single path component in UTF-8 bytes, all platforms.
pub const MAX_COMPONENT_BYTES: usize = 255;

/// Maximum full path length in UTF-8 bytes on macOS (`PATH_MAX`).
pub const MACOS_MAX_PATH_BYTES: usize = 1024;

/// Maximum full path length in UTF-8 bytes on Linux (`PATH_MAX`).
pub const LINUX_MAX_PATH_BYTES: usize = 4096;

/// Maximum full path length on Windows without the `\\?\` prefix (`MAX_PATH`).
pub const WINDOWS_MAX_PATH_BYTES: usize = 260;
