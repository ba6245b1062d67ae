//! macOS naming rules.
//!
//! APFS and HFS+ accept almost any character in a name. The POSIX layer
//! rejects NUL, and `:` is the Finder's view of `/`, so a component made of
//! a lone `:` cannot be created from Finder. ASCII control characters are
//! rejected as well.

/// Component names that cannot be used on macOS.
pub const MACOS_RESERVED_NAMES: &[&str] = &[":"];

pub(super) fn is_reserved_name(component: &str) -> bool {
    MACOS_RESERVED_NAMES.contains(&component)
}

pub(super) fn is_invalid_char(ch: char) -> bool {
    ch.is_ascii_control()
}
