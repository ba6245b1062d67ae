//! Windows naming rules.
//!
//! - Reserved device names (CON, PRN, NUL, COM1-9, LPT1-9), with or without
//!   an extension
//! - Characters `< > : " | ? *` and ASCII control characters
//! - `:` is allowed only as a drive letter separator (`C:`)
//! - Components may not end with a space or a period

/// Reserved Windows device names that can cause issues even with extensions.
///
/// Windows treats these as device names regardless of extension:
/// - `CON`, `PRN`, `AUX`, `NUL`
/// - `COM1` through `COM9`
/// - `LPT1` through `LPT9`
pub const WINDOWS_RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const INVALID_CHARS: &[char] = &['<', '>', '"', '|', '?', '*'];

/// Returns true if `component` names a device, e.g. `con` or `NUL.txt`.
pub(super) fn is_reserved_name(component: &str) -> bool {
    // "CON.txt" -> "CON", "NUL" -> "NUL"
    let stem = component
        .split('.')
        .next()
        .unwrap_or(component)
        .to_uppercase();
    WINDOWS_RESERVED_NAMES.contains(&stem.as_str())
}

/// Returns true if `ch` at char index `position` is not allowed.
///
/// `drive_letter` tells whether the path starts with an ASCII letter, which
/// makes a `:` at index 1 a drive separator.
pub(super) fn is_invalid_char(ch: char, position: usize, drive_letter: bool) -> bool {
    if ch == ':' {
        return !(position == 1 && drive_letter);
    }
    ch.is_ascii_control() || INVALID_CHARS.contains(&ch)
}

/// Returns true if `component` ends with a space or period.
///
/// `.` and `..` are directory references, not names.
pub(super) fn has_trailing_char(component: &str) -> bool {
    component != "." && component != ".." && component.ends_with([' ', '.'])
}
