//! Fuzz target for the name sanitizers - length limits and separators.
//!
//! This fuzzer tests that:
//! 1. No input causes a panic
//! 2. Outputs never exceed their configured limit
//! 3. No separator survives a separator-free replacement
//! 4. A `(N)` counter is never cut
//!
//! Run with: `cargo +nightly fuzz run fuzz_sanitize_names`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pathsan::{
    Limits, sanitize_dirname, sanitize_filename, sanitize_filestem_with_count, sanitize_pathpart,
};

/// Structured input for more targeted fuzzing.
#[derive(Arbitrary, Debug)]
struct NameInput {
    /// Raw name to sanitize
    name: String,
    /// Replacement token; `None` leaves separators in place
    replacement: Option<String>,
    /// Suffix following the stem
    suffix: String,
    /// Counter appended to the stem, if any
    counter: Option<u16>,
    max_filename_len: u8,
    max_dirname_len: u8,
}

fuzz_target!(|data: NameInput| {
    let limits = Limits::new(
        usize::from(data.max_filename_len.max(1)),
        usize::from(data.max_dirname_len.max(1)),
    );
    let replacement = data.replacement.as_deref().unwrap_or(":");

    let filename = sanitize_filename(&data.name, replacement, &limits);
    assert!(
        filename.chars().count() <= limits.max_filename_len,
        "filename too long: {:?} from {:?}",
        filename,
        data.name
    );
    if !replacement.contains('/') {
        assert!(!filename.contains('/'), "separator survived: {filename:?}");
    }

    let part = sanitize_pathpart(&data.name, data.replacement.as_deref(), &limits);
    assert!(part.chars().count() <= limits.max_dirname_len);
    assert_eq!(
        part,
        sanitize_dirname(&data.name, data.replacement.as_deref(), &limits)
    );
    if data.replacement.is_none() {
        assert!(data.name.starts_with(&part), "pathpart changed without replacement");
    }

    let stem = match data.counter {
        Some(n) => format!("{} ({n})", data.name),
        None => data.name.clone(),
    };
    let sanitized = sanitize_filestem_with_count(&stem, &data.suffix, &limits);
    if let Some(n) = data.counter {
        assert!(
            sanitized.ends_with(&format!("({n})")),
            "counter lost: {sanitized:?} from {stem:?}"
        );
    }
});
