//! Fuzz target for `sanitize_path` / `validate_path`.
//!
//! This fuzzer tests that:
//! 1. No input causes a panic
//! 2. A non-empty sanitized path always validates on its platform
//! 3. Sanitized paths never contain null bytes or exceed the platform limit
//! 4. Validation errors match the input that caused them
//!
//! Run with: `cargo +nightly fuzz run fuzz_sanitize_path`

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pathsan::{PathValidationError, Platform, sanitize_path, validate_path};

#[derive(Arbitrary, Debug)]
enum FuzzPlatform {
    MacOs,
    Linux,
    Windows,
}

impl From<FuzzPlatform> for Platform {
    fn from(p: FuzzPlatform) -> Self {
        match p {
            FuzzPlatform::MacOs => Platform::MacOs,
            FuzzPlatform::Linux => Platform::Linux,
            FuzzPlatform::Windows => Platform::Windows,
        }
    }
}

/// Structured input for more targeted fuzzing.
#[derive(Arbitrary, Debug)]
struct PathInput {
    /// Path components to join
    components: Vec<String>,
    /// Whether to make the path absolute
    absolute: bool,
    /// Whether to inject a null byte
    inject_null: bool,
    platform: FuzzPlatform,
}

impl PathInput {
    /// Build the final path string for testing.
    fn build(&self) -> String {
        let mut result = self.components.join("/");
        if self.absolute {
            result.insert(0, '/');
        }
        if self.inject_null {
            let pos = result.char_indices().nth(result.chars().count() / 2).map_or(0, |(i, _)| i);
            result.insert(pos, '\0');
        }
        result
    }
}

fuzz_target!(|data: PathInput| {
    let path = data.build();
    let platform = Platform::from(data.platform);

    match validate_path(&path, platform) {
        Ok(()) => {
            // INVARIANT: valid paths are left alone
            assert_eq!(sanitize_path(&path, platform), path);
        },
        Err(PathValidationError::NullByte) => {
            assert!(path.contains('\0'), "NullByte error but no null in {path:?}");
        },
        Err(PathValidationError::Empty) => {
            assert!(path.is_empty());
        },
        Err(PathValidationError::PathTooLong { len, max }) => {
            assert_eq!(len, path.len());
            assert!(len > max);
        },
        Err(_) => {},
    }

    let sanitized = sanitize_path(&path, platform);

    // INVARIANT 1: no null bytes
    assert!(!sanitized.contains('\0'), "null byte in {sanitized:?}");

    // INVARIANT 2: within the platform's length limit
    assert!(sanitized.len() <= platform.max_path_bytes());

    // INVARIANT 3: non-empty output validates
    if !sanitized.is_empty() {
        assert!(
            validate_path(&sanitized, platform).is_ok(),
            "sanitized path {:?} from {:?} invalid on {}: {:?}",
            sanitized,
            path,
            platform,
            validate_path(&sanitized, platform)
        );
    }
});
