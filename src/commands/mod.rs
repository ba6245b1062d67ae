//! CLI command implementations for pathsan.
//!
//! Each subcommand maps onto one sanitizer operation; the helpers here
//! resolve the configuration and the replacement token shared by several of
//! them.

use std::path::Path;

use anyhow::{Context, Result};
use pathsan::{PathSanitizer, Platform, SanitizeConfig};
use tracing::warn;

/// Values given on the command line that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub platform: Option<Platform>,
    pub max_filename_len: Option<usize>,
    pub max_dirname_len: Option<usize>,
}

/// Replacement options for commands that accept "no replacement".
#[derive(Debug, Default, clap::Args)]
pub struct ReplacementArgs {
    /// Token substituted for '/' (default from config, ":")
    #[arg(short, long, conflicts_with = "no_replacement")]
    pub replacement: Option<String>,

    /// Leave '/' in place
    #[arg(long)]
    pub no_replacement: bool,
}

/// Load the configuration file (or defaults), apply overrides and validate.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the resulting
/// configuration is invalid.
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<SanitizeConfig> {
    let mut config = match path {
        Some(path) => SanitizeConfig::load_from(path)?,
        None => SanitizeConfig::default(),
    };

    if let Some(platform) = overrides.platform {
        config.platform = platform;
    }
    if let Some(len) = overrides.max_filename_len {
        config.limits.max_filename_len = len;
    }
    if let Some(len) = overrides.max_dirname_len {
        config.limits.max_dirname_len = len;
    }

    let validation = config.validate().context("Invalid sanitizer configuration")?;
    for warning in &validation.warnings {
        warn!("{warning}");
    }

    Ok(config)
}

/// Sanitize a filename, using `replacement` or the configured default.
pub fn filename(sanitizer: &PathSanitizer, name: &str, replacement: Option<&str>) -> String {
    match replacement {
        Some(replacement) => {
            pathsan::sanitize_filename(name, replacement, sanitizer.limits())
        },
        None => sanitizer.sanitize_filename(name),
    }
}

pub fn dirname(sanitizer: &PathSanitizer, name: &str, args: &ReplacementArgs) -> String {
    pathsan::sanitize_dirname(name, resolve_replacement(sanitizer, args), sanitizer.limits())
}

pub fn pathpart(sanitizer: &PathSanitizer, name: &str, args: &ReplacementArgs) -> String {
    sanitizer.sanitize_pathpart(name, resolve_replacement(sanitizer, args))
}

/// Validate a path, returning `"valid"` or the reason it fails.
///
/// # Errors
///
/// Returns an error naming the first platform rule the path breaks.
pub fn validate(sanitizer: &PathSanitizer, path: &str) -> Result<String> {
    sanitizer.validate_filepath(path).with_context(|| {
        format!(
            "{} is not a valid {} path",
            path.escape_debug(),
            sanitizer.config().platform
        )
    })?;
    Ok("valid".to_string())
}

fn resolve_replacement<'a>(
    sanitizer: &'a PathSanitizer,
    args: &'a ReplacementArgs,
) -> Option<&'a str> {
    if args.no_replacement {
        return None;
    }
    Some(
        args.replacement
            .as_deref()
            .unwrap_or(sanitizer.config().replacement.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathsan::Limits;

    fn sanitizer() -> PathSanitizer {
        PathSanitizer::new(SanitizeConfig::default())
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None, &Overrides::default()).unwrap();
        assert_eq!(config, SanitizeConfig::default());
    }

    #[test]
    fn test_load_config_overrides() {
        let overrides = Overrides {
            platform: Some(Platform::Windows),
            max_filename_len: Some(10),
            max_dirname_len: None,
        };
        let config = load_config(None, &overrides).unwrap();
        assert_eq!(config.platform, Platform::Windows);
        assert_eq!(config.limits, Limits::new(10, 255));
    }

    #[test]
    fn test_load_config_rejects_zero_limit() {
        let overrides = Overrides {
            max_dirname_len: Some(0),
            ..Default::default()
        };
        assert!(load_config(None, &overrides).is_err());
    }

    #[test]
    fn test_resolve_replacement() {
        let s = sanitizer();
        let args = ReplacementArgs::default();
        assert_eq!(resolve_replacement(&s, &args), Some(":"));

        let args = ReplacementArgs {
            replacement: Some("_".to_string()),
            no_replacement: false,
        };
        assert_eq!(resolve_replacement(&s, &args), Some("_"));

        let args = ReplacementArgs {
            replacement: None,
            no_replacement: true,
        };
        assert_eq!(resolve_replacement(&s, &args), None);
    }

    #[test]
    fn test_commands() {
        let s = sanitizer();
        assert_eq!(filename(&s, "a/b.txt", None), "a:b.txt");
        assert_eq!(filename(&s, "a/b.txt", Some("-")), "a-b.txt");

        let keep = ReplacementArgs {
            replacement: None,
            no_replacement: true,
        };
        assert_eq!(dirname(&s, "a/b", &keep), "a/b");
        assert_eq!(pathpart(&s, "a/b", &ReplacementArgs::default()), "a:b");
    }

    #[test]
    fn test_validate_command() {
        let s = sanitizer();
        assert_eq!(validate(&s, "a/b").unwrap(), "valid");

        let err = validate(&s, "a/\u{1}").unwrap_err();
        assert!(format!("{err:#}").contains("invalid character"));
    }
}
