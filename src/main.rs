//! pathsan - sanitize names into valid filesystem path components.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use pathsan::{PathSanitizer, Platform};

use commands::{Overrides, ReplacementArgs};

#[derive(Parser)]
#[command(name = "pathsan")]
#[command(about = "Sanitize names into valid, length-limited path components")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Target platform profile
    #[arg(long, global = true, value_enum)]
    platform: Option<Platform>,

    /// Maximum filename length in characters
    #[arg(long, global = true)]
    max_filename_len: Option<usize>,

    /// Maximum directory name length in characters
    #[arg(long, global = true)]
    max_dirname_len: Option<usize>,

    /// Log truncation and validation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace separators in a filename and truncate it, keeping the extension
    Filename {
        name: String,
        /// Token substituted for '/' (default from config, ":")
        #[arg(short, long)]
        replacement: Option<String>,
    },
    /// Replace separators in a directory name and truncate it
    Dirname {
        name: String,
        #[command(flatten)]
        replacement: ReplacementArgs,
    },
    /// Replace separators in a path segment and truncate it
    Pathpart {
        name: String,
        #[command(flatten)]
        replacement: ReplacementArgs,
    },
    /// Truncate a file stem so stem + suffix fits, keeping a "(N)" counter
    Filestem {
        stem: String,
        /// Everything that follows the stem, e.g. ".jpg"
        suffix: String,
    },
    /// Repair a full path for the target platform
    Filepath {
        path: String,
    },
    /// Check a full path against the target platform (exit 1 if invalid)
    Validate {
        path: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "pathsan", &mut std::io::stdout());
        return Ok(());
    }

    let overrides = Overrides {
        platform: cli.platform,
        max_filename_len: cli.max_filename_len,
        max_dirname_len: cli.max_dirname_len,
    };
    let config = commands::load_config(cli.config.as_deref(), &overrides)?;
    let sanitizer = PathSanitizer::new(config);

    let output = match cli.command {
        Commands::Filename { name, replacement } => {
            commands::filename(&sanitizer, &name, replacement.as_deref())
        },
        Commands::Dirname { name, replacement } => {
            commands::dirname(&sanitizer, &name, &replacement)
        },
        Commands::Pathpart { name, replacement } => {
            commands::pathpart(&sanitizer, &name, &replacement)
        },
        Commands::Filestem { stem, suffix } => {
            sanitizer.sanitize_filestem_with_count(&stem, &suffix)
        },
        Commands::Filepath { path } => sanitizer.sanitize_filepath(&path),
        Commands::Validate { path } => commands::validate(&sanitizer, &path)?,
        Commands::Completions { .. } => return Ok(()),
    };

    println!("{output}");
    Ok(())
}

/// Initialize stderr logging so stdout carries only results.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
