//! clicontext: command-line harness for the context store.
//!
//! Every subcommand maps to exactly one store operation; the binary adds
//! argument parsing, logging and output formatting and nothing else.
//!
//! # Usage
//!
//! ```text
//! clicontext [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list     List contexts, marking the default with `*`
//!   show     Print a context's document
//!   set      Store a file's contents as a context
//!   rename   Rename a context
//!   delete   Delete a context
//!   default  Print the default context
//!   use      Make a context the default
//!   unset    Clear the default
//!
//! Options:
//!   --dir <DIR>          Context directory            [env: CLICONTEXT_DIR]
//!   --no-symlinks        Write the default as a file  [env: CLICONTEXT_NO_SYMLINKS]
//!   --settings <PATH>    Settings file                [env: CLICONTEXT_SETTINGS]
//! ```
//!
//! Command-line flags take precedence over the settings file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use clicontext_core::{default_settings_path, RawCodec, Store, StoreError, StoreSettings};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Manage named CLI contexts stored on disk.
#[derive(Debug, Parser)]
#[command(name = "clicontext", about = "Manage named CLI contexts", version)]
struct Cli {
    /// Directory holding the context files.
    #[arg(long, env = "CLICONTEXT_DIR")]
    dir: Option<PathBuf>,

    /// Always write the default indicator as a plain file.
    #[arg(long, env = "CLICONTEXT_NO_SYMLINKS")]
    no_symlinks: bool,

    /// Settings file.  Defaults to the platform config directory.
    #[arg(long, env = "CLICONTEXT_SETTINGS")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List contexts, marking the default with `*`.
    List {
        /// Print JSON instead of one name per line.
        #[arg(long)]
        json: bool,
    },
    /// Print a context's document.
    Show { name: String },
    /// Store the contents of FILE as context NAME, replacing any existing one.
    Set { name: String, file: PathBuf },
    /// Rename context FROM to TO.
    Rename {
        from: String,
        to: String,
        /// Fail instead of overwriting an existing TO.
        #[arg(long)]
        no_clobber: bool,
    },
    /// Delete a context.
    Delete { name: String },
    /// Print the default context, if any.
    Default,
    /// Make NAME the default context.
    Use { name: String },
    /// Clear the default context.
    Unset,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    contexts: Vec<String>,
    default: Option<String>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with command output.  Level is
    // overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = open_store(&cli)?;
    debug!("using context directory {}", store.dir().display());

    run(&store, cli.command).map_err(describe)
}

/// Builds the store from the settings file overlaid with command-line flags.
fn open_store(cli: &Cli) -> anyhow::Result<Store<RawCodec>> {
    let mut settings = match &cli.settings {
        Some(path) => StoreSettings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => match default_settings_path() {
            Ok(path) => StoreSettings::load(&path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            Err(_) => StoreSettings::default(),
        },
    };

    if let Some(dir) = &cli.dir {
        settings.directory = Some(dir.clone());
    }
    if cli.no_symlinks {
        settings.disable_symlinks = true;
    }

    let options = settings
        .to_options()
        .context("no context directory; pass --dir or set CLICONTEXT_DIR")?;
    Ok(Store::new(RawCodec, options)?)
}

fn run(store: &Store<RawCodec>, command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::List { json } => {
            let mut contexts = store.list()?;
            contexts.sort();
            let default = store.default_name()?;
            if json {
                let body = ListOutput { contexts, default };
                writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
            } else {
                for name in contexts {
                    let marker = if default.as_deref() == Some(name.as_str()) {
                        "*"
                    } else {
                        " "
                    };
                    writeln!(out, "{marker} {name}")?;
                }
            }
        }
        Command::Show { name } => {
            let body = store.load(&name)?;
            out.write_all(&body)?;
        }
        Command::Set { name, file } => {
            let body = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            store.set(&name, &body)?;
        }
        Command::Rename {
            from,
            to,
            no_clobber,
        } => {
            if no_clobber {
                store.rename_no_clobber(&from, &to)?;
            } else {
                store.rename(&from, &to)?;
            }
        }
        Command::Delete { name } => store.delete(&name)?,
        Command::Default => {
            if let Some(name) = store.default_name()? {
                writeln!(out, "{name}")?;
            }
        }
        Command::Use { name } => store.set_default(&name)?,
        Command::Unset => store.unset_default()?,
    }
    Ok(())
}

/// Rewrites a missing-context error into a message naming the context;
/// everything else is reported unchanged.
fn describe(err: anyhow::Error) -> anyhow::Error {
    if let Some(StoreError::NotFound { name }) = err.downcast_ref::<StoreError>() {
        return anyhow::anyhow!("no context named {:?}", name);
    }
    err
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rename_with_no_clobber() {
        let cli = Cli::try_parse_from([
            "clicontext",
            "--dir",
            "/tmp/c",
            "rename",
            "a",
            "b",
            "--no-clobber",
        ])
        .expect("parse");
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/c")));
        assert!(matches!(
            cli.command,
            Command::Rename { ref from, ref to, no_clobber: true } if from == "a" && to == "b"
        ));
    }

    #[test]
    fn test_not_found_is_reported_by_name() {
        let msg = describe(
            StoreError::NotFound {
                name: "prod".to_string(),
            }
            .into(),
        )
        .to_string();
        assert_eq!(msg, "no context named \"prod\"");
    }
}
