//! Binary entrypoint for the clinic page tools.
use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use clinic_engine::{Configuration, Language, Theme};
use logging::{self as logshared, forward};
use serde::Serialize;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*};

/// Offline rendering of the clinic page.
mod render;
/// Stdin/stdout host session.
mod session;

use crate::{
    render::{EditorViews, RenderOptions},
    session::SessionOptions,
};

#[derive(Parser, Debug)]
#[command(
    name = "clinic",
    about = "Render and live-edit the clinic page configuration",
    version
)]
/// Command-line interface for the `clinic` binary.
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,

    /// Logging controls
    #[command(flatten)]
    log: logshared::LogArgs,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Load and validate a configuration file (.json or .ron) then exit.
    Check {
        /// Path to the configuration file
        path: PathBuf,

        /// Dump the edit-panel and capability values as JSON to stdout
        #[arg(long)]
        dump: bool,
    },

    /// Render the page with a configuration and print the document state as JSON.
    Render {
        /// Configuration file; defaults only when omitted
        path: Option<PathBuf>,

        /// Treat empty, zero and false values as unset
        #[arg(long)]
        falsy_as_unset: bool,

        /// Page language (en|ar)
        #[arg(long, value_name = "LANG")]
        lang: Option<Language>,

        /// Color theme (light|dark)
        #[arg(long)]
        theme: Option<Theme>,
    },

    /// Run the page against a host speaking JSON lines on stdin/stdout.
    Session {
        /// Forward page logs to the host as log messages
        #[arg(long)]
        forward_logs: bool,

        /// Treat empty, zero and false values as unset
        #[arg(long)]
        falsy_as_unset: bool,
    },
}

/// Load a configuration file or exit with a formatted error.
fn load_or_exit(path: &Path) -> Configuration {
    match config::load_from_path(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e.pretty());
            process::exit(1);
        }
    }
}

/// Print `value` as pretty JSON or exit.
fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env_filter = logshared::env_filter_from_spec(&cli.log.spec());

    // Logs go to stderr so stdout stays reserved for command output and the
    // session protocol. The forward layer is a no-op until a sink is set.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .with(forward::layer())
        .try_init()
        .ok();

    match cli.command {
        Command::Check { path, dump } => {
            let cfg = load_or_exit(&path);
            if dump {
                print_json(&EditorViews::of(&cfg));
            } else {
                println!("OK: {} field(s) set", cfg.len());
            }
        }
        Command::Render {
            path,
            falsy_as_unset,
            lang,
            theme,
        } => {
            let cfg = path.as_deref().map(load_or_exit).unwrap_or_default();
            debug!(fields = cfg.len(), "rendering");
            let rendered = render::render(
                cfg,
                RenderOptions {
                    falsy_as_unset,
                    language: lang,
                    theme,
                },
            );
            print_json(&rendered);
        }
        Command::Session {
            forward_logs,
            falsy_as_unset,
        } => {
            let opts = SessionOptions {
                forward_logs,
                falsy_as_unset,
            };
            if let Err(e) = session::run(opts).await {
                error!("Session exited with error: {}", e);
                process::exit(1);
            }
        }
    }
}
