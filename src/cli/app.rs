//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use topcontrib::config::Config;
use topcontrib::output::OutputMode;
use topcontrib::paths::PathStyleSetting;

/// topcontrib - Show who wrote most of a file
#[derive(Parser, Debug)]
#[command(
    name = "topcontrib",
    version,
    about = "Show who wrote most of a file",
    long_about = "Run git blame on a file and report the author with the most lines.\n\n\
                  `show` analyzes one file. `watch` keeps a status indicator up to date\n\
                  while an editor reports focus changes and saves on stdin."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Locale for messages (e.g. en, pt-BR)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Git executable to run
    #[arg(long, global = true)]
    pub git: Option<String>,

    /// Path rewriting: auto, wsl, native
    #[arg(long, global = true)]
    pub path_style: Option<PathStyleSetting>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the top contributor of a file
    Show {
        /// File to analyze
        file: Option<PathBuf>,

        /// Also list every contributor
        #[arg(short, long)]
        all: bool,
    },

    /// Keep the indicator updated from editor events on stdin
    #[command(long_about = "Keep the indicator updated from editor events on stdin.\n\n\
                            One event per line:\n  \
                            focus <path>   active file changed\n  \
                            blur           no active file\n  \
                            save <path>    a document was saved\n  \
                            show           recompute for the active file\n  \
                            quit           stop")]
    Watch {
        /// Initially active file
        file: Option<PathBuf>,

        /// Do not watch the filesystem for saves
        #[arg(long)]
        no_fs_events: bool,
    },

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(git) = cli.git {
        config.git = git;
    }
    if let Some(style) = cli.path_style {
        config.path_style = style;
    }
    let ctx = Context::new(config, cli.locale.as_deref(), output_mode);

    match cli.command {
        Some(Command::Show { file, all }) => block_on(commands::show(file, all, &ctx)),
        Some(Command::Watch { file, no_fs_events }) => {
            block_on(commands::watch(file, !no_fs_events, &ctx))
        },
        Some(Command::Config) => commands::config(&ctx, cli.config.as_deref()),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(r#"{{"version": "{}"}}"#, env!("CARGO_PKG_VERSION"));
            } else {
                println!("topcontrib v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "name": "topcontrib",
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("topcontrib v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'topcontrib --help' for usage");
                println!("Run 'topcontrib show <file>' to get started");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}

fn block_on<F>(future: F) -> anyhow::Result<ExitCode>
where
    F: Future<Output = anyhow::Result<ExitCode>>,
{
    tokio::runtime::Runtime::new()?.block_on(future)
}
