use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use upgrade_notes::models::{NotesConfig, CONFIG_FILE_NAME};
use upgrade_notes::Result;

#[derive(Parser)]
#[command(name = "upgrade-notes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Release notes relevant to a version upgrade", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to ./upgrade-notes.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the release notes sections between two versions
    Extract {
        /// Version the upgrade starts from (e.g. 1.33.5-gke.1200000)
        #[arg(short, long)]
        source: String,

        /// Version the upgrade goes to (e.g. 1.34.3-gke.2405000)
        #[arg(short, long)]
        target: String,

        /// Release notes text file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output in JSON format, with windows and skipped markers
        #[arg(short, long)]
        json: bool,
    },

    /// Compare two versions
    Compare {
        /// First version
        a: String,

        /// Second version
        b: String,
    },

    /// Keep only the change content of a Kubernetes changelog
    Changelog {
        /// Changelog file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Run the MCP server over stdio
    Server,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let config = NotesConfig::load(&config_path)?;

    match cli.command {
        Commands::Extract {
            source,
            target,
            file,
            json,
        } => {
            upgrade_notes::cli::extract::run(&source, &target, file.as_deref(), json, &config)?;
        }

        Commands::Compare { a, b } => {
            upgrade_notes::cli::compare::run(&a, &b, &config)?;
        }

        Commands::Changelog { file } => {
            upgrade_notes::cli::changelog::run(file.as_deref())?;
        }

        Commands::Server => {
            upgrade_notes::cli::mcp_server::run(config)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "upgrade-notes", &mut io::stdout());
        }
    }

    Ok(())
}
