use anyhow::Result;
use asset_sweep::{SweepContext, commands, output};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use colored::Colorize;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(
    name = "sweep",
    version = asset_sweep::VERSION,
    about = "Delete the built-in manifest of unused frontend assets",
    long_about = "Deletes a pre-computed list of unused asset files from the \
                  frontend's assets/images and assets/icons directories, \
                  reporting deleted and not-found counts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Frontend root to sweep under (overrides the configured default)
    #[arg(long, global = true, env = "ASSET_SWEEP_ROOT")]
    root: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete every manifest file that exists on disk
    Sweep {
        /// Dry run - only show what would be removed
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Show which manifest files are still present, without deleting
    Status,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    if cli.quiet {
        output::set_verbosity(output::Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(output::Verbosity::Verbose);
    }

    match cli.command {
        Commands::Sweep { dry_run } => {
            let ctx = SweepContext::new(cli.root)?;
            commands::sweep::execute(&ctx, dry_run)?;
        }
        Commands::Status => {
            let ctx = SweepContext::new(cli.root)?;
            commands::status::execute(&ctx)?;
        }
        Commands::Completion { shell } => {
            print_completions(shell, &mut Cli::command());
        }
    }

    Ok(())
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
