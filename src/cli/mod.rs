//! CLI for cinject
//!
//! Provides the injector's command-line surface:
//! - `inject`: render service entrypoints and patch the target document
//! - `completions`: generate shell completions

pub mod completions;
pub mod inject;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for cinject
#[derive(Parser, Debug)]
#[command(name = "cinject")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = "error")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inject file contents into service entrypoints
    Inject {
        /// Manifest listing the files to inject
        #[arg(short, long, default_value = "serviceFile.yml")]
        input: PathBuf,
        /// Pipeline document to patch in place
        #[arg(short, long, default_value = ".gitlab-ci.yml")]
        output: PathBuf,
        /// Fail when a job/alias matches no node in the document
        #[arg(long)]
        strict: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: ShellArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Build the CLI command for completion generation
pub fn build_cli() -> clap::Command {
    use clap::CommandFactory;

    Args::command()
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let args = Args::parse();

    cinject::init_logging(&args.log_level);

    match args.command {
        Command::Inject {
            input,
            output,
            strict,
        } => {
            inject::run_inject(&input, &output, strict)?;
        }
        Command::Completions { shell, output } => {
            use clap_complete::Shell;

            let shell_enum = match shell {
                ShellArg::Bash => Shell::Bash,
                ShellArg::Zsh => Shell::Zsh,
                ShellArg::Fish => Shell::Fish,
                ShellArg::PowerShell => Shell::PowerShell,
            };

            let generated = completions::generate_completions(shell_enum)?;

            if let Some(output_path) = output {
                completions::save_completions(&generated, &output_path)?;
            } else {
                println!("{}", generated);
            }
        }
    }

    Ok(())
}
