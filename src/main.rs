//! cinject - GitLab CI file injector
//!
//! A command-line utility that embeds file contents into the entrypoints of
//! services declared in a `.gitlab-ci.yml`.
//!
//! ## Commands
//!
//! - `cinject inject` - Render and inject service entrypoints
//! - `cinject completions` - Generate shell completions
//!
//! ## Installation
//!
//! ```bash
//! cargo install cinject
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Inject with the defaults (serviceFile.yml into .gitlab-ci.yml)
//! cinject inject
//!
//! # Explicit paths and verbose logging
//! cinject inject -i services.yml -o ci/pipeline.yml -l debug
//!
//! # Generate shell completions
//! cinject completions bash > /etc/bash_completion.d/cinject
//! ```

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    // Run the CLI
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if std::env::var("CINJECT_VERBOSE").is_ok() {
                eprintln!("{:?}", e);
            }
            ExitCode::FAILURE
        }
    }
}
