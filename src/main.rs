//! canvaboy CLI

mod cli;

use anstream::{eprintln, println};
use canvaboy::Error;
use canvaboy::auth::missing_credential_message;
use canvaboy::prompt::DEFAULT_PAGE_SIZE;
use clap::Parser;
use cli::NotesOptions;
use cli::style::Stylize;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding a tracing filter, e.g. `canvaboy=debug`
const LOG_ENV: &str = "CANVABOY_LOG";

/// Pick your merged pull requests and print them as release-note lines
#[derive(Parser)]
#[command(name = "canvaboy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository to search (overrides `git config canvaboy.orgRepo`)
    #[arg(long, value_name = "OWNER/REPO")]
    repo: Option<String>,

    /// GitHub Enterprise host (API served from https://<host>/api/v3)
    #[arg(long)]
    host: Option<String>,

    /// Checklist rows visible at once
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = if verbose {
        filter.add_directive(Level::DEBUG.into())
    } else {
        filter
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = NotesOptions {
        repo: cli.repo,
        host: cli.host,
        page_size: cli.page_size,
    };

    match cli::run_notes(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::MissingCredential) => {
            println!("{}", missing_credential_message());
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{} {e}", "Error:".error());
            ExitCode::from(1)
        }
    }
}
