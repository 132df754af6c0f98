//! Entry point for the `outlook` command-line interface.
#![forbid(unsafe_code)]

use outlook_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    match outlook_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("outlook: {err}");
            std::process::exit(1);
        }
    }
}

/// Send `log` records to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(err) = installed {
        eprintln!("outlook: logging disabled: {err}");
    }
}
