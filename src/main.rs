//! eslint-audit CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use eslint_audit::cli::{AuditCommand, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by the `RUST_LOG` environment variable;
/// the default is INFO.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("eslint_audit=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("eslint-audit starting with args: {:?}", cli);

    let command = AuditCommand::new(&cli.file);
    let mut stdout = std::io::stdout();

    match command.run(&mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
