use std::io;
use std::process::ExitCode;

use hotel::{BookingService, Console, HotelConfig, HotelError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run() -> Result<(), HotelError> {
    let service = BookingService::from_config(&HotelConfig::default())?;
    let stdin = io::stdin();
    let mut console = Console::new(service, stdin.lock(), io::stdout().lock());
    console.run()
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "desk stopped");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
