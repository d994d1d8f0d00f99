use actpulse::cli::{parse_args, run};

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

/// Log to stderr so command output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;
    if let Err(e) = runtime.block_on(run(args)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
