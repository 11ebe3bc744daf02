mod message;
mod prelude;

use prelude::*;

use dotenv::dotenv;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let message = message::message();
    info!("👋 greeting");

    // stdout carries only the message, logs go to stderr
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}").context("fails to write message")?;
    stdout.flush().context("fails to flush stdout")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
