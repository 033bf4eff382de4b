use std::io::{self, Write};

use anyhow::Result;
use speedtest_pi::{BenchConfig, Harness};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Diagnostics stay off stdout.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let harness = Harness::new(BenchConfig::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    harness.run(&mut out)?;
    out.flush()?;

    Ok(())
}
