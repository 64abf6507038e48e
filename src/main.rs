use anyhow::Result;
use tracing::info;

use top_chatter_reporter::{load_config, load_env_file, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    load_env_file();
    let cfg = load_config();
    info!("channel = {}", cfg.channel);

    // Failures are logged inside the run; the process exits 0 regardless.
    let outcome = run(&cfg).await;
    if !outcome.is_written() {
        info!("No top chatter label written this run");
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
