use clap::Parser as _;
use meqtool::BaseArgs;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument the analysis
    // pipeline; subscribe here so RUST_LOG can surface those events.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = BaseArgs::parse();
    args.evaluate().await
}
