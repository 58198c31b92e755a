use anyhow::Context;
use clap::Parser;
use post_console::cli::Cli;
use post_console::logging::init_tracing;
use post_console::ui::runtime;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.load_config().context("Failed to load configuration")?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = runtime::run(&config, rt.handle());
    rt.shutdown_timeout(Duration::from_millis(500));
    result
}
