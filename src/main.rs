use anyhow::Context;
use clap::Parser;
use countercraft::args::{Cli, Command, Press};
use countercraft::board::Board;
use countercraft::config::Config;
use countercraft::context::AppContext;
use countercraft::logging::init_tracing;
use countercraft::shutdown::ShutdownHandle;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    init_tracing(&config.logging).context("failed to open log file")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "countercraft starting");

    let ctx = AppContext::new(&config.counters).context("failed to build the global store")?;

    match cli.command {
        Some(Command::Press { presses }) => run_presses(&ctx, &config, &presses),
        None => {
            let shutdown = ShutdownHandle::new();
            shutdown
                .register_signals()
                .context("failed to install signal handlers")?;
            countercraft::ui::run(&config, &ctx, shutdown).context("terminal UI failed")
        }
    }
}

/// Headless mode: apply presses in order, then print every section.
fn run_presses(ctx: &AppContext, config: &Config, presses: &[Press]) -> anyhow::Result<()> {
    let mut board = Board::mount(
        ctx,
        config.counters.initial_value,
        config.counters.reducer_step,
    );
    for press in presses {
        board
            .press(press.strategy, press.button)
            .with_context(|| format!("press '{press}' failed"))?;
    }
    for reading in board.readings() {
        println!("{}: {}", reading.strategy.title(), reading.value);
    }
    Ok(())
}
