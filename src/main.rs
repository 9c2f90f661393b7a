// Entrypoint for the CLI application.
// - Keeps `main` small: pick the data-access implementation from the
//   startup configuration and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling.

use env_logger::Builder;
use log::LevelFilter;
use whatsdoc_cli::{api, config::AppConfig, ui::main_menu};

fn init_logger() {
    // Info by default so the data-access layer's failure logs are visible;
    // RUST_LOG still overrides.
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let config = AppConfig::from_env();
    let client = api::client_for(&config)?;

    // Start the interactive menu. This call blocks until the user exits.
    main_menu(client)?;
    Ok(())
}
