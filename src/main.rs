use anyhow::Result;
use todolist::config::Config;
use todolist::logger::{self, Logger};
use todolist::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        return Config::generate_default_config(Config::get_default_config_path()?);
    }

    let config = Config::load()?;

    let log_buffer = Logger::new();
    logger::init(&config.logging, &log_buffer)?;
    log::info!("Loaded configuration, file logging enabled: {}", config.logging.enabled);

    // Run the TUI application
    ui::run_app(config, log_buffer).await
}
