use anyhow::Result;
use clap::Parser;
use sortscope::{headless, util, App, Cli, Config};
use std::fs::{self, OpenOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::paths::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.sortscope/logs/sortscope.log)
    fs::create_dir_all(util::paths::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::paths::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    // Load config file, then apply command-line overrides
    let mut config = Config::load();
    cli.apply_to(&mut config)?;

    if cli.headless {
        return headless::run(&config);
    }

    let mut app = App::new(config)?;
    app.run().await
}
