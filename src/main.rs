use salon_agenda::{storage::config::Config, SystemClock};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{parse_cli_mode, run, usage};
mod sample_data;

fn main() -> anyhow::Result<()> {
    setup_logging();

    let options = match parse_cli_mode() {
        Ok(options) => options,
        Err(err) => {
            tracing::error!("Invalid arguments: {}", err);
            eprintln!("Error: {}", err);
            eprintln!("{}", usage());
            std::process::exit(2);
        }
    };

    let config = match Config::load_or_create() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default config: {}", e);
            Config::default()
        }
    };

    if let Err(e) = run(options, &config, SystemClock) {
        tracing::error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

fn setup_logging() {
    let log_dir = Config::config_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "salon-agenda.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("salon-agenda started");
}
