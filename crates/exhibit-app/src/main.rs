mod cli;
mod options;
mod replay;

use std::process::ExitCode;

use exhibit_config::schema::ExhibitConfig;
use tracing_subscriber::EnvFilter;

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = options::load_config(args.config.as_deref());

    // Logging needs the config's level, so it starts after the load.
    let directive = args.log_level.clone().unwrap_or_else(|| {
        loaded
            .as_ref()
            .map(|c| c.logging.level)
            .unwrap_or_default()
            .as_directive()
            .to_string()
    });
    init_logging(&directive);

    tracing::info!("exhibit-layout v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ExhibitConfig::default()
    });

    match replay::run(&args, &config) {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to serialize report: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            tracing::error!("Replay failed: {e}");
            ExitCode::FAILURE
        }
    }
}
