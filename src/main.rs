use clap::Parser;
use quiniela_gist::utils::logger;
use quiniela_gist::CliConfig;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the environment may already be set.
    let dotenv = dotenvy::dotenv();

    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    tracing::info!("Starting quiniela-gist");
    std::process::exit(quiniela_gist::run(config).await);
}
