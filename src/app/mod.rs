pub mod pipelines;

use crate::adapters::gist::GistStorage;
use crate::adapters::local::LocalStorage;
use crate::config::CliConfig;
use crate::core::etl::EtlEngine;
use crate::core::pipeline::QuinielaPipeline;
use crate::core::{ConfigProvider, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

async fn execute<S: Storage>(storage: S, config: CliConfig) -> Result<String> {
    let dry_run = config.dry_run;
    let pipeline = QuinielaPipeline::new(storage, config)?;
    EtlEngine::new(pipeline).with_dry_run(dry_run).run().await
}

async fn publish(config: CliConfig) -> Result<String> {
    config.validate()?;
    tracing::debug!("Configuration: {:?}", config);

    match config.output_dir.clone() {
        Some(dir) => execute(LocalStorage::new(dir), config).await,
        None => {
            let storage = GistStorage::new(
                &config.gist_api_url,
                &config.gist_id,
                // Absent only in dry runs, where nothing is sent.
                config.gist_token.as_deref().unwrap_or_default(),
                config.request_timeout(),
            )?;
            execute(storage, config).await
        }
    }
}

/// Runs the whole fetch-and-publish flow and returns the process exit code.
pub async fn run(config: CliConfig) -> i32 {
    match publish(config).await {
        Ok(location) => {
            tracing::info!("🎉 Done: {}", location);
            EXIT_SUCCESS
        }
        Err(e) => {
            if e.is_config_error() {
                tracing::error!("❌ Configuration validation failed: {}", e);
            } else {
                tracing::error!("❌ Update aborted: {}", e);
            }
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            EXIT_FAILURE
        }
    }
}
