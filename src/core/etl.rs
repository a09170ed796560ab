use crate::core::Pipeline;
use crate::utils::error::Result;

pub const DRY_RUN_LOCATION: &str = "(dry run, nothing published)";

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    dry_run: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Fetching next Quiniela draw");
        let bundle = self.pipeline.extract().await?;

        let payload = self.pipeline.transform(bundle).await?;
        tracing::info!(
            "📦 Prepared {} ({} matches, {} bytes)",
            payload.filename,
            payload.match_count,
            payload.content.len()
        );

        if self.dry_run {
            tracing::info!("🧪 Dry run: skipping publish");
            println!("{}", payload.content);
            return Ok(DRY_RUN_LOCATION.to_string());
        }

        self.pipeline.load(payload).await
    }
}
