use crate::adapters::lottery::LotteryClient;
use crate::core::{ConfigProvider, MatchBundle, Pipeline, PublishPayload, Storage};
use crate::utils::error::Result;

/// Next draw → its matches → one JSON file in `storage`.
pub struct QuinielaPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) lottery: LotteryClient,
}

impl<S: Storage, C: ConfigProvider> QuinielaPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let lottery = LotteryClient::new(config.request_timeout())?;
        Ok(Self {
            storage,
            config,
            lottery,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for QuinielaPipeline<S, C> {
    async fn extract(&self) -> Result<MatchBundle> {
        let date = self
            .lottery
            .next_draw_date(self.config.next_draw_url())
            .await?;

        self.lottery
            .matches_for(self.config.matches_url(), &date)
            .await
    }

    async fn transform(&self, bundle: MatchBundle) -> Result<PublishPayload> {
        let content = serde_json::to_string_pretty(&bundle)?;
        tracing::debug!("Serialized bundle into {} bytes", content.len());

        Ok(PublishPayload {
            filename: self.config.output_filename().to_string(),
            content,
            match_count: bundle.match_count(),
        })
    }

    async fn load(&self, payload: PublishPayload) -> Result<String> {
        self.storage
            .write_file(&payload.filename, payload.content.as_bytes())
            .await
    }
}
