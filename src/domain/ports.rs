use crate::domain::model::{MatchBundle, PublishPayload};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Destination for the published file. Returns where the file ended up.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn next_draw_url(&self) -> &str;
    fn matches_url(&self) -> &str;
    fn output_filename(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<MatchBundle>;
    async fn transform(&self, bundle: MatchBundle) -> Result<PublishPayload>;
    async fn load(&self, payload: PublishPayload) -> Result<String>;
}
