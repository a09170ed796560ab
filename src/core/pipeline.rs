pub use crate::app::pipelines::quiniela_pipeline::QuinielaPipeline;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::etl::{EtlEngine, DRY_RUN_LOCATION};
    use crate::core::{ConfigProvider, Pipeline, Storage};
    use crate::utils::error::{QuinielaError, Result};
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }

        async fn len(&self) -> usize {
            self.files.lock().await.len()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(format!("mock://{}", path))
        }
    }

    struct MockConfig {
        next_draw_url: String,
        matches_url: String,
    }

    impl MockConfig {
        fn new(server: &MockServer) -> Self {
            Self {
                next_draw_url: server.url("/servicios/proximosv3?game_id=LAQU"),
                matches_url: server.url("/servicios/fechav3?game_id=LAQU&fecha_sorteo="),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn next_draw_url(&self) -> &str {
            &self.next_draw_url
        }

        fn matches_url(&self) -> &str {
            &self.matches_url
        }

        fn output_filename(&self) -> &str {
            "partidos.json"
        }

        fn request_timeout(&self) -> Duration {
            Duration::from_secs(5)
        }
    }

    fn draw_bundle() -> serde_json::Value {
        serde_json::json!({
            "fecha": "2026-10-18 00:00:00",
            "jornada": 14,
            "partidos": [
                {"local": "Celta", "visitante": "Alavés", "orden": 1},
                {"local": "Atlético", "visitante": "Málaga", "orden": 2}
            ],
            "bote": 0
        })
    }

    #[tokio::test]
    async fn test_extract_resolves_date_then_matches() {
        let server = MockServer::start_async().await;
        let next_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/servicios/proximosv3");
                then.status(200)
                    .json_body(serde_json::json!([{"fecha": "2026-10-18 00:00:00", "id_sorteo": "1"}]));
            })
            .await;
        let matches_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/servicios/fechav3")
                    .query_param("fecha_sorteo", "20261018");
                then.status(200).json_body(serde_json::json!([draw_bundle()]));
            })
            .await;

        let pipeline = QuinielaPipeline::new(MockStorage::new(), MockConfig::new(&server)).unwrap();
        let bundle = pipeline.extract().await.unwrap();

        next_mock.assert_async().await;
        matches_mock.assert_async().await;
        assert_eq!(bundle.match_count(), 2);
        assert_eq!(bundle.draw_date(), Some("2026-10-18 00:00:00"));
    }

    #[tokio::test]
    async fn test_missing_date_aborts_before_matches_request() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/servicios/proximosv3");
                then.status(200).json_body(serde_json::json!([{"id_sorteo": "1"}]));
            })
            .await;
        let matches_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/servicios/fechav3");
                then.status(200).json_body(serde_json::json!([draw_bundle()]));
            })
            .await;

        let pipeline = QuinielaPipeline::new(MockStorage::new(), MockConfig::new(&server)).unwrap();
        let err = pipeline.extract().await.unwrap_err();

        assert!(matches!(err, QuinielaError::MissingFieldError { ref field, .. } if field == "fecha"));
        matches_mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_missing_matches_aborts_before_publish() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/servicios/proximosv3");
                then.status(200)
                    .json_body(serde_json::json!([{"fecha": "2026-10-18 00:00:00"}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/servicios/fechav3");
                then.status(200)
                    .json_body(serde_json::json!([{"fecha": "2026-10-18 00:00:00", "partidos": []}]));
            })
            .await;

        let storage = MockStorage::new();
        let pipeline = QuinielaPipeline::new(storage.clone(), MockConfig::new(&server)).unwrap();
        let result = EtlEngine::new(pipeline).run().await;

        assert!(matches!(
            result,
            Err(QuinielaError::MissingFieldError { ref field, .. }) if field == "partidos"
        ));
        assert_eq!(storage.len().await, 0);
    }

    #[tokio::test]
    async fn test_published_content_round_trips_bundle() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/servicios/proximosv3");
                then.status(200)
                    .json_body(serde_json::json!([{"fecha": "2026-10-18 00:00:00"}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/servicios/fechav3");
                then.status(200).json_body(serde_json::json!([draw_bundle()]));
            })
            .await;

        let storage = MockStorage::new();
        let pipeline = QuinielaPipeline::new(storage.clone(), MockConfig::new(&server)).unwrap();
        let location = EtlEngine::new(pipeline).run().await.unwrap();

        assert_eq!(location, "mock://partidos.json");
        let written = storage.get_file("partidos.json").await.unwrap();
        let text = String::from_utf8(written).unwrap();

        // Pretty printed, non-ASCII left as is, upstream key order kept.
        assert!(text.starts_with("{\n  \"fecha\""));
        assert!(text.contains("Málaga"));
        let published: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(published, draw_bundle());
    }

    #[tokio::test]
    async fn test_dry_run_skips_load() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/servicios/proximosv3");
                then.status(200)
                    .json_body(serde_json::json!([{"fecha": "2026-10-18 00:00:00"}]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/servicios/fechav3");
                then.status(200).json_body(serde_json::json!([draw_bundle()]));
            })
            .await;

        let storage = MockStorage::new();
        let pipeline = QuinielaPipeline::new(storage.clone(), MockConfig::new(&server)).unwrap();
        let location = EtlEngine::new(pipeline)
            .with_dry_run(true)
            .run()
            .await
            .unwrap();

        assert_eq!(location, DRY_RUN_LOCATION);
        assert_eq!(storage.len().await, 0);
    }

    #[tokio::test]
    async fn test_transform_uses_configured_filename() {
        let server = MockServer::start_async().await;
        let pipeline = QuinielaPipeline::new(MockStorage::new(), MockConfig::new(&server)).unwrap();
        let response = serde_json::json!([draw_bundle()]);
        let bundle = crate::core::MatchBundle::from_response(response, "test").unwrap();

        let payload = pipeline.transform(bundle).await.unwrap();
        assert_eq!(payload.filename, "partidos.json");
        assert_eq!(payload.match_count, 2);
    }
}
