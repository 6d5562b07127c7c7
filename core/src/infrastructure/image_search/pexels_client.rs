use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::ImageCandidate, ports::ImageSearchClient},
};

pub const PEXELS_BASE_URL: &str = "https://api.pexels.com";
/// Value shipped in the sample environment file; treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "your-pexels-api-key-here";

const PER_PAGE: &str = "20";

#[derive(Debug, Clone)]
pub struct PexelsImageSearch {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    width: u32,
    height: u32,
    url: String,
    src: PhotoSources,
}

#[derive(Debug, Deserialize)]
struct PhotoSources {
    large2x: String,
}

impl From<Photo> for ImageCandidate {
    fn from(photo: Photo) -> Self {
        ImageCandidate {
            width: photo.width,
            height: photo.height,
            url: photo.url,
            src: photo.src.large2x,
        }
    }
}

impl PexelsImageSearch {
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY);
        let base_url = base_url
            .unwrap_or_else(|| PEXELS_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key,
            base_url,
            client: Client::new(),
        }
    }
}

impl ImageSearchClient for PexelsImageSearch {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip(self))]
    async fn search(&self, query: String) -> Result<Vec<ImageCandidate>, CoreError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            CoreError::ExternalServiceError("Pexels API key not configured".to_string())
        })?;
        let url = format!("{}/v1/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, api_key)
            .query(&[
                ("query", query.as_str()),
                ("per_page", PER_PAGE),
                ("orientation", "landscape"),
                ("size", "large"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Pexels request failed: {}", e);
                CoreError::ExternalServiceError(format!("Image search error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Pexels API error: {}", status);
            return Err(CoreError::ExternalServiceError(format!(
                "Image search returned error: {}",
                status
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse Pexels response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse image search response: {}", e))
        })?;

        Ok(body.photos.into_iter().map(ImageCandidate::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn search_with(template: ResponseTemplate) -> Result<Vec<ImageCandidate>, CoreError> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;

        PexelsImageSearch::new(Some("px-key".to_string()), Some(server.uri()))
            .search("green curry".to_string())
            .await
    }

    #[test]
    fn test_placeholder_key_is_not_configured() {
        assert!(!PexelsImageSearch::new(None, None).is_configured());
        assert!(!PexelsImageSearch::new(Some("  ".to_string()), None).is_configured());
        assert!(
            !PexelsImageSearch::new(Some(PLACEHOLDER_API_KEY.to_string()), None).is_configured()
        );
        assert!(PexelsImageSearch::new(Some("abc123".to_string()), None).is_configured());
    }

    #[test]
    fn test_photo_maps_to_candidate() {
        let body: SearchResponse = serde_json::from_str(
            r#"{
                "page": 1,
                "photos": [{
                    "id": 1,
                    "width": 3000,
                    "height": 2000,
                    "url": "https://www.pexels.com/photo/green-curry-1/",
                    "src": {
                        "original": "https://images.pexels.com/photos/1/original.jpeg",
                        "large2x": "https://images.pexels.com/photos/1/large2x.jpeg"
                    }
                }]
            }"#,
        )
        .unwrap();

        let candidates: Vec<ImageCandidate> =
            body.photos.into_iter().map(ImageCandidate::from).collect();
        assert_eq!(
            candidates,
            vec![ImageCandidate {
                width: 3000,
                height: 2000,
                url: "https://www.pexels.com/photo/green-curry-1/".to_string(),
                src: "https://images.pexels.com/photos/1/large2x.jpeg".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_search_without_key_fails_fast() {
        let client = PexelsImageSearch::new(None, Some("http://127.0.0.1:9".to_string()));
        assert!(client.search("soup".to_string()).await.is_err());
    }

    #[tokio::test]
    async fn test_search_sends_key_and_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(header("authorization", "px-key"))
            .and(query_param("query", "green curry"))
            .and(query_param("per_page", "20"))
            .and(query_param("orientation", "landscape"))
            .and(query_param("size", "large"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "photos": [{
                    "width": 2400,
                    "height": 1600,
                    "url": "https://www.pexels.com/photo/green-curry-2/",
                    "src": {"large2x": "https://images.pexels.com/photos/2/large2x.jpeg"}
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let candidates = PexelsImageSearch::new(Some("px-key".to_string()), Some(server.uri()))
            .search("green curry".to_string())
            .await
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].src, "https://images.pexels.com/photos/2/large2x.jpeg");
    }

    #[tokio::test]
    async fn test_search_without_photos_is_empty() {
        let result = search_with(ResponseTemplate::new(200).set_body_json(json!({"page": 1}))).await;
        assert_eq!(result, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn test_search_failures_are_external_errors() {
        for template in [
            ResponseTemplate::new(401),
            ResponseTemplate::new(500),
            ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"),
        ] {
            let result = search_with(template).await;
            assert!(matches!(result, Err(CoreError::ExternalServiceError(_))), "{result:?}");
        }
    }
}
