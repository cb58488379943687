use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use std::time::Duration;

use super::ImageProbe;

/// A photo host that has not answered by then counts as failed.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Probes a photo URL with a real GET, the way an off-screen image would load it.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    http: Client,
}

impl HttpProbe {
    pub fn new() -> Self {
        Self::with_timeout(PROBE_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self { http }
    }
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageProbe for HttpProbe {
    async fn probe(&self, url: &str) -> bool {
        let res = match self.http.get(url).send().await {
            Ok(res) => res,
            Err(err) => {
                tracing::debug!(%url, "photo probe request failed: {err}");
                return false;
            }
        };

        if !res.status().is_success() {
            return false;
        }

        // A missing content type counts as an image.
        res.headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_none_or(|ct| ct.starts_with("image/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn image_response_passes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/featured/800x600/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(vec![0xFF, 0xD8, 0xFF], "image/jpeg"),
            )
            .mount(&server)
            .await;

        let url = format!("{}/featured/800x600/?Paris,travel&sig=47", server.uri());
        assert!(HttpProbe::new().probe(&url).await);
    }

    #[tokio::test]
    async fn error_status_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/featured/800x600/?Atlantis,city", server.uri());
        assert!(!HttpProbe::new().probe(&url).await);
    }

    #[tokio::test]
    async fn stalled_host_fails_after_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(vec![0xFF, 0xD8, 0xFF], "image/jpeg")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let probe = HttpProbe::with_timeout(Duration::from_millis(100));
        assert!(!probe.probe(&server.uri()).await);
    }

    #[tokio::test]
    async fn html_page_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
            .mount(&server)
            .await;

        assert!(!HttpProbe::new().probe(&server.uri()).await);
    }
}
