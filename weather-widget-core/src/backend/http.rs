use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::{FALLBACK_ERROR_MESSAGE, LookupError},
    model::{ErrorBody, WeatherRequest, WeatherResponse},
};

use super::WeatherBackend;

/// Talks to the widget's own server over `POST /get-weather`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    endpoint: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/get-weather", base_url.trim_end_matches('/')),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherBackend for HttpBackend {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse, LookupError> {
        tracing::debug!(endpoint = %self.endpoint, city = %request.city, "requesting weather");

        let res = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(LookupError::Network)?;

        let status = res.status();
        let body = res.text().await.map_err(LookupError::Network)?;

        if !status.is_success() {
            tracing::debug!(%status, body = %truncate_body(&body), "backend rejected lookup");
            let message = rejection_message(&body).map_err(LookupError::Decode)?;
            return Err(LookupError::Rejected { status, message });
        }

        serde_json::from_str(&body).map_err(LookupError::Decode)
    }
}

/// The server's `error` message, or the fallback when it is absent or empty.
/// Fails when the body is not JSON at all.
fn rejection_message(body: &str) -> Result<String, serde_json::Error> {
    let message = match serde_json::from_str::<serde_json::Value>(body)? {
        value @ serde_json::Value::Object(_) => {
            serde_json::from_value::<ErrorBody>(value)?.message()
        }
        _ => None,
    };
    Ok(message.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
