use crate::{Config, LookupError, WeatherRequest, WeatherResponse, backend::http::HttpBackend};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod http;

/// Anything that can answer a weather lookup for a city.
#[async_trait]
pub trait WeatherBackend: Send + Sync + Debug {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse, LookupError>;
}

/// Construct the HTTP backend pointed at the configured server.
pub fn backend_from_config(config: &Config) -> Box<dyn WeatherBackend> {
    Box::new(HttpBackend::new(config.backend_url()))
}
