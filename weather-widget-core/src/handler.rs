//! The search form's submit handler.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    Config,
    backend::{WeatherBackend, backend_from_config},
    banner::ErrorBanner,
    model::WeatherRequest,
    page::Page,
    photo::{HttpProbe, ImageProbe, PhotoLoader, PhotoSource},
    render::ResultRenderer,
};

/// What a single submission ended up doing to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input was blank; nothing happened.
    Ignored,
    Rendered,
    /// The banner shows this message.
    Failed(String),
    /// A newer submission started before this one's response arrived.
    Superseded,
}

pub struct FormHandler {
    page: Arc<dyn Page>,
    backend: Arc<dyn WeatherBackend>,
    banner: ErrorBanner,
    renderer: ResultRenderer,
    latest: AtomicU64,
}

impl FormHandler {
    pub fn new(
        page: Arc<dyn Page>,
        backend: Arc<dyn WeatherBackend>,
        probe: Arc<dyn ImageProbe>,
        photos: PhotoSource,
    ) -> Self {
        let loader = PhotoLoader::new(Arc::clone(&page), probe, photos);

        Self {
            banner: ErrorBanner::new(Arc::clone(&page)),
            renderer: ResultRenderer::new(Arc::clone(&page), loader),
            page,
            backend,
            latest: AtomicU64::new(0),
        }
    }

    /// Wire a handler to the configured backend and photo service.
    pub fn from_config(page: Arc<dyn Page>, config: &Config) -> Self {
        Self::new(
            page,
            Arc::from(backend_from_config(config)),
            Arc::new(HttpProbe::new()),
            PhotoSource::new(config.photo_base_url()),
        )
    }

    /// Runs one lookup for whatever the input currently holds.
    pub async fn submit(&self) -> Outcome {
        let city = self.page.input_value().trim().to_string();
        if city.is_empty() {
            return Outcome::Ignored;
        }

        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(%city, ticket, "submitting lookup");

        self.renderer.photos().cancel();
        self.banner.clear();
        self.set_loading(true);
        let _loading = LoadingGuard { handler: self, ticket };

        let result = self.backend.get_weather(&WeatherRequest::new(city)).await;

        if self.latest.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, "discarding response of superseded lookup");
            return Outcome::Superseded;
        }

        let outcome = match result {
            Ok(weather) => {
                self.renderer.render(&weather);
                Outcome::Rendered
            }
            Err(err) => {
                tracing::warn!("weather lookup failed: {err}");
                let message = err.user_message().to_string();
                self.banner.show(&message);
                Outcome::Failed(message)
            }
        };

        outcome
    }

    /// Waits for the photos of the last render to finish loading.
    pub async fn settle(&self) {
        self.renderer.photos().settle().await;
    }

    fn set_loading(&self, loading: bool) {
        self.page.set_button_loading(loading);
        self.page.set_controls_enabled(!loading);
    }
}

/// Leaves the loading state when a submission ends, even if its future is
/// dropped mid-request. Only the latest submission owns the loading state.
struct LoadingGuard<'a> {
    handler: &'a FormHandler,
    ticket: u64,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.handler.latest.load(Ordering::SeqCst) == self.ticket {
            self.handler.set_loading(false);
        }
    }
}
