//! Landscape photos for the queried city.
//!
//! Each slot gets its own task: probe the themed photo off-screen, then
//! commit either it or the generic landscape fallback to the page. Starting
//! a new load aborts whatever the slots were still doing for the last one.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;

use crate::page::{Page, PhotoSlot};

pub mod http;

pub use http::HttpProbe;

/// Checks whether an image URL actually yields an image.
#[async_trait]
pub trait ImageProbe: Send + Sync + Debug {
    async fn probe(&self, url: &str) -> bool;
}

/// Builds photo URLs against a featured-photo service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSource {
    base_url: String,
}

impl PhotoSource {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Themed photo of `city` for `slot`; `stamp` busts caches between searches.
    pub fn query_url(&self, city: &str, slot: PhotoSlot, stamp: i64) -> String {
        format!(
            "{}/featured/{}/?{},{}&sig={}{}",
            self.base_url,
            slot.size(),
            urlencoding::encode(city),
            slot.theme(),
            slot.seed(),
            stamp,
        )
    }

    pub fn fallback_url(&self) -> String {
        format!("{}/featured/800x600/?landscape,nature", self.base_url)
    }
}

pub fn alt_text(city: &str, slot: PhotoSlot) -> String {
    format!("{city} — photo {}", slot.index() + 1)
}

pub struct PhotoLoader {
    page: Arc<dyn Page>,
    probe: Arc<dyn ImageProbe>,
    source: PhotoSource,
    tasks: Mutex<[Option<JoinHandle<()>>; 3]>,
}

impl PhotoLoader {
    pub fn new(page: Arc<dyn Page>, probe: Arc<dyn ImageProbe>, source: PhotoSource) -> Self {
        Self { page, probe, source, tasks: Mutex::new([None, None, None]) }
    }

    /// Starts loading all three slots for `city`, replacing any earlier load.
    ///
    /// Must be called from within a tokio runtime.
    pub fn load(&self, city: &str) {
        let stamp = chrono::Utc::now().timestamp_millis();
        let mut tasks = self.lock_tasks();

        for &slot in PhotoSlot::all() {
            if let Some(previous) = tasks[slot.index()].take() {
                previous.abort();
            }

            let url = self.source.query_url(city, slot, stamp);
            let fallback = self.source.fallback_url();
            self.page.reset_image(slot, &alt_text(city, slot));

            let page = Arc::clone(&self.page);
            let probe = Arc::clone(&self.probe);
            tasks[slot.index()] = Some(tokio::spawn(async move {
                if probe.probe(&url).await {
                    page.commit_image(slot, &url);
                } else {
                    tracing::debug!(slot = slot.as_str(), %url, "photo probe failed, using fallback");
                    page.commit_image(slot, &fallback);
                }
            }));
        }
    }

    /// Aborts in-flight probes without touching the page.
    pub fn cancel(&self) {
        for task in self.lock_tasks().iter_mut() {
            if let Some(task) = task.take() {
                task.abort();
            }
        }
    }

    /// Waits for the current load to finish (or be aborted).
    pub async fn settle(&self) {
        let pending: Vec<_> = self.lock_tasks().iter_mut().filter_map(Option::take).collect();

        for task in pending {
            if let Err(err) = task.await {
                if !err.is_cancelled() {
                    tracing::warn!("photo task failed: {err}");
                }
            }
        }
    }

    fn lock_tasks(&self) -> MutexGuard<'_, [Option<JoinHandle<()>>; 3]> {
        self.tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for PhotoLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}
