use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{Page, PhotoSlot, SuggestionList, TextField};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerState {
    pub text: String,
    pub visible: bool,
    /// How many times the flash animation has been replayed.
    pub flashes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsState {
    pub visible: bool,
    pub fades: u32,
    pub scrolls: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageState {
    pub src: Option<String>,
    pub alt: String,
    pub loaded: bool,
}

/// Everything a [`MemoryPage`] displays, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub input: String,
    pub input_disabled: bool,
    pub button_disabled: bool,
    pub button_loading: bool,
    pub banner: BannerState,
    pub results: ResultsState,
    pub texts: HashMap<&'static str, String>,
    pub lists: HashMap<&'static str, Vec<String>>,
    pub images: HashMap<&'static str, ImageState>,
}

impl PageState {
    pub fn text(&self, field: TextField) -> Option<&str> {
        self.texts.get(field.as_str()).map(String::as_str)
    }

    pub fn list(&self, list: SuggestionList) -> &[String] {
        self.lists.get(list.as_str()).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn image(&self, slot: PhotoSlot) -> Option<&ImageState> {
        self.images.get(slot.as_str())
    }

    /// True while a lookup holds the form.
    pub fn is_loading(&self) -> bool {
        self.input_disabled || self.button_disabled || self.button_loading
    }
}

/// A [`Page`] that keeps its elements in memory.
///
/// Starts with the banner and results hidden and the form enabled, like
/// the widget's markup.
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input_value(&self, value: impl Into<String>) {
        self.lock().input = value.into();
    }

    pub fn snapshot(&self) -> PageState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        // A panic while holding the lock cannot leave the state half-written.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Page for MemoryPage {
    fn input_value(&self) -> String {
        self.lock().input.clone()
    }

    fn set_controls_enabled(&self, enabled: bool) {
        let mut state = self.lock();
        state.input_disabled = !enabled;
        state.button_disabled = !enabled;
    }

    fn set_button_loading(&self, loading: bool) {
        self.lock().button_loading = loading;
    }

    fn set_banner_text(&self, text: &str) {
        self.lock().banner.text = text.to_string();
    }

    fn set_banner_visible(&self, visible: bool) {
        self.lock().banner.visible = visible;
    }

    fn restart_banner_flash(&self) {
        self.lock().banner.flashes += 1;
    }

    fn set_results_visible(&self, visible: bool) {
        self.lock().results.visible = visible;
    }

    fn restart_results_fade(&self) {
        self.lock().results.fades += 1;
    }

    fn scroll_results_into_view(&self) {
        self.lock().results.scrolls += 1;
    }

    fn set_text(&self, field: TextField, text: &str) {
        self.lock().texts.insert(field.as_str(), text.to_string());
    }

    fn replace_list(&self, list: SuggestionList, items: &[String]) {
        let mut state = self.lock();
        let entry = state.lists.entry(list.as_str()).or_default();
        entry.clear();
        entry.extend(items.iter().cloned());
    }

    fn reset_image(&self, slot: PhotoSlot, alt: &str) {
        let mut state = self.lock();
        let image = state.images.entry(slot.as_str()).or_default();
        image.loaded = false;
        image.alt = alt.to_string();
    }

    fn commit_image(&self, slot: PhotoSlot, src: &str) {
        let mut state = self.lock();
        let image = state.images.entry(slot.as_str()).or_default();
        image.src = Some(src.to_string());
        image.loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_enabled() {
        let state = MemoryPage::new().snapshot();

        assert!(!state.banner.visible);
        assert!(!state.results.visible);
        assert!(!state.is_loading());
    }

    #[test]
    fn replace_list_drops_previous_items() {
        let page = MemoryPage::new();
        page.replace_list(SuggestionList::Travel, &["a".into(), "b".into()]);
        page.replace_list(SuggestionList::Travel, &["c".into()]);

        assert_eq!(page.snapshot().list(SuggestionList::Travel), ["c"]);
    }

    #[test]
    fn reset_image_keeps_previous_source_until_commit() {
        let page = MemoryPage::new();
        page.commit_image(PhotoSlot::First, "https://img/old");
        page.reset_image(PhotoSlot::First, "Oslo — photo 1");

        let image = page.snapshot().image(PhotoSlot::First).cloned().unwrap();
        assert_eq!(image.src.as_deref(), Some("https://img/old"));
        assert_eq!(image.alt, "Oslo — photo 1");
        assert!(!image.loaded);
    }
}
