use std::sync::Arc;

use crate::page::Page;

/// The single-line error message above the form.
#[derive(Clone)]
pub struct ErrorBanner {
    page: Arc<dyn Page>,
}

impl ErrorBanner {
    pub fn new(page: Arc<dyn Page>) -> Self {
        Self { page }
    }

    /// Shows `message` and hides the results panel.
    pub fn show(&self, message: &str) {
        self.page.set_banner_text(message);
        self.page.set_banner_visible(true);
        self.page.set_results_visible(false);
        self.page.restart_banner_flash();
    }

    /// Hides the banner. The old text stays in place until the next `show`.
    pub fn clear(&self) {
        self.page.set_banner_visible(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    #[test]
    fn show_hides_results_and_flashes() {
        let page = Arc::new(MemoryPage::new());
        page.set_results_visible(true);

        let banner = ErrorBanner::new(page.clone());
        banner.show("City not found");
        banner.show("City not found");

        let state = page.snapshot();
        assert!(state.banner.visible);
        assert_eq!(state.banner.text, "City not found");
        assert_eq!(state.banner.flashes, 2);
        assert!(!state.results.visible);
    }

    #[test]
    fn clear_leaves_text_stale() {
        let page = Arc::new(MemoryPage::new());
        let banner = ErrorBanner::new(page.clone());

        banner.show("boom");
        banner.clear();

        let state = page.snapshot();
        assert!(!state.banner.visible);
        assert_eq!(state.banner.text, "boom");
    }
}
