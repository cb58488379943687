use std::fmt::Write;

use weather_widget_core::{PageState, PhotoSlot, SuggestionList, TextField};

/// Render what the page currently shows as plain text.
pub fn render_page(state: &PageState) -> String {
    let mut out = String::new();

    if state.banner.visible {
        let _ = writeln!(out, "error: {}", state.banner.text);
    }

    if !state.results.visible {
        return out;
    }

    let text = |field: TextField| state.text(field).unwrap_or("-");

    let _ = writeln!(out, "{}, {}", text(TextField::CityName), text(TextField::CountryName));
    let _ = writeln!(out, "  {}°  {}", text(TextField::Temperature), text(TextField::Description));
    let _ = writeln!(
        out,
        "  feels like {}  humidity {}  wind {}",
        text(TextField::FeelsLike),
        text(TextField::Humidity),
        text(TextField::Wind),
    );

    for &list in SuggestionList::all() {
        let _ = writeln!(out, "\n{}:", list.title());
        for item in state.list(list) {
            let _ = writeln!(out, "  • {item}");
        }
    }

    let _ = writeln!(out, "\nPhotos:");
    for &slot in PhotoSlot::all() {
        match state.image(slot) {
            Some(image) if image.loaded => {
                let _ = writeln!(out, "  {}  {}", image.alt, image.src.as_deref().unwrap_or("-"));
            }
            Some(image) => {
                let _ = writeln!(out, "  {}  (loading)", image.alt);
            }
            None => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_widget_core::{MemoryPage, Page};

    #[test]
    fn hidden_results_print_only_error() {
        let page = MemoryPage::new();
        page.set_banner_text("City not found");
        page.set_banner_visible(true);
        page.set_text(TextField::CityName, "Paris");

        assert_eq!(render_page(&page.snapshot()), "error: City not found\n");
    }

    #[test]
    fn visible_results_list_everything() {
        let page = MemoryPage::new();
        page.set_results_visible(true);
        page.set_text(TextField::CityName, "Paris");
        page.set_text(TextField::CountryName, "France");
        page.set_text(TextField::Wind, "12 km/h");
        page.replace_list(SuggestionList::Clothing, &["Jacket".into()]);
        page.reset_image(PhotoSlot::First, "Paris — photo 1");
        page.commit_image(PhotoSlot::First, "https://img/paris");
        page.reset_image(PhotoSlot::Second, "Paris — photo 2");

        let out = render_page(&page.snapshot());

        assert!(out.starts_with("Paris, France\n"));
        assert!(out.contains("wind 12 km/h"));
        assert!(out.contains("Clothing:\n  • Jacket\n"));
        assert!(out.contains("Paris — photo 1  https://img/paris"));
        assert!(out.contains("Paris — photo 2  (loading)"));
        assert!(!out.contains("photo 3"));
    }
}
