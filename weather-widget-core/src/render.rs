use std::sync::Arc;

use crate::{
    model::WeatherResponse,
    page::{Page, SuggestionList, TextField},
    photo::PhotoLoader,
};

/// Fills the results panel from a weather response.
pub struct ResultRenderer {
    page: Arc<dyn Page>,
    photos: PhotoLoader,
}

impl ResultRenderer {
    pub fn new(page: Arc<dyn Page>, photos: PhotoLoader) -> Self {
        Self { page, photos }
    }

    pub fn photos(&self) -> &PhotoLoader {
        &self.photos
    }

    pub fn render(&self, weather: &WeatherResponse) {
        for &field in TextField::all() {
            self.page.set_text(field, &field_text(field, weather));
        }

        for &list in SuggestionList::all() {
            self.page.replace_list(list, list.items(&weather.suggestions));
        }

        self.photos.load(&weather.city);

        self.page.set_results_visible(true);
        self.page.restart_results_fade();
        self.page.scroll_results_into_view();

        tracing::info!(city = %weather.city, country = %weather.country, "rendered weather");
    }
}

/// Display text of `field` for `weather`.
pub fn field_text(field: TextField, weather: &WeatherResponse) -> String {
    match field {
        TextField::CityName => weather.city.clone(),
        TextField::CountryName => weather.country.clone(),
        TextField::Temperature => weather.temperature.to_string(),
        TextField::Description => weather.description.clone(),
        TextField::FeelsLike => format!("{}°C", weather.feels_like),
        TextField::Humidity => format!("{}%", weather.humidity),
        TextField::Wind => format!("{} km/h", weather.wind_kmph),
    }
}
