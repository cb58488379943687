//! Typed handles to the page elements the widget drives.
//!
//! The handler never looks elements up by itself; it is given a [`Page`]
//! and addresses elements through the enums below, each of which knows the
//! fixed element id it stands for.

use crate::model::Suggestions;

pub mod memory;

pub use memory::{BannerState, ImageState, MemoryPage, PageState, ResultsState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    CityName,
    CountryName,
    Temperature,
    Description,
    FeelsLike,
    Humidity,
    Wind,
}

impl TextField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::CityName => "city-name",
            TextField::CountryName => "country-name",
            TextField::Temperature => "temperature",
            TextField::Description => "description",
            TextField::FeelsLike => "feels-like",
            TextField::Humidity => "humidity",
            TextField::Wind => "wind",
        }
    }

    pub const fn all() -> &'static [TextField] {
        &[
            TextField::CityName,
            TextField::CountryName,
            TextField::Temperature,
            TextField::Description,
            TextField::FeelsLike,
            TextField::Humidity,
            TextField::Wind,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionList {
    Clothing,
    Accessories,
    Travel,
    Health,
}

impl SuggestionList {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionList::Clothing => "clothing-list",
            SuggestionList::Accessories => "accessories-list",
            SuggestionList::Travel => "travel-list",
            SuggestionList::Health => "health-list",
        }
    }

    /// Human-readable heading.
    pub fn title(&self) -> &'static str {
        match self {
            SuggestionList::Clothing => "Clothing",
            SuggestionList::Accessories => "Accessories",
            SuggestionList::Travel => "Travel",
            SuggestionList::Health => "Health",
        }
    }

    /// The items this list shows out of a response's suggestions.
    pub fn items<'a>(&self, suggestions: &'a Suggestions) -> &'a [String] {
        match self {
            SuggestionList::Clothing => &suggestions.clothing,
            SuggestionList::Accessories => &suggestions.accessories,
            SuggestionList::Travel => &suggestions.travel,
            SuggestionList::Health => &suggestions.health,
        }
    }

    pub const fn all() -> &'static [SuggestionList] {
        &[
            SuggestionList::Clothing,
            SuggestionList::Accessories,
            SuggestionList::Travel,
            SuggestionList::Health,
        ]
    }
}

/// One of the three landscape photos shown next to the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoSlot {
    First,
    Second,
    Third,
}

impl PhotoSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoSlot::First => "place-img-1",
            PhotoSlot::Second => "place-img-2",
            PhotoSlot::Third => "place-img-3",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            PhotoSlot::First => 0,
            PhotoSlot::Second => 1,
            PhotoSlot::Third => 2,
        }
    }

    /// Requested image dimensions, `WIDTHxHEIGHT`.
    pub fn size(&self) -> &'static str {
        match self {
            PhotoSlot::First => "1200x900",
            PhotoSlot::Second | PhotoSlot::Third => "800x600",
        }
    }

    pub fn theme(&self) -> &'static str {
        match self {
            PhotoSlot::First => "city",
            PhotoSlot::Second => "travel",
            PhotoSlot::Third => "nature",
        }
    }

    /// Prefix of the cache-busting signature, keeps the three photos distinct.
    pub fn seed(&self) -> u32 {
        match self {
            PhotoSlot::First => 1,
            PhotoSlot::Second => 47,
            PhotoSlot::Third => 88,
        }
    }

    pub const fn all() -> &'static [PhotoSlot] {
        &[PhotoSlot::First, PhotoSlot::Second, PhotoSlot::Third]
    }
}

/// The page elements a weather lookup reads from and writes to.
///
/// Implementations are shared between the submission flow and the photo
/// tasks, so every method takes `&self`.
pub trait Page: Send + Sync {
    /// Current text of the city input.
    fn input_value(&self) -> String;

    /// Enables or disables both the city input and the submit control.
    fn set_controls_enabled(&self, enabled: bool);

    fn set_button_loading(&self, loading: bool);

    fn set_banner_text(&self, text: &str);
    fn set_banner_visible(&self, visible: bool);
    /// Replays the banner's flash animation.
    fn restart_banner_flash(&self);

    fn set_results_visible(&self, visible: bool);
    /// Replays the results panel's fade-in.
    fn restart_results_fade(&self);
    fn scroll_results_into_view(&self);

    fn set_text(&self, field: TextField, text: &str);

    /// Removes every item of `list`, then appends `items` in order.
    fn replace_list(&self, list: SuggestionList, items: &[String]);

    /// Clears the slot's loaded mark and sets its alt text.
    fn reset_image(&self, slot: PhotoSlot, alt: &str);

    /// Points the slot at `src` and marks it loaded.
    fn commit_image(&self, slot: PhotoSlot, src: &str);
}
