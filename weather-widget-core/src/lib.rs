//! Core library for the weather lookup widget.
//!
//! This crate defines:
//! - Configuration handling
//! - The backend client behind the search form
//! - Typed page handles and an in-memory page
//! - The submit handler, result renderer, error banner and photo loader
//!
//! It is used by `weather-widget-cli`, but any front end that can implement
//! [`Page`] can drive the same handler.

pub mod backend;
pub mod banner;
pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod page;
pub mod photo;
pub mod render;

pub use backend::{WeatherBackend, backend_from_config};
pub use config::Config;
pub use error::LookupError;
pub use handler::{FormHandler, Outcome};
pub use model::{Suggestions, WeatherRequest, WeatherResponse};
pub use page::{MemoryPage, Page, PageState, PhotoSlot, SuggestionList, TextField};
pub use photo::{HttpProbe, ImageProbe, PhotoSource};
