pub mod settings;

pub use settings::{AppConfig, CategorySettings, RatingSettings, ServerSettings};
