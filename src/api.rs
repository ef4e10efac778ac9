//! OpenWeatherMap API module
//!
//! Provides the weather client and the reading model.

pub mod model;
mod weather;

pub use model::WeatherReading;
pub use weather::WeatherClient;

/// The two ways a lookup can fail, both shown to the user as a modal notice
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeatherError {
    /// City not found, transport error or unusable response
    #[error("City not found or API error ({0})")]
    Lookup(String),
    /// The icon could not be downloaded or stored
    #[error("Could not load weather icon ({0})")]
    Image(String),
}
