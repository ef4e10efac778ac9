//! Application messages

use std::path::PathBuf;

use iced::keyboard::Key;

use crate::api::{WeatherError, WeatherReading};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Search ============
    /// City entry changed
    QueryChanged(String),
    /// Suggestion picked from the dropdown
    SuggestionSelected(String),
    /// Search button pressed or Enter in the city entry
    Search,
    /// Weather request finished
    WeatherLoaded {
        generation: u64,
        city: String,
        result: Result<WeatherReading, WeatherError>,
    },
    /// Icon download finished
    IconLoaded {
        generation: u64,
        result: Result<PathBuf, WeatherError>,
    },
    /// Logo file read at startup
    LogoLoaded(Result<Vec<u8>, String>),

    // ============ Animation ============
    /// Background fade timer tick
    FadeTick,
    /// Frame tick for the notice dialog animation
    AnimationTick,

    // ============ Dialog & Window ============
    /// OK pressed on the notice dialog
    DismissNotice,
    /// Key pressed anywhere in the window
    KeyPressed(Key),
}
