// src/app/state.rs
//! Application state definitions

use std::path::PathBuf;

use iced::widget::image;

use crate::api::{WeatherClient, WeatherReading};
use crate::features::{DEFAULT_BACKGROUND, FadeAnimation, Rgb, Settings};
use crate::ui::animation::DialogAnimation;
use crate::ui::components::Notice;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, HTTP client, window mode)
    pub core: CoreState,
    /// UI state (query, reading, background, dialog)
    pub ui: UiState,
}

/// Core infrastructure & services
pub struct CoreState {
    pub settings: Settings,
    /// `None` when the HTTP client could not be built
    pub client: Option<WeatherClient>,
    /// Bumped on every search; responses tagged with an older value are dropped
    pub request_generation: u64,
    pub is_fullscreen: bool,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let client = match WeatherClient::new(&settings, crate::utils::icons_cache_dir()) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Failed to create weather client: {}", e);
                None
            }
        };

        Self {
            is_fullscreen: settings.display.fullscreen,
            settings,
            client,
            request_generation: 0,
        }
    }
}

/// Reading currently on screen, together with the city it was requested for
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedReading {
    pub city: String,
    pub reading: WeatherReading,
}

impl DisplayedReading {
    pub fn summary(&self) -> String {
        self.reading.summary(&self.city)
    }
}

/// UI state
pub struct UiState {
    /// Raw text of the city entry
    pub query: String,
    /// Suggestions for the current query
    pub suggestions: Vec<&'static str>,
    /// A weather request is in flight
    pub loading: bool,
    pub reading: Option<DisplayedReading>,
    /// Parsed reading waiting for its icon before it is shown
    pub pending: Option<DisplayedReading>,
    /// Cached icon file for the displayed reading
    pub icon_path: Option<PathBuf>,
    /// Background color currently displayed
    pub background: Rgb,
    pub fade: FadeAnimation,
    /// Notice dialog content; kept while the close animation runs
    pub notice: Option<Notice>,
    pub notice_open: bool,
    pub notice_animation: DialogAnimation,
    /// Decoded logo image, or the reason it could not be loaded
    pub logo: Option<Result<image::Handle, String>>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            loading: false,
            reading: None,
            pending: None,
            icon_path: None,
            background: DEFAULT_BACKGROUND,
            fade: FadeAnimation::default(),
            notice: None,
            notice_open: false,
            notice_animation: DialogAnimation::new(),
            logo: None,
        }
    }

    /// Show a notice, replacing any notice already displayed
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.notice_open = true;
        self.notice_animation.open();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice_open = false;
        self.notice_animation.close();
    }

    /// The notice overlay is on screen (open or fading out)
    pub fn notice_visible(&self) -> bool {
        self.notice.is_some()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
