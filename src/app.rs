//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::{App, CoreState, DisplayedReading, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::with_settings(Settings::load());

        let mode_task = if app.core.is_fullscreen {
            tracing::info!("Starting in fullscreen mode");
            iced::window::latest().and_then(|id| {
                iced::window::set_mode(id, iced::window::Mode::Fullscreen)
            })
        } else {
            Task::none()
        };

        let logo_task = match app.core.settings.display.logo_path.clone() {
            Some(path) => Task::perform(
                async move {
                    crate::utils::load_logo(&path)
                        .await
                        .map_err(|e| format!("{:#}", e))
                },
                Message::LogoLoaded,
            ),
            None => Task::none(),
        };

        (app, Task::batch([mode_task, logo_task]))
    }

    /// Build the state without touching the window
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            core: CoreState::new(settings),
            ui: UiState::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn title(&self) -> String {
        match &self.ui.reading {
            Some(displayed) => format!("Zephyr - {}", displayed.city),
            None => "Zephyr".to_string(),
        }
    }

    /// Keyboard events, fade timer and dialog animation frames
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, .. } => Some(Message::KeyPressed(key)),
            _ => None,
        });

        // 2. Background fade, one frame per tick while a fade is running
        let fade_sub = if subscription_logic::needs_fade_ticks(self.ui.fade.is_running()) {
            iced::time::every(self.core.settings.fade.tick()).map(|_| Message::FadeTick)
        } else {
            iced::Subscription::none()
        };

        // 3. Notice dialog open/close animation
        let animation_sub = if subscription_logic::needs_animation_frames(self.ui.notice_visible())
        {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([keyboard_sub, fade_sub, animation_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_fade_ticks(fade_running: bool) -> bool {
        fade_running
    }

    pub fn needs_animation_frames(notice_visible: bool) -> bool {
        notice_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Rgb;

    #[test]
    fn test_title_tracks_reading() {
        let mut app = App::with_settings(Settings::default());
        assert_eq!(app.title(), "Zephyr");

        let _ = app.update(Message::Search);
        let generation = app.core.request_generation;
        assert_eq!(generation, 0, "empty query must not start a request");

        let _ = app.update(Message::DismissNotice);

        let _ = app.update(Message::QueryChanged("Paris".to_string()));
        let _ = app.update(Message::Search);
        assert_eq!(app.core.request_generation, 1);
        let _ = app.update(Message::WeatherLoaded {
            generation: app.core.request_generation,
            city: "Paris".to_string(),
            result: Ok(crate::api::WeatherReading {
                description: "Clear Sky".to_string(),
                temperature: serde_json::Number::from(21),
                icon_code: "01d".to_string(),
            }),
        });
        // The reading only counts once its icon is in
        assert_eq!(app.title(), "Zephyr");

        let _ = app.update(Message::IconLoaded {
            generation: app.core.request_generation,
            result: Ok(std::path::PathBuf::from("/tmp/icon_01d.png")),
        });
        assert_eq!(app.title(), "Zephyr - Paris");
    }

    #[test]
    fn test_fade_subscription_follows_animation() {
        let mut app = App::with_settings(Settings::default());
        assert!(!subscription_logic::needs_fade_ticks(
            app.ui.fade.is_running()
        ));

        app.start_fade(Rgb::new(0, 0, 0));
        assert!(subscription_logic::needs_fade_ticks(
            app.ui.fade.is_running()
        ));
    }
}
