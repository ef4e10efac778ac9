// src/app/update/fade.rs
//! Background fade and animation tick handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{ColorTransition, FadeAnimation, Rgb};

impl App {
    /// Handle animation-related messages
    pub fn handle_fade(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::FadeTick => {
                if let Some(color) = self.ui.fade.next_frame() {
                    self.ui.background = color;
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.ui.notice_animation.tick(Instant::now());
                // Drop the dialog once its fade-out has finished
                if !self.ui.notice_open
                    && !self.ui.notice_animation.is_animating()
                    && self.ui.notice_animation.progress() < 0.01
                {
                    self.ui.notice = None;
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Fade from the color on screen to `target`, replacing any running fade
    pub fn start_fade(&mut self, target: Rgb) {
        let transition =
            ColorTransition::new(self.ui.background, target, self.core.settings.fade.steps);
        tracing::debug!(
            "Fading background {} -> {} in {} steps",
            transition.start,
            transition.end,
            transition.steps
        );
        self.ui.fade = FadeAnimation::start(transition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{DEFAULT_BACKGROUND, Settings};

    fn app_with_steps(steps: u32) -> App {
        let mut settings = Settings::default();
        settings.fade.steps = steps;
        App::with_settings(settings)
    }

    #[test]
    fn test_ticks_walk_to_target() {
        let mut app = app_with_steps(4);
        let target = Rgb::new(0x5E, 0x7A, 0x9F);
        app.start_fade(target);

        let mut seen = Vec::new();
        while app.ui.fade.is_running() {
            let _ = app.update(Message::FadeTick);
            seen.push(app.ui.background);
        }

        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], Rgb::new(0x2E, 0x4A, 0x6F));
        assert_eq!(app.ui.background, target);

        // Extra ticks after the fade are harmless
        let _ = app.update(Message::FadeTick);
        assert_eq!(app.ui.background, target);
    }

    #[test]
    fn test_restart_uses_displayed_color() {
        let mut app = app_with_steps(10);
        app.start_fade(Rgb::new(0xFF, 0xFF, 0xFF));
        for _ in 0..3 {
            let _ = app.update(Message::FadeTick);
        }
        let midway = app.ui.background;
        assert_ne!(midway, DEFAULT_BACKGROUND);

        app.start_fade(Rgb::new(0, 0, 0));
        let frames = ColorTransition::new(midway, Rgb::new(0, 0, 0), 10).frames();
        let _ = app.update(Message::FadeTick);
        assert_eq!(app.ui.background, frames[1]);
    }

    #[test]
    fn test_zero_steps_jumps_on_first_tick() {
        let mut app = app_with_steps(0);
        app.start_fade(Rgb::new(1, 2, 3));
        assert_eq!(app.ui.background, DEFAULT_BACKGROUND);

        let _ = app.update(Message::FadeTick);
        assert_eq!(app.ui.background, Rgb::new(1, 2, 3));
        assert!(!app.ui.fade.is_running());
    }
}
