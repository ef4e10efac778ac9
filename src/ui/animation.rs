//! Dialog animation built on `iced_anim`
//!
//! The notice dialog fades in when opened and fades out when dismissed.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Dialog fade duration
const DIALOG_DURATION: Duration = Duration::from_millis(180);

fn dialog_easing() -> Easing {
    Easing::EASE.with_duration(DIALOG_DURATION)
}

/// Opacity animation for a modal dialog (0.0 hidden, 1.0 fully shown)
#[derive(Debug)]
pub struct DialogAnimation {
    animation: Animated<f32>,
}

impl Default for DialogAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, dialog_easing()),
        }
    }

    /// Fade the dialog in
    pub fn open(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Fade the dialog out
    pub fn close(&mut self) {
        self.animation.update(0.0.into());
    }

    /// Current opacity (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let anim = DialogAnimation::new();
        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_animating());
    }

    #[test]
    fn test_open_then_settle() {
        let mut anim = DialogAnimation::new();
        anim.open();
        assert!(anim.is_animating() || anim.progress() > 0.0);

        anim.tick(Instant::now() + Duration::from_secs(1));
        assert!((0.0..=1.0).contains(&anim.progress()));
    }
}
