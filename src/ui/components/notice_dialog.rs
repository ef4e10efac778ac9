//! Notice dialog component
//! Modal message box that blocks the window until dismissed

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Fill};

use crate::api::WeatherError;
use crate::app::Message;
use crate::ui::theme;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Error,
}

impl NoticeKind {
    pub fn accent_color(&self) -> Color {
        match self {
            NoticeKind::Warning => theme::WARNING,
            NoticeKind::Error => theme::DANGER,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Warning => "⚠",
            NoticeKind::Error => "✗",
        }
    }
}

/// Notice content
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, title, message)
    }

    /// Map a lookup or icon failure to the dialog shown to the user
    pub fn from_error(error: &WeatherError) -> Self {
        match error {
            WeatherError::Lookup(_) => Self::error("Error", "City not found or API error."),
            WeatherError::Image(detail) => Self::error(
                "Image Error",
                format!("Could not load weather icon.\n{}", detail),
            ),
        }
    }
}

/// Build the notice overlay. `progress` is the open animation value.
pub fn view(notice: &Notice, progress: f32) -> Element<'static, Message> {
    if progress < 0.01 {
        return Space::new().height(0).into();
    }

    let opacity = progress;
    let accent = notice.kind.accent_color();

    let title = row![
        text(notice.kind.icon())
            .size(18)
            .color(theme::with_alpha(accent, opacity)),
        Space::new().width(10),
        text(notice.title.clone())
            .size(18)
            .color(theme::with_alpha(theme::TEXT_PRIMARY, opacity))
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
    ]
    .align_y(Alignment::Center);

    let message = text(notice.message.clone())
        .size(14)
        .color(theme::with_alpha(theme::TEXT_SECONDARY, opacity));

    let ok_btn = button(text("OK").size(14))
        .padding([8, 28])
        .style(theme::primary_button)
        .on_press(Message::DismissNotice);

    let dialog_content = column![
        title,
        Space::new().height(12),
        message,
        Space::new().height(20),
        row![Space::new().width(Fill), ok_btn],
    ]
    .width(380)
    .padding(24);

    let dialog_box = container(dialog_content).style(move |_theme| container::Style {
        background: Some(iced::Background::Color(theme::with_alpha(
            theme::SURFACE,
            opacity,
        ))),
        border: iced::Border {
            radius: 12.0.into(),
            width: 1.0,
            color: theme::with_alpha(accent, 0.6 * opacity),
        },
        ..Default::default()
    });

    let backdrop = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                0.5 * opacity,
            ))),
            ..Default::default()
        });

    // Backdrop clicks are swallowed: only OK or Escape close the notice
    let event_blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(Message::Noop);

    opaque(event_blocker).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error() {
        let lookup = Notice::from_error(&WeatherError::Lookup("HTTP 404".to_string()));
        assert_eq!(lookup.kind, NoticeKind::Error);
        assert_eq!(lookup.message, "City not found or API error.");

        let image = Notice::from_error(&WeatherError::Image("HTTP 500".to_string()));
        assert_eq!(image.title, "Image Error");
        assert!(image.message.starts_with("Could not load weather icon."));
        assert!(image.message.contains("HTTP 500"));
    }

    #[test]
    fn test_constructors() {
        let warning = Notice::warning("Input Error", "Please enter a city name.");
        assert_eq!(warning.kind, NoticeKind::Warning);
        assert_ne!(
            NoticeKind::Warning.accent_color(),
            NoticeKind::Error.accent_color()
        );
    }
}
