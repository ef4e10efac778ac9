//! Theme for the weather window
//! A light-blue search field and bright button over the fading background

use iced::color;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette
// ============================================================================

pub const INPUT_BACKGROUND: Color = color!(0xd0e6ff);
pub const INPUT_TEXT: Color = color!(0x003366);
pub const INPUT_PLACEHOLDER: Color = color!(0x5c7fa3);
pub const INPUT_SELECTION: Color = color!(0x99c2ff);

pub const ACCENT: Color = color!(0x3399ff);
pub const ACCENT_HOVER: Color = color!(0x4da6ff);
pub const ACCENT_PRESSED: Color = color!(0x1f7fe0);

pub const TEXT_PRIMARY: Color = color!(0xffffff);
pub const TEXT_SECONDARY: Color = color!(0xd6e4f0);

pub const SURFACE: Color = color!(0x16263a);
pub const SURFACE_HOVER: Color = color!(0x22384f);
pub const BORDER: Color = color!(0x2f4a66);

pub const WARNING: Color = color!(0xf5a524);
pub const DANGER: Color = color!(0xf31260);

// ============================================================================
// Widget Styles
// ============================================================================

/// City entry field
pub fn search_input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => ACCENT,
        _ => Color::TRANSPARENT,
    };

    text_input::Style {
        background: Background::Color(INPUT_BACKGROUND),
        border: Border {
            radius: 12.0.into(),
            width: 2.0,
            color: border_color,
        },
        icon: INPUT_TEXT,
        placeholder: INPUT_PLACEHOLDER,
        value: INPUT_TEXT,
        selection: INPUT_SELECTION,
    }
}

/// Flat accent button used for "Search" and "OK"
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(ACCENT_PRESSED)),
            ..base
        },
        _ => base,
    }
}

/// One row of the suggestion dropdown
pub fn suggestion_item(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => SURFACE_HOVER,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dropdown panel holding the suggestions
pub fn suggestion_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            radius: 10.0.into(),
            width: 1.0,
            color: BORDER,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Full-window background in the current fade color
pub fn backdrop(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Scale the alpha of a color
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}
