//! Current conditions: icon plus the summary text

use std::path::Path;

use iced::widget::{Space, column, image, text};
use iced::{Alignment, Element};

use crate::app::{DisplayedReading, Message};
use crate::ui::theme;

/// Icons from the API are 100x100
const ICON_SIZE: f32 = 100.0;

pub fn view<'a>(reading: Option<&DisplayedReading>, icon_path: Option<&Path>) -> Element<'a, Message> {
    let Some(reading) = reading else {
        return Space::new().height(0).into();
    };

    let icon: Element<'a, Message> = match icon_path {
        Some(path) => image(image::Handle::from_path(path))
            .width(ICON_SIZE)
            .height(ICON_SIZE)
            .into(),
        None => Space::new().width(ICON_SIZE).height(ICON_SIZE).into(),
    };

    let summary = text(reading.summary())
        .size(22)
        .color(theme::TEXT_PRIMARY)
        .align_x(iced::alignment::Horizontal::Center);

    column![icon, Space::new().height(8), summary]
        .align_x(Alignment::Center)
        .into()
}
