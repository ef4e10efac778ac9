//! Logo row under the search bar, with a text fallback when loading failed

use iced::widget::{Space, container, image, text};
use iced::{ContentFit, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Large logos are scaled down to this width
const LOGO_MAX_WIDTH: f32 = 400.0;

pub fn view<'a>(logo: Option<&'a Result<image::Handle, String>>) -> Element<'a, Message> {
    match logo {
        Some(Ok(handle)) => container(
            image(handle.clone())
                .width(Fill)
                .content_fit(ContentFit::ScaleDown),
        )
        .max_width(LOGO_MAX_WIDTH)
        .padding(20)
        .into(),
        Some(Err(e)) => container(
            text(format!("Logo error:\n{}", e))
                .size(14)
                .color(theme::TEXT_PRIMARY)
                .align_x(iced::alignment::Horizontal::Center),
        )
        .padding(20)
        .into(),
        None => Space::new().height(0).into(),
    }
}
