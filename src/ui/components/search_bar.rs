//! Search bar component
//! City entry with a search button underneath

use iced::widget::{Space, button, column, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;

/// Build the search bar component
pub fn view(query: &str, loading: bool) -> Element<'_, Message> {
    let input = text_input("Enter a city name", query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::Search)
        .padding(Padding::new(14.0))
        .size(20)
        .align_x(iced::alignment::Horizontal::Center)
        .width(Fill)
        .style(theme::search_input);

    let label = if loading { "Searching..." } else { "Search" };
    let search_btn = button(text(label).size(16).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    }))
    .padding([10, 32])
    .style(theme::primary_button);

    // Disabled while a request is in flight
    let search_btn = if loading {
        search_btn
    } else {
        search_btn.on_press(Message::Search)
    };

    column![input, Space::new().height(10), search_btn]
        .align_x(Alignment::Center)
        .width(Fill)
        .into()
}
