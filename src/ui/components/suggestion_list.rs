//! Autocomplete dropdown under the city entry

use iced::widget::{Column, Space, button, container, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;

/// Build the suggestion list, showing at most `limit` entries
pub fn view<'a>(suggestions: &[&'static str], limit: usize) -> Element<'a, Message> {
    if suggestions.is_empty() || limit == 0 {
        return Space::new().height(0).into();
    }

    let items = suggestions.iter().take(limit).map(|city| {
        button(text(*city).size(16))
            .width(Fill)
            .padding(Padding::new(8.0).left(14.0))
            .style(theme::suggestion_item)
            .on_press(Message::SuggestionSelected(city.to_string()))
            .into()
    });

    container(Column::with_children(items).spacing(2))
        .width(Fill)
        .padding(6)
        .style(theme::suggestion_panel)
        .into()
}
