// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, theme};

/// Widest the search column grows on large screens
const CONTENT_MAX_WIDTH: f32 = 720.0;

impl App {
    /// Build the window view
    pub fn view(&self) -> Element<'_, Message> {
        let search_bar = components::search_bar::view(&self.ui.query, self.ui.loading);

        let logo = components::logo::view(self.ui.logo.as_ref());

        let suggestions = components::suggestion_list::view(
            &self.ui.suggestions,
            self.core.settings.display.max_suggestions,
        );

        let weather = components::weather_card::view(
            self.ui.reading.as_ref(),
            self.ui.icon_path.as_deref(),
        );

        let content = column![
            search_bar,
            Space::new().height(6),
            suggestions,
            logo,
            Space::new().height(32),
            weather,
        ]
        .align_x(Alignment::Center)
        .max_width(CONTENT_MAX_WIDTH);

        let main_content = container(content)
            .width(Fill)
            .height(Fill)
            .padding(40)
            .center_x(Fill)
            .style(theme::backdrop(self.ui.background.into()));

        // Notice overlay keeps rendering while it fades out
        let notice_overlay: Element<'_, Message> = match &self.ui.notice {
            Some(notice) => {
                components::notice_dialog::view(notice, self.ui.notice_animation.progress())
            }
            None => Space::new().width(0).height(0).into(),
        };

        // Always use the same stack structure so the entry keeps its state
        stack![main_content, notice_overlay].into()
    }
}
