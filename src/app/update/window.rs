// src/app/update/window.rs
//! Window, keyboard and notice dialog message handlers

use iced::Task;
use iced::keyboard::Key;
use iced::keyboard::key::Named;
use iced::widget::image;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::DismissNotice => {
                self.ui.dismiss_notice();
                Some(Task::none())
            }

            Message::KeyPressed(Key::Named(Named::Escape)) => {
                if self.ui.notice_open {
                    self.ui.dismiss_notice();
                    return Some(Task::none());
                }

                if self.core.is_fullscreen {
                    tracing::info!("Leaving fullscreen");
                    self.core.is_fullscreen = false;
                    return Some(iced::window::latest().and_then(|id| {
                        iced::window::set_mode(id, iced::window::Mode::Windowed)
                    }));
                }
                Some(Task::none())
            }

            Message::KeyPressed(Key::Named(Named::Enter)) if self.ui.notice_open => {
                self.ui.dismiss_notice();
                Some(Task::none())
            }

            Message::KeyPressed(_) => Some(Task::none()),

            Message::LogoLoaded(result) => {
                self.ui.logo = Some(match result {
                    Ok(bytes) => Ok(image::Handle::from_bytes(bytes.clone())),
                    Err(e) => {
                        tracing::warn!("Logo unavailable: {}", e);
                        Err(e.clone())
                    }
                });
                Some(Task::none())
            }

            _ => None,
        }
    }
}
