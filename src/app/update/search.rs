// src/app/update/search.rs
//! Search, weather and icon message handlers

use iced::Task;

use crate::api::WeatherError;
use crate::app::message::Message;
use crate::app::state::{App, DisplayedReading};
use crate::features::{CITIES, background_for_icon, suggestions};
use crate::ui::components::Notice;

impl App {
    /// Handle search-related messages
    pub fn handle_search(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::QueryChanged(query) => {
                self.ui.query = query.clone();
                self.ui.suggestions = suggestions(query, CITIES);
                Some(Task::none())
            }

            Message::SuggestionSelected(city) => {
                self.ui.query = city.clone();
                self.ui.suggestions.clear();
                Some(self.update(Message::Search))
            }

            Message::Search => Some(self.start_search()),

            Message::WeatherLoaded {
                generation,
                city,
                result,
            } => {
                if *generation != self.core.request_generation {
                    tracing::debug!("Dropping stale weather response for {:?}", city);
                    return Some(Task::none());
                }

                match result {
                    Ok(reading) => {
                        tracing::info!(
                            "Weather for {}: {}, {}°C ({})",
                            city,
                            reading.description,
                            reading.temperature,
                            reading.icon_code
                        );
                        // Shown together with its icon, or not at all
                        let icon_code = reading.icon_code.clone();
                        self.ui.pending = Some(DisplayedReading {
                            city: city.clone(),
                            reading: reading.clone(),
                        });
                        Some(self.load_icon(*generation, icon_code))
                    }
                    Err(e) => {
                        tracing::warn!("Weather lookup for {:?} failed: {}", city, e);
                        self.ui.loading = false;
                        self.ui.show_notice(Notice::from_error(e));
                        Some(Task::none())
                    }
                }
            }

            Message::IconLoaded { generation, result } => {
                if *generation != self.core.request_generation {
                    return Some(Task::none());
                }
                self.ui.loading = false;
                let pending = self.ui.pending.take();

                match (result, pending) {
                    (Ok(path), Some(displayed)) => {
                        let target = background_for_icon(&displayed.reading.icon_code);
                        self.ui.reading = Some(displayed);
                        self.ui.icon_path = Some(path.clone());
                        self.start_fade(target);
                    }
                    (Ok(_), None) => {
                        tracing::debug!("Icon arrived without a pending reading");
                    }
                    (Err(e), _) => {
                        tracing::warn!("Icon load failed: {}", e);
                        self.ui.show_notice(Notice::from_error(e));
                    }
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Validate the query and dispatch the weather request off the UI thread
    fn start_search(&mut self) -> Task<Message> {
        // Keyboard submits still reach the entry while the dialog is up
        if self.ui.notice_open {
            return Task::none();
        }

        let city = self.ui.query.trim().to_string();
        if city.is_empty() {
            self.ui
                .show_notice(Notice::warning("Input Error", "Please enter a city name."));
            return Task::none();
        }

        let Some(client) = self.core.client.clone() else {
            self.ui.show_notice(Notice::from_error(&WeatherError::Lookup(
                "HTTP client unavailable".to_string(),
            )));
            return Task::none();
        };

        self.core.request_generation += 1;
        let generation = self.core.request_generation;
        self.ui.loading = true;
        self.ui.pending = None;
        self.ui.suggestions.clear();
        tracing::info!("Searching weather for {:?}", city);

        Task::perform(
            async move {
                let result = client.fetch_weather(city.clone()).await;
                (city, result)
            },
            move |(city, result)| Message::WeatherLoaded {
                generation,
                city,
                result,
            },
        )
    }

    fn load_icon(&self, generation: u64, icon_code: String) -> Task<Message> {
        let Some(client) = self.core.client.clone() else {
            return Task::done(Message::IconLoaded {
                generation,
                result: Err(WeatherError::Image("HTTP client unavailable".to_string())),
            });
        };

        Task::perform(
            async move { client.fetch_icon(icon_code).await },
            move |result| Message::IconLoaded { generation, result },
        )
    }
}
