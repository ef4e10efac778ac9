//! OpenWeatherMap client
//!
//! One GET for the current conditions, one GET for the condition icon.
//! No retries: every failure is reported once and left to the user.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::WeatherError;
use super::model::WeatherReading;
use crate::features::Settings;

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    units: String,
    icon_url_template: String,
    icon_dir: PathBuf,
}

impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("base_url", &self.base_url)
            .field("units", &self.units)
            .field("icon_dir", &self.icon_dir)
            .finish()
    }
}

impl WeatherClient {
    /// Build a client from settings, caching icons under `icon_dir`
    pub fn new(settings: &Settings, icon_dir: PathBuf) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if settings.api_key.is_empty() {
            warn!("No OpenWeatherMap API key configured, lookups will be rejected");
        }

        Ok(Self {
            client: builder.build()?,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            units: settings.units.clone(),
            icon_url_template: settings.icon_url_template.clone(),
            icon_dir,
        })
    }

    /// Fetch current conditions for `city`
    pub async fn fetch_weather(&self, city: String) -> Result<WeatherReading, WeatherError> {
        debug!("Fetching weather for {:?}", city);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Lookup(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(WeatherError::Lookup(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Lookup(format!("Failed to read response: {}", e)))?;
        WeatherReading::from_response(&body)
    }

    /// Icon URL for an icon code
    pub fn icon_url(&self, icon_code: &str) -> String {
        self.icon_url_template.replace("{icon}", icon_code)
    }

    /// Download the icon and store it in the icon cache, returning the file path
    pub async fn fetch_icon(&self, icon_code: String) -> Result<PathBuf, WeatherError> {
        let url = self.icon_url(&icon_code);
        debug!("Fetching icon {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::Image(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Image(format!("HTTP {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| WeatherError::Image(format!("Failed to read icon: {}", e)))?;

        crate::utils::save_icon(&self.icon_dir, &icon_code, &bytes)
            .await
            .map_err(|e| WeatherError::Image(e.to_string()))
    }
}
