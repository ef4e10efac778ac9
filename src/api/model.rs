//! OpenWeatherMap model types
//!
//! Wire types for the current weather response and the reading shown in the UI.

use serde::Deserialize;

use super::WeatherError;

/// Subset of `/data/2.5/weather` that the app reads
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    weather: Vec<Condition>,
    main: MainBlock,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    /// Kept as sent so `12.0` and `-3` render the way the service wrote them
    temp: serde_json::Number,
}

/// Current conditions for one city
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// Title-cased condition text, e.g. "Light Rain"
    pub description: String,
    /// Temperature in the requested unit system
    pub temperature: serde_json::Number,
    /// Icon code such as `10d`
    pub icon_code: String,
}

impl WeatherReading {
    /// Parse a current weather JSON document
    pub fn from_response(body: &str) -> Result<Self, WeatherError> {
        let response: CurrentWeatherResponse = serde_json::from_str(body)
            .map_err(|e| WeatherError::Lookup(format!("Malformed response: {}", e)))?;

        let condition = response
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Lookup("Response has no weather entry".to_string()))?;

        Ok(Self {
            description: title_case(&condition.description),
            temperature: response.main.temp,
            icon_code: condition.icon,
        })
    }

    /// Text block shown under the icon
    pub fn summary(&self, city: &str) -> String {
        format!(
            "{}\n{}\nTemperature: {}°C",
            city, self.description, self.temperature
        )
    }
}

/// Uppercase the first letter of every word, lowercase the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = r#"{
        "coord": {"lon": -0.13, "lat": 51.51},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 12.5, "feels_like": 11.9, "humidity": 81},
        "name": "London",
        "cod": 200
    }"#;

    #[test]
    fn test_parse_reading() {
        let reading = WeatherReading::from_response(LONDON).unwrap();
        assert_eq!(reading.description, "Light Rain");
        assert_eq!(reading.temperature.as_f64(), Some(12.5));
        assert_eq!(reading.icon_code, "10d");
    }

    #[test]
    fn test_summary_format() {
        let reading = WeatherReading::from_response(LONDON).unwrap();
        assert_eq!(
            reading.summary("London"),
            "London\nLight Rain\nTemperature: 12.5°C"
        );
    }

    #[test]
    fn test_integer_temperature() {
        let body = r#"{"weather":[{"description":"clear sky","icon":"01n"}],"main":{"temp":-3}}"#;
        let reading = WeatherReading::from_response(body).unwrap();
        assert_eq!(reading.summary("Oslo"), "Oslo\nClear Sky\nTemperature: -3°C");
    }

    #[test]
    fn test_whole_float_temperature_keeps_fraction() {
        let body = r#"{"weather":[{"description":"few clouds","icon":"02d"}],"main":{"temp":12.0}}"#;
        let reading = WeatherReading::from_response(body).unwrap();
        assert_eq!(
            reading.summary("Lima"),
            "Lima\nFew Clouds\nTemperature: 12.0°C"
        );
    }

    #[test]
    fn test_malformed_bodies_are_lookup_errors() {
        for body in [
            "",
            "not json",
            r#"{"cod":"404","message":"city not found"}"#,
            r#"{"weather":[],"main":{"temp":1.0}}"#,
            r#"{"weather":[{"description":"mist"}],"main":{"temp":1.0}}"#,
        ] {
            assert!(matches!(
                WeatherReading::from_response(body),
                Err(WeatherError::Lookup(_))
            ));
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("overcast clouds"), "Overcast Clouds");
        assert_eq!(title_case("THUNDERSTORM with rain"), "Thunderstorm With Rain");
        assert_eq!(title_case("light intensity drizzle-rain"), "Light Intensity Drizzle-Rain");
        assert_eq!(title_case(""), "");
    }
}
