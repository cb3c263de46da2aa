use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::model::{CurrentWeather, WeatherResponse};

use super::{FetchError, WeatherProvider, truncate_body};

/// Forecast endpoint; coordinates and `current_weather=true` are appended
/// by the fetch service.
pub const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new() -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http })
    }

    /// Use a preconfigured client (custom timeout, proxy, ...).
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current_weather(&self, url: &Url) -> Result<CurrentWeather, FetchError> {
        tracing::debug!(%url, "requesting current weather");

        let res = self.http.get(url.clone()).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: WeatherResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            temperature = parsed.current_weather.temperature,
            windspeed = parsed.current_weather.windspeed,
            weathercode = parsed.current_weather.weathercode,
            "decoded current weather"
        );

        Ok(parsed.current_weather)
    }
}
