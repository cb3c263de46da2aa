use serde::{Deserialize, Serialize};

/// Top-level Open-Meteo response when requested with `current_weather=true`.
///
/// Only the block we render is modelled; every other field is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub current_weather: CurrentWeather,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Degrees Celsius.
    pub temperature: f64,
    /// km/h.
    pub windspeed: f64,
    /// WMO weather interpretation code.
    pub weathercode: i32,
}

/// Result of one fetch as seen by the presentation layer.
///
/// Network, HTTP status and decode errors are all collapsed into `Failure`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FetchOutcome {
    Success(CurrentWeather),
    Failure,
}
