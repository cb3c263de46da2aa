use async_trait::async_trait;
use reqwest::Url;
use std::fmt::Debug;

use crate::model::CurrentWeather;

pub mod openmeteo;

pub use openmeteo::OpenMeteoProvider;

/// Everything that can go wrong while fetching current conditions.
///
/// The fetch service logs these and then collapses them into a single
/// failure outcome; callers of the service never see them.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode weather JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The network collaborator: turns a fully built request URL into the
/// decoded current-weather block.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, url: &Url) -> Result<CurrentWeather, FetchError>;
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        let head: String = body.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}
