//! Presentation state: the strings a view renders, plus the channel that
//! tells subscribers when they changed.

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::{
    condition::{PLACEHOLDER_ICON, describe, icon_name},
    model::{CurrentWeather, FetchOutcome},
};

pub const PLACEHOLDER_READING: &str = "--";
pub const LOADING_DESCRIPTION: &str = "Loading...";
pub const FAILED_DESCRIPTION: &str = "Failed to load";

#[derive(Debug, Clone, PartialEq)]
pub struct PresentationState {
    /// e.g. `"12.0°C"`.
    pub temperature_text: String,
    /// e.g. `"9.5 km/h"`.
    pub windspeed_text: String,
    pub description_text: String,
    /// Code from the last successful fetch.
    pub weather_code: Option<i32>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            temperature_text: PLACEHOLDER_READING.to_string(),
            windspeed_text: PLACEHOLDER_READING.to_string(),
            description_text: LOADING_DESCRIPTION.to_string(),
            weather_code: None,
            updated_at: None,
        }
    }
}

impl PresentationState {
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Success(current) => self.apply_success(&current),
            FetchOutcome::Failure => self.apply_failure(),
        }
    }

    fn apply_success(&mut self, current: &CurrentWeather) {
        self.temperature_text = format!("{}°C", format_reading(current.temperature));
        self.windspeed_text = format!("{} km/h", format_reading(current.windspeed));
        self.description_text = describe(current.weathercode).to_string();
        self.weather_code = Some(current.weathercode);
        self.updated_at = Some(Utc::now());
    }

    /// Readings stay as they were; only the description changes.
    fn apply_failure(&mut self) {
        self.description_text = FAILED_DESCRIPTION.to_string();
    }

    /// Whole degrees recovered from `temperature_text`, truncated toward
    /// zero. `0` while nothing has loaded.
    pub fn temperature_as_integer(&self) -> i32 {
        self.temperature_text
            .trim_end_matches("°C")
            .parse::<f64>()
            .map(|t| t as i32)
            .unwrap_or(0)
    }

    /// Icon for the last successful code. Before the first success this is
    /// the placeholder icon, not the clear-sky one: no code has been
    /// received yet, so none is assumed.
    pub fn icon_name(&self, is_night: bool) -> &'static str {
        self.weather_code
            .map(|code| icon_name(code, is_night))
            .unwrap_or(PLACEHOLDER_ICON)
    }
}

/// Integral readings keep one decimal place (`12.0`); everything else uses
/// the shortest representation that round-trips (`9.5`).
pub fn format_reading(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Owner side of the observable state. Only the view session holds one;
/// everything else gets a [`watch::Receiver`] from [`StateHolder::subscribe`].
#[derive(Debug)]
pub struct StateHolder {
    tx: watch::Sender<PresentationState>,
}

impl Default for StateHolder {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHolder {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PresentationState::default());
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<PresentationState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> PresentationState {
        self.tx.borrow().clone()
    }

    /// Applies an outcome and notifies every subscriber, even when the
    /// rendered strings end up identical.
    pub fn apply(&self, outcome: FetchOutcome) {
        self.tx.send_modify(|state| state.apply(outcome));
    }
}
