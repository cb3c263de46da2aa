//! Core library for the `nowcast` CLI.
//!
//! This crate defines:
//! - The Open-Meteo current-weather model and provider
//! - Weather code lookup tables (descriptions and icons)
//! - Fire-and-forget fetching, observable presentation state, and the
//!   refresh loop that ties them to a view session
//! - On-disk configuration
//!
//! It is used by `nowcast-cli`, but any other front end can drive a
//! [`ViewSession`] and render from its [`PresentationState`] subscription.

pub mod condition;
pub mod config;
pub mod forecast;
pub mod model;
pub mod provider;
pub mod scheduler;
pub mod service;
pub mod session;
pub mod state;

pub use config::Config;
pub use forecast::{ForecastDay, STATIC_FORECAST};
pub use model::{CurrentWeather, FetchOutcome, WeatherResponse};
pub use provider::{FetchError, OpenMeteoProvider, WeatherProvider};
pub use scheduler::RefreshHandle;
pub use service::{Endpoint, FetchService};
pub use session::ViewSession;
pub use state::{PresentationState, StateHolder};
