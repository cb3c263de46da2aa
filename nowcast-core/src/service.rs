//! Fire-and-forget weather fetches.
//!
//! Each call to [`FetchService::fetch_weather`] spawns its own task; the
//! result comes back over a channel to whoever owns the presentation state.

use reqwest::Url;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::{
    config::Config,
    model::FetchOutcome,
    provider::WeatherProvider,
};

/// Where to ask for current conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub base: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Endpoint {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base: config.endpoint.clone(),
            latitude: config.latitude,
            longitude: config.longitude,
        }
    }

    /// `None` when the templated string isn't a valid URL.
    pub fn request_url(&self) -> Option<Url> {
        let raw = format!(
            "{}?latitude={}&longitude={}&current_weather=true",
            self.base, self.latitude, self.longitude
        );
        Url::parse(&raw).ok()
    }
}

#[derive(Debug, Clone)]
pub struct FetchService {
    provider: Arc<dyn WeatherProvider>,
    endpoint: Endpoint,
    completions: mpsc::UnboundedSender<FetchOutcome>,
}

impl FetchService {
    /// Returns the service and the receiving end of its completions.
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        endpoint: Endpoint,
    ) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (completions, rx) = mpsc::unbounded_channel();
        (Self { provider, endpoint, completions }, rx)
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Starts one request and returns immediately.
    ///
    /// An unparsable URL aborts silently: nothing is requested and nothing
    /// is sent back. In-flight requests are never cancelled; if several
    /// overlap, their outcomes arrive in completion order.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn fetch_weather(&self) {
        let Some(url) = self.endpoint.request_url() else {
            tracing::debug!(base = %self.endpoint.base, "could not build request URL, skipping fetch");
            return;
        };

        let provider = Arc::clone(&self.provider);
        let completions = self.completions.clone();

        tokio::spawn(async move {
            let outcome = match provider.current_weather(&url).await {
                Ok(current) => FetchOutcome::Success(current),
                Err(e) => {
                    tracing::warn!(error = %e, "weather fetch failed");
                    FetchOutcome::Failure
                }
            };

            if completions.send(outcome).is_err() {
                tracing::debug!("view closed before fetch completed, dropping outcome");
            }
        });
    }
}
