//! One rendered view of the current conditions.
//!
//! The session is the only place presentation state is written. Fetches run
//! on their own tasks and hand their outcome back through
//! [`ViewSession::next_completion`], which the view's own loop awaits.

use anyhow::{Context, Result};
use std::{sync::Arc, time::Duration};
use tokio::sync::{mpsc, watch};

use crate::{
    config::Config,
    model::FetchOutcome,
    provider::WeatherProvider,
    scheduler::RefreshHandle,
    service::{Endpoint, FetchService},
    state::{PresentationState, StateHolder},
};

#[derive(Debug)]
pub struct ViewSession {
    city: String,
    refresh_interval: Duration,
    service: FetchService,
    completions: mpsc::UnboundedReceiver<FetchOutcome>,
    state: StateHolder,
    refresh: Option<RefreshHandle>,
    is_night: bool,
}

impl ViewSession {
    /// Fails when `config` doesn't validate, e.g. a zero refresh interval
    /// or an endpoint that isn't a URL.
    pub fn new(provider: Arc<dyn WeatherProvider>, config: &Config) -> Result<Self> {
        config.validate().context("Cannot open a view with this configuration")?;

        let (service, completions) = FetchService::new(provider, Endpoint::from_config(config));
        Ok(Self {
            city: config.city.clone(),
            refresh_interval: config.refresh_interval(),
            service,
            completions,
            state: StateHolder::new(),
            refresh: None,
            is_night: false,
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn endpoint(&self) -> &Endpoint {
        self.service.endpoint()
    }

    pub fn subscribe(&self) -> watch::Receiver<PresentationState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> PresentationState {
        self.state.snapshot()
    }

    pub fn is_night(&self) -> bool {
        self.is_night
    }

    /// Flips between day and night icons. Returns the new value.
    pub fn toggle_night(&mut self) -> bool {
        self.is_night = !self.is_night;
        self.is_night
    }

    pub fn set_night(&mut self, is_night: bool) {
        self.is_night = is_night;
    }

    pub fn current_icon(&self) -> &'static str {
        self.state.snapshot().icon_name(self.is_night)
    }

    /// Single fetch outside the refresh loop.
    pub fn fetch_now(&self) {
        self.service.fetch_weather();
    }

    /// Fetches now and then on every refresh interval. No-op while already
    /// active.
    pub fn activate(&mut self) {
        if self.is_active() {
            return;
        }

        tracing::info!(city = %self.city, interval = ?self.refresh_interval, "activating view");
        let service = self.service.clone();
        self.refresh = Some(RefreshHandle::start(self.refresh_interval, move || {
            service.fetch_weather();
        }));
    }

    /// Stops the refresh loop. Requests already in flight still complete
    /// and are still applied by [`next_completion`](Self::next_completion).
    pub fn deactivate(&mut self) {
        if let Some(refresh) = self.refresh.take() {
            tracing::info!(city = %self.city, "deactivating view");
            refresh.stop();
        }
    }

    pub fn is_active(&self) -> bool {
        self.refresh.as_ref().is_some_and(RefreshHandle::is_running)
    }

    /// Waits for the next finished fetch and applies it to the state.
    ///
    /// Outcomes are applied in the order they finish, so with overlapping
    /// requests the last one to complete wins.
    pub async fn next_completion(&mut self) -> Option<FetchOutcome> {
        let outcome = self.completions.recv().await?;
        self.state.apply(outcome);
        Some(outcome)
    }
}
