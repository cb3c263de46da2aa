use std::{io::Write, sync::Arc};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use inquire::{CustomType, CustomUserError, Text, validator::Validation};
use nowcast_core::{Config, FetchOutcome, OpenMeteoProvider, ViewSession};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nowcast", version, about = "Current weather in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch current conditions once and print them.
    Show {
        /// Use night-time icons.
        #[arg(long)]
        night: bool,
    },

    /// Keep the view open and refresh on the configured interval.
    ///
    /// Press Enter to switch between day and night icons, Ctrl-C to quit.
    Watch {
        /// Start with night-time icons.
        #[arg(long)]
        night: bool,
    },

    /// Set location and refresh interval interactively.
    Configure,

    /// Print the weather code tables.
    Codes,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Show { night } => show(night).await,
            Command::Watch { night } => watch(night).await,
            Command::Configure => configure(),
            Command::Codes => {
                print!("{}", render::code_table());
                Ok(())
            }
        }
    }
}

fn open_session(night: bool) -> Result<ViewSession> {
    let config = Config::load()?;
    let provider = OpenMeteoProvider::new().context("Failed to build HTTP client")?;

    let mut view = ViewSession::new(Arc::new(provider), &config)?;
    view.set_night(night);

    if view.endpoint().request_url().is_none() {
        bail!("Could not build a request URL from endpoint '{}'", view.endpoint().base);
    }

    Ok(view)
}

async fn show(night: bool) -> Result<()> {
    let mut view = open_session(night)?;

    view.fetch_now();
    view.next_completion()
        .await
        .context("Fetch finished without reporting a result")?;

    print!("{}", render::render(&view.state(), view.city(), view.is_night()));
    Ok(())
}

enum Event {
    Quit,
    Fetched(Option<FetchOutcome>),
    StateChanged,
    Toggle,
    InputClosed,
}

async fn watch(night: bool) -> Result<()> {
    let mut view = open_session(night)?;
    let mut state_rx = view.subscribe();
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    redraw(&view)?;
    view.activate();

    loop {
        let event = tokio::select! {
            _ = tokio::signal::ctrl_c() => Event::Quit,
            outcome = view.next_completion() => Event::Fetched(outcome),
            Ok(()) = state_rx.changed() => Event::StateChanged,
            line = input.next_line(), if input_open => match line {
                Ok(Some(_)) => Event::Toggle,
                Ok(None) => Event::InputClosed,
                Err(e) => {
                    tracing::warn!(error = %e, "stopped reading stdin");
                    Event::InputClosed
                }
            },
        };

        match event {
            Event::Quit => {
                view.deactivate();
                break;
            }
            Event::Fetched(outcome) => {
                tracing::debug!(?outcome, "applied fetch outcome");
            }
            Event::StateChanged => redraw(&view)?,
            Event::Toggle => {
                view.toggle_night();
                redraw(&view)?;
            }
            Event::InputClosed => input_open = false,
        }
    }

    Ok(())
}

fn redraw(view: &ViewSession) -> Result<()> {
    let mut out = std::io::stdout().lock();
    write!(
        out,
        "{}{}{}",
        render::CLEAR_SCREEN,
        render::render(&view.state(), view.city(), view.is_night()),
        render::WATCH_HINT
    )?;
    out.flush()?;
    Ok(())
}

fn configure() -> Result<()> {
    let current = Config::load()?;

    let city = Text::new("City name:").with_default(&current.city).prompt()?;

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(current.latitude)
        .with_error_message("Please type a number, e.g. 51.5072")
        .with_validator(validate_latitude)
        .prompt()?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(current.longitude)
        .with_error_message("Please type a number, e.g. -0.1276")
        .with_validator(validate_longitude)
        .prompt()?;

    let refresh_interval_secs = CustomType::<u64>::new("Refresh interval (seconds):")
        .with_default(current.refresh_interval_secs)
        .with_error_message("Please type a whole number of seconds")
        .with_validator(validate_interval)
        .prompt()?;

    let config = Config { city, latitude, longitude, refresh_interval_secs, ..current };
    let path = config.save()?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

fn validate_latitude(value: &f64) -> Result<Validation, CustomUserError> {
    if (-90.0..=90.0).contains(value) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Latitude must be between -90 and 90".into()))
    }
}

fn validate_longitude(value: &f64) -> Result<Validation, CustomUserError> {
    if (-180.0..=180.0).contains(value) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Longitude must be between -180 and 180".into()))
    }
}

fn validate_interval(value: &u64) -> Result<Validation, CustomUserError> {
    if *value >= 1 {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Interval must be at least one second".into()))
    }
}
