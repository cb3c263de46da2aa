use std::fmt::Write;

use chrono::Local;
use nowcast_core::{
    PresentationState, STATIC_FORECAST,
    condition::{KNOWN_CODES, PLACEHOLDER_ICON, UNKNOWN_DESCRIPTION, describe, icon_name},
};

pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";
pub const WATCH_HINT: &str = "\n[Enter] change day time   [Ctrl-C] quit\n";

/// Terminal stand-in for an icon identifier.
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "sun.max.fill" => "☀",
        "moon.stars.fill" => "🌙",
        "cloud.sun.fill" => "⛅",
        "cloud.moon.fill" => "☁",
        "cloud.fog.fill" => "🌫",
        "cloud.drizzle.fill" => "🌦",
        "cloud.rain.fill" => "🌧",
        "cloud.snow.fill" => "🌨",
        "cloud.heavyrain.fill" => "⛈",
        "wind.snow" => "🌬",
        "sunset.fill" => "🌇",
        "snow" => "❄",
        _ => "?",
    }
}

/// Full view: city, big icon and temperature, the five-day strip, then
/// description and wind.
pub fn render(state: &PresentationState, city: &str, is_night: bool) -> String {
    let icon = state.icon_name(is_night);
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{city}");
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}  {icon}", glyph(icon));
    let _ = writeln!(out, "  {}°", state.temperature_as_integer());
    let _ = writeln!(out);

    let mut days = String::new();
    let mut icons = String::new();
    let mut temps = String::new();
    for day in &STATIC_FORECAST {
        let _ = write!(days, "{:<6}", day.day_of_week);
        let _ = write!(icons, "{:<6}", glyph(day.icon));
        let _ = write!(temps, "{:<6}", day.temperature);
    }
    let _ = writeln!(out, "  {}", days.trim_end());
    let _ = writeln!(out, "  {}", icons.trim_end());
    let _ = writeln!(out, "  {}", temps.trim_end());
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", state.description_text);
    let _ = writeln!(out, "Wind: {}", state.windspeed_text);

    let time_of_day = if is_night { "night" } else { "day" };
    match state.updated_at {
        Some(at) => {
            let local = at.with_timezone(&Local);
            let _ = writeln!(out, "Updated {} ({time_of_day})", local.format("%H:%M:%S"));
        }
        None => {
            let _ = writeln!(out, "Not updated yet ({time_of_day})");
        }
    }

    out
}

/// Table of every known code with its description and day/night icons.
pub fn code_table() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:<44} {:<22} night", "code", "description", "day");

    for &code in KNOWN_CODES {
        let _ = writeln!(
            out,
            "{:<6} {:<44} {:<22} {}",
            code,
            describe(code),
            icon_name(code, false),
            icon_name(code, true)
        );
    }

    let _ = writeln!(
        out,
        "{:<6} {:<44} {:<22} {}",
        "other", UNKNOWN_DESCRIPTION, PLACEHOLDER_ICON, PLACEHOLDER_ICON
    );
    out
}
