//! Fixed lookup tables from WMO weather codes to display text and icons.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

/// Description shown when a code is not in the table.
pub const UNKNOWN_DESCRIPTION: &str = "Unknown";

/// Icon shown when a code is not in the table.
pub const PLACEHOLDER_ICON: &str = "questionmark";

/// Every code the tables know about, in display order.
pub const KNOWN_CODES: &[i32] = &[0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 80, 81, 82];

/// Human-readable description for a weather code.
pub fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 | 2 | 3 => "Mainly clear, partly cloudy, and overcast",
        45 | 48 => "Fog and depositing rime fog",
        51 | 53 | 55 => "Drizzle",
        61 | 63 | 65 => "Rain",
        71 | 73 | 75 => "Snow",
        80 | 81 | 82 => "Rain showers",
        _ => UNKNOWN_DESCRIPTION,
    }
}

/// Icon identifier for a weather code. Only clear and partly cloudy skies
/// have a separate night variant.
pub fn icon_name(code: i32, is_night: bool) -> &'static str {
    match code {
        0 if is_night => "moon.stars.fill",
        0 => "sun.max.fill",
        1 | 2 | 3 if is_night => "cloud.moon.fill",
        1 | 2 | 3 => "cloud.sun.fill",
        45 | 48 => "cloud.fog.fill",
        51 | 53 | 55 => "cloud.drizzle.fill",
        61 | 63 | 65 => "cloud.rain.fill",
        71 | 73 | 75 => "cloud.snow.fill",
        80 | 81 | 82 => "cloud.heavyrain.fill",
        _ => PLACEHOLDER_ICON,
    }
}
