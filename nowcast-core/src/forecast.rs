/// One cell of the five-day strip under the current conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastDay {
    pub day_of_week: &'static str,
    pub icon: &'static str,
    pub temperature: i32,
}

/// Fixed placeholder strip. It is not fetched and never changes.
pub const STATIC_FORECAST: [ForecastDay; 5] = [
    ForecastDay { day_of_week: "TUE", icon: "cloud.sun.fill", temperature: 74 },
    ForecastDay { day_of_week: "WED", icon: "sun.max.fill", temperature: 88 },
    ForecastDay { day_of_week: "THU", icon: "wind.snow", temperature: 55 },
    ForecastDay { day_of_week: "FRI", icon: "sunset.fill", temperature: 60 },
    ForecastDay { day_of_week: "SAT", icon: "snow", temperature: 25 },
];
