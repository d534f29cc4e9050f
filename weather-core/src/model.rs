use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Format WeatherAPI uses for `localtime` and hourly `time` fields.
const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single location search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    location: String,
}

impl WeatherQuery {
    /// Returns `None` for blank input.
    pub fn new(location: &str) -> Option<Self> {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self { location: trimmed.to_string() })
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl std::fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.location)
    }
}

/// Forecast response as returned by WeatherAPI's `forecast.json`.
///
/// Every field is required except the EPA index, so a body that is missing
/// anything fails to deserialize instead of producing a half-filled record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast: Forecast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub localtime: String,
    pub localtime_epoch: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
    pub code: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub humidity: u8,
    pub wind_kph: f64,
    pub wind_degree: u16,
    pub wind_dir: String,
    pub uv: f64,
    pub dewpoint_c: f64,
    pub is_day: i32,
    pub condition: Condition,
    pub air_quality: AirQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    #[serde(rename = "us-epa-index", default, skip_serializing_if = "Option::is_none")]
    pub us_epa_index: Option<i64>,
}

impl AirQuality {
    /// Pollutant concentrations (μg/m³) with their display names.
    pub fn pollutants(&self) -> [(&'static str, f64); 6] {
        [
            ("CO", self.co),
            ("NO₂", self.no2),
            ("O₃", self.o3),
            ("SO₂", self.so2),
            ("PM2.5", self.pm2_5),
            ("PM10", self.pm10),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub hour: Vec<HourForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourForecast {
    pub time: String,
    pub time_epoch: i64,
    pub temp_c: f64,
    pub condition: Condition,
    pub is_day: i32,
}

impl HourForecast {
    /// Clock hour (0-23) of this entry, if `time` is well formed.
    pub fn hour(&self) -> Option<u32> {
        parse_local_time(&self.time).map(|t| t.hour())
    }

    /// 12-hour label such as "3 PM" or "12 AM".
    pub fn hour_label(&self) -> String {
        match self.hour() {
            Some(hour) => format_hour_12(hour),
            None => self.time.clone(),
        }
    }
}

impl WeatherData {
    /// The requested day; `forecast.json` is always queried with `days=1`.
    pub fn today(&self) -> Option<&ForecastDay> {
        self.forecast.forecastday.first()
    }

    /// Hours from the location's current local hour onwards, at most `limit`.
    pub fn upcoming_hours(&self, limit: usize) -> Vec<&HourForecast> {
        let Some(day) = self.today() else {
            return Vec::new();
        };

        let current_hour = parse_local_time(&self.location.localtime).map(|t| t.hour());

        day.hour
            .iter()
            .filter(|h| match (current_hour, h.hour()) {
                (Some(now), Some(hour)) => hour >= now,
                _ => true,
            })
            .take(limit)
            .collect()
    }
}

fn parse_local_time(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), LOCAL_TIME_FORMAT).ok()
}

fn format_hour_12(hour: u32) -> String {
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h} {suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = include_str!("../tests/fixtures/london.json");

    fn london() -> WeatherData {
        serde_json::from_str(LONDON).expect("fixture must parse")
    }

    #[test]
    fn query_is_trimmed() {
        let q = WeatherQuery::new("  New York \n").expect("non-blank");
        assert_eq!(q.location(), "New York");
    }

    #[test]
    fn blank_query_is_rejected() {
        assert!(WeatherQuery::new("").is_none());
        assert!(WeatherQuery::new("   \t").is_none());
    }

    #[test]
    fn parses_forecast_body() {
        let data = london();

        assert_eq!(data.location.name, "London");
        assert_eq!(data.current.condition.code, 1003);
        assert_eq!(data.current.air_quality.us_epa_index, Some(1));
        assert_eq!(data.today().map(|d| d.hour.len()), Some(24));
    }

    #[test]
    fn missing_epa_index_is_none() {
        let mut value: serde_json::Value = serde_json::from_str(LONDON).unwrap();
        value["current"]["air_quality"].as_object_mut().unwrap().remove("us-epa-index");

        let data: WeatherData = serde_json::from_value(value).unwrap();
        assert_eq!(data.current.air_quality.us_epa_index, None);
    }

    #[test]
    fn missing_required_field_fails() {
        let mut value: serde_json::Value = serde_json::from_str(LONDON).unwrap();
        value["current"].as_object_mut().unwrap().remove("uv");

        assert!(serde_json::from_value::<WeatherData>(value).is_err());
    }

    #[test]
    fn upcoming_hours_start_at_local_hour() {
        let data = london();
        let hours = data.upcoming_hours(12);

        // local time is 14:05, the day ends at 23:00
        assert_eq!(hours.len(), 10);
        assert_eq!(hours[0].hour(), Some(14));
        assert_eq!(hours[9].hour(), Some(23));
    }

    #[test]
    fn upcoming_hours_respects_limit() {
        let mut data = london();
        data.location.localtime = "2024-06-13 0:30".into();

        let hours = data.upcoming_hours(12);
        assert_eq!(hours.len(), 12);
        assert_eq!(hours[0].hour(), Some(0));
    }

    #[test]
    fn upcoming_hours_without_parsable_localtime_starts_at_first_hour() {
        let mut data = london();
        data.location.localtime = "sometime".into();

        let hours = data.upcoming_hours(3);
        assert_eq!(hours.len(), 3);
        assert_eq!(hours[0].hour(), Some(0));
    }

    #[test]
    fn hour_labels_use_12_hour_clock() {
        assert_eq!(format_hour_12(0), "12 AM");
        assert_eq!(format_hour_12(9), "9 AM");
        assert_eq!(format_hour_12(12), "12 PM");
        assert_eq!(format_hour_12(15), "3 PM");
        assert_eq!(format_hour_12(23), "11 PM");

        let data = london();
        assert_eq!(data.today().unwrap().hour[14].hour_label(), "2 PM");
    }

    #[test]
    fn pollutants_are_listed_in_display_order() {
        let data = london();
        let names: Vec<_> = data.current.air_quality.pollutants().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["CO", "NO₂", "O₃", "SO₂", "PM2.5", "PM10"]);
    }
}
