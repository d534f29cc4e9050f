//! Plain-text weather report.

use std::fmt::Write;

use weather_core::{
    WeatherData, classify_aqi, classify_condition, classify_uv, is_daytime, suggest_clothing,
};

/// Number of hours shown in the hourly strip.
const UPCOMING_HOURS: usize = 12;

pub fn report(data: &WeatherData) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, data);
    out
}

fn write_report(out: &mut String, data: &WeatherData) -> std::fmt::Result {
    let loc = &data.location;
    let cur = &data.current;

    writeln!(out, "{}, {}  (local time {})", loc.name, loc.country, loc.localtime)?;
    writeln!(
        out,
        "{} {} [{}]",
        day_marker(cur.is_day),
        cur.condition.text,
        classify_condition(cur.condition.code)
    )?;
    writeln!(out)?;

    writeln!(out, "Temperature  {:.0}°C (feels like {:.0}°C)", cur.temp_c, cur.feelslike_c)?;
    writeln!(out, "Humidity     {}%", cur.humidity)?;
    writeln!(out, "Wind         {:.1} km/h {} ({}°)", cur.wind_kph, cur.wind_dir, cur.wind_degree)?;
    writeln!(out, "Dew point    {:.0}°C", cur.dewpoint_c)?;

    let uv = classify_uv(cur.uv);
    writeln!(out, "UV index     {} - {} ({})", cur.uv, uv.label(), uv.advice())?;

    let clothing = suggest_clothing(cur.temp_c);
    writeln!(out, "Wear         {} {}", clothing.emoji, clothing.text)?;
    writeln!(out)?;

    let aq = &cur.air_quality;
    let aqi = classify_aqi(aq.us_epa_index);
    match aq.us_epa_index {
        Some(index) => writeln!(out, "Air quality  {} ({index}) - {}", aqi.label(), aqi.description())?,
        None => writeln!(out, "Air quality  {} - {}", aqi.label(), aqi.description())?,
    }
    let pollutants: Vec<String> =
        aq.pollutants().iter().map(|(name, value)| format!("{name} {value:.1}")).collect();
    writeln!(out, "             {}", pollutants.join("  "))?;

    let hours = data.upcoming_hours(UPCOMING_HOURS);
    if !hours.is_empty() {
        writeln!(out)?;
        writeln!(out, "Hourly forecast")?;
        for hour in hours {
            writeln!(
                out,
                "  {:>5}  {} {:>5.1}°C  {}",
                hour.hour_label(),
                day_marker(hour.is_day),
                hour.temp_c,
                hour.condition.text
            )?;
        }
    }

    Ok(())
}

fn day_marker(flag: i32) -> &'static str {
    if is_daytime(flag) { "☀" } else { "☾" }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: &str = include_str!("../../weather-core/tests/fixtures/london.json");

    fn london() -> WeatherData {
        serde_json::from_str(LONDON).expect("fixture must parse")
    }

    #[test]
    fn report_contains_classifications() {
        let text = report(&london());

        assert!(text.starts_with("London, United Kingdom  (local time 2024-06-13 14:05)"));
        assert!(text.contains("☀ Partly cloudy [cloudy]"));
        assert!(text.contains("UV index     5 - Moderate (Use sunscreen SPF 30+)"));
        assert!(text.contains("Mild weather – Light jacket suggested"));
        assert!(text.contains("Air quality  Good (1) - Air quality is satisfactory"));
        assert!(text.contains("PM2.5 4.8"));
    }

    #[test]
    fn report_lists_upcoming_hours() {
        let text = report(&london());
        let hourly: Vec<&str> =
            text.lines().skip_while(|l| *l != "Hourly forecast").skip(1).collect();

        assert_eq!(hourly.len(), 10);
        assert!(hourly[0].trim_start().starts_with("2 PM"));
        assert!(hourly[9].trim_start().starts_with("11 PM"));
    }

    #[test]
    fn missing_aqi_renders_unknown() {
        let mut data = london();
        data.current.air_quality.us_epa_index = None;

        let text = report(&data);
        assert!(text.contains("Air quality  Unknown - Data unavailable"));
    }
}
