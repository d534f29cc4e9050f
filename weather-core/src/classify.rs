//! Pure mappings from raw weather fields to the closed categories the
//! front end renders: condition bucket, AQI level, UV level and clothing
//! advice.

/// Visual bucket for a WeatherAPI condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunder,
    Mist,
}

impl ConditionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionCategory::Clear => "clear",
            ConditionCategory::Cloudy => "cloudy",
            ConditionCategory::Rain => "rain",
            ConditionCategory::Snow => "snow",
            ConditionCategory::Thunder => "thunder",
            ConditionCategory::Mist => "mist",
        }
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use ConditionCategory::{Clear, Cloudy, Mist, Rain, Snow, Thunder};

/// Every condition code documented by WeatherAPI, sorted by code.
///
/// Sleet and ice pellets fall under `Snow`; freezing drizzle under `Rain`.
/// Those codes (1069, 1072, 1204, 1207, 1249, 1252) extend the six visual
/// groups so that no documented code falls back to `Clear`.
pub const CONDITION_TABLE: &[(i32, ConditionCategory)] = &[
    (1000, Clear),   // Sunny / Clear
    (1003, Cloudy),  // Partly cloudy
    (1006, Cloudy),  // Cloudy
    (1009, Cloudy),  // Overcast
    (1030, Mist),    // Mist
    (1063, Rain),    // Patchy rain possible
    (1066, Snow),    // Patchy snow possible
    (1069, Snow),    // Patchy sleet possible
    (1072, Rain),    // Patchy freezing drizzle possible
    (1087, Thunder), // Thundery outbreaks possible
    (1114, Snow),    // Blowing snow
    (1117, Snow),    // Blizzard
    (1135, Mist),    // Fog
    (1147, Mist),    // Freezing fog
    (1150, Rain),
    (1153, Rain),
    (1168, Rain),
    (1171, Rain),
    (1180, Rain),
    (1183, Rain),
    (1186, Rain),
    (1189, Rain),
    (1192, Rain),
    (1195, Rain),
    (1198, Rain),
    (1201, Rain),
    (1204, Snow), // Light sleet
    (1207, Snow), // Moderate or heavy sleet
    (1210, Snow),
    (1213, Snow),
    (1216, Snow),
    (1219, Snow),
    (1222, Snow),
    (1225, Snow),
    (1237, Snow), // Ice pellets
    (1240, Rain),
    (1243, Rain),
    (1246, Rain),
    (1249, Snow), // Light sleet showers
    (1252, Snow),
    (1255, Snow),
    (1258, Snow),
    (1261, Snow),
    (1264, Snow),
    (1273, Thunder),
    (1276, Thunder),
    (1279, Thunder),
    (1282, Thunder),
];

const fn table_is_strictly_sorted(table: &[(i32, ConditionCategory)]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if table[i - 1].0 >= table[i].0 {
            return false;
        }
        i += 1;
    }
    true
}

// Binary search below relies on this.
const _: () = assert!(table_is_strictly_sorted(CONDITION_TABLE));

/// Bucket for a condition code. Codes outside the table are `Clear`.
pub fn classify_condition(code: i32) -> ConditionCategory {
    CONDITION_TABLE
        .binary_search_by_key(&code, |(c, _)| *c)
        .map(|idx| CONDITION_TABLE[idx].1)
        .unwrap_or(ConditionCategory::Clear)
}

/// WeatherAPI's `is_day` flag: only an exact 1 means daytime.
pub fn is_daytime(flag: i32) -> bool {
    flag == 1
}

/// US-EPA air quality level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqiLevel {
    Good,
    Moderate,
    SensitiveUnhealthy,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Unknown,
}

impl AqiLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::SensitiveUnhealthy => "Unhealthy for Sensitive Groups",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::VeryUnhealthy => "Very Unhealthy",
            AqiLevel::Hazardous => "Hazardous",
            AqiLevel::Unknown => "Unknown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Air quality is satisfactory",
            AqiLevel::Moderate => "Acceptable air quality",
            AqiLevel::SensitiveUnhealthy => "Sensitive groups may be affected",
            AqiLevel::Unhealthy => "Health effects possible",
            AqiLevel::VeryUnhealthy => "Health alert",
            AqiLevel::Hazardous => "Emergency conditions",
            AqiLevel::Unknown => "Data unavailable",
        }
    }
}

pub fn classify_aqi(index: Option<i64>) -> AqiLevel {
    match index {
        Some(1) => AqiLevel::Good,
        Some(2) => AqiLevel::Moderate,
        Some(3) => AqiLevel::SensitiveUnhealthy,
        Some(4) => AqiLevel::Unhealthy,
        Some(5) => AqiLevel::VeryUnhealthy,
        Some(6) => AqiLevel::Hazardous,
        _ => AqiLevel::Unknown,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl UvLevel {
    pub fn label(&self) -> &'static str {
        match self {
            UvLevel::Low => "Low",
            UvLevel::Moderate => "Moderate",
            UvLevel::High => "High",
            UvLevel::VeryHigh => "Very High",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            UvLevel::Low => "Wear sunglasses on bright days",
            UvLevel::Moderate => "Use sunscreen SPF 30+",
            UvLevel::High => "Protective clothing advised",
            UvLevel::VeryHigh => "Minimize sun exposure",
        }
    }
}

/// Upper bounds are inclusive. NaN compares false everywhere and lands in
/// `VeryHigh`.
pub fn classify_uv(index: f64) -> UvLevel {
    if index <= 2.0 {
        UvLevel::Low
    } else if index <= 5.0 {
        UvLevel::Moderate
    } else if index <= 7.0 {
        UvLevel::High
    } else {
        UvLevel::VeryHigh
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClothingSuggestion {
    pub emoji: &'static str,
    pub text: &'static str,
}

/// Lower bounds are inclusive; NaN falls through to the cold bucket.
pub fn suggest_clothing(temp_c: f64) -> ClothingSuggestion {
    let (emoji, text) = if temp_c >= 30.0 {
        ("☀️", "Very hot! Light, breathable clothing and stay hydrated")
    } else if temp_c >= 25.0 {
        ("👕", "Warm weather – T-shirt and shorts recommended")
    } else if temp_c >= 15.0 {
        ("🧥", "Mild weather – Light jacket suggested")
    } else if temp_c >= 5.0 {
        ("🧥", "Cool weather – Wear a warm coat")
    } else {
        ("❄️", "Cold! Heavy winter wear necessary")
    };

    ClothingSuggestion { emoji, text }
}
