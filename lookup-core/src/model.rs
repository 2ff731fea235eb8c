use serde::{Deserialize, Serialize};

/// One parsed weather observation for a single location.
///
/// The provider payload carries more fields (coordinates, wind, cloud cover,
/// sunrise/sunset, country, timezone, visibility); only the fields below are
/// displayed or sorted on, so only they survive parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location_name: String,
    pub weather_id: i64,
    pub weather_description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub temperature_min_c: f64,
    pub temperature_max_c: f64,
}
