use crate::model::WeatherRecord;
use std::cmp::Ordering;
use std::convert::TryFrom;

/// The enumerated field selector driving the in-memory sort.
///
/// Each variant maps to a typed accessor on [`WeatherRecord`]; the
/// "unselected" sentinel is `Option::<SortKey>::None` at the widget level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    WeatherId,
    LocationName,
    WeatherDescription,
    TemperatureC,
    FeelsLikeC,
    TemperatureMinC,
    TemperatureMaxC,
}

impl SortKey {
    /// Stable selector value, kept identical to the provider field paths the
    /// selector historically exposed.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::WeatherId => "weather.0.id",
            SortKey::LocationName => "name",
            SortKey::WeatherDescription => "weather.0.description",
            SortKey::TemperatureC => "main.temp",
            SortKey::FeelsLikeC => "main.feels_like",
            SortKey::TemperatureMinC => "main.temp_min",
            SortKey::TemperatureMaxC => "main.temp_max",
        }
    }

    /// Human label shown next to the selector option.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::WeatherId => "ID",
            SortKey::LocationName => "Location name",
            SortKey::WeatherDescription => "Description",
            SortKey::TemperatureC => "Temperature",
            SortKey::FeelsLikeC => "Feels Like",
            SortKey::TemperatureMinC => "Minimum Temperature",
            SortKey::TemperatureMaxC => "Maximum Temperature",
        }
    }

    pub const fn all() -> &'static [SortKey] {
        &[
            SortKey::WeatherId,
            SortKey::LocationName,
            SortKey::WeatherDescription,
            SortKey::TemperatureC,
            SortKey::FeelsLikeC,
            SortKey::TemperatureMinC,
            SortKey::TemperatureMaxC,
        ]
    }

    fn resolve<'a>(&self, record: &'a WeatherRecord) -> FieldValue<'a> {
        match self {
            SortKey::WeatherId => FieldValue::Int(record.weather_id),
            SortKey::LocationName => FieldValue::Text(&record.location_name),
            SortKey::WeatherDescription => FieldValue::Text(&record.weather_description),
            SortKey::TemperatureC => FieldValue::Float(record.temperature_c),
            SortKey::FeelsLikeC => FieldValue::Float(record.feels_like_c),
            SortKey::TemperatureMinC => FieldValue::Float(record.temperature_min_c),
            SortKey::TemperatureMaxC => FieldValue::Float(record.temperature_max_c),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SortKey {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        SortKey::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown sort key '{value}'. Supported keys: weather.0.id, name, \
                     weather.0.description, main.temp, main.feels_like, main.temp_min, \
                     main.temp_max."
                )
            })
    }
}

/// A resolved field value, one kind per accessor.
#[derive(Debug)]
enum FieldValue<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

/// Values of different kinds compare equal; a non-comparable float pair
/// compares equal too. Defined fallback, not an error.
fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
        (FieldValue::Float(a), FieldValue::Float(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Return a copy of `records` ordered ascending by the chosen field.
/// The sort is stable; there is no descending mode.
pub fn sort_records(records: &[WeatherRecord], key: SortKey) -> Vec<WeatherRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_values(&key.resolve(a), &key.resolve(b)));
    sorted
}
