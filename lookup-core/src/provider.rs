use crate::model::WeatherRecord;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Abstraction over the weather data source.
///
/// The widget only needs one operation: current conditions for a free-text
/// location query. Tests substitute a fake implementation at this seam.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &str) -> anyhow::Result<WeatherRecord>;
}
