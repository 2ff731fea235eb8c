use crate::{
    error::WidgetError,
    model::WeatherRecord,
    provider::WeatherProvider,
    sort::{self, SortKey},
};

/// Session state for the lookup widget.
///
/// Created fresh when a session starts, mutated only by the operations
/// below, and dropped at the end of the session. Nothing is persisted.
#[derive(Debug, Default)]
pub struct WidgetState {
    pub current_query: String,
    pub current_sort_key: Option<SortKey>,
    pub raw_results: Vec<WeatherRecord>,
    /// Recomputed in full on every sort request. A new search does NOT
    /// invalidate it; it stays as-is until the user sorts again.
    pub sorted_results: Vec<WeatherRecord>,
    /// Empty string when no error is being shown.
    pub error_message: String,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up current weather for `current_query` through `provider`.
    ///
    /// An empty query is rejected without touching the network; the query is
    /// deliberately not trimmed first, so an all-whitespace query goes
    /// through. On failure the prior results are kept and the cause goes to
    /// the diagnostic log only.
    pub async fn search(&mut self, provider: &dyn WeatherProvider) {
        if self.current_query.is_empty() {
            self.error_message = WidgetError::EmptyQuery.to_string();
            return;
        }

        match provider.current_weather(&self.current_query).await {
            Ok(record) => {
                self.raw_results = vec![record];
                self.error_message.clear();
            }
            Err(err) => {
                tracing::error!(query = %self.current_query, error = ?err, "weather lookup failed");
                self.error_message = WidgetError::Fetch(err).to_string();
            }
        }
    }

    /// Re-sort `raw_results` by `current_sort_key` into `sorted_results`.
    pub fn sort(&mut self) {
        let Some(key) = self.current_sort_key else {
            self.error_message = WidgetError::NoSortKey.to_string();
            return;
        };

        self.sorted_results = sort::sort_records(&self.raw_results, key);
        self.error_message.clear();
    }

    /// Change the selected sort key. Clears any error but does not sort.
    pub fn select_sort_key(&mut self, key: Option<SortKey>) {
        self.current_sort_key = key;
        self.error_message.clear();
    }
}
