use crate::{model::WeatherRecord, widget::WidgetState};
use std::fmt::Write;

/// Render the widget's result area as plain text, a pure projection of the
/// state: the error line when set, then the sorted results if any, else the
/// raw results, else nothing.
pub fn render(state: &WidgetState) -> String {
    let mut out = String::new();

    if !state.error_message.is_empty() {
        let _ = writeln!(out, "{}", state.error_message);
    }

    let records = if state.sorted_results.is_empty() {
        &state.raw_results
    } else {
        &state.sorted_results
    };

    for record in records {
        render_record(&mut out, record);
    }

    out
}

fn render_record(out: &mut String, record: &WeatherRecord) {
    // f64 Display keeps 15.0 as "15" and 14.2 as "14.2".
    let _ = writeln!(out, "ID: {}", record.weather_id);
    let _ = writeln!(out, "Location name: {}", record.location_name);
    let _ = writeln!(out, "Description: {}", record.weather_description);
    let _ = writeln!(out, "Temperature: {} °C", record.temperature_c);
    let _ = writeln!(out, "Feels Like: {} °C", record.feels_like_c);
    let _ = writeln!(out, "Minimum Temperature: {} °C", record.temperature_min_c);
    let _ = writeln!(out, "Maximum Temperature: {} °C", record.temperature_max_c);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> WeatherRecord {
        WeatherRecord {
            location_name: "London".to_string(),
            weather_id: 800,
            weather_description: "clear sky".to_string(),
            temperature_c: 15.0,
            feels_like_c: 14.2,
            temperature_min_c: 13.0,
            temperature_max_c: 16.0,
        }
    }

    #[test]
    fn renders_the_seven_line_block() {
        let mut state = WidgetState::new();
        state.raw_results = vec![london()];

        let out = render(&state);

        assert_eq!(
            out,
            "ID: 800\n\
             Location name: London\n\
             Description: clear sky\n\
             Temperature: 15 °C\n\
             Feels Like: 14.2 °C\n\
             Minimum Temperature: 13 °C\n\
             Maximum Temperature: 16 °C\n"
        );
    }

    #[test]
    fn empty_state_renders_nothing() {
        let state = WidgetState::new();
        assert_eq!(render(&state), "");
    }

    #[test]
    fn error_message_is_rendered_as_a_plain_line() {
        let mut state = WidgetState::new();
        state.error_message = "Please enter a location".to_string();

        assert_eq!(render(&state), "Please enter a location\n");
    }

    #[test]
    fn sorted_results_take_precedence_over_raw_results() {
        let mut sorted = london();
        sorted.location_name = "Paris".to_string();

        let mut state = WidgetState::new();
        state.raw_results = vec![london()];
        state.sorted_results = vec![sorted];

        let out = render(&state);
        assert!(out.contains("Location name: Paris"));
        assert!(!out.contains("Location name: London"));
    }

    #[test]
    fn rendering_sorted_results_preserves_field_values() {
        let mut state = WidgetState::new();
        state.raw_results = vec![london()];
        state.current_sort_key = Some(crate::sort::SortKey::TemperatureC);
        state.sort();

        let from_sorted = render(&state);
        state.sorted_results.clear();
        let from_raw = render(&state);

        assert_eq!(from_sorted, from_raw);
    }
}
