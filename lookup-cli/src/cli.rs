use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use lookup_core::{Config, SortKey, WidgetState, provider::openweather::OpenWeatherProvider, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "lookup", version, about = "Weather lookup CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store an OpenWeather API key override.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let api_key = Text::new("OpenWeather API key:").prompt()?;

    let mut config = Config::load()?;
    config.set_api_key(api_key);
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

/// One entry of the action menu, mirroring the original widget surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    /// Present in the original interface but wired to nothing; kept for fidelity.
    InertInput,
    ChooseSortKey,
    Sort,
    Quit,
}

impl Action {
    fn label(&self) -> &'static str {
        match self {
            Action::Search => "Search",
            Action::InertInput => "Enter location...",
            Action::ChooseSortKey => "Sort by",
            Action::Sort => "Sorted Results",
            Action::Quit => "Quit",
        }
    }

    const fn all() -> &'static [Action] {
        &[
            Action::Search,
            Action::InertInput,
            Action::ChooseSortKey,
            Action::Sort,
            Action::Quit,
        ]
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const SORT_PLACEHOLDER: &str = "-- Sort by --";

fn sort_key_options() -> Vec<&'static str> {
    let mut options = vec![SORT_PLACEHOLDER];
    options.extend(SortKey::all().iter().map(SortKey::label));
    options
}

/// The placeholder maps to the unselected sentinel.
fn sort_key_for_choice(choice: &str) -> Option<SortKey> {
    SortKey::all().iter().copied().find(|key| key.label() == choice)
}

/// The interactive widget loop. Each action runs to completion (including
/// its one network await) before the next is read, so there is never more
/// than one lookup in flight. Cancelling a prompt (Esc) returns to the
/// action menu with the state untouched.
async fn interactive() -> anyhow::Result<()> {
    let config = Config::load()?;
    let provider = OpenWeatherProvider::new(config.resolved_api_key().to_owned());
    let mut state = WidgetState::new();

    println!("Weather");

    loop {
        let Some(action) = Select::new("Action:", Action::all().to_vec()).prompt_skippable()?
        else {
            continue;
        };

        match action {
            Action::Search => {
                let Some(query) = Text::new("Search location...")
                    .with_initial_value(&state.current_query)
                    .prompt_skippable()?
                else {
                    continue;
                };
                state.current_query = query;
                state.search(&provider).await;
            }
            Action::InertInput => {}
            Action::ChooseSortKey => {
                let Some(choice) =
                    Select::new("Sort by:", sort_key_options()).prompt_skippable()?
                else {
                    continue;
                };
                state.select_sort_key(sort_key_for_choice(choice));
            }
            Action::Sort => state.sort(),
            Action::Quit => break,
        }

        print!("{}", render(&state));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_menu_matches_the_widget_surface() {
        let labels: Vec<&str> = Action::all().iter().map(Action::label).collect();
        assert_eq!(
            labels,
            vec!["Search", "Enter location...", "Sort by", "Sorted Results", "Quit"]
        );
    }

    #[test]
    fn sort_selector_lists_placeholder_then_seven_keys() {
        let options = sort_key_options();
        assert_eq!(options[0], SORT_PLACEHOLDER);
        assert_eq!(options.len(), 1 + SortKey::all().len());
    }

    #[test]
    fn placeholder_choice_maps_to_unselected() {
        assert_eq!(sort_key_for_choice(SORT_PLACEHOLDER), None);
        assert_eq!(sort_key_for_choice("Temperature"), Some(SortKey::TemperatureC));
    }
}
