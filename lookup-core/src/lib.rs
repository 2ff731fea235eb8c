//! Core library for the weather lookup CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider
//! - The lookup widget: its state, search/sort operations, and renderer
//!
//! It is used by `lookup-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod render;
pub mod sort;
pub mod widget;

pub use config::Config;
pub use error::WidgetError;
pub use model::WeatherRecord;
pub use provider::WeatherProvider;
pub use render::render;
pub use sort::SortKey;
pub use widget::WidgetState;
