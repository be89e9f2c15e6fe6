//! Core library for the `skycast` weather lookup.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The lookup state machine and its error taxonomy
//! - The provider abstraction and the OpenWeather client
//! - Presentation mappings and value formatting
//!
//! It is used by `skycast-cli`, but can also back other front ends.

pub mod config;
pub mod display;
pub mod error;
pub mod lookup;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::LookupError;
pub use lookup::{LookupState, RequestStatus, Ticket, WeatherLookup};
pub use model::{Condition, WeatherSnapshot};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
