use crate::{Config, LookupError, WeatherSnapshot, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current weather for a city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, LookupError>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current_weather(&self, city: &str) -> Result<WeatherSnapshot, LookupError> {
        (**self).current_weather(city).await
    }
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `skycast configure` or set {}.",
            crate::config::API_KEY_ENV
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::with_endpoint(
        config.endpoint.clone(),
        api_key.to_owned(),
    )))
}
