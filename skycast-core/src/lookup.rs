//! The lookup state container and its transitions.
//!
//! [`LookupState`] holds the query, the request status and the last
//! snapshot. It only changes through [`LookupState::begin`],
//! [`LookupState::complete`] and [`LookupState::set_query`].
//! [`WeatherLookup`] pairs a state with a provider and drives one
//! request per submit.
//!
//! Every accepted submit gets a sequence number. Only the completion
//! carrying the latest number is applied; an older request that resolves
//! late is dropped.

use tracing::{debug, info};

use crate::{LookupError, WeatherSnapshot, provider::WeatherProvider};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed(LookupError),
}

/// Handle for one accepted submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    city: String,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The trimmed city name to send.
    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Debug, Clone, Default)]
pub struct LookupState {
    query: String,
    status: RequestStatus,
    snapshot: Option<WeatherSnapshot>,
    latest_seq: u64,
}

impl LookupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn error(&self) -> Option<&LookupError> {
        match &self.status {
            RequestStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Validate `query` and, if accepted, move to `Loading`.
    ///
    /// A blank query fails with `EmptyInput` and leaves the snapshot and
    /// any in-flight request untouched.
    pub fn begin(&mut self, query: &str) -> Result<Ticket, LookupError> {
        let city = query.trim();
        if city.is_empty() {
            self.status = RequestStatus::Failed(LookupError::EmptyInput);
            return Err(LookupError::EmptyInput);
        }

        self.latest_seq += 1;
        self.status = RequestStatus::Loading;

        debug!(seq = self.latest_seq, city, "lookup started");
        Ok(Ticket { seq: self.latest_seq, city: city.to_string() })
    }

    /// Apply the outcome of `ticket`'s request. Returns `false`, changing
    /// nothing, when a newer request has been issued since.
    pub fn complete(
        &mut self,
        ticket: &Ticket,
        outcome: Result<WeatherSnapshot, LookupError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            debug!(seq = ticket.seq, latest = self.latest_seq, "discarding stale response");
            return false;
        }

        match outcome {
            Ok(snapshot) => {
                info!(seq = ticket.seq, city = %ticket.city, "lookup succeeded");
                self.snapshot = Some(snapshot);
                self.status = RequestStatus::Success;
            }
            Err(err) => {
                info!(seq = ticket.seq, city = %ticket.city, error = ?err, "lookup failed");
                self.snapshot = None;
                self.status = RequestStatus::Failed(err);
            }
        }

        true
    }
}

/// A lookup state driven by a provider.
#[derive(Debug)]
pub struct WeatherLookup<P> {
    provider: P,
    state: LookupState,
}

impl<P: WeatherProvider> WeatherLookup<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, state: LookupState::new() }
    }

    /// Build the lookup and immediately submit `default_city`, so there is
    /// something to show on first render.
    pub async fn start(provider: P, default_city: &str) -> Self {
        let mut lookup = Self::new(provider);
        // The outcome is recorded in the state.
        let _ = lookup.submit(default_city).await;
        lookup
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.set_query(text);
    }

    /// Validate, fetch and record the outcome of one lookup.
    pub async fn submit(&mut self, query: &str) -> Result<WeatherSnapshot, LookupError> {
        let ticket = self.state.begin(query)?;
        let outcome = self.provider.current_weather(ticket.city()).await;
        self.state.complete(&ticket, outcome.clone());
        outcome
    }

    /// Submit whatever the query slot currently holds.
    pub async fn submit_current(&mut self) -> Result<WeatherSnapshot, LookupError> {
        let query = self.state.query().to_string();
        self.submit(&query).await
    }
}
