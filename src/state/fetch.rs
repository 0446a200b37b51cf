//! Loading state for API-backed views, and stale-response detection.
//!
//! DESIGN
//! ======
//! A detail view issues one request per identifier. When the identifier
//! changes before the previous response arrives, the old response must not
//! overwrite the new view; `RequestTracker` hands out tickets and only the
//! latest ticket is accepted.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;

/// What a data-backed view should show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    NotFound,
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) if err.is_not_found() => Self::NotFound,
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Proof of which request a response belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    key: String,
}

impl Ticket {
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Tracks the most recent request for a view.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    generation: u64,
    key: Option<String>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `key`, superseding any request still in flight.
    pub fn begin(&mut self, key: impl Into<String>) -> Ticket {
        self.generation += 1;
        let key = key.into();
        self.key = Some(key.clone());
        Ticket {
            generation: self.generation,
            key,
        }
    }

    /// Whether a response carrying `ticket` may still be applied.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation && self.key.as_deref() == Some(ticket.key.as_str())
    }
}

/// Run `request` for `key` and store its outcome in `target`, unless a newer
/// request has started on the same tracker by the time it resolves.
pub fn spawn_tracked<T, F>(
    tracker: StoredValue<RequestTracker>,
    target: RwSignal<LoadState<T>>,
    key: impl Into<String>,
    request: F,
) where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let key = key.into();
    let Some(ticket) = tracker.try_update_value(|t| t.begin(key)) else {
        return;
    };
    target.set(LoadState::Loading);
    leptos::task::spawn_local(async move {
        let result = request.await;
        if tracker.try_with_value(|t| t.is_current(&ticket)).unwrap_or(false) {
            target.set(LoadState::from_result(result));
        } else {
            leptos::logging::log!("fetch: dropping stale response for {}", ticket.key());
        }
    });
}
