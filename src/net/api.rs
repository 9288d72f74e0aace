//! REST fetch helpers and the dashboard aggregator.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`, with the three
//! dashboard resources fetched in parallel and joined fail-fast.
//! Native build: stubs returning `ApiError::Transport`, so the grouping and
//! state logic compiles and tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result` instead of panicking; the page-level load
//! effect owns the single catch point (log and keep the empty state).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{Contact, Deal, Task};
use crate::config;

/// Failure modes of a dashboard fetch.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Http { status: u16 },
    /// The request never completed (network/connection failure).
    #[error("transport error: {0}")]
    Transport(String),
    /// The body was not the JSON shape we expected.
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Raw fetch results for one page load, before grouping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub tasks: Vec<Task>,
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
}

/// GET a JSON collection from `{base}{path}`.
///
/// A JSON `null` body counts as an empty collection; anything else that
/// fails to decode is an `ApiError::Decode`.
async fn fetch_list<T: DeserializeOwned>(base: &str, path: &str) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = config::endpoint(base, path);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Http { status: resp.status() });
        }
        let body: Option<Vec<T>> = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.unwrap_or_default())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, path);
        Err(ApiError::Transport(
            "not available outside the browser".to_owned(),
        ))
    }
}

/// Fetch all tasks from `GET {base}/api/tasks`.
pub async fn fetch_tasks(base: &str) -> Result<Vec<Task>, ApiError> {
    fetch_list(base, "/api/tasks").await
}

/// Fetch all contacts from `GET {base}/api/contacts`.
pub async fn fetch_contacts(base: &str) -> Result<Vec<Contact>, ApiError> {
    fetch_list(base, "/api/contacts").await
}

/// Fetch all deals from `GET {base}/api/deals`.
pub async fn fetch_deals(base: &str) -> Result<Vec<Deal>, ApiError> {
    fetch_list(base, "/api/deals").await
}

/// Join the three resource futures with fail-fast, all-or-nothing
/// semantics: the first failure aborts the whole load and no partial
/// snapshot is ever produced.
async fn join_dashboard<T, C, D>(
    tasks: T,
    contacts: C,
    deals: D,
) -> Result<DashboardSnapshot, ApiError>
where
    T: Future<Output = Result<Vec<Task>, ApiError>>,
    C: Future<Output = Result<Vec<Contact>, ApiError>>,
    D: Future<Output = Result<Vec<Deal>, ApiError>>,
{
    let (tasks, contacts, deals) = futures::try_join!(tasks, contacts, deals)?;
    Ok(DashboardSnapshot {
        tasks,
        contacts,
        deals,
    })
}

/// Fetch the three dashboard resources concurrently.
///
/// # Errors
///
/// Returns the first [`ApiError`] any of the three requests hits; on any
/// failure no snapshot is produced at all.
pub async fn fetch_dashboard(base: &str) -> Result<DashboardSnapshot, ApiError> {
    join_dashboard(fetch_tasks(base), fetch_contacts(base), fetch_deals(base)).await
}
