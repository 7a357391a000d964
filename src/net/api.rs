//! REST operations against the remote task collection store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the store is only
//! reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses carrying a usable body surface as
//! `ApiError::Rejected` with the body text (the server writes validation
//! messages there); everything else surfaces as `ApiError::Network` with a
//! per-operation fallback message. No retries, no timeout, no caching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{NewTask, Task};

/// Base address used when `KANBAN_API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Base address of the task store, from the build environment.
pub fn api_base() -> &'static str {
    option_env!("KANBAN_API_URL").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn tasks_endpoint(base: &str) -> String {
    format!("{}/tasks", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn task_endpoint(base: &str, id: i64) -> String {
    format!("{}/tasks/{id}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
const FETCH_FALLBACK: &str = "failed to fetch tasks";
#[cfg(any(test, feature = "hydrate"))]
const CREATE_FALLBACK: &str = "failed to create";
#[cfg(any(test, feature = "hydrate"))]
const UPDATE_FALLBACK: &str = "failed to update";
#[cfg(any(test, feature = "hydrate"))]
const DELETE_FALLBACK: &str = "failed to delete";

/// Classify a non-success response: a non-blank body is a server-side
/// rejection message; an empty body degrades to a generic network failure.
#[cfg(any(test, feature = "hydrate"))]
fn failure_from_body(body: &str, fallback: &str) -> ApiError {
    if body.trim().is_empty() {
        ApiError::Network(fallback.to_owned())
    } else {
        ApiError::Rejected(body.to_owned())
    }
}

#[cfg(feature = "hydrate")]
async fn failure(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    let body = resp.text().await.unwrap_or_default();
    failure_from_body(&body, fallback)
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

/// Fetch the full task collection via `GET /tasks`.
///
/// # Errors
///
/// Any transport failure or non-success status yields a generic
/// `ApiError::Network`; the list endpoint writes no error bodies worth
/// surfacing.
pub async fn fetch_tasks() -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = tasks_endpoint(api_base());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Network(FETCH_FALLBACK.to_owned()));
        }
        resp.json::<Vec<Task>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_stub())
    }
}

/// Create a task via `POST /tasks`; the server assigns the id and defaults
/// the status to `"todo"` when the payload omits it.
///
/// # Errors
///
/// `ApiError::Rejected` with the response body on validation failure,
/// `ApiError::Network` otherwise.
pub async fn create_task(payload: &NewTask) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = tasks_endpoint(api_base());
        let resp = gloo_net::http::Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, CREATE_FALLBACK).await);
        }
        resp.json::<Task>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(server_stub())
    }
}

/// Replace a task wholesale via `PUT /tasks/{id}`.
///
/// # Errors
///
/// Same classification as [`create_task`].
pub async fn update_task(id: i64, task: &Task) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = task_endpoint(api_base(), id);
        let resp = gloo_net::http::Request::put(&url)
            .json(task)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(failure(resp, UPDATE_FALLBACK).await);
        }
        resp.json::<Task>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, task);
        Err(server_stub())
    }
}

/// Delete a task via `DELETE /tasks/{id}`.
///
/// Both a generic success status and 204 No Content count as success.
///
/// # Errors
///
/// Same classification as [`create_task`].
pub async fn delete_task(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = task_endpoint(api_base(), id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() && resp.status() != 204 {
            return Err(failure(resp, DELETE_FALLBACK).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(server_stub())
    }
}
