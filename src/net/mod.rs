//! Network layer for the remote task collection store.
//!
//! DESIGN
//! ======
//! `types` holds the wire DTOs, `error` the typed failure surface, and `api`
//! the four HTTP operations. Each call is a single best-effort attempt; the
//! caller decides how to present failure.

pub mod api;
pub mod error;
pub mod types;
