//! # Client Boundary
//!
//! The object model never speaks HTTP itself. It goes through the
//! [`Client`] trait, which performs one authenticated, blocking round trip
//! and hands back decoded JSON ready for field mapping.
//!
//! ## Implementations
//!
//! - [`http::HttpClient`]: Production implementation over `reqwest`'s
//!   blocking client.
//! - [`mock::MockClient`]: Canned responses and a request log, for testing
//!   the model without a network.
//!
//! ## Failure Semantics
//!
//! Non-success statuses, network faults and undecodable bodies all surface
//! as [`TrellisError::Transport`](crate::error::TrellisError::Transport).
//! Nothing here retries; callers see the failure as the transport reported it.

use serde_json::Value;

use crate::error::Result;

pub mod http;
pub mod mock;

/// Abstract interface for talking to the remote service.
///
/// Paths are relative to the API root and start with `/`
/// (e.g. `/members/ada/boards`).
pub trait Client {
    /// GET `path` with the given query parameters.
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value>;

    /// PUT `body` (a JSON object) to `path`.
    fn put(&self, path: &str, body: &Value) -> Result<Value>;
}

impl<C: Client + ?Sized> Client for &C {
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        (**self).get(path, query)
    }

    fn put(&self, path: &str, body: &Value) -> Result<Value> {
        (**self).put(path, body)
    }
}
