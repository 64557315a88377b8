use std::cell::RefCell;

use serde_json::Value;

use super::Client;
use crate::error::{Result, TrellisError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
}

/// A request seen by [`MockClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

struct Route {
    method: Method,
    path: String,
    /// `None` matches any query.
    query: Option<Vec<(String, String)>>,
    response: Value,
}

/// In-memory client for testing.
///
/// Uses `RefCell` for interior mutability since the model is
/// single-threaded, so the `Client` trait can keep `&self` methods.
///
/// Routes registered with an exact query win over routes that match any
/// query. Unrouted requests fail with a 404 transport error, the same way
/// the service answers an unknown path.
#[derive(Default)]
pub struct MockClient {
    routes: RefCell<Vec<Route>>,
    requests: RefCell<Vec<RecordedRequest>>,
    failure: RefCell<Option<(Option<u16>, String)>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer GET `path` (any query) with `response`.
    pub fn on_get(&self, path: &str, response: Value) -> &Self {
        self.add_route(Method::Get, path, None, response)
    }

    /// Answer GET `path` with exactly `query` with `response`.
    pub fn on_get_with(&self, path: &str, query: &[(&str, &str)], response: Value) -> &Self {
        self.add_route(Method::Get, path, Some(owned(query)), response)
    }

    /// Answer PUT `path` with `response`.
    pub fn on_put(&self, path: &str, response: Value) -> &Self {
        self.add_route(Method::Put, path, None, response)
    }

    /// Make every following request fail with the given status and message.
    pub fn fail_with(&self, status: Option<u16>, message: &str) {
        *self.failure.borrow_mut() = Some((status, message.to_string()));
    }

    /// Stop simulating failures.
    pub fn recover(&self) {
        *self.failure.borrow_mut() = None;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Number of requests made with `method` to `path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.borrow().last().cloned()
    }

    fn add_route(
        &self,
        method: Method,
        path: &str,
        query: Option<Vec<(String, String)>>,
        response: Value,
    ) -> &Self {
        self.routes.borrow_mut().push(Route {
            method,
            path: path.to_string(),
            query,
            response,
        });
        self
    }

    fn respond(&self, request: RecordedRequest) -> Result<Value> {
        self.requests.borrow_mut().push(request.clone());

        if let Some((status, message)) = self.failure.borrow().clone() {
            return Err(TrellisError::transport(status, message));
        }

        let routes = self.routes.borrow();
        let candidates = || {
            routes
                .iter()
                .filter(|r| r.method == request.method && r.path == request.path)
        };
        candidates()
            .find(|r| r.query.as_ref() == Some(&request.query))
            .or_else(|| candidates().find(|r| r.query.is_none()))
            .map(|r| r.response.clone())
            .ok_or_else(|| {
                TrellisError::transport(Some(404), format!("no route for {}", request.path))
            })
    }
}

impl Client for MockClient {
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        self.respond(RecordedRequest {
            method: Method::Get,
            path: path.to_string(),
            query: owned(query),
            body: None,
        })
    }

    fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.respond(RecordedRequest {
            method: Method::Put,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
    }
}

fn owned(query: &[(&str, &str)]) -> Vec<(String, String)> {
    query
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exact_query_route_wins() {
        let client = MockClient::new();
        client
            .on_get("/members/ada/cards", json!(["any"]))
            .on_get_with("/members/ada/cards", &[("filter", "closed")], json!(["closed"]));

        assert_eq!(
            client
                .get("/members/ada/cards", &[("filter", "closed")])
                .unwrap(),
            json!(["closed"])
        );
        assert_eq!(
            client.get("/members/ada/cards", &[("filter", "open")]).unwrap(),
            json!(["any"])
        );
    }

    #[test]
    fn unrouted_request_is_a_404() {
        let client = MockClient::new();
        let err = client.get("/members/nobody", &[]).unwrap_err();
        assert!(matches!(
            err,
            TrellisError::Transport {
                status: Some(404),
                ..
            }
        ));
    }

    #[test]
    fn records_every_request() {
        let client = MockClient::new();
        client.on_put("/members/ada", json!({}));
        client.put("/members/ada", &json!({"bio": "x"})).unwrap();
        let _ = client.get("/members/ada", &[]);

        assert_eq!(client.request_count(), 2);
        assert_eq!(client.count(Method::Put, "/members/ada"), 1);
        let first = &client.requests()[0];
        assert_eq!(first.body, Some(json!({"bio": "x"})));
    }

    #[test]
    fn simulated_failure_until_recovered() {
        let client = MockClient::new();
        client.on_get("/members/ada", json!({}));
        client.fail_with(Some(429), "rate limited");
        assert!(client.get("/members/ada", &[]).is_err());
        client.recover();
        assert!(client.get("/members/ada", &[]).is_ok());
    }
}
