use std::path::Path;

use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::auth::Authenticator;
use crate::types::{ApiRequest, ApiResponse};

/// Pseudo-status for transport-level failures. Callers decide success by
/// inspecting the status code alone, so faults must land there too.
const TRANSPORT_FAULT_STATUS: u16 = 599;

pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(authenticator: &Authenticator) -> Result<Self> {
        Ok(Self {
            http: authenticator.authorize()?,
        })
    }

    /// Performs the single request/response exchange. Never returns an
    /// error: a failure to reach the service (or to read its reply) is
    /// folded into a synthetic non-2xx response carrying the error text.
    pub async fn send(&self, request: &ApiRequest, verbose: bool) -> ApiResponse {
        if verbose {
            println!("Request URL: {}", request.url);
            println!("Request method: {}", request.method);
            if let Some(body) = &request.body {
                println!("Request body: {body}");
            }
        }

        let mut builder = self
            .http
            .request(request.method.clone(), &request.url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = match builder.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.bytes().await {
                    Ok(bytes) => ApiResponse {
                        status,
                        body: bytes.to_vec(),
                    },
                    Err(err) => ApiResponse {
                        status: TRANSPORT_FAULT_STATUS,
                        body: err.to_string().into_bytes(),
                    },
                }
            }
            Err(err) => ApiResponse {
                status: TRANSPORT_FAULT_STATUS,
                body: err.to_string().into_bytes(),
            },
        };

        if verbose {
            println!("Response status: {}", response.status);
            println!("Response body: {}", String::from_utf8_lossy(&response.body));
        }

        response
    }
}

/// Best-effort decoration of the response: persist the raw body if it is
/// valid JSON and a capture path was given, and print the build URL if the
/// service included one. Any failure here is skipped silently; the exit
/// status is decided by the HTTP status alone.
pub fn report(response: &ApiResponse, response_json: Option<&Path>) {
    let Ok(value) = serde_json::from_slice::<Value>(&response.body) else {
        return;
    };

    if let Some(path) = response_json {
        let _ = std::fs::write(path, &response.body);
    }

    if let Some(url) = value.get("build").and_then(|build| build.get("url")) {
        match url {
            Value::String(url) => println!("Build: {url}"),
            other => println!("Build: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn writes_response_file_for_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        report(&response(200, r#"{"ok":true}"#), Some(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"ok":true}"#);
    }

    #[test]
    fn skips_response_file_for_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        report(&response(200, "not json"), Some(&path));
        assert!(!path.exists());
    }

    #[test]
    fn writes_response_file_even_without_build_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        report(&response(404, r#"{"error":{"reason":"gone"}}"#), Some(&path));
        assert!(path.exists());
    }

    #[test]
    fn only_exact_200_counts_as_ok() {
        assert!(response(200, "").is_ok());
        assert!(!response(201, "").is_ok());
        assert!(!response(404, "").is_ok());
        assert!(!response(TRANSPORT_FAULT_STATUS, "").is_ok());
    }
}
