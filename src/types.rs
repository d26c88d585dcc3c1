use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

/// A fully assembled API call: everything the HTTP layer needs to send it.
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// Response as seen by the rest of the tool. Transport failures are folded
/// into `status` by the client, so this is the only shape callers handle.
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Build parameters for a `put`. The service expects this document
/// JSON-encoded into a string field of the outer body (see [`PutBody`]).
#[derive(Serialize)]
pub struct Parameters {
    pub builder_name: String,
    pub changes: Vec<Value>,
    pub properties: Map<String, Value>,
}

/// Outer body of a `put`. `parameters_json` holds a serialized
/// [`Parameters`] document; the double encoding is what the service
/// requires on the wire, not a local convenience.
#[derive(Serialize)]
pub struct PutBody {
    pub bucket: String,
    pub parameters_json: String,
}
