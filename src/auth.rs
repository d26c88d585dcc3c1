use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

/// Environment variable holding an already-minted OAuth2 access token.
/// Populated by an external credential helper; this tool never mints,
/// stores, or refreshes tokens itself.
pub const TOKEN_ENV_VAR: &str = "BUILDBUCKET_ACCESS_TOKEN";

/// Produces an HTTP client authorized for the Buildbucket service.
pub struct Authenticator {
    token: Option<String>,
}

impl Authenticator {
    /// Picks up whatever credential the external helper has left in the
    /// environment. No token means an unauthorized (but usable) client.
    pub fn from_env() -> Self {
        let token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty());
        Self { token }
    }

    #[cfg(test)]
    fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    /// Builds a client that attaches the bearer token to every request.
    pub fn authorize(&self) -> Result<reqwest::Client> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .context("access token is not a valid header value")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to construct HTTP client")
    }
}
