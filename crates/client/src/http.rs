//! The `QueryClient` trait and its HTTP implementation.
//!
//! HelixDB exposes every query as `POST {base_url}/{name}` with a JSON
//! body; a raw HelixQL query uses the query text itself as the name.
//! The dispatcher only depends on the trait, never on `reqwest` directly.

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::debug;

use crate::credentials::{Auth, HelixCredentials};
use crate::ClientError;

/// The single operation the dispatcher needs from the remote side.
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Issue one query and return the server's JSON response.
    async fn query(&self, endpoint: &str, params: &Value) -> Result<Value, ClientError>;
}

/// HTTP client bound to one server and one credential set.
///
/// Construct one per execution batch; it is read-only after construction.
pub struct HelixClient {
    http: reqwest::Client,
    base_url: String,
    auth: Auth,
}

impl HelixClient {
    /// Create a client from a resolved credential set.
    pub fn new(credentials: &HelixCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: credentials.base_url(),
            auth: credentials.auth.clone(),
        }
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Auth::None => request,
            Auth::Basic { username, password } => request.basic_auth(username, Some(password)),
            Auth::Bearer { token } => request.bearer_auth(token),
        }
    }

    /// Connectivity test: `GET {base_url}/health`.
    ///
    /// Used by the host to validate stored credentials; not part of the
    /// dispatch path.  Returns the response body on success.
    pub async fn health(&self) -> Result<String, ClientError> {
        let url = format!("{}/health", self.base_url);
        debug!(%url, "credential health check");

        let response = self.apply_auth(self.http.get(&url)).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl QueryClient for HelixClient {
    async fn query(&self, endpoint: &str, params: &Value) -> Result<Value, ClientError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "sending query");

        let response = self
            .apply_auth(self.http.post(&url))
            .json(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }
        // Non-JSON bodies are passed through verbatim rather than rejected.
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client_with(auth_json: Value) -> HelixClient {
        let creds: HelixCredentials =
            serde_json::from_value(auth_json).expect("valid credential JSON");
        HelixClient::new(&creds)
    }

    fn built_request(client: &HelixClient) -> reqwest::Request {
        client
            .apply_auth(client.http.get("http://localhost:6969/health"))
            .build()
            .expect("request builds")
    }

    #[test]
    fn bearer_credentials_inject_the_authorization_header() {
        let client = client_with(json!({ "authType": "bearer", "bearerToken": "tok123" }));
        let request = built_request(&client);

        let header = request
            .headers()
            .get("authorization")
            .expect("authorization header present");
        assert_eq!(header, "Bearer tok123");
    }

    #[test]
    fn no_auth_adds_no_authorization_header() {
        let client = client_with(json!({ "authType": "none" }));
        let request = built_request(&client);

        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn basic_credentials_use_http_basic_auth() {
        let client = client_with(json!({
            "authType": "basic",
            "username": "admin",
            "password": "hunter2"
        }));
        let request = built_request(&client);

        let header = request
            .headers()
            .get("authorization")
            .expect("authorization header present");
        assert!(header.to_str().expect("ascii header").starts_with("Basic "));
    }
}
