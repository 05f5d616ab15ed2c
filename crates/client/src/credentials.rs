//! Connection credentials for a HelixDB server.
//!
//! Mirrors the JSON shape the host persists for this credential type:
//! `{ host, port, authType, username, password, bearerToken }`.  The
//! auth-mode-specific fields live inside the [`Auth`] enum so an
//! inconsistent combination (say, a bearer token alongside
//! `authType: "basic"`) cannot be represented after deserialization.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    6969
}

/// Authentication mode plus its mode-specific secret fields.
///
/// `basic` carries no header of its own here — the HTTP client library
/// applies it on the request (see `HelixClient::apply_auth`).  Only
/// `bearer` results in an explicit `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "authType", rename_all = "lowercase")]
pub enum Auth {
    /// No authentication.
    #[default]
    None,
    /// Username & password, applied by the HTTP client library.
    Basic { username: String, password: String },
    /// Bearer token, injected as `Authorization: Bearer <token>`.
    Bearer {
        #[serde(rename = "bearerToken")]
        token: String,
    },
}

/// A resolved credential set for one HelixDB server.
///
/// Resolved once per execution batch by the host and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelixCredentials {
    /// Hostname or IP address of the server.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Authentication mode and its secrets.
    #[serde(flatten)]
    pub auth: Auth,
}

impl Default for HelixCredentials {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            auth: Auth::None,
        }
    }
}

impl HelixCredentials {
    /// Base URL for every outbound request: `scheme://host:port`.
    ///
    /// The scheme defaults to `http`; a host stored with an explicit
    /// scheme (`https://db.internal`) keeps it.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.contains("://") {
            format!("{}:{}", host, self.port)
        } else {
            format!("http://{}:{}", host, self.port)
        }
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_stored_shape_with_no_auth() {
        let creds: HelixCredentials = serde_json::from_value(json!({
            "host": "db.internal",
            "port": 7070,
            "authType": "none"
        }))
        .expect("valid credential JSON");

        assert_eq!(creds.host, "db.internal");
        assert_eq!(creds.port, 7070);
        assert_eq!(creds.auth, Auth::None);
    }

    #[test]
    fn missing_host_and_port_fall_back_to_defaults() {
        let creds: HelixCredentials =
            serde_json::from_value(json!({ "authType": "none" })).expect("valid credential JSON");

        assert_eq!(creds.host, "localhost");
        assert_eq!(creds.port, 6969);
    }

    #[test]
    fn basic_auth_carries_username_and_password() {
        let creds: HelixCredentials = serde_json::from_value(json!({
            "host": "localhost",
            "port": 6969,
            "authType": "basic",
            "username": "admin",
            "password": "hunter2"
        }))
        .expect("valid credential JSON");

        assert_eq!(
            creds.auth,
            Auth::Basic {
                username: "admin".into(),
                password: "hunter2".into()
            }
        );
    }

    #[test]
    fn bearer_auth_carries_the_token_field() {
        let creds: HelixCredentials = serde_json::from_value(json!({
            "authType": "bearer",
            "bearerToken": "tok123"
        }))
        .expect("valid credential JSON");

        assert_eq!(creds.auth, Auth::Bearer { token: "tok123".into() });
    }

    #[test]
    fn serialized_shape_keeps_the_auth_type_tag() {
        let creds = HelixCredentials {
            host: "localhost".into(),
            port: 6969,
            auth: Auth::Bearer { token: "tok123".into() },
        };

        let value = serde_json::to_value(&creds).expect("serializable");
        assert_eq!(value["authType"], "bearer");
        assert_eq!(value["bearerToken"], "tok123");
    }

    #[test]
    fn base_url_defaults_to_http() {
        let creds = HelixCredentials::default();
        assert_eq!(creds.base_url(), "http://localhost:6969");
    }

    #[test]
    fn base_url_keeps_an_explicit_scheme() {
        let creds = HelixCredentials {
            host: "https://db.internal".into(),
            port: 443,
            auth: Auth::None,
        };
        assert_eq!(creds.base_url(), "https://db.internal:443");
    }
}
