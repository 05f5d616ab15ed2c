//! `client` crate — HelixDB connection credentials and the HTTP query client.
//!
//! The dispatcher in the `node` crate talks to the server exclusively
//! through the [`QueryClient`] trait defined here, so tests can swap the
//! real HTTP client for [`mock::MockQueryClient`].

pub mod credentials;
pub mod error;
pub mod http;
pub mod mock;

pub use credentials::{Auth, HelixCredentials};
pub use error::ClientError;
pub use http::{HelixClient, QueryClient};
