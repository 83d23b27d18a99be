//! wikictl-client: HTTP client for the wiki resource endpoint
//!
//! Thin reqwest wrapper over the three wiki operations. Responses are
//! returned as raw JSON values; the endpoint's loose shape contract is
//! validated downstream with `wikictl_api::responses::ActionResponse`.
//!
//! # Example
//!
//! ```no_run
//! use wikictl_client::HttpClient;
//! use wikictl_api::requests::SaveWikiRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new("http://localhost:3000")?;
//!
//! let body = client.create_wiki(&SaveWikiRequest {
//!     username: "alice".into(),
//!     content: "# My wiki".into(),
//!     password: "secret".into(),
//! }).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;

pub use error::{ClientError, Result};
pub use http::HttpClient;
