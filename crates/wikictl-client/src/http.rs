//! HTTP client for the wiki resource endpoint

use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use wikictl_api::requests::{DeleteWikiRequest, SaveWikiRequest};

use crate::error::{ClientError, Result};

/// HTTP client for communicating with the wiki resource endpoint
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a new HTTP client
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    ///
    /// # Example
    /// ```no_run
    /// use wikictl_client::HttpClient;
    ///
    /// let client = HttpClient::new("http://localhost:3000")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Create a new HTTP client with custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn with_client(base_url: impl AsRef<str>, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self { client, base_url })
    }

    /// Build a full URL from a path
    fn url(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(ClientError::Url)
    }

    /// Perform a POST request with JSON body
    async fn post(&self, path: &str, body: impl serde::Serialize) -> Result<Value> {
        let url = self.url(path)?;
        debug!(%url, "POST");
        let response = self.client.post(url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json().await?)
    }

    /// Perform a PATCH request with JSON body
    async fn patch(&self, path: &str, body: impl serde::Serialize) -> Result<Value> {
        let url = self.url(path)?;
        debug!(%url, "PATCH");
        let response = self.client.patch(url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json().await?)
    }

    /// Perform a DELETE request with JSON body
    ///
    /// The endpoint expects the credentials in the request body, so unlike a
    /// plain DELETE this one carries JSON.
    async fn delete(&self, path: &str, body: impl serde::Serialize) -> Result<Value> {
        let url = self.url(path)?;
        debug!(%url, "DELETE");
        let response = self.client.delete(url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json().await?)
    }

    // Wiki endpoints

    /// Create a new wiki
    ///
    /// Returns the raw response body; shape validation is the caller's
    /// responsibility (see `wikictl_api::responses::ActionResponse`).
    ///
    /// # Errors
    /// Returns an error if the request fails or the endpoint returns a
    /// non-success status.
    ///
    /// # Example
    /// ```no_run
    /// # use wikictl_client::HttpClient;
    /// # use wikictl_api::requests::SaveWikiRequest;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = HttpClient::new("http://localhost:3000")?;
    /// let body = client.create_wiki(&SaveWikiRequest {
    ///     username: "alice".into(),
    ///     content: "# My wiki".into(),
    ///     password: "secret".into(),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_wiki(&self, request: &SaveWikiRequest) -> Result<Value> {
        self.post("/wikis", request).await
    }

    /// Update an existing wiki
    ///
    /// # Errors
    /// Returns an error if the request fails or the endpoint returns a
    /// non-success status.
    pub async fn update_wiki(&self, request: &SaveWikiRequest) -> Result<Value> {
        self.patch("/wikis", request).await
    }

    /// Delete a wiki
    ///
    /// # Errors
    /// Returns an error if the request fails or the endpoint returns a
    /// non-success status.
    ///
    /// # Example
    /// ```no_run
    /// # use wikictl_client::HttpClient;
    /// # use wikictl_api::requests::DeleteWikiRequest;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = HttpClient::new("http://localhost:3000")?;
    /// client.delete_wiki(&DeleteWikiRequest {
    ///     username: "alice".into(),
    ///     password: "secret".into(),
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn delete_wiki(&self, request: &DeleteWikiRequest) -> Result<Value> {
        self.delete("/wikis", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new("http://localhost:3000");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = HttpClient::new("not a url");
        assert!(client.is_err());
    }

    #[test]
    fn test_url_building() {
        let client = HttpClient::new("http://localhost:3000").unwrap();
        let url = client.url("/wikis").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/wikis");
    }

    #[test]
    fn test_url_building_with_base_path() {
        let client = HttpClient::new("http://localhost:3000/api/").unwrap();
        let url = client.url("/wikis").unwrap();
        // Absolute paths replace any base path segment.
        assert_eq!(url.as_str(), "http://localhost:3000/wikis");
    }
}
