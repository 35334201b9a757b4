use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::config;

/// Handle to the catalog API: an owned HTTP client plus the static client
/// credential attached to every request as a query parameter.
///
/// Constructed once per run and passed by reference into every component
/// that performs network calls, so tests can substitute a client pointed at
/// a local mock server.
pub struct ApiClient {
    http: Client,
    base_url: String,
    client_id: String,
}

impl ApiClient {
    /// Builds a client from the process configuration.
    ///
    /// # Panics
    ///
    /// Panics if `SOUNDCLOUD_CLIENT_ID` is not set, see [`crate::config`].
    pub fn new() -> Self {
        Self::from_parts(config::soundcloud_apiurl(), config::soundcloud_client_id())
    }

    /// Builds a client against an explicit base URL and client id.
    pub fn from_parts(base_url: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            client_id: client_id.into(),
        }
    }

    /// Absolute URL for an API endpoint path like `users/17/tracks`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{uri}/{path}", uri = self.base_url, path = path)
    }

    /// Performs a GET request against `url` and deserializes the JSON body.
    ///
    /// `url` may be an endpoint URL or a continuation cursor returned by a
    /// previous page; the client id is attached either way. Implements
    /// automatic retry for 502 Bad Gateway responses with a 10-second delay
    /// between attempts. Other errors are propagated immediately.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, reqwest::Error> {
        loop {
            let response = self
                .http
                .get(url)
                .query(params)
                .query(&[("client_id", self.client_id.as_str())])
                .send()
                .await;

            let response = match response {
                Ok(resp) => match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err); // propagate other errors
                    }
                },
                Err(err) => {
                    return Err(err);
                } // network or reqwest error
            };

            return response.json::<T>().await;
        }
    }

    /// Fetches a URL as raw bytes (audio payloads, artwork).
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
        let response = self
            .http
            .get(url)
            .query(&[("client_id", self.client_id.as_str())])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }
}
