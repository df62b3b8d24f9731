#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/footdata/footdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! apifootball.com data source.
//!
//! This crate implements the [`FootballApi`] trait for the
//! [apifootball.com](https://apifootball.com/) REST API.
//!
//! # Usage
//!
//! ```rust,ignore
//! use footdata_apifootball::ApiFootballClient;
//! use footdata_core::FootballApi;
//!
//! #[tokio::main]
//! async fn main() -> footdata_core::Result<()> {
//!     let client = ApiFootballClient::new("your_api_key");
//!
//!     let countries = client.fetch_countries().await?;
//!     let leagues = client.fetch_leagues("44").await?;
//!     let standings = client.fetch_standings("148").await?;
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use footdata_core::{Country, FootballApi, FootballError, League, Result, Standing, Team};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Base URL for the apifootball.com API.
const APIFOOTBALL_BASE_URL: &str = "https://apiv3.apifootball.com";

/// Timeout applied to every request. The upstream contract defines none, but
/// an unbounded external call is an availability risk for callers.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the apifootball.com REST API.
///
/// All endpoints are `GET {base}/?action=...&APIkey=...` and return a JSON
/// array of records, or a JSON object describing an error.
#[derive(Clone)]
pub struct ApiFootballClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for ApiFootballClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiFootballClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl ApiFootballClient {
    /// Create a new client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key)
    }

    /// Create a new client with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: APIFOOTBALL_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the base URL, e.g. to point at a local test server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a request URL for an action, with an optional query parameter.
    fn url(&self, action: &str, param: Option<(&str, &str)>) -> String {
        match param {
            Some((name, value)) => format!(
                "{}/?action={action}&{name}={value}&APIkey={}",
                self.base_url, self.api_key
            ),
            None => format!("{}/?action={action}&APIkey={}", self.base_url, self.api_key),
        }
    }

    /// Make a GET request and parse the JSON array response.
    ///
    /// `id` is the identifier being fetched; it is carried in
    /// [`FootballError::SourceUnavailable`] so callers can tell which lookup
    /// hit an unreachable source.
    async fn get<T: DeserializeOwned>(
        &self,
        action: &str,
        param: Option<(&str, &str)>,
        id: &str,
    ) -> Result<Vec<T>> {
        let url = self.url(action, param);
        debug!(action, id, "apifootball request");

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| FootballError::SourceUnavailable {
                id: id.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FootballError::SourceUnavailable {
                id: id.to_string(),
                reason: format!("HTTP {status}: {text}"),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FootballError::SourceUnavailable {
                id: id.to_string(),
                reason: e.to_string(),
            })?;

        parse_body(&text, id)
    }
}

/// Interpret a response body as a JSON array of records.
///
/// apifootball reports errors as a JSON object (`{"error":404,...}`) where a
/// successful response is an array, so an object body is a source failure,
/// not a parse failure.
fn parse_body<T: DeserializeOwned>(text: &str, id: &str) -> Result<Vec<T>> {
    if text.trim_start().starts_with('{') {
        return Err(FootballError::SourceUnavailable {
            id: id.to_string(),
            reason: text.to_string(),
        });
    }

    serde_json::from_str(text).map_err(|e| FootballError::Parse(e.to_string()))
}

#[async_trait]
impl FootballApi for ApiFootballClient {
    async fn fetch_countries(&self) -> Result<Vec<Country>> {
        self.get("get_countries", None, "countries").await
    }

    async fn fetch_leagues(&self, country_id: &str) -> Result<Vec<League>> {
        self.get("get_leagues", Some(("country_id", country_id)), country_id)
            .await
    }

    async fn fetch_teams(&self, league_id: &str) -> Result<Vec<Team>> {
        self.get("get_teams", Some(("league_id", league_id)), league_id)
            .await
    }

    async fn fetch_standings(&self, league_id: &str) -> Result<Vec<Standing>> {
        self.get("get_standings", Some(("league_id", league_id)), league_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_without_parameter() {
        let client = ApiFootballClient::new("secret");
        assert_eq!(
            client.url("get_countries", None),
            "https://apiv3.apifootball.com/?action=get_countries&APIkey=secret"
        );
    }

    #[test]
    fn url_with_parameter_and_custom_base() {
        let client = ApiFootballClient::new("secret").with_base_url("http://localhost:9000");
        assert_eq!(
            client.url("get_leagues", Some(("country_id", "44"))),
            "http://localhost:9000/?action=get_leagues&country_id=44&APIkey=secret"
        );
    }

    #[test]
    fn debug_redacts_the_api_key() {
        let client = ApiFootballClient::new("secret");
        let debug = format!("{client:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn error_object_body_maps_to_source_unavailable() {
        let body = r#"{"error":404,"message":"No league found (please check your plan)!!"}"#;
        let err = parse_body::<League>(body, "148").unwrap_err();
        match err {
            FootballError::SourceUnavailable { id, reason } => {
                assert_eq!(id, "148");
                assert!(reason.contains("No league found"));
            }
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_maps_to_parse_error() {
        let err = parse_body::<Country>(r#"[{"country_id":"#, "countries").unwrap_err();
        assert!(matches!(err, FootballError::Parse(_)));
    }

    #[test]
    fn parses_a_countries_response() {
        let json = r#"[
            {"country_id":"44","country_name":"England","country_logo":"https://apiv3.apifootball.com/badges/logo_country/44_england.png"},
            {"country_id":"6","country_name":"Spain","country_logo":""}
        ]"#;
        let countries: Vec<Country> = parse_body(json, "countries").unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[1].country_name, "Spain");
    }
}
