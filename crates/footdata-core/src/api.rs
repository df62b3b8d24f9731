//! External API collaborator trait.
//!
//! [`FootballApi`] is the seam between the retrieval strategies and whatever
//! HTTP client talks to the external football data source. Implementations
//! fetch fresh data on every call; they never consult the cache.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    types::{Country, League, Standing, Team},
};

/// Client for an external football data API.
///
/// Every method performs a live fetch and returns the parsed result. On
/// transport failure implementations return
/// [`SourceUnavailable`](crate::FootballError::SourceUnavailable) carrying
/// the attempted identifier; on a malformed response they return
/// [`Parse`](crate::FootballError::Parse).
#[async_trait]
pub trait FootballApi: Send + Sync + Debug {
    /// Fetches the catalog of all available countries.
    async fn fetch_countries(&self) -> Result<Vec<Country>>;

    /// Fetches the leagues hosted by a country.
    async fn fetch_leagues(&self, country_id: &str) -> Result<Vec<League>>;

    /// Fetches the teams playing in a league.
    async fn fetch_teams(&self, league_id: &str) -> Result<Vec<Team>>;

    /// Fetches the current standings of a league.
    async fn fetch_standings(&self, league_id: &str) -> Result<Vec<Standing>>;
}
