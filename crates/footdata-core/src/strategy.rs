//! The data retrieval strategy trait.
//!
//! A [`DataRetrievalStrategy`] is one of the two interchangeable data-access
//! implementations selected by the current mode: live fetch against the
//! external API, or cache-only reads. Both expose the same four operations so
//! the façade can dispatch without caring which one is active.

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{Country, League, Standing, Team},
};

/// Mode-selectable data access for the four football collections.
///
/// Implementations are long-lived: the façade constructs one of each and
/// selects between them per call, never per request construction.
#[async_trait]
pub trait DataRetrievalStrategy: Send + Sync {
    /// Returns the catalog of all available countries.
    async fn countries(&self) -> Result<Vec<Country>>;

    /// Returns the leagues hosted by a country.
    async fn leagues_by_country(&self, country_id: &str) -> Result<Vec<League>>;

    /// Returns the teams playing in a league.
    async fn teams_by_league(&self, league_id: &str) -> Result<Vec<Team>>;

    /// Returns the current standings of a league.
    async fn standings(&self, league_id: &str) -> Result<Vec<Standing>>;
}
