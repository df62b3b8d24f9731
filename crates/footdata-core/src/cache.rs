//! Cache trait for storing fetched football data.
//!
//! This module defines the [`FootballCache`] trait, a key-value store over
//! four independent collections (countries, leagues, teams, standings), plus
//! the key normalization helpers every implementation must use so that a
//! write and a later read under differently-cased identifiers resolve to the
//! same entry.

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{Country, League, Standing, Team},
};

/// Key under which the country catalog is stored.
///
/// Countries are a singleton collection: there is exactly one entry.
pub const COUNTRIES_KEY: &str = "countries";

/// Builds a normalized cache key from a collection prefix and an identifier.
///
/// Components are joined with `-` and the whole key is lower-cased, so
/// lookups are case-insensitive: `collection_key("teams", "123")` and
/// `collection_key("TEAMS", "123")` produce the same key.
#[must_use]
pub fn collection_key(prefix: &str, id: &str) -> String {
    format!("{prefix}-{id}").to_lowercase()
}

/// Trait for caching fetched football data.
///
/// Implementations must be safe for concurrent reads and writes. A `put`
/// replaces any prior entry for the same key wholesale; there is no merging.
/// `get` distinguishes a missing key (`Ok(None)`) from a cached empty result
/// (`Ok(Some(vec![]))`).
#[async_trait]
pub trait FootballCache: Send + Sync {
    /// Retrieves the cached country catalog.
    async fn get_countries(&self) -> Result<Option<Vec<Country>>>;

    /// Stores the country catalog, replacing any prior entry.
    async fn put_countries(&self, countries: &[Country]) -> Result<()>;

    /// Retrieves cached leagues for a country.
    async fn get_leagues(&self, country_id: &str) -> Result<Option<Vec<League>>>;

    /// Stores leagues for a country, replacing any prior entry.
    async fn put_leagues(&self, country_id: &str, leagues: &[League]) -> Result<()>;

    /// Retrieves cached teams for a league.
    async fn get_teams(&self, league_id: &str) -> Result<Option<Vec<Team>>>;

    /// Stores teams for a league, replacing any prior entry.
    async fn put_teams(&self, league_id: &str, teams: &[Team]) -> Result<()>;

    /// Retrieves cached standings for a league.
    async fn get_standings(&self, league_id: &str) -> Result<Option<Vec<Standing>>>;

    /// Stores standings for a league, replacing any prior entry.
    async fn put_standings(&self, league_id: &str, standings: &[Standing]) -> Result<()>;

    /// Clears all cached data.
    async fn clear(&self) -> Result<()>;
}
