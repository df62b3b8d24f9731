//! The two retrieval strategies and the selector that picks between them.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use footdata_core::{
    Country, DataRetrievalStrategy, FootballApi, FootballCache, League, Result, Standing, Team,
};

/// Live-fetch strategy: every call fetches fresh data from the external API.
///
/// The countries catalog is the one deliberately lenient path: a failed fetch
/// degrades to an empty list instead of an error, because catalog data is
/// non-critical. The other three operations propagate collaborator failures
/// unmodified so callers can distinguish "no matches" from "source
/// unreachable".
#[derive(Debug)]
pub struct LiveFetchStrategy {
    api: Arc<dyn FootballApi>,
}

impl LiveFetchStrategy {
    /// Create a live-fetch strategy over an external API client.
    #[must_use]
    pub fn new(api: Arc<dyn FootballApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl DataRetrievalStrategy for LiveFetchStrategy {
    async fn countries(&self) -> Result<Vec<Country>> {
        match self.api.fetch_countries().await {
            Ok(countries) => Ok(countries),
            Err(e) => {
                warn!(error = %e, "Countries fetch failed, serving empty catalog");
                Ok(Vec::new())
            }
        }
    }

    async fn leagues_by_country(&self, country_id: &str) -> Result<Vec<League>> {
        self.api.fetch_leagues(country_id).await
    }

    async fn teams_by_league(&self, league_id: &str) -> Result<Vec<Team>> {
        self.api.fetch_teams(league_id).await
    }

    async fn standings(&self, league_id: &str) -> Result<Vec<Standing>> {
        self.api.fetch_standings(league_id).await
    }
}

/// Cache-read strategy: every call returns whatever the cache currently
/// holds.
///
/// Absence is a normal, quiet outcome: a key that was never populated yields
/// an empty list, never a "source unavailable" error.
pub struct CacheReadStrategy {
    cache: Arc<dyn FootballCache>,
}

impl CacheReadStrategy {
    /// Create a cache-read strategy over a cache backend.
    #[must_use]
    pub fn new(cache: Arc<dyn FootballCache>) -> Self {
        Self { cache }
    }
}

impl fmt::Debug for CacheReadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheReadStrategy").finish_non_exhaustive()
    }
}

#[async_trait]
impl DataRetrievalStrategy for CacheReadStrategy {
    async fn countries(&self) -> Result<Vec<Country>> {
        Ok(self.cache.get_countries().await?.unwrap_or_default())
    }

    async fn leagues_by_country(&self, country_id: &str) -> Result<Vec<League>> {
        Ok(self.cache.get_leagues(country_id).await?.unwrap_or_default())
    }

    async fn teams_by_league(&self, league_id: &str) -> Result<Vec<Team>> {
        Ok(self.cache.get_teams(league_id).await?.unwrap_or_default())
    }

    async fn standings(&self, league_id: &str) -> Result<Vec<Standing>> {
        Ok(self.cache.get_standings(league_id).await?.unwrap_or_default())
    }
}

/// Selects between the two long-lived strategies based on the current mode.
///
/// Selection is a pure function of its argument: no side effects, no
/// per-call construction. A hybrid strategy would only add a field and a
/// selection arm here; callers are untouched.
pub struct StrategySelector {
    online: Arc<dyn DataRetrievalStrategy>,
    offline: Arc<dyn DataRetrievalStrategy>,
}

impl StrategySelector {
    /// Create a selector over the online and offline strategies.
    #[must_use]
    pub fn new(
        online: Arc<dyn DataRetrievalStrategy>,
        offline: Arc<dyn DataRetrievalStrategy>,
    ) -> Self {
        Self { online, offline }
    }

    /// Returns the cache-read strategy when offline, the live-fetch strategy
    /// otherwise.
    #[must_use]
    pub fn select(&self, is_offline: bool) -> &dyn DataRetrievalStrategy {
        if is_offline {
            self.offline.as_ref()
        } else {
            self.online.as_ref()
        }
    }
}

impl fmt::Debug for StrategySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategySelector").finish_non_exhaustive()
    }
}
