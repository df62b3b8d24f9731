//! The retrieval façade.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use footdata_core::{
    Country, DataRetrievalStrategy, FootballApi, FootballCache, FootballError, League, Result,
    Standing, Team,
};

use crate::mode::ModeFlag;
use crate::strategies::{CacheReadStrategy, LiveFetchStrategy, StrategySelector};

/// Single entry point for football data retrieval.
///
/// Every retrieval call follows the same protocol: read the mode flag once,
/// select the matching strategy, invoke it, and — only when the mode read at
/// the start of the call was online — write the result back into the cache
/// under the normalized key, unconditionally. An empty live result still
/// overwrites a previously non-empty cache entry: last fetch wins.
///
/// The mode flag may flip between the initial read and the cache write; the
/// write stays gated on the mode observed at the start of the call.
pub struct FootballService {
    selector: StrategySelector,
    mode: Arc<ModeFlag>,
    cache: Arc<dyn FootballCache>,
}

impl fmt::Debug for FootballService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FootballService")
            .field("offline", &self.mode.is_offline())
            .finish_non_exhaustive()
    }
}

impl FootballService {
    /// Create a service over an external API client and a cache backend,
    /// starting in online mode.
    #[must_use]
    pub fn new(api: Arc<dyn FootballApi>, cache: Arc<dyn FootballCache>) -> Self {
        Self::with_mode(api, cache, Arc::new(ModeFlag::new()))
    }

    /// Create a service with an externally owned mode flag.
    #[must_use]
    pub fn with_mode(
        api: Arc<dyn FootballApi>,
        cache: Arc<dyn FootballCache>,
        mode: Arc<ModeFlag>,
    ) -> Self {
        let online = Arc::new(LiveFetchStrategy::new(api));
        let offline = Arc::new(CacheReadStrategy::new(Arc::clone(&cache)));
        Self::with_strategies(online, offline, cache, mode)
    }

    /// Create a service from explicit strategies.
    ///
    /// The cache handle is still required: it is where online results are
    /// written back, independently of what the offline strategy reads.
    #[must_use]
    pub fn with_strategies(
        online: Arc<dyn DataRetrievalStrategy>,
        offline: Arc<dyn DataRetrievalStrategy>,
        cache: Arc<dyn FootballCache>,
        mode: Arc<ModeFlag>,
    ) -> Self {
        Self {
            selector: StrategySelector::new(online, offline),
            mode,
            cache,
        }
    }

    /// Create a service backed by the apifootball.com client.
    #[cfg(feature = "apifootball")]
    #[must_use]
    pub fn with_apifootball(api_key: impl Into<String>, cache: Arc<dyn FootballCache>) -> Self {
        let client = footdata_apifootball::ApiFootballClient::new(api_key);
        Self::new(Arc::new(client), cache)
    }

    /// Switch offline mode on or off. Subsequent calls see the new value.
    pub fn set_offline_mode(&self, enabled: bool) {
        info!(enabled, "Offline mode toggled");
        self.mode.set_offline(enabled);
    }

    /// Returns true if offline mode is currently enabled.
    #[must_use]
    pub fn is_offline_mode(&self) -> bool {
        self.mode.is_offline()
    }

    /// Returns the catalog of all available countries.
    pub async fn get_all_countries(&self) -> Result<Vec<Country>> {
        let offline = self.mode.is_offline();
        let countries = self.selector.select(offline).countries().await?;
        if !offline {
            if let Err(e) = self.cache.put_countries(&countries).await {
                warn!(error = %e, "Failed to cache countries");
            }
        }
        Ok(countries)
    }

    /// Returns the leagues hosted by a country.
    pub async fn get_leagues_by_country(&self, country_id: &str) -> Result<Vec<League>> {
        let offline = self.mode.is_offline();
        let leagues = self
            .selector
            .select(offline)
            .leagues_by_country(country_id)
            .await?;
        if !offline {
            if let Err(e) = self.cache.put_leagues(country_id, &leagues).await {
                warn!(error = %e, country_id, "Failed to cache leagues");
            }
        }
        Ok(leagues)
    }

    /// Returns the teams playing in a league.
    pub async fn get_teams_by_league(&self, league_id: &str) -> Result<Vec<Team>> {
        let offline = self.mode.is_offline();
        let teams = self
            .selector
            .select(offline)
            .teams_by_league(league_id)
            .await?;
        if !offline {
            if let Err(e) = self.cache.put_teams(league_id, &teams).await {
                warn!(error = %e, league_id, "Failed to cache teams");
            }
        }
        Ok(teams)
    }

    /// Returns the current standings of a league.
    pub async fn get_standings(&self, league_id: &str) -> Result<Vec<Standing>> {
        let offline = self.mode.is_offline();
        let standings = self.selector.select(offline).standings(league_id).await?;
        if !offline {
            if let Err(e) = self.cache.put_standings(league_id, &standings).await {
                warn!(error = %e, league_id, "Failed to cache standings");
            }
        }
        Ok(standings)
    }

    /// Returns the standing of a single team within a league.
    ///
    /// Standings are cached per league, not per team, so this fetches the
    /// league standings (through the usual fetch/cache-write protocol) and
    /// scans for a record whose team name and country name both match,
    /// case-insensitively.
    pub async fn get_team_standing(
        &self,
        country: &str,
        league_id: &str,
        team: &str,
    ) -> Result<Standing> {
        let standings = self.get_standings(league_id).await?;
        standings
            .into_iter()
            .find(|s| {
                s.team_name.eq_ignore_ascii_case(team)
                    && s.country_name.eq_ignore_ascii_case(country)
            })
            .ok_or_else(|| FootballError::TeamNotFound {
                country: country.to_string(),
                league_id: league_id.to_string(),
                team: team.to_string(),
            })
    }
}
