//! In-memory cache implementation.

use async_trait::async_trait;
use footdata_core::{
    COUNTRIES_KEY, Country, FootballCache, League, Result, Standing, Team, collection_key,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Process-lifetime in-memory cache.
///
/// Each collection is stored in its own `RwLock`-protected `HashMap` keyed by
/// normalized (lower-cased) keys. Entries live until overwritten; concurrent
/// writes to the same key are last-write-wins. Values are cloned on get/put.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    countries: RwLock<HashMap<String, Vec<Country>>>,
    leagues: RwLock<HashMap<String, Vec<League>>>,
    teams: RwLock<HashMap<String, Vec<Team>>>,
    standings: RwLock<HashMap<String, Vec<Standing>>>,
}

impl InMemoryCache {
    /// Create a new empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FootballCache for InMemoryCache {
    #[instrument(skip(self))]
    async fn get_countries(&self) -> Result<Option<Vec<Country>>> {
        let cache = self.countries.read().await;
        match cache.get(COUNTRIES_KEY) {
            Some(entry) => {
                debug!("Cache hit for countries");
                Ok(Some(entry.clone()))
            }
            None => {
                debug!("Cache miss for countries");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, countries), fields(count = countries.len()))]
    async fn put_countries(&self, countries: &[Country]) -> Result<()> {
        let mut cache = self.countries.write().await;
        cache.insert(COUNTRIES_KEY.to_string(), countries.to_vec());
        debug!("Cached {} countries", countries.len());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_leagues(&self, country_id: &str) -> Result<Option<Vec<League>>> {
        let key = collection_key("leagues", country_id);
        let cache = self.leagues.read().await;
        match cache.get(&key) {
            Some(entry) => {
                debug!("Cache hit for leagues");
                Ok(Some(entry.clone()))
            }
            None => {
                debug!("Cache miss for leagues");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, leagues), fields(count = leagues.len()))]
    async fn put_leagues(&self, country_id: &str, leagues: &[League]) -> Result<()> {
        let key = collection_key("leagues", country_id);
        let mut cache = self.leagues.write().await;
        cache.insert(key, leagues.to_vec());
        debug!("Cached {} leagues", leagues.len());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_teams(&self, league_id: &str) -> Result<Option<Vec<Team>>> {
        let key = collection_key("teams", league_id);
        let cache = self.teams.read().await;
        match cache.get(&key) {
            Some(entry) => {
                debug!("Cache hit for teams");
                Ok(Some(entry.clone()))
            }
            None => {
                debug!("Cache miss for teams");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, teams), fields(count = teams.len()))]
    async fn put_teams(&self, league_id: &str, teams: &[Team]) -> Result<()> {
        let key = collection_key("teams", league_id);
        let mut cache = self.teams.write().await;
        cache.insert(key, teams.to_vec());
        debug!("Cached {} teams", teams.len());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_standings(&self, league_id: &str) -> Result<Option<Vec<Standing>>> {
        let key = collection_key("standings", league_id);
        let cache = self.standings.read().await;
        match cache.get(&key) {
            Some(entry) => {
                debug!("Cache hit for standings");
                Ok(Some(entry.clone()))
            }
            None => {
                debug!("Cache miss for standings");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, standings), fields(count = standings.len()))]
    async fn put_standings(&self, league_id: &str, standings: &[Standing]) -> Result<()> {
        let key = collection_key("standings", league_id);
        let mut cache = self.standings.write().await;
        cache.insert(key, standings.to_vec());
        debug!("Cached {} standings", standings.len());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        self.countries.write().await.clear();
        self.leagues.write().await.clear();
        self.teams.write().await.clear();
        self.standings.write().await.clear();
        debug!("Cleared all cache entries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn team(key: &str, name: &str) -> Team {
        Team {
            team_key: key.to_string(),
            team_name: name.to_string(),
            team_country: "England".to_string(),
            team_founded: "1886".to_string(),
            team_badge: String::new(),
        }
    }

    fn league(id: &str, name: &str) -> League {
        League {
            league_id: id.to_string(),
            league_name: name.to_string(),
            country_id: "44".to_string(),
            country_name: "England".to_string(),
            league_season: "2023/2024".to_string(),
            league_logo: String::new(),
        }
    }

    #[tokio::test]
    async fn countries_round_trip() {
        let cache = InMemoryCache::new();
        assert!(cache.get_countries().await.unwrap().is_none());

        let countries = vec![Country {
            country_id: "44".to_string(),
            country_name: "England".to_string(),
            country_logo: String::new(),
        }];
        cache.put_countries(&countries).await.unwrap();

        let cached = cache.get_countries().await.unwrap().unwrap();
        assert_eq!(cached, countries);
    }

    #[tokio::test]
    async fn missing_key_is_none_not_empty() {
        let cache = InMemoryCache::new();
        assert!(cache.get_teams("148").await.unwrap().is_none());

        // A cached empty list is distinguishable from a missing key.
        cache.put_teams("148", &[]).await.unwrap();
        assert_eq!(cache.get_teams("148").await.unwrap(), Some(vec![]));
    }

    #[tokio::test]
    async fn keys_are_case_insensitive() {
        let cache = InMemoryCache::new();
        cache.put_leagues("us", &[league("302", "MLS")]).await.unwrap();

        let cached = cache.get_leagues("US").await.unwrap();
        assert_eq!(cached.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn put_replaces_wholesale() {
        let cache = InMemoryCache::new();
        cache
            .put_teams("148", &[team("1", "Arsenal"), team("2", "Chelsea")])
            .await
            .unwrap();
        cache.put_teams("148", &[team("3", "Liverpool")]).await.unwrap();

        let cached = cache.get_teams("148").await.unwrap().unwrap();
        assert_eq!(cached, vec![team("3", "Liverpool")]);
    }

    #[tokio::test]
    async fn empty_put_overwrites_previous_entry() {
        let cache = InMemoryCache::new();
        cache.put_teams("148", &[team("1", "Arsenal")]).await.unwrap();
        cache.put_teams("148", &[]).await.unwrap();

        assert_eq!(cache.get_teams("148").await.unwrap(), Some(vec![]));
    }

    #[tokio::test]
    async fn concurrent_writes_leave_exactly_one_value() {
        let cache = Arc::new(InMemoryCache::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                let value = vec![team(&i.to_string(), &format!("Team {i}"))];
                cache.put_teams("148", &value).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // Last write wins: the entry must be exactly one of the written
        // values, never a merge of several.
        let cached = cache.get_teams("148").await.unwrap().unwrap();
        assert_eq!(cached.len(), 1);
        let i: usize = cached[0].team_key.parse().unwrap();
        assert!(i < 16);
        assert_eq!(cached[0].team_name, format!("Team {i}"));
    }

    #[tokio::test]
    async fn clear_removes_all_collections() {
        let cache = InMemoryCache::new();
        cache.put_teams("148", &[team("1", "Arsenal")]).await.unwrap();
        cache.put_leagues("44", &[league("148", "Premier League")]).await.unwrap();

        cache.clear().await.unwrap();

        assert!(cache.get_teams("148").await.unwrap().is_none());
        assert!(cache.get_leagues("44").await.unwrap().is_none());
    }
}
