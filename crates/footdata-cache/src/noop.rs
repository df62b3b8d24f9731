//! No-op cache implementation.

use async_trait::async_trait;
use footdata_core::{Country, FootballCache, League, Result, Standing, Team};
use tracing::trace;

/// A no-op cache that doesn't store anything.
///
/// All `get_*` methods return `Ok(None)` and all `put_*` methods return
/// `Ok(())`. Useful for disabling caching; a service wired with this backend
/// serves every offline request as an empty result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl NoopCache {
    /// Create a new no-op cache.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FootballCache for NoopCache {
    async fn get_countries(&self) -> Result<Option<Vec<Country>>> {
        trace!("NoopCache: get_countries called, returning None");
        Ok(None)
    }

    async fn put_countries(&self, _countries: &[Country]) -> Result<()> {
        trace!("NoopCache: put_countries called, doing nothing");
        Ok(())
    }

    async fn get_leagues(&self, _country_id: &str) -> Result<Option<Vec<League>>> {
        trace!("NoopCache: get_leagues called, returning None");
        Ok(None)
    }

    async fn put_leagues(&self, _country_id: &str, _leagues: &[League]) -> Result<()> {
        trace!("NoopCache: put_leagues called, doing nothing");
        Ok(())
    }

    async fn get_teams(&self, _league_id: &str) -> Result<Option<Vec<Team>>> {
        trace!("NoopCache: get_teams called, returning None");
        Ok(None)
    }

    async fn put_teams(&self, _league_id: &str, _teams: &[Team]) -> Result<()> {
        trace!("NoopCache: put_teams called, doing nothing");
        Ok(())
    }

    async fn get_standings(&self, _league_id: &str) -> Result<Option<Vec<Standing>>> {
        trace!("NoopCache: get_standings called, returning None");
        Ok(None)
    }

    async fn put_standings(&self, _league_id: &str, _standings: &[Standing]) -> Result<()> {
        trace!("NoopCache: put_standings called, doing nothing");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        trace!("NoopCache: clear called, doing nothing");
        Ok(())
    }
}
