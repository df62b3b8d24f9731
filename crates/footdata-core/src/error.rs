//! Error types for data retrieval and caching.
//!
//! This module defines [`FootballError`] which covers all error cases that can
//! occur when fetching, parsing, or caching football data.

use thiserror::Error;

/// Errors that can occur during data retrieval.
#[derive(Error, Debug)]
pub enum FootballError {
    /// The external data source could not be reached or reported a failure.
    ///
    /// Carries the identifier that was being fetched so callers can
    /// distinguish "source unreachable" from "query matched nothing".
    #[error("External source unavailable for '{id}': {reason}")]
    SourceUnavailable {
        /// The identifier that was being fetched (country id, league id, or
        /// the countries catalog key).
        id: String,
        /// Description of the underlying failure.
        reason: String,
    },

    /// The external source returned a response that could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No standing matched the requested team.
    #[error("Team '{team}' not found in league '{league_id}' for country '{country}'")]
    TeamNotFound {
        /// Country name the caller asked for.
        country: String,
        /// League identifier the caller asked for.
        league_id: String,
        /// Team name the caller asked for.
        team: String,
    },

    /// Error interacting with the cache backend.
    #[error("Cache error: {0}")]
    Cache(String),
}

/// Result type alias using [`FootballError`].
pub type Result<T> = std::result::Result<T, FootballError>;
