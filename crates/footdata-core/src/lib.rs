#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/footdata/footdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for football data retrieval.
//!
//! This crate provides the foundational abstractions shared by the cache
//! backends, the external API client, and the retrieval façade:
//!
//! - [`DataRetrievalStrategy`](strategy::DataRetrievalStrategy) - Mode-selectable data access
//! - [`FootballApi`](api::FootballApi) - External REST API collaborator
//! - [`FootballCache`](cache::FootballCache) - Caching abstraction
//! - [`FootballError`](error::FootballError) - Error taxonomy

/// External API collaborator trait.
pub mod api;
/// Cache trait and key normalization helpers.
pub mod cache;
/// Error types for data retrieval and caching.
pub mod error;
/// The data retrieval strategy trait.
pub mod strategy;
/// Core domain records (Country, League, Team, Standing).
pub mod types;

// Re-export commonly used items at crate root
pub use api::FootballApi;
pub use cache::{COUNTRIES_KEY, FootballCache, collection_key};
pub use error::{FootballError, Result};
pub use strategy::DataRetrievalStrategy;
pub use types::{Country, League, Standing, Team};
