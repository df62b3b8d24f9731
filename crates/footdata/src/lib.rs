#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/footdata/footdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Football data retrieval with an online/offline strategy switch.
//!
//! This crate re-exports the core types and cache implementations, and
//! provides the retrieval façade:
//!
//! - [`FootballService`] - Single entry point coordinating mode lookup,
//!   strategy dispatch, and cache population
//! - [`ModeFlag`] - Runtime-mutable online/offline switch
//! - [`LiveFetchStrategy`] / [`CacheReadStrategy`] - The two interchangeable
//!   data-access implementations
//!
//! # Features
//!
//! - `apifootball` (default) - the apifootball.com client and the
//!   [`FootballService::with_apifootball`] convenience constructor

// Core types and traits
pub use footdata_core::*;

// Cache implementations
pub use footdata_cache::{InMemoryCache, NoopCache};

// External API client
#[cfg(feature = "apifootball")]
pub use footdata_apifootball::ApiFootballClient;

mod mode;
mod service;
mod strategies;

pub use mode::ModeFlag;
pub use service::FootballService;
pub use strategies::{CacheReadStrategy, LiveFetchStrategy, StrategySelector};
