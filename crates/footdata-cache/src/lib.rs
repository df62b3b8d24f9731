#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/footdata/footdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Caching implementations for football data retrieval.
//!
//! This crate provides implementations of the [`FootballCache`] trait from
//! `footdata-core`:
//!
//! - [`InMemoryCache`] - Process-lifetime in-memory cache (the offline-mode backend)
//! - [`NoopCache`] - No-op cache that doesn't store anything

/// In-memory cache implementation.
pub mod memory;
/// No-op cache implementation.
pub mod noop;

// Re-export the trait for convenience
pub use footdata_core::FootballCache;

// Re-export implementations
pub use memory::InMemoryCache;
pub use noop::NoopCache;
