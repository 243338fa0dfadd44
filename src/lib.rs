//! # depfetch
//!
//! Keeps a local copy of a remote JSON document (by default the mcmeta
//! version summary) in sync with as little transfer as possible.
//!
//! ## Architecture
//!
//! ```text
//! FileCache (ETag) → HttpFetcher (If-None-Match) → ResponseStatus → FileCache (body + ETag)
//! ```
//!
//! A run performs one conditional GET. `304 Not Modified` leaves the cache
//! alone, `200 OK` replaces the cached body and its ETag together, and any
//! other status is reported without touching the cache.
//!
//! ## Quick Start
//!
//! ```bash
//! # Refresh .rpb_cache/versions.json
//! depfetch
//!
//! # Use another resource or cache location
//! depfetch --config deps.toml
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires configuration, the HTTP
/// fetcher and the file cache into a [`DependencyFetcher`](fetcher::DependencyFetcher).
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Configuration loaded from `~/.config/depfetch/config.toml`.
pub mod config;

/// Cache layout, response classification and fetch outcomes.
pub mod domain;

/// HTTP fetching with conditional request support.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for one GET
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`DependencyFetcher`](fetcher::DependencyFetcher): the fetch-and-cache cycle
pub mod fetcher;

/// Parsed view of the cached version summary.
pub mod manifest;

/// Body/ETag persistence.
///
/// - [`CacheStore`](store::CacheStore): Trait keeping body and ETag paired
/// - [`FileCache`](store::FileCache): Plain-file implementation
pub mod store;
