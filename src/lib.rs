//! covmap-rs
//!
//! A lightweight Rust library for turning live COVID-19 statistics into
//! map-ready GeoJSON. Pairs with the `covmap` CLI.
//!
//! ### Features
//! - Fetch per-country records and worldwide totals from disease.sh
//! - Transform records into a GeoJSON `FeatureCollection` of labeled point
//!   markers (countries without usable coordinates are skipped)
//! - Format worldwide aggregates for a dashboard (thousands separators,
//!   `"-"` placeholders for missing fields)
//! - Save as GeoJSON, JSON, or CSV
//!
//! ### Example
//! ```no_run
//! use covmap_rs::{Client, MapSettings, fetch_snapshot};
//!
//! let client = Client::default();
//! let snapshot = fetch_snapshot(&client, MapSettings::default());
//! covmap_rs::storage::save_geojson(&snapshot.features, "markers.geojson")?;
//! for entry in &snapshot.aggregates {
//!     println!("{}: {}", entry.metric.title(), entry.primary_value);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod features;
pub mod models;
pub mod snapshot;
pub mod stats;
pub mod storage;

pub use api::{Client, FetchError};
pub use config::MapSettings;
pub use models::{CountryInfo, CountryStat, GlobalStats};
pub use snapshot::{Snapshot, fetch_snapshot};
pub use stats::{AggregateStat, Metric};
