//! The single-shot publish step: fetch once, transform, hand the rendering
//! layer one immutable value.

use crate::api::Client;
use crate::config::MapSettings;
use crate::features::to_feature_collection;
use crate::models::{CountryStat, GlobalStats};
use crate::stats::{AggregateStat, to_aggregate_stats};
use geojson::FeatureCollection;
use log::warn;
use serde::{Deserialize, Serialize};

/// Everything the map page needs for one render: view settings, one marker
/// feature per located country, and the three formatted aggregate entries.
/// Recomputed wholesale on every fetch; nothing is merged across fetches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub settings: MapSettings,
    pub features: FeatureCollection,
    pub aggregates: Vec<AggregateStat>,
}

impl Snapshot {
    /// Assemble a snapshot from already-fetched inputs. Pure.
    pub fn assemble(
        settings: MapSettings,
        countries: &[CountryStat],
        global: Option<&GlobalStats>,
    ) -> Self {
        Self {
            settings,
            features: to_feature_collection(countries),
            aggregates: to_aggregate_stats(global),
        }
    }
}

/// Fetch both endpoints once and assemble the snapshot.
///
/// A failed fetch is logged and degraded — an empty map and placeholder
/// aggregates — instead of surfacing an error; the worst case for the page
/// is fewer markers and dashes in place of numbers.
pub fn fetch_snapshot(client: &Client, settings: MapSettings) -> Snapshot {
    let countries = match client.fetch_countries() {
        Ok(list) => list,
        Err(err) => {
            warn!("country fetch failed: {err}");
            Vec::new()
        }
    };
    let global = match client.fetch_global() {
        Ok(stats) => Some(stats),
        Err(err) => {
            warn!("aggregate fetch failed: {err}");
            None
        }
    };
    Snapshot::assemble(settings, &countries, global.as_ref())
}
