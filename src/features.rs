//! Turn per-country records into a GeoJSON `FeatureCollection` of point
//! markers.
//!
//! - One `Point` feature per record with usable coordinates, input order kept
//! - Records missing either coordinate are dropped, never defaulted to 0/0
//! - Each feature carries the original record in its properties plus two
//!   derived keys: `label` (short marker text) and `summary` (popup text)

use crate::models::CountryStat;
use chrono::{TimeZone, Utc};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

/// Shown wherever a count is absent from the upstream record.
pub const PLACEHOLDER: &str = "-";

/// Convert records into a feature collection, skipping records without a
/// usable position. Order-preserving; an empty slice yields an empty
/// collection. Never fails: malformed records degrade per field.
pub fn to_feature_collection(countries: &[CountryStat]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: countries.iter().filter_map(to_feature).collect(),
        foreign_members: None,
    }
}

/// Convert one record, or `None` when either coordinate is absent or not a
/// finite number.
pub fn to_feature(stat: &CountryStat) -> Option<Feature> {
    let (lat, long) = marker_position(stat)?;

    let mut properties = match serde_json::to_value(stat) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => JsonObject::new(),
    };
    properties.insert("label".into(), marker_label(stat).into());
    properties.insert("summary".into(), popup_summary(stat).into());

    Some(Feature {
        bbox: None,
        // GeoJSON positions are [longitude, latitude].
        geometry: Some(Geometry::new(Value::Point(vec![long, lat]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}

/// Extract `(lat, long)` when both are present and finite.
pub fn marker_position(stat: &CountryStat) -> Option<(f64, f64)> {
    let lat = stat.country_info.lat.filter(|v| v.is_finite())?;
    let long = stat.country_info.long.filter(|v| v.is_finite())?;
    Some((lat, long))
}

/// Short text drawn on the marker: the case count, abbreviated.
pub fn marker_label(stat: &CountryStat) -> String {
    match stat.cases {
        Some(cases) => abbreviate_cases(cases),
        None => PLACEHOLDER.to_string(),
    }
}

/// Abbreviate a case count for marker display: counts above 1000 drop their
/// last three digits and gain a `k+` suffix (`12345` -> `"12k+"`).
///
/// String truncation, not divide-and-round: `1999` becomes `"1k+"`. Display
/// output depends on the exact strings, so the lossy policy stays.
pub fn abbreviate_cases(cases: u64) -> String {
    let s = cases.to_string();
    if cases > 1000 {
        format!("{}k+", &s[..s.len() - 3])
    } else {
        s
    }
}

/// Popup text for the marker: country name, the three cumulative counts, and
/// a last-update line that is omitted entirely when `updated` is absent.
pub fn popup_summary(stat: &CountryStat) -> String {
    let mut lines = vec![
        stat.country.clone(),
        format!("Confirmed: {}", count_text(stat.cases)),
        format!("Deaths: {}", count_text(stat.deaths)),
        format!("Recovered: {}", count_text(stat.recovered)),
    ];
    if let Some(updated) = stat.updated.and_then(format_updated) {
        lines.push(format!("Last update: {updated}"));
    }
    lines.join("\n")
}

/// Format a millisecond epoch timestamp, or `None` when it is out of range.
pub fn format_updated(millis: i64) -> Option<String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

fn count_text(value: Option<u64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string())
}
