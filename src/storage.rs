use crate::models::CountryStat;
use crate::snapshot::Snapshot;
use anyhow::Result;
use csv::WriterBuilder;
use geojson::FeatureCollection;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save the marker features as a pretty-printed GeoJSON document.
pub fn save_geojson<P: AsRef<Path>>(collection: &FeatureCollection, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(collection)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save a full snapshot (settings + features + aggregates) as pretty JSON.
pub fn save_json<P: AsRef<Path>>(snapshot: &Snapshot, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(snapshot)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save per-country records as CSV with header.
pub fn save_csv<P: AsRef<Path>>(countries: &[CountryStat], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((
        "country",
        "iso3",
        "lat",
        "long",
        "cases",
        "deaths",
        "recovered",
        "active",
        "tests",
        "population",
        "updated",
    ))?;
    for c in countries {
        wtr.serialize((
            &c.country,
            &c.country_info.iso3,
            c.country_info.lat,
            c.country_info.long,
            c.cases,
            c.deaths,
            c.recovered,
            c.active,
            c.tests,
            c.population,
            c.updated,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}
