use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One per-country record from the `/countries` endpoint.
///
/// Every numeric field is optional: the upstream feed occasionally omits
/// fields for territories and cruise ships, and a partial record must still
/// flow through the pipeline (spec'd behavior is degrade-per-field, never
/// reject-the-record). Fields this crate does not model are kept verbatim in
/// `extra` so that feature properties carry the record unmodified.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountryStat {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_info: CountryInfo,
    #[serde(default)]
    pub cases: Option<u64>,
    #[serde(default)]
    pub deaths: Option<u64>,
    #[serde(default)]
    pub recovered: Option<u64>,
    #[serde(default)]
    pub active: Option<u64>,
    #[serde(default)]
    pub tests: Option<u64>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub cases_per_one_million: Option<f64>,
    #[serde(default)]
    pub deaths_per_one_million: Option<f64>,
    #[serde(default)]
    pub tests_per_one_million: Option<f64>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub updated: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Country metadata nested under `countryInfo`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CountryInfo {
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub long: Option<f64>,
}

/// Worldwide totals from the `/all` endpoint. Same optional-field treatment
/// as [`CountryStat`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    #[serde(default)]
    pub updated: Option<i64>,
    #[serde(default)]
    pub cases: Option<u64>,
    #[serde(default)]
    pub deaths: Option<u64>,
    #[serde(default)]
    pub recovered: Option<u64>,
    #[serde(default)]
    pub tests: Option<u64>,
    #[serde(default)]
    pub cases_per_one_million: Option<f64>,
    #[serde(default)]
    pub deaths_per_one_million: Option<f64>,
    #[serde(default)]
    pub tests_per_one_million: Option<f64>,
    #[serde(default)]
    pub affected_countries: Option<u64>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Serde helper: parse an optional `f64` from a JSON number or a numeric
/// string; anything else (null, `""`, objects) becomes `None` instead of a
/// deserialization error. A record with an unusable coordinate is still a
/// valid record, it just never becomes a map marker.
fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
