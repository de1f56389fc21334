use covmap_rs::models::{CountryStat, GlobalStats};

#[test]
fn parse_sample_countries_json() {
    let sample = r#"
    [
      {
        "updated": 1600000000000,
        "country": "Germany",
        "countryInfo": {"_id": 276, "iso2": "DE", "iso3": "DEU", "lat": 51.0, "long": 9.0,
                        "flag": "https://disease.sh/assets/img/flags/de.png"},
        "cases": 270000, "todayCases": 1200, "deaths": 9400, "recovered": 240000,
        "active": 20600, "critical": 230, "casesPerOneMillion": 3222,
        "deathsPerOneMillion": 112, "tests": 14000000, "testsPerOneMillion": 167000,
        "population": 83000000, "continent": "Europe"
      },
      {
        "updated": 1600000000000,
        "country": "MS Zaandam",
        "countryInfo": {"_id": null, "iso2": null, "iso3": null, "lat": null, "long": null},
        "cases": 9, "deaths": 2, "recovered": 7
      }
    ]
    "#;

    let countries: Vec<CountryStat> = serde_json::from_str(sample).unwrap();
    assert_eq!(countries.len(), 2);

    let germany = &countries[0];
    assert_eq!(germany.country, "Germany");
    assert_eq!(germany.country_info.iso3.as_deref(), Some("DEU"));
    assert_eq!(germany.country_info.lat, Some(51.0));
    assert_eq!(germany.country_info.long, Some(9.0));
    assert_eq!(germany.cases, Some(270_000));
    assert_eq!(germany.tests_per_one_million, Some(167_000.0));
    assert_eq!(germany.updated, Some(1_600_000_000_000));
    // Unmodeled upstream fields ride along verbatim.
    assert_eq!(
        germany.extra.get("continent"),
        Some(&serde_json::json!("Europe"))
    );
    assert_eq!(
        germany.extra.get("todayCases"),
        Some(&serde_json::json!(1200))
    );

    let ship = &countries[1];
    assert_eq!(ship.country_info.lat, None);
    assert_eq!(ship.country_info.long, None);
    assert_eq!(ship.recovered, Some(7));
    // Absent fields stay absent rather than failing the parse.
    assert_eq!(ship.tests, None);
}

#[test]
fn coordinates_accept_string_or_number_and_tolerate_junk() {
    let sample = r#"
    [
      {"country": "A", "countryInfo": {"lat": "12.5", "long": "-3.25"}, "cases": 1},
      {"country": "B", "countryInfo": {"lat": "not a number", "long": 4.0}, "cases": 2},
      {"country": "C", "countryInfo": {"lat": {}, "long": []}, "cases": 3}
    ]
    "#;
    let countries: Vec<CountryStat> = serde_json::from_str(sample).unwrap();
    assert_eq!(countries[0].country_info.lat, Some(12.5));
    assert_eq!(countries[0].country_info.long, Some(-3.25));
    assert_eq!(countries[1].country_info.lat, None);
    assert_eq!(countries[1].country_info.long, Some(4.0));
    assert_eq!(countries[2].country_info.lat, None);
    assert_eq!(countries[2].country_info.long, None);
}

#[test]
fn parse_sample_global_json() {
    let sample = r#"
    {
      "updated": 1600000000000,
      "cases": 30000000, "deaths": 950000, "recovered": 21000000,
      "casesPerOneMillion": 3850, "deathsPerOneMillion": 121.9,
      "tests": 500000000, "testsPerOneMillion": 64000,
      "population": 7800000000, "affectedCountries": 215
    }
    "#;
    let global: GlobalStats = serde_json::from_str(sample).unwrap();
    assert_eq!(global.cases, Some(30_000_000));
    assert_eq!(global.deaths_per_one_million, Some(121.9));
    assert_eq!(global.affected_countries, Some(215));
}

#[test]
fn parse_empty_global_object() {
    let global: GlobalStats = serde_json::from_str("{}").unwrap();
    assert_eq!(global.cases, None);
    assert_eq!(global.tests_per_one_million, None);
}
