use covmap_rs::models::GlobalStats;
use covmap_rs::stats::{Metric, fmt_count, fmt_rate, to_aggregate_stats};

#[test]
fn null_input_yields_three_placeholder_entries() {
    let entries = to_aggregate_stats(None);
    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries.iter().map(|e| e.metric).collect::<Vec<_>>(),
        vec![Metric::Cases, Metric::Deaths, Metric::Tests]
    );
    for entry in &entries {
        assert_eq!(entry.primary_value, "-");
        assert_eq!(entry.secondary_value, "-");
    }
}

#[test]
fn empty_object_degrades_every_field() {
    let global = GlobalStats::default();
    for entry in to_aggregate_stats(Some(&global)) {
        assert_eq!(entry.primary_value, "-");
        assert_eq!(entry.secondary_value, "-");
    }
}

#[test]
fn fields_degrade_independently_of_siblings() {
    let global = GlobalStats {
        cases: Some(1_234_567),
        cases_per_one_million: Some(3750.0),
        deaths: Some(89_000),
        deaths_per_one_million: None,
        tests: None,
        tests_per_one_million: Some(64_000.0),
        ..Default::default()
    };
    let entries = to_aggregate_stats(Some(&global));

    let cases = &entries[0];
    assert_eq!(cases.primary_value, "1,234,567");
    assert_eq!(cases.secondary_value, "3,750");

    let deaths = &entries[1];
    assert_eq!(deaths.primary_value, "89,000");
    assert_eq!(deaths.secondary_value, "-");

    let tests = &entries[2];
    assert_eq!(tests.primary_value, "-");
    assert_eq!(tests.secondary_value, "64,000");
}

#[test]
fn count_formatting_uses_thousands_separators() {
    assert_eq!(fmt_count(Some(0)), "0");
    assert_eq!(fmt_count(Some(999)), "999");
    assert_eq!(fmt_count(Some(1000)), "1,000");
    assert_eq!(fmt_count(Some(1_234_567)), "1,234,567");
    assert_eq!(fmt_count(None), "-");
}

#[test]
fn rate_formatting_keeps_up_to_two_decimals() {
    assert_eq!(fmt_rate(Some(3750.0)), "3,750");
    assert_eq!(fmt_rate(Some(121.9)), "121.9");
    assert_eq!(fmt_rate(Some(1234.567)), "1,234.57");
    assert_eq!(fmt_rate(Some(0.0)), "0");
    assert_eq!(fmt_rate(None), "-");
    assert_eq!(fmt_rate(Some(f64::NAN)), "-");
    assert_eq!(fmt_rate(Some(f64::INFINITY)), "-");
}

#[test]
fn transform_is_idempotent() {
    let global = GlobalStats {
        cases: Some(42),
        ..Default::default()
    };
    assert_eq!(
        to_aggregate_stats(Some(&global)),
        to_aggregate_stats(Some(&global))
    );
}
