mod common;

use common::{adelaide_birth, ymd, AnalyticSun};
use urania::time::{Confidence, ResolutionMethod};
use urania::{BirthMoment, BodyId, ChartAssembler, ChartSettings, Sign, TimeResolver};

#[test]
fn test_adelaide_uses_historical_summer_time() {
    let instant = TimeResolver::new().resolve(&adelaide_birth());

    assert_eq!(instant.method, ResolutionMethod::HistoricalTable);
    assert_eq!(instant.confidence, Confidence::High);
    assert_eq!(instant.region, Some("adelaide"));
    assert!(instant.dst_active);
    assert_eq!(instant.offset_hours, 10.5);
    assert_eq!(instant.utc_date, ymd(1974, 11, 22));
    assert_eq!(instant.utc_clock(), "08:40");
    assert!((instant.julian_day() - 2_442_373.861_111).abs() < 1e-5);
}

#[test]
fn test_adelaide_sun_is_late_scorpio() {
    let assembler = ChartAssembler::new(AnalyticSun::new(), ChartSettings::default());
    let chart = assembler.assemble(&adelaide_birth()).unwrap();

    let sun = chart.placement(BodyId::Sun).unwrap();
    assert_eq!(sun.sign, Sign::Scorpio);
    assert_eq!(sun.sign.index(), 7);
    assert!(sun.degree > 29.0 && sun.degree < 30.0, "{}", sun.degree);
    assert_eq!(sun.exact_degree, "29°39'56\"");
}

#[test]
fn test_unknown_label_approximates_from_coordinates() {
    let moment = BirthMoment::new(
        ymd(1988, 7, 4),
        9,
        0,
        64.1466,
        -21.9426,
        Some("Reykjavik, Iceland"),
    )
    .unwrap();
    let instant = TimeResolver::new().resolve(&moment);

    assert_eq!(instant.method, ResolutionMethod::CoordinateApprox);
    assert!(instant.is_low_confidence());
    assert_eq!(instant.offset_hours, -1.5);
    assert!((instant.utc_hours - 10.5).abs() < 1e-12);
    assert_eq!(instant.region, None);
    assert_eq!(instant.summary(), "UTC-1.5 (coordinate-based approximation)");
}

#[test]
fn test_northern_and_southern_summers() {
    let resolver = TimeResolver::new();
    let at = |date, place| {
        let moment = BirthMoment::new(date, 12, 0, 0.0, 0.0, Some(place)).unwrap();
        resolver.resolve(&moment).offset_hours
    };

    assert_eq!(at(ymd(1985, 1, 10), "Sydney, NSW"), 11.0);
    assert_eq!(at(ymd(1985, 7, 10), "Sydney, NSW"), 10.0);
    assert_eq!(at(ymd(1985, 7, 10), "Chicago, IL"), -5.0);
    assert_eq!(at(ymd(1985, 1, 10), "Chicago, IL"), -6.0);
    assert_eq!(at(ymd(1975, 7, 10), "London, UK"), 0.0);
    assert_eq!(at(ymd(1995, 7, 10), "London, UK"), 1.0);
    assert_eq!(at(ymd(1995, 7, 10), "Perth, Western Australia"), 8.0);
}

#[test]
fn test_late_evening_rolls_into_next_year() {
    let moment = BirthMoment::parse(
        "31/12/1999",
        "21:30",
        40.7128,
        -74.006,
        Some("New York, NY"),
    )
    .unwrap();
    let instant = TimeResolver::new().resolve(&moment);

    assert_eq!(instant.utc_date, ymd(2000, 1, 1));
    assert_eq!(instant.utc_clock(), "02:30");
    assert_eq!(instant.day_shift(moment.date()), 1);
}
