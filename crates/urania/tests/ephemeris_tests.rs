mod common;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use common::adelaide_birth;
use urania::ephemeris::{GeoLocation, SwissEphemerisAdapter};
use urania::{
    natal_chart, BodyId, ChartAssembler, ChartError, ChartSettings, EphemerisError,
    EphemerisProvider, HouseSystem, NodeSource, Sign,
};

const ADELAIDE_JD: f64 = 2_442_373.861_111;

#[test]
fn test_missing_ephemeris_directory() {
    let result = SwissEphemerisAdapter::new(Some(PathBuf::from("/nonexistent/ephe")));
    match result {
        Err(EphemerisError::FileNotFound { path, .. }) => assert!(path.contains("nonexistent")),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_natal_chart_reports_missing_ephemeris_directory() {
    let err = natal_chart(
        &adelaide_birth(),
        Some(PathBuf::from("/nonexistent/ephe")),
        ChartSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ChartError::EphemerisUnavailable {
            source: EphemerisError::FileNotFound { .. },
            ..
        }
    ));
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_chiron_from_explicit_directory() {
    // Copy the installed data files somewhere the library would never look
    // on its own.
    let installed = SwissEphemerisAdapter::new(None).unwrap();
    let dir = tempfile::tempdir().unwrap();
    for entry in fs::read_dir(installed.ephemeris_path()).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "se1") {
            fs::copy(&path, dir.path().join(path.file_name().unwrap())).unwrap();
        }
    }

    let adapter = SwissEphemerisAdapter::new(Some(dir.path().to_path_buf())).unwrap();
    let chiron = adapter
        .body_position(ADELAIDE_JD, BodyId::Chiron, NodeSource::True)
        .unwrap();
    assert!(!chiron.estimated);
    assert_eq!(Sign::from_longitude(chiron.longitude), Sign::Aries);

    let chart = natal_chart(
        &adelaide_birth(),
        Some(dir.path().to_path_buf()),
        ChartSettings::default(),
    )
    .unwrap();
    assert!(chart.warnings.is_empty(), "{:?}", chart.warnings);
    assert_eq!(chart.estimated_bodies().count(), 0);
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_sun_position_adelaide() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let sun = adapter
        .body_position(ADELAIDE_JD, BodyId::Sun, NodeSource::True)
        .unwrap();

    assert_eq!(Sign::from_longitude(sun.longitude), Sign::Scorpio);
    assert!((sun.longitude - 239.67).abs() < 0.05, "{}", sun.longitude);
    assert!(sun.daily_motion.unwrap() > 0.9);
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_mean_node_moves_backwards() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let node = adapter
        .body_position(ADELAIDE_JD, BodyId::NorthNode, NodeSource::Mean)
        .unwrap();

    assert!(node.daily_motion.unwrap() < 0.0);
    let analytic = urania::ephemeris::mean_north_node_deg(ADELAIDE_JD);
    assert!((node.longitude - analytic).abs() < 0.05);
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_angles_adelaide() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let location = GeoLocation {
        lat: -34.9285,
        lon: 138.6007,
    };
    let angles = adapter
        .angles(ADELAIDE_JD, &location, HouseSystem::Placidus)
        .unwrap();

    assert!((0.0..360.0).contains(&angles.ascendant));
    assert!((0.0..360.0).contains(&angles.midheaven));
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_full_chart_across_threads() {
    let adapter = Arc::new(SwissEphemerisAdapter::new(None).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let adapter = Arc::clone(&adapter);
            thread::spawn(move || {
                ChartAssembler::new(adapter, ChartSettings::default())
                    .assemble(&adelaide_birth())
                    .unwrap()
            })
        })
        .collect();

    let charts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for chart in &charts {
        assert_eq!(chart, &charts[0]);
        assert_eq!(chart.sun_sign(), Some(Sign::Scorpio));
        assert_eq!(chart.placements.len(), 13);
    }
}
