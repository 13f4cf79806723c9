//! Test helpers for composing trip plans, catalogues and scratch directories.

use camino::{Utf8Path, Utf8PathBuf};
use geo::Coord;
use std::fs;
use tempfile::TempDir;
use tripline_core::{Location, Suggestion, SuggestionType, TravelMode};
use tripline_data::Catalogue;

use crate::plan::{ModeChoice, TripPlan};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents)
        .unwrap_or_else(|err| panic!("failed to write {path}: {err}"));
}

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Scratch {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl Scratch {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }
}

pub(super) fn location(id: &str, name: &str, address: &str, lon: f64, lat: f64) -> Location {
    Location::new(id, name, address, Coord { x: lon, y: lat }).expect("valid location")
}

pub(super) fn times_square() -> Location {
    location("times-square", "Times Square", "Manhattan, NY 10036", -73.9855, 40.7580)
}

pub(super) fn central_park() -> Location {
    location("central-park", "Central Park", "New York, NY", -73.9665, 40.7812)
}

/// Times Square to Central Park on foot.
pub(super) fn walking_trip() -> TripPlan {
    TripPlan {
        name: "Midtown stroll".into(),
        default_mode: TravelMode::Driving,
        locations: vec![times_square(), central_park()],
        modes: vec![ModeChoice {
            from: "times-square".into(),
            to: "central-park".into(),
            mode: TravelMode::Walking,
        }],
    }
}

pub(super) fn write_trip(path: &Utf8Path, plan: &TripPlan) {
    let payload = serde_json::to_string_pretty(plan).expect("serialize trip");
    write_utf8(path, payload.as_bytes());
}

pub(super) fn write_catalogue(path: &Utf8Path) {
    let catalogue = Catalogue {
        locations: vec![times_square(), central_park()],
        suggestions: vec![
            Suggestion {
                id: "suggestion-1".into(),
                name: "Hard Rock Cafe".into(),
                kind: SuggestionType::Restaurant,
                address: "1501 Broadway, New York, NY 10036".into(),
                coordinates: Coord {
                    x: -73.9861,
                    y: 40.7574,
                },
                image_url: None,
                rating: Some(4.1),
                distance_km: None,
            },
            Suggestion {
                id: "suggestion-3".into(),
                name: "Marriott Marquis".into(),
                kind: SuggestionType::Hotel,
                address: "1535 Broadway, New York, NY 10036".into(),
                coordinates: Coord {
                    x: -73.9865,
                    y: 40.7585,
                },
                image_url: None,
                rating: Some(4.4),
                distance_km: None,
            },
        ],
    };
    let payload = serde_json::to_string_pretty(&catalogue).expect("serialize catalogue");
    write_utf8(path, payload.as_bytes());
}
