extern crate bezier_curves;
extern crate flo_binding;
extern crate serde_json;
extern crate env_logger;

use bezier_curves::*;
use flo_binding::*;

use std::fs;
use std::env;
use std::sync::*;

fn sample_curve() -> bezier::Curve<Coord2> {
    bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(10.0, 20.0), Coord2(30.0, 40.0)), Coord2(50.0, 50.0))
}

fn bits(curve: &bezier::Curve<Coord2>) -> Vec<u64> {
    curve.all_points().iter()
        .flat_map(|point| vec![point.x().to_bits(), point.y().to_bits()])
        .collect()
}

#[test]
fn save_and_reload_is_bit_identical() {
    let _ = env_logger::try_init();

    let document    = CurveDocument::with_curve(&sample_curve());
    let json        = document.to_json().unwrap();
    let loaded      = CurveDocument::from_json(&json).unwrap();

    assert!(bits(&loaded.curve().curve()) == bits(&sample_curve()));
}

#[test]
fn awkward_values_survive_round_trip() {
    let curve       = bezier::Curve::from_points(Coord2(0.1 + 0.2, 1.0/3.0), (Coord2(std::f64::consts::PI, -1e-310), Coord2(1e300, 0.5)), Coord2(123456789.123456789, 2.0f64.sqrt()));
    let document    = CurveDocument::with_curve(&curve);

    let mut saved   = vec![];
    document.save(&mut saved).unwrap();

    let reloaded    = CurveDocument::new();
    reloaded.load(&mut &saved[..]).unwrap();

    assert!(bits(&reloaded.curve().curve()) == bits(&curve));
}

#[test]
fn file_format_is_json() {
    let document    = CurveDocument::with_curve(&sample_curve());
    let json        = document.to_json().unwrap();
    let file: CurveFile = serde_json::from_str(&json).unwrap();

    assert!(file.version == CURVE_FILE_VERSION);
    assert!(file.curve.p1 == Coord2(10.0, 20.0));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["version"] == 1);
    assert!(value["curve"]["p3"][0] == 50.0);
}

#[test]
fn load_replaces_points_in_place() {
    let document    = CurveDocument::new();
    let p3          = document.curve().p3.clone();
    let json        = CurveDocument::with_curve(&sample_curve()).to_json().unwrap();

    document.load(&mut json.as_bytes()).unwrap();

    assert!(p3.get() == Coord2(50.0, 50.0));
    assert!(document.curve().curve() == sample_curve());
}

#[test]
fn load_notifies_observers() {
    let document    = CurveDocument::new();
    let curve       = document.curve().clone();
    let computed    = computed(move || curve.curve());
    let notified    = Arc::new(Mutex::new(false));
    let notify_flag = Arc::clone(&notified);

    assert!(computed.get() == bezier::Curve::empty());
    let _lifetime   = computed.when_changed(notify(move || *notify_flag.lock().unwrap() = true));

    let json        = CurveDocument::with_curve(&sample_curve()).to_json().unwrap();
    document.load(&mut json.as_bytes()).unwrap();

    assert!(*notified.lock().unwrap());
    assert!(computed.get() == sample_curve());
}

#[test]
fn reject_unsupported_version() {
    let json    = r#"{ "version": 2, "curve": { "p0": [0.0, 0.0], "p1": [1.0, 1.0], "p2": [2.0, 2.0], "p3": [3.0, 3.0] } }"#;
    let result  = CurveDocument::from_json(json);

    assert!(matches!(result, Err(DocumentError::UnsupportedVersion(2))));
}

#[test]
fn reject_missing_point() {
    let json    = r#"{ "version": 1, "curve": { "p0": [0.0, 0.0], "p1": [1.0, 1.0], "p2": [2.0, 2.0] } }"#;
    let result  = CurveDocument::from_json(json);

    assert!(matches!(result, Err(DocumentError::Serialization(_))));
}

#[test]
fn failed_load_leaves_curve_alone() {
    let document = CurveDocument::with_curve(&sample_curve());

    assert!(document.load(&mut "not json".as_bytes()).is_err());
    assert!(document.curve().curve() == sample_curve());
}

#[test]
fn cannot_save_nan() {
    let document = CurveDocument::with_curve(&sample_curve());
    document.curve().p2.x.set(f64::NAN);

    let result = document.to_json();

    assert!(matches!(result, Err(DocumentError::InvalidCurve(ControlPoint::P2))));
    assert!(format!("{}", result.unwrap_err()) == "Point P2 of the curve is not a finite position");
}

#[test]
fn save_and_load_file() {
    let path        = env::temp_dir().join(format!("bezier_curves_document_{}.json", std::process::id()));
    let document    = CurveDocument::with_curve(&sample_curve());

    document.save_to_path(&path).unwrap();

    let loaded      = CurveDocument::new();
    let result      = loaded.load_from_path(&path);
    let _           = fs::remove_file(&path);

    assert!(result.is_ok());
    assert!(bits(&loaded.curve().curve()) == bits(&sample_curve()));
}

#[test]
fn missing_file_is_io_error() {
    let path    = env::temp_dir().join("bezier_curves_document_that_does_not_exist.json");
    let result  = CurveDocument::new().load_from_path(&path);

    assert!(matches!(result, Err(DocumentError::Io(_))));
}
