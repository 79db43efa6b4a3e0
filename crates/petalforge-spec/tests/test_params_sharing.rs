//! Integration tests for sharing parameter sets through JSON, query strings
//! and canonical hashes.

use petalforge_spec::{canonical_params_hash, Color, ParameterSet, ParamsError, PARAM_BOUNDS};
use pretty_assertions::assert_eq;

fn tuned() -> ParameterSet {
    ParameterSet {
        waviness: 1.234_567_891,
        staggered_rotation_rad: -0.7,
        num_petals: 9,
        num_layers: 31,
        inner_radius_min: 0.05,
        inner_radius_max: 2.5,
        angle_range_rad: 1.1,
        inner_amplitude: 0.75,
        stroke_width: 0.4,
        opacity_base: 0.33,
        opacity_variation: 0.21,
        line_rotation_spread_deg: -120.0,
        animation_duration_ms: 1500,
        background_color: Color::rgba(1, 2, 3, 128),
        line_color: Color::rgb(250, 240, 230),
    }
}

#[test]
fn test_query_round_trip_is_lossless() {
    let params = tuned();
    let query = params.to_query();
    assert!(query.contains("backgroundColor=%23010203"));
    assert_eq!(ParameterSet::from_query(&query).unwrap(), params);
    assert_eq!(
        ParameterSet::from_query(&format!("?{query}")).unwrap(),
        params
    );
}

#[test]
fn test_pairs_round_trip_is_lossless() {
    let params = tuned();
    let pairs = params.to_pairs();
    assert_eq!(pairs.len(), PARAM_BOUNDS.len());
    assert_eq!(ParameterSet::from_pairs(pairs).unwrap(), params);
}

#[test]
fn test_json_round_trip_and_hash() {
    let params = tuned();
    let json = params.to_json().unwrap();
    let back = ParameterSet::from_json(&json).unwrap();
    assert_eq!(back, params);
    assert_eq!(
        canonical_params_hash(&back).unwrap(),
        canonical_params_hash(&params).unwrap()
    );
    assert_ne!(
        canonical_params_hash(&params).unwrap(),
        canonical_params_hash(&ParameterSet::default()).unwrap()
    );
}

#[test]
fn test_out_of_range_values_are_clamped_on_decode() {
    let params =
        ParameterSet::from_query("numPetals=400&waviness=-3&opacityBase=7&animationDurationMs=99999")
            .unwrap();
    assert_eq!(params.num_petals, 36);
    assert_eq!(params.waviness, 0.0);
    assert_eq!(params.opacity_base, 1.0);
    assert_eq!(params.animation_duration_ms, 10_000);
}

#[test]
fn test_unknown_and_missing_keys() {
    let params = ParameterSet::from_query("theme=dark&numLayers=4").unwrap();
    assert_eq!(
        params,
        ParameterSet {
            num_layers: 4,
            ..Default::default()
        }
    );
}

#[test]
fn test_unparseable_values_are_errors() {
    match ParameterSet::from_query("waviness=wobbly") {
        Err(ParamsError::InvalidValue { key, value }) => {
            assert_eq!(key, "waviness");
            assert_eq!(value, "wobbly");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
    assert!(matches!(
        ParameterSet::from_query("lineColor=%23zzzzzz"),
        Err(ParamsError::InvalidColor(_))
    ));
}

#[test]
fn test_json_rejects_unknown_fields() {
    assert!(ParameterSet::from_json(r#"{"numPetals": 3, "sparkle": true}"#).is_err());
    let partial = ParameterSet::from_json(r#"{"numPetals": 3}"#).unwrap();
    assert_eq!(partial.num_petals, 3);
    assert_eq!(partial.num_layers, ParameterSet::default().num_layers);
}
