use super::*;

#[test]
fn defaults_match_the_cli_defaults() {
    let cfg = AnimationConfig::default();
    assert_eq!(cfg.static_duration, 1.0);
    assert_eq!(cfg.transition_duration, 0.0);
    assert_eq!(cfg.loop_count, 0);
    assert_eq!(cfg.precision, 6);
    assert_eq!(cfg.mode, AnimationMode::Structural);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = AnimationConfig::from_json(r#"{ "transition_duration": 0.5, "mode": "basic" }"#)
        .unwrap();
    assert_eq!(cfg.transition_duration, 0.5);
    assert_eq!(cfg.static_duration, 1.0);
    assert_eq!(cfg.mode, AnimationMode::Basic);
}

#[test]
fn unknown_fields_and_bad_ranges_are_rejected() {
    assert!(AnimationConfig::from_json(r#"{ "speed": 2 }"#).is_err());
    let err = AnimationConfig::from_json(r#"{ "static_duration": -1 }"#).unwrap_err();
    assert!(matches!(err, SvganimError::Validation(_)));

    let cfg = AnimationConfig {
        transition_duration: f64::NAN,
        ..AnimationConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn zero_durations_pass_validation() {
    let cfg = AnimationConfig {
        static_duration: 0.0,
        transition_duration: 0.0,
        ..AnimationConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn repeat_count_is_indefinite_for_non_positive_loops() {
    let mut cfg = AnimationConfig::default();
    assert_eq!(cfg.repeat_count(), "indefinite");
    cfg.loop_count = -3;
    assert_eq!(cfg.repeat_count(), "indefinite");
    cfg.loop_count = 4;
    assert_eq!(cfg.repeat_count(), "4");
}
