use easetab::preview::PreviewConfig;
use easetab::{Ease, RoundingMode};

#[test]
fn curves_are_stored_by_name() {
    let json = serde_json::to_string(&Ease::InOutElastic).unwrap();
    assert_eq!(json, "\"InOutElastic\"");

    let ease: Ease = serde_json::from_str("\"OutBounce\"").unwrap();
    assert_eq!(ease, Ease::OutBounce);
}

#[test]
fn unknown_curve_name_is_rejected() {
    assert!(serde_json::from_str::<Ease>("\"InOutWobble\"").is_err());
}

#[test]
fn rounding_mode_round_trips() {
    let json = serde_json::to_string(&RoundingMode::Ceil).unwrap();
    assert_eq!(serde_json::from_str::<RoundingMode>(&json).unwrap(), RoundingMode::Ceil);
}

#[test]
fn preview_config_fills_in_defaults() {
    let config: PreviewConfig = serde_json::from_str(r#"{ "samples": 50, "cross": false }"#).unwrap();

    assert_eq!(config.samples, 50);
    assert!(!config.cross);
    assert_eq!(config.max_width, PreviewConfig::default().max_width);
    assert_eq!(config.validate(), Ok(()));
}
