use super::*;

#[test]
fn test_named_preset_weights() {
    let w = Preset::Aschenbrenner.weights();
    assert_eq!(w.capabilities(), 0.2);
    assert_eq!(w.agents(), 0.3);
    assert_eq!(w.inputs(), 0.4);
    assert_eq!(w.security(), 0.1);

    for &preset in preset_order() {
        assert!((preset.weights().sum() - 1.0).abs() < 1e-9, "{preset}");
    }
}

#[test]
fn test_named_presets_pass_validation() {
    for &preset in preset_order() {
        let w = preset.weights();
        let validated =
            PresetWeights::new(w.capabilities(), w.agents(), w.inputs(), w.security()).unwrap();
        assert_eq!(validated, w);
    }
}

#[test]
fn test_preset_from_str_roundtrips_slug() {
    for &preset in preset_order() {
        assert_eq!(preset.slug().parse::<Preset>().unwrap(), preset);
    }
    assert_eq!("AI2027".parse::<Preset>().unwrap(), Preset::Ai2027);
    assert!("custom".parse::<Preset>().is_err());
}

#[test]
fn test_weights_reject_negative_and_non_finite() {
    assert!(matches!(
        PresetWeights::new(-0.1, 0.5, 0.5, 0.1),
        Err(ScoringError::InvalidArgument(_))
    ));
    assert!(PresetWeights::new(f64::NAN, 0.5, 0.5, 0.1).is_err());
    assert!(PresetWeights::new(0.5, f64::INFINITY, 0.5, 0.1).is_err());
}

#[test]
fn test_weights_reject_all_zero() {
    assert!(PresetWeights::new(0.0, 0.0, 0.0, 0.0).is_err());
    assert!(PresetWeights::new(0.0, 0.0, 1.0, 0.0).is_ok());
}

#[test]
fn test_weights_deserialize_validates() {
    let ok: PresetWeights =
        serde_json::from_str(r#"{"capabilities":0.6,"inputs":0.4}"#).unwrap();
    assert_eq!(ok.agents(), 0.0);
    assert_eq!(ok.inputs(), 0.4);

    assert!(serde_json::from_str::<PresetWeights>(r#"{"capabilities":-1}"#).is_err());
}
