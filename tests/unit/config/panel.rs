use super::*;

#[test]
fn empty_object_uses_defaults() {
    let cfg = PanelConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, PanelConfig::default());
    assert_eq!(cfg.canvas().unwrap(), Canvas::new(100, 100).unwrap());
    let opts = cfg.driver_opts();
    assert_eq!(opts.preview_scale, 4);
    assert_eq!(opts.interval_override, None);
}

#[test]
fn fields_override_defaults() {
    let json = r#"{ "width": 160, "height": 120, "preview_scale": 2, "frame_interval_ms": 0 }"#;
    let cfg = PanelConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.preview_scale), (160, 120, 2));
    assert_eq!(cfg.driver_opts().interval_override, Some(Duration::ZERO));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PanelConfig::from_reader("{ width: ".as_bytes()).unwrap_err();
    assert!(matches!(err, LedWheelError::Serde(_)));
    let err = PanelConfig::from_reader(r#"{ "colour": 1 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, LedWheelError::Serde(_)));
}

#[test]
fn out_of_range_values_are_config_errors() {
    for json in [
        r#"{ "width": 0 }"#,
        r#"{ "height": 5000 }"#,
        r#"{ "preview_scale": 0 }"#,
        r#"{ "preview_scale": 65 }"#,
    ] {
        let err = PanelConfig::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, LedWheelError::Config(_)), "{json}");
    }
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let err = PanelConfig::from_path("target/no_such_panel.json").unwrap_err();
    assert!(err.to_string().contains("no_such_panel.json"));
}
