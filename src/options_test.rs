#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults() {
    let o = ChartOptions::default();
    assert_eq!(o.size, 600.0);
    assert!(!o.read_only);
    assert_eq!(o.device_pixel_ratio, None);
    assert_eq!(o.label_padding, 16.0);
    assert_eq!(o.font_family, "\"Patrick Hand\"");
}

#[test]
fn from_json_empty_object_takes_defaults() {
    let Ok(o) = ChartOptions::from_json("{}") else {
        panic!("empty object should parse");
    };
    assert_eq!(o, ChartOptions::default());
}

#[test]
fn from_json_reads_camel_case_fields() {
    let json = r#"{"size": 400, "readOnly": true, "devicePixelRatio": 2, "labelPadding": 8, "fontFamily": "serif"}"#;
    let Ok(o) = ChartOptions::from_json(json) else {
        panic!("options should parse");
    };
    assert_eq!(o.size, 400.0);
    assert!(o.read_only);
    assert_eq!(o.device_pixel_ratio, Some(2.0));
    assert_eq!(o.label_padding, 8.0);
    assert_eq!(o.font_family, "serif");
}

#[test]
fn from_json_rejects_malformed() {
    let err = ChartOptions::from_json("{size:").err();
    assert_eq!(err.map(|e| e.error_code()), Some("E_JSON"));
}

#[test]
fn from_json_rejects_zero_size() {
    let err = ChartOptions::from_json(r#"{"size": 0}"#).err();
    assert!(matches!(err, Some(ChartError::InvalidSize(s)) if s == 0.0));
}

#[test]
fn validate_rejects_bad_dpr_and_padding() {
    let o = ChartOptions { device_pixel_ratio: Some(-1.0), ..ChartOptions::default() };
    assert!(o.validate().is_err());
    let o = ChartOptions { label_padding: f64::NAN, ..ChartOptions::default() };
    assert!(o.validate().is_err());
    let o = ChartOptions { label_padding: 0.0, ..ChartOptions::default() };
    assert!(o.validate().is_ok());
}

#[test]
fn validate_size_bounds() {
    assert!(validate_size(1.0).is_ok());
    assert!(validate_size(0.0).is_err());
    assert!(validate_size(-5.0).is_err());
    assert!(validate_size(f64::INFINITY).is_err());
    assert!(validate_size(f64::NAN).is_err());
}

#[test]
fn from_json_null_ratio_follows_display() {
    let Ok(o) = ChartOptions::from_json(r#"{"devicePixelRatio": null}"#) else {
        panic!("null ratio should parse");
    };
    assert_eq!(o.device_pixel_ratio, None);
}

// --- resolve_device_pixel_ratio ---

#[test]
fn detected_ratio_used_without_override() {
    assert_eq!(resolve_device_pixel_ratio(None, 2.0), 2.0);
    assert_eq!(resolve_device_pixel_ratio(None, 1.5), 1.5);
}

#[test]
fn override_wins_over_detected_ratio() {
    assert_eq!(resolve_device_pixel_ratio(Some(1.0), 3.0), 1.0);
}

#[test]
fn unusable_detected_ratio_falls_back_to_one() {
    assert_eq!(resolve_device_pixel_ratio(None, 0.0), 1.0);
    assert_eq!(resolve_device_pixel_ratio(None, f64::NAN), 1.0);
}

// --- fit_chart_size ---

#[test]
fn fit_uses_smaller_side() {
    assert_eq!(fit_chart_size(500.0, 420.0), 420.0);
}

#[test]
fn fit_caps_at_base_size() {
    assert_eq!(fit_chart_size(1920.0, 1080.0), 600.0);
}

#[test]
fn fit_floors_at_min_size() {
    assert_eq!(fit_chart_size(320.0, 100.0), 280.0);
    assert_eq!(fit_chart_size(f64::NAN, f64::NAN), 280.0);
}
