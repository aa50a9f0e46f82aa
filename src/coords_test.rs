#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn mouse(x: f64, y: f64) -> PointerSample {
    PointerSample::Mouse(Point::new(x, y))
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

// --- ClientRect ---

#[test]
fn rect_usable_when_positive() {
    assert!(ClientRect::new(0.0, 0.0, 600.0, 600.0).is_usable());
}

#[test]
fn rect_unusable_when_zero_or_nan() {
    assert!(!ClientRect::new(0.0, 0.0, 0.0, 600.0).is_usable());
    assert!(!ClientRect::new(0.0, 0.0, 600.0, 0.0).is_usable());
    assert!(!ClientRect::new(0.0, 0.0, f64::NAN, 600.0).is_usable());
    assert!(!ClientRect::new(0.0, 0.0, -10.0, 600.0).is_usable());
}

// --- PointerSample ---

#[test]
fn touch_sample_uses_first_touch() {
    let sample = PointerSample::Touches(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    assert_eq!(sample.client_point(), Some(Point::new(1.0, 2.0)));
}

#[test]
fn touch_sample_without_touches_has_no_point() {
    assert_eq!(PointerSample::Touches(Vec::new()).client_point(), None);
}

// --- to_logical ---

#[test]
fn to_logical_identity_when_unscaled() {
    let mapper = CoordinateMapper::new(600.0);
    let rect = ClientRect::new(0.0, 0.0, 600.0, 600.0);
    let p = mapper.to_logical(&mouse(120.0, 450.0), &rect);
    assert_eq!(p, Some(Point::new(120.0, 450.0)));
}

#[test]
fn to_logical_subtracts_rect_origin() {
    let mapper = CoordinateMapper::new(600.0);
    let rect = ClientRect::new(40.0, 100.0, 600.0, 600.0);
    let p = mapper.to_logical(&mouse(340.0, 400.0), &rect);
    assert_eq!(p, Some(Point::new(300.0, 300.0)));
}

#[test]
fn to_logical_undoes_css_scaling() {
    // A 600-logical chart squeezed to 300 CSS pixels.
    let mapper = CoordinateMapper::new(600.0);
    let rect = ClientRect::new(10.0, 20.0, 300.0, 300.0);
    let p = mapper.to_logical(&mouse(160.0, 170.0), &rect);
    assert_eq!(p, Some(Point::new(300.0, 300.0)));
}

#[test]
fn to_logical_handles_non_uniform_scaling() {
    let mapper = CoordinateMapper::new(400.0);
    let rect = ClientRect::new(0.0, 0.0, 800.0, 200.0);
    let p = mapper.to_logical(&mouse(400.0, 100.0), &rect);
    assert_eq!(p, Some(Point::new(200.0, 200.0)));
}

#[test]
fn to_logical_zero_size_rect_is_none() {
    let mapper = CoordinateMapper::new(600.0);
    let rect = ClientRect::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(mapper.to_logical(&mouse(10.0, 10.0), &rect), None);
}

#[test]
fn to_logical_touch_without_touches_is_none() {
    let mapper = CoordinateMapper::new(600.0);
    let rect = ClientRect::new(0.0, 0.0, 600.0, 600.0);
    assert_eq!(mapper.to_logical(&PointerSample::Touches(Vec::new()), &rect), None);
}

#[test]
fn to_logical_first_touch_drives() {
    let mapper = CoordinateMapper::new(600.0);
    let rect = ClientRect::new(0.0, 0.0, 600.0, 600.0);
    let sample = PointerSample::Touches(vec![Point::new(50.0, 60.0), Point::new(500.0, 500.0)]);
    assert_eq!(mapper.to_logical(&sample, &rect), Some(Point::new(50.0, 60.0)));
}

// --- to_client ---

#[test]
fn to_client_inverts_to_logical() {
    let mapper = CoordinateMapper::new(600.0);
    let rect = ClientRect::new(13.0, 27.0, 450.0, 450.0);
    let client = Point::new(200.0, 321.0);
    let Some(logical) = mapper.to_logical(&PointerSample::Mouse(client), &rect) else {
        panic!("rect is usable");
    };
    assert!(point_approx_eq(mapper.to_client(logical, &rect), client));
}

#[test]
fn to_client_applies_scale_and_offset() {
    let mapper = CoordinateMapper::new(600.0);
    let rect = ClientRect::new(100.0, 50.0, 300.0, 300.0);
    let client = mapper.to_client(Point::new(300.0, 600.0), &rect);
    assert!(point_approx_eq(client, Point::new(250.0, 350.0)));
}
