#![allow(clippy::float_cmp)]

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- ChartGeometry::new ---

#[test]
fn base_size_geometry() {
    let g = ChartGeometry::new(600.0, 10);
    assert_eq!(g.center, 300.0);
    assert_eq!(g.radius, 220.0);
    assert_eq!(g.label_offset, 44.0);
    assert_eq!(g.slice_count, 10);
}

#[test]
fn label_offset_scales_above_its_floor() {
    let g = ChartGeometry::new(1200.0, 10);
    assert_eq!(g.radius, 440.0);
    assert_eq!(g.label_offset, 70.0);
}

#[test]
fn label_offset_never_below_floor() {
    let g = ChartGeometry::new(300.0, 10);
    assert_eq!(g.radius, 110.0);
    assert_eq!(g.label_offset, 44.0);
}

#[test]
fn doubling_size_doubles_center_and_radius() {
    let small = ChartGeometry::new(300.0, 6);
    let large = ChartGeometry::new(600.0, 6);
    assert_eq!(large.center, small.center * 2.0);
    assert_eq!(large.radius, small.radius * 2.0);
}

#[test]
fn value_radius_is_linear() {
    let g = ChartGeometry::new(600.0, 10);
    assert_eq!(g.value_radius(10), 220.0);
    assert_eq!(g.value_radius(5), 110.0);
    assert!(approx_eq(g.value_radius(1), 22.0));
}

#[test]
fn slice_zero_starts_at_twelve_oclock() {
    let g = ChartGeometry::new(600.0, 4);
    assert_eq!(g.slice_start(0), -FRAC_PI_2);
    assert!(approx_eq(g.slice_mid(0), -FRAC_PI_2 + PI / 4.0));
    assert!(approx_eq(g.slice_start(1), 0.0));
}

#[test]
fn polar_points_down_for_positive_half_pi() {
    let g = ChartGeometry::new(600.0, 4);
    let p = g.polar(FRAC_PI_2, 100.0);
    assert!(approx_eq(p.x, 300.0));
    assert!(approx_eq(p.y, 400.0));
}

// --- normalize_angle ---

#[test]
fn normalize_wraps_negative_angles() {
    assert!(approx_eq(normalize_angle(-FRAC_PI_2), 3.0 * FRAC_PI_2));
    assert!(approx_eq(normalize_angle(TAU + 1.0), 1.0));
}

#[test]
fn normalize_stays_below_tau() {
    for angle in [-1e-18, -f64::EPSILON, TAU, 10.0 * TAU, -10.0 * TAU] {
        let n = normalize_angle(angle);
        assert!((0.0..TAU).contains(&n), "{angle} normalized to {n}");
    }
}

// --- angle_to_slice_index ---

#[test]
fn straight_up_is_slice_zero() {
    assert_eq!(angle_to_slice_index(-FRAC_PI_2, 10), Some(0));
}

#[test]
fn straight_right_is_quarter_turn() {
    assert_eq!(angle_to_slice_index(0.0, 4), Some(1));
    assert_eq!(angle_to_slice_index(0.0, 8), Some(2));
}

#[test]
fn just_left_of_twelve_is_last_slice() {
    assert_eq!(angle_to_slice_index(-FRAC_PI_2 - 0.01, 10), Some(9));
}

#[test]
fn hair_left_of_twelve_is_last_slice() {
    // Rotates to just below 2π, which divides out to exactly n for these counts.
    let angle = -FRAC_PI_2 - 1e-15;
    for n in [3, 6, 10, 12, 24] {
        assert_eq!(angle_to_slice_index(angle, n), Some(n - 1), "n={n}");
    }
}

#[test]
fn near_twelve_always_in_range() {
    for n in 1..=40 {
        for offset in [-1e-12, -1e-15, 0.0, 1e-15, 1e-12] {
            let index = angle_to_slice_index(-FRAC_PI_2 + offset, n);
            assert!(index.is_some_and(|i| i < n), "n={n} offset={offset} gave {index:?}");
        }
    }
}

#[test]
fn midpoint_of_every_slice_maps_back() {
    for n in 1..=24 {
        let g = ChartGeometry::new(600.0, n);
        for i in 0..n {
            assert_eq!(angle_to_slice_index(g.slice_mid(i), n), Some(i), "n={n} i={i}");
        }
    }
}

#[test]
fn single_slice_covers_everything() {
    for angle in [-PI, -1.0, 0.0, 1.0, PI] {
        assert_eq!(angle_to_slice_index(angle, 1), Some(0));
    }
}

#[test]
fn zero_slices_has_no_index() {
    assert_eq!(angle_to_slice_index(0.0, 0), None);
}

#[test]
fn non_finite_angle_has_no_index() {
    assert_eq!(angle_to_slice_index(f64::NAN, 10), None);
    assert_eq!(angle_to_slice_index(f64::INFINITY, 10), None);
}
