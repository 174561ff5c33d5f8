//! Weight field tests
//!
//! Tests for:
//! - Boundary handling and the 0.003 floor
//! - Monotonicity in distance
//! - Inverted rotation weights for cloth mode
//! - Field construction from the configuration

use proportional_pose::falloff::{
    FalloffField, MIN_WEIGHT, falloff_weight, inverse_weight, ring_weight,
};
use proportional_pose::Configuration;

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Weight Function
// ============================================================================

#[test]
fn quarter_weight_at_half_radius() {
    let w = falloff_weight(1.0, 2.0, 2.0).unwrap();
    assert!(approx_eq(w, 0.25));
}

#[test]
fn boundary_is_excluded() {
    assert!(falloff_weight(2.0, 2.0, 2.0).is_none());
    assert!(falloff_weight(2.5, 2.0, 2.0).is_none());
    assert!(falloff_weight(1.999, 2.0, 2.0).is_some());
}

#[test]
fn weight_is_floored_near_boundary() {
    let w = falloff_weight(1.999, 2.0, 2.0).unwrap();
    assert!(approx_eq(w, MIN_WEIGHT));

    let steep = falloff_weight(1.5, 2.0, 6.0).unwrap();
    assert!(approx_eq(steep, MIN_WEIGHT));
}

#[test]
fn weight_is_non_increasing_in_distance() {
    for &exponent in &[0.1_f32, 0.5, 1.0, 2.0, 6.0] {
        let mut previous = f32::INFINITY;
        for step in 0..200 {
            let d = step as f32 * 0.01;
            let w = falloff_weight(d, 2.0, exponent).unwrap();
            assert!(
                w <= previous,
                "weight increased at d={d}, e={exponent}: {w} > {previous}"
            );
            assert!(w >= MIN_WEIGHT && w <= 1.0);
            previous = w;
        }
    }
}

#[test]
fn zero_radius_selects_nothing() {
    assert!(falloff_weight(0.0, 0.0, 2.0).is_none());
    assert!(inverse_weight(0.0, 0.0, 2.0).is_none());
}

#[test]
fn inverse_weight_grows_with_distance() {
    let near = inverse_weight(0.5, 2.0, 2.0).unwrap();
    let far = inverse_weight(1.5, 2.0, 2.0).unwrap();
    assert!(approx_eq(near, 0.0625));
    assert!(approx_eq(far, 0.5625));
    // Floor applies at the pivot itself
    assert!(approx_eq(inverse_weight(0.0, 2.0, 2.0).unwrap(), MIN_WEIGHT));
    assert!(inverse_weight(2.0, 2.0, 2.0).is_none());
}

#[test]
fn ring_weight_is_unfloored() {
    assert!(approx_eq(ring_weight(2.0, 2.0, 2.0), 0.0));
    assert!(approx_eq(ring_weight(1.0, 2.0, 1.0), 0.5));
    assert!(approx_eq(ring_weight(0.0, 2.0, 3.0), 1.0));
}

// ============================================================================
// Field
// ============================================================================

#[test]
fn field_contains_is_strict() {
    let field = FalloffField::new(1.0, 2.0);
    assert!(field.contains(0.999));
    assert!(!field.contains(1.0));
}

#[test]
fn translate_field_inverts_only_in_cloth_mode() {
    let mut config = Configuration::default();
    config.invert_falloff = true;
    assert!(!FalloffField::for_translate(&config).inverted);

    config.simulation_cloth = true;
    assert!(FalloffField::for_translate(&config).inverted);

    // Rotate sessions never invert
    assert!(!FalloffField::for_rotate(&config).inverted);
}

#[test]
fn uninverted_weights_match() {
    let field = FalloffField::new(2.0, 2.0);
    let weights = field.sample(1.0).unwrap();
    assert!(approx_eq(weights.motion, weights.rotation));
    assert!(field.sample(2.0).is_none());
}
