//! Overlay renderer tests
//!
//! Tests for:
//! - Ring layout and the boundary ring
//! - Weight → color gradient
//! - View-plane alignment
//! - Pod vertex output

use glam::{Vec3, Vec4};
use proportional_pose::overlay::{
    BOUNDARY_COLOR, Overlay, RING_LAYERS, RING_SEGMENTS, RingVertex, weight_to_color,
};
use proportional_pose::{Configuration, ViewOrientation};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec4_approx(a: Vec4, b: Vec4) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn config(radius: f32, exponent: f32) -> Configuration {
    let mut config = Configuration::enabled();
    config.radius = radius;
    config.falloff_exponent = exponent;
    config
}

// ============================================================================
// Colors
// ============================================================================

#[test]
fn gradient_runs_green_yellow_red() {
    assert!(vec4_approx(weight_to_color(0.0), Vec4::new(0.0, 1.0, 0.0, 0.5)));
    assert!(vec4_approx(weight_to_color(0.25), Vec4::new(0.5, 1.0, 0.0, 0.5)));
    assert!(vec4_approx(weight_to_color(0.5), Vec4::new(1.0, 1.0, 0.0, 0.5)));
    assert!(vec4_approx(weight_to_color(0.75), Vec4::new(1.0, 0.5, 0.0, 0.5)));
    assert!(vec4_approx(weight_to_color(1.0), Vec4::new(1.0, 0.0, 0.0, 0.5)));
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn rings_step_out_to_the_radius() {
    let overlay = Overlay::build(Vec3::ZERO, &config(1.0, 2.0), &ViewOrientation::IDENTITY);
    assert_eq!(overlay.rings.len(), RING_LAYERS + 1);

    for (i, ring) in overlay.rings.iter().take(RING_LAYERS).enumerate() {
        assert!(approx_eq(ring.radius, (i + 1) as f32 / RING_LAYERS as f32));
        assert_eq!(ring.points.len(), RING_SEGMENTS);
    }

    // Innermost ring: weight (7/8)^2
    let inner = overlay.rings[0].color;
    assert!(vec4_approx(inner, weight_to_color(0.765_625)));
    // Outermost layer sits on the radius: weight 0 (green)
    assert!(vec4_approx(
        overlay.rings[RING_LAYERS - 1].color,
        Vec4::new(0.0, 1.0, 0.0, 0.5)
    ));

    let boundary = overlay.boundary().unwrap();
    assert!(approx_eq(boundary.radius, 1.0));
    assert_eq!(boundary.color, BOUNDARY_COLOR);
}

#[test]
fn rings_lie_in_view_plane_around_center() {
    let center = Vec3::new(1.0, 2.0, 3.0);
    let view = ViewOrientation::looking_at(Vec3::new(1.0, 2.0, 10.0), center, Vec3::Y);
    let overlay = Overlay::build(center, &config(0.5, 2.0), &view);

    let forward = view.forward();
    for ring in &overlay.rings {
        for point in &ring.points {
            let offset = *point - center;
            assert!(approx_eq(offset.length(), ring.radius));
            assert!(approx_eq(offset.dot(forward), 0.0));
        }
    }
}

// ============================================================================
// Vertices
// ============================================================================

#[test]
fn vertices_form_closed_line_list() {
    let overlay = Overlay::build(Vec3::ZERO, &config(1.0, 2.0), &ViewOrientation::IDENTITY);
    let vertices = overlay.vertices();
    assert_eq!(vertices.len(), (RING_LAYERS + 1) * RING_SEGMENTS * 2);

    // Last segment of the first ring closes the loop
    let last = vertices[RING_SEGMENTS * 2 - 1];
    assert_eq!(last.position, overlay.rings[0].points[0].to_array());

    let floats: &[f32] = bytemuck::cast_slice(&vertices);
    assert_eq!(floats.len(), vertices.len() * 7);
    assert_eq!(std::mem::size_of::<RingVertex>(), 28);
}
