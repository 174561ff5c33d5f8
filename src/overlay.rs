//! Overlay Renderer
//!
//! Builds the influence-area visualization drawn in the viewport while a
//! session is active: concentric rings around the pivot, colored by the
//! falloff weight at their radius, plus a white boundary ring at the full
//! radius. Rings lie in the view plane so they always face the viewer.
//!
//! The overlay is pure data. Hosts upload [`Overlay::vertices`] as a line
//! list with whatever pipeline they draw gizmos with.

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

use crate::config::Configuration;
use crate::falloff::ring_weight;
use crate::view::ViewOrientation;

/// Number of weight-colored rings inside the boundary.
pub const RING_LAYERS: usize = 8;
/// Line segments per ring.
pub const RING_SEGMENTS: usize = 64;

pub const BOUNDARY_COLOR: Vec4 = Vec4::new(1.0, 1.0, 1.0, 0.8);
const LAYER_ALPHA: f32 = 0.5;

/// One overlay vertex, laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct RingVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Green (weight 0) → yellow (0.5) → red (1).
#[must_use]
pub fn weight_to_color(weight: f32) -> Vec4 {
    if weight > 0.5 {
        let t = (weight - 0.5) * 2.0;
        Vec4::new(1.0, 1.0 - t, 0.0, LAYER_ALPHA)
    } else {
        let t = weight * 2.0;
        Vec4::new(t, 1.0, 0.0, LAYER_ALPHA)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub radius: f32,
    pub color: Vec4,
    /// Closed loop, `RING_SEGMENTS` points; the last connects to the first.
    pub points: Vec<Vec3>,
}

impl Ring {
    fn new(center: Vec3, radius: f32, color: Vec4, view: &ViewOrientation) -> Self {
        let points = (0..RING_SEGMENTS)
            .map(|i| {
                let angle = TAU * i as f32 / RING_SEGMENTS as f32;
                view.plane_point(center, radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        Self {
            radius,
            color,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub center: Vec3,
    /// Weight layers from the innermost outwards, then the boundary ring.
    pub rings: Vec<Ring>,
}

impl Overlay {
    #[must_use]
    pub fn build(center: Vec3, config: &Configuration, view: &ViewOrientation) -> Self {
        let radius = config.radius;
        let exponent = config.falloff_exponent;

        let mut rings = Vec::with_capacity(RING_LAYERS + 1);
        for layer in 1..=RING_LAYERS {
            let distance = radius * layer as f32 / RING_LAYERS as f32;
            let color = weight_to_color(ring_weight(distance, radius, exponent));
            rings.push(Ring::new(center, distance, color, view));
        }
        rings.push(Ring::new(center, radius, BOUNDARY_COLOR, view));

        Self { center, rings }
    }

    /// The boundary ring at the full radius.
    #[must_use]
    pub fn boundary(&self) -> Option<&Ring> {
        self.rings.last()
    }

    /// Flattens every ring into a line list (two vertices per segment).
    #[must_use]
    pub fn vertices(&self) -> Vec<RingVertex> {
        let mut vertices = Vec::with_capacity(self.rings.len() * RING_SEGMENTS * 2);
        for ring in &self.rings {
            let color = ring.color.to_array();
            let count = ring.points.len();
            for i in 0..count {
                let a = ring.points[i];
                let b = ring.points[(i + 1) % count];
                vertices.push(RingVertex {
                    position: a.to_array(),
                    color,
                });
                vertices.push(RingVertex {
                    position: b.to_array(),
                    color,
                });
            }
        }
        vertices
    }
}
