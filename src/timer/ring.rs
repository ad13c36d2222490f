// file: src/timer/ring.rs
use std::f64::consts::TAU;

/// Layouts at or below this width get a radius proportional to the width.
pub const SMALL_LAYOUT_BREAKPOINT: f64 = 500.0;
pub const DYNAMIC_RADIUS_FACTOR: f64 = 0.9;
pub const FIXED_RADIUS: f64 = 339.0;
pub const STROKE_WIDTH: f64 = 11.0;

/// Progress ring derived from the countdown fraction and the layout width.
///
/// `dash_offset` is how much of the circumference is hidden: zero when the
/// whole session is left, the full circumference when nothing is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub stroke_width: f64,
    pub normalized_radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl RingGeometry {
    pub fn compute(layout_width: f64, fraction: f64) -> Self {
        let radius = radius_for_width(layout_width);
        // Tiny layouts leave no room inside the stroke
        let normalized_radius = (radius - STROKE_WIDTH).max(0.0);
        let circumference = TAU * normalized_radius;
        let fraction = fraction.clamp(0.0, 1.0);

        Self {
            radius,
            stroke_width: STROKE_WIDTH,
            normalized_radius,
            circumference,
            dash_offset: circumference * (1.0 - fraction),
        }
    }

    /// Angle in radians covered by the visible part of the ring.
    pub fn visible_sweep(&self) -> f64 {
        if self.circumference <= 0.0 {
            return 0.0;
        }
        TAU * (1.0 - self.dash_offset / self.circumference)
    }
}

pub fn radius_for_width(layout_width: f64) -> f64 {
    if layout_width <= SMALL_LAYOUT_BREAKPOINT {
        layout_width * DYNAMIC_RADIUS_FACTOR
    } else {
        FIXED_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_radius_rule() {
        assert!(approx(radius_for_width(400.0), 360.0));
        assert!(approx(radius_for_width(500.0), 450.0));
        assert!(approx(radius_for_width(600.0), 339.0));
        assert!(approx(radius_for_width(1920.0), 339.0));
    }

    #[test]
    fn test_full_and_empty_ring() {
        let full = RingGeometry::compute(600.0, 1.0);
        assert!(approx(full.normalized_radius, 328.0));
        assert!(approx(full.circumference, TAU * 328.0));
        assert!(approx(full.dash_offset, 0.0));
        assert!(approx(full.visible_sweep(), TAU));

        let empty = RingGeometry::compute(600.0, 0.0);
        assert!(approx(empty.dash_offset, empty.circumference));
        assert!(approx(empty.visible_sweep(), 0.0));
    }

    #[test]
    fn test_offset_within_bounds() {
        for width in [320.0, 400.0, 500.0, 800.0] {
            for step in 0..=10 {
                let fraction = f64::from(step) / 10.0;
                let ring = RingGeometry::compute(width, fraction);
                assert!(ring.dash_offset >= 0.0);
                assert!(ring.dash_offset <= ring.circumference + 1e-9);
            }
        }
    }

    #[test]
    fn test_tiny_layout_collapses_ring() {
        for width in [0.0, 10.0, 12.0] {
            let ring = RingGeometry::compute(width, 0.25);
            assert_eq!(ring.normalized_radius, 0.0);
            assert_eq!(ring.circumference, 0.0);
            assert_eq!(ring.dash_offset, 0.0);
            assert_eq!(ring.visible_sweep(), 0.0);
        }
    }

    #[test]
    fn test_half_fraction() {
        let ring = RingGeometry::compute(400.0, 0.5);
        assert!(approx(ring.normalized_radius, 349.0));
        assert!(approx(ring.dash_offset, ring.circumference / 2.0));
    }
}
