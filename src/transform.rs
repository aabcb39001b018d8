//! 2D affine transforms on point sequences.
//!
//! The free functions [`translate`], [`scale`] and [`rotate`] each map a
//! point list to a fresh, grid-snapped list. [`Transform`] records a sequence
//! of those operations through a fluent API and replays them in order:
//!
//! ```ignore
//! let moved = Transform::new()
//!     .rotate(90.0, Point::new(5, 5))
//!     .scale(2.0, 2.0, Point::ORIGIN)
//!     .translate(10, 0)
//!     .apply(&points);
//! ```
//!
//! Each operation rounds its output with [`round_to_grid`], exactly as the
//! interactive tool applies one operation at a time to already-drawn shapes.

use crate::math::{round_to_grid, Point, Vec2};

/// Offsets every point by `(tx, ty)`. No rounding is involved.
pub fn translate(points: &[Point], tx: i32, ty: i32) -> Vec<Point> {
    let offset = Point::new(tx, ty);
    points.iter().map(|&p| p + offset).collect()
}

/// Scales every point by `(sx, sy)` about `fixed`, which stays in place.
///
/// The scaled coordinate `fixed + (p - fixed) * s` is rounded as a whole.
pub fn scale(points: &[Point], sx: f64, sy: f64, fixed: Point) -> Vec<Point> {
    points
        .iter()
        .map(|&p| {
            let d = p - fixed;
            Point::new(
                round_to_grid(fixed.x as f64 + d.x as f64 * sx),
                round_to_grid(fixed.y as f64 + d.y as f64 * sy),
            )
        })
        .collect()
}

/// Rotates every point by `angle_degrees` counter-clockwise (y axis up) about `pivot`.
pub fn rotate(points: &[Point], angle_degrees: f64, pivot: Point) -> Vec<Point> {
    let angle = angle_degrees.to_radians();
    let origin = pivot.to_vec2();
    points
        .iter()
        .map(|&p| {
            let rotated: Vec2 = (p.to_vec2() - origin).rotate(angle) + origin;
            rotated.to_point()
        })
        .collect()
}

/// One recorded affine operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AffineOp {
    Translate { tx: i32, ty: i32 },
    Scale { sx: f64, sy: f64, fixed: Point },
    Rotate { angle_degrees: f64, pivot: Point },
}

impl AffineOp {
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        match *self {
            AffineOp::Translate { tx, ty } => translate(points, tx, ty),
            AffineOp::Scale { sx, sy, fixed } => scale(points, sx, sy, fixed),
            AffineOp::Rotate { angle_degrees, pivot } => rotate(points, angle_degrees, pivot),
        }
    }

    /// The operation that undoes this one, up to rounding.
    ///
    /// A zero scale factor cannot be undone and yields `None`.
    pub fn inverse(&self) -> Option<AffineOp> {
        match *self {
            AffineOp::Translate { tx, ty } => Some(AffineOp::Translate { tx: -tx, ty: -ty }),
            AffineOp::Scale { sx, sy, fixed } => {
                if sx == 0.0 || sy == 0.0 {
                    None
                } else {
                    Some(AffineOp::Scale {
                        sx: 1.0 / sx,
                        sy: 1.0 / sy,
                        fixed,
                    })
                }
            }
            AffineOp::Rotate { angle_degrees, pivot } => Some(AffineOp::Rotate {
                angle_degrees: -angle_degrees,
                pivot,
            }),
        }
    }
}

/// An ordered list of affine operations.
///
/// Mutating methods return `&mut Self` for chaining.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    ops: Vec<AffineOp>,
}

impl Transform {
    /// Create an empty transform (the identity).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, tx: i32, ty: i32) -> &mut Self {
        self.ops.push(AffineOp::Translate { tx, ty });
        self
    }

    pub fn scale(&mut self, sx: f64, sy: f64, fixed: Point) -> &mut Self {
        self.ops.push(AffineOp::Scale { sx, sy, fixed });
        self
    }

    /// Uniform scale about `fixed`.
    pub fn scale_uniform(&mut self, s: f64, fixed: Point) -> &mut Self {
        self.scale(s, s, fixed)
    }

    pub fn rotate(&mut self, angle_degrees: f64, pivot: Point) -> &mut Self {
        self.ops.push(AffineOp::Rotate { angle_degrees, pivot });
        self
    }

    pub fn push(&mut self, op: AffineOp) -> &mut Self {
        self.ops.push(op);
        self
    }

    pub fn ops(&self) -> &[AffineOp] {
        &self.ops
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Applies every operation in recording order.
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        self.ops
            .iter()
            .fold(points.to_vec(), |current, op| op.apply(&current))
    }

    /// The transform that undoes this one, up to rounding, or `None` if any
    /// step is a zero scale.
    pub fn inverse(&self) -> Option<Transform> {
        let ops = self
            .ops
            .iter()
            .rev()
            .map(AffineOp::inverse)
            .collect::<Option<Vec<_>>>()?;
        Some(Transform { ops })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point::points;

    fn sample() -> Vec<Point> {
        points(&[(0, 0), (10, 0), (10, 5), (3, 8), (-4, 2), (17, -9)])
    }

    #[test]
    fn translate_offsets_exactly() {
        assert_eq!(
            translate(&points(&[(1, 2), (-3, 4)]), 5, -6),
            points(&[(6, -4), (2, -2)])
        );
    }

    #[test]
    fn scale_keeps_fixed_point() {
        let fixed = Point::new(2, 2);
        let scaled = scale(&points(&[(2, 2), (4, 3), (0, 0)]), 2.0, 3.0, fixed);
        assert_eq!(scaled, points(&[(2, 2), (6, 5), (-2, -4)]));
    }

    #[test]
    fn scale_rounds_half_away_from_zero() {
        let scaled = scale(&points(&[(1, 1), (-1, -1)]), 0.5, 2.5, Point::ORIGIN);
        assert_eq!(scaled, points(&[(1, 3), (-1, -3)]));
    }

    #[test]
    fn scale_rounds_the_whole_coordinate() {
        // 2 + (1 - 2) * 0.5 = 1.5 and 2 + (3 - 2) * 0.5 = 2.5
        let fixed = Point::new(2, 0);
        assert_eq!(scale(&points(&[(1, 0), (3, 0)]), 0.5, 1.0, fixed), points(&[(2, 0), (3, 0)]));

        // -2 + (-1 + 2) * 0.5 = -1.5 and -2 + (-3 + 2) * 0.5 = -2.5
        let fixed = Point::new(0, -2);
        assert_eq!(scale(&points(&[(0, -1), (0, -3)]), 1.0, 0.5, fixed), points(&[(0, -2), (0, -3)]));
    }

    #[test]
    fn rotate_quarter_turn() {
        let rotated = rotate(&points(&[(10, 0), (0, 10)]), 90.0, Point::ORIGIN);
        assert_eq!(rotated, points(&[(0, 10), (-10, 0)]));

        let about_pivot = rotate(&points(&[(6, 5)]), 180.0, Point::new(5, 5));
        assert_eq!(about_pivot, points(&[(4, 5)]));
    }

    #[test]
    fn rotate_round_trip_within_one_unit() {
        let pivots = [Point::ORIGIN, Point::new(7, -3), Point::new(-20, 15)];
        let original = sample();
        for &pivot in &pivots {
            for step in 0..24 {
                let theta = step as f64 * 15.0 + 7.5;
                let back = rotate(&rotate(&original, theta, pivot), -theta, pivot);
                for (a, b) in original.iter().zip(&back) {
                    assert!(
                        (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1,
                        "theta={theta} pivot={pivot}: {a} came back as {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn input_is_not_mutated() {
        let original = sample();
        let copy = original.clone();
        let _ = rotate(&original, 33.0, Point::new(1, 1));
        let _ = scale(&original, 1.5, 0.5, Point::ORIGIN);
        assert_eq!(original, copy);
    }

    #[test]
    fn fluent_transform_applies_in_order() {
        let mut t = Transform::new();
        t.translate(1, 0).scale_uniform(2.0, Point::ORIGIN);
        assert_eq!(t.ops().len(), 2);
        // (1,1) -> (2,1) -> (4,2); reversed order would give (3,2)
        assert_eq!(t.apply(&points(&[(1, 1)])), points(&[(4, 2)]));
    }

    #[test]
    fn empty_transform_is_identity() {
        let t = Transform::new();
        assert!(t.is_identity());
        assert_eq!(t.apply(&sample()), sample());
    }

    #[test]
    fn inverse_undoes_exact_ops() {
        let mut t = Transform::new();
        t.translate(3, -2)
            .rotate(90.0, Point::new(1, 1))
            .scale(2.0, 2.0, Point::ORIGIN);
        let inverse = t.inverse().unwrap();
        let pts = sample();
        assert_eq!(inverse.apply(&t.apply(&pts)), pts);
    }

    #[test]
    fn zero_scale_has_no_inverse() {
        let mut t = Transform::new();
        t.scale(0.0, 1.0, Point::ORIGIN);
        assert!(t.inverse().is_none());
    }
}
