//! Grid points, real-valued vectors and the grid rounding policy.
//!
//! Every algorithm in this crate that snaps a real coordinate onto the pixel
//! grid goes through [`round_to_grid`], so a value exactly halfway between two
//! pixels lands on the same pixel no matter which algorithm produced it.

pub mod point;
pub mod vec2;
pub mod vec3;

pub use point::Point;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Snaps a real coordinate to the nearest grid line.
///
/// Ties round half away from zero: `2.5 -> 3`, `-2.5 -> -3`.
#[inline]
pub fn round_to_grid(value: f64) -> i32 {
    value.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(round_to_grid(1.2), 1);
        assert_eq!(round_to_grid(1.7), 2);
        assert_eq!(round_to_grid(-1.2), -1);
        assert_eq!(round_to_grid(-1.7), -2);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_to_grid(0.5), 1);
        assert_eq!(round_to_grid(2.5), 3);
        assert_eq!(round_to_grid(-0.5), -1);
        assert_eq!(round_to_grid(-2.5), -3);
    }
}
