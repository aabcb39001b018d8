//! Stitching vertex chains into pixels.

use super::{rasterize_line_with, LineAlgorithm};
use crate::math::Point;
use crate::polygon::Polygon;

/// Rasterizes each consecutive pair of `points` and concatenates the cells in order.
///
/// Shared vertices appear once per segment that touches them; nothing is
/// deduplicated. Fewer than two points yields nothing.
pub fn rasterize_polyline(points: &[Point]) -> Vec<Point> {
    rasterize_polyline_with(LineAlgorithm::Bresenham, points)
}

/// Like [`rasterize_polyline`], drawing each segment with `algorithm`.
pub fn rasterize_polyline_with(algorithm: LineAlgorithm, points: &[Point]) -> Vec<Point> {
    if points.len() < 2 {
        return Vec::new();
    }

    points
        .windows(2)
        .flat_map(|pair| rasterize_line_with(algorithm, pair[0], pair[1]))
        .collect()
}

/// Rasterizes the closed outline of a polygon, including the last -> first edge.
pub fn rasterize_polygon_outline(polygon: &Polygon) -> Vec<Point> {
    if polygon.len() < 2 {
        return polygon.vertices().to_vec();
    }
    rasterize_polyline(&polygon.closed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point::points;
    use crate::raster::dda;

    #[test]
    fn fewer_than_two_points_is_empty() {
        assert!(rasterize_polyline(&[]).is_empty());
        assert!(rasterize_polyline(&[Point::new(1, 1)]).is_empty());
    }

    #[test]
    fn concatenates_without_dedup() {
        let chain = points(&[(0, 0), (3, 0), (3, 2)]);
        let pixels = rasterize_polyline(&chain);
        // 4 cells on the first segment, 3 on the second, shared corner twice
        assert_eq!(pixels.len(), 7);
        assert_eq!(pixels[3], Point::new(3, 0));
        assert_eq!(pixels[4], Point::new(3, 0));
        assert_eq!(pixels.last(), Some(&Point::new(3, 2)));
    }

    #[test]
    fn with_dda_matches_per_segment_lines() {
        let chain = points(&[(0, 0), (5, 2), (5, 6)]);
        let mut expected = dda(chain[0], chain[1]);
        expected.extend(dda(chain[1], chain[2]));
        assert_eq!(rasterize_polyline_with(LineAlgorithm::Dda, &chain), expected);
    }

    #[test]
    fn outline_closes_polygon() {
        let tri = Polygon::from_coords(&[(0, 0), (4, 0), (0, 4)]);
        let pixels = rasterize_polygon_outline(&tri);
        assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
        assert_eq!(pixels.last(), Some(&Point::new(0, 0)));
        assert!(pixels.contains(&Point::new(0, 2)));
    }
}
