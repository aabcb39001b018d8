//! 3D to 2D projections and wireframe solids.
//!
//! Vertices stay real-valued ([`Vec3`]) until they are projected; every
//! projection snaps its output with [`round_to_grid`].
//!
//! # Projections
//!
//! ```text
//!   orthogonal     drop one axis        frontal: (x, y)  topo: (x, z)  lado: (y, z)
//!   oblique        shift by depth       (x + k z cos a, y + k z sin a)
//!                                         cavalier k = 1, cabinet k = 0.5
//!   perspective    similar triangles    o.xy + (v.xy - o.xy) (o.z - plane_z) / (o.z - v.z)
//! ```
//!
//! Perspective falls back to dropping z for a vertex that is (nearly) level
//! with the observer, so nothing is ever divided by zero.

use std::fmt;

use crate::math::{round_to_grid, Point, Vec2, Vec3};
use crate::raster::rasterize_line;

/// Default receding-axis angle for oblique projections, in degrees.
pub const DEFAULT_OBLIQUE_ANGLE: f64 = 45.0;
/// Depth factor of the cavalier projection.
pub const CAVALIER_DEPTH: f64 = 1.0;
/// Depth factor of the cabinet projection.
pub const CABINET_DEPTH: f64 = 0.5;
/// Half the side length of the reference cube.
pub const DEFAULT_CUBE_SCALE: f64 = 20.0;
/// Depth differences below this count as level with the observer.
pub const COPLANAR_EPSILON: f64 = 1e-6;
/// Default perspective observer.
pub const DEFAULT_OBSERVER: Vec3 = Vec3::new(0.0, 0.0, -100.0);
/// Default z of the perspective projection plane.
pub const DEFAULT_PLANE_Z: f64 = 0.0;

/// Target plane of an orthogonal projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Plane {
    /// The xy plane; z is dropped.
    #[default]
    Frontal,
    /// The xz plane; y is dropped.
    Top,
    /// The yz plane; x is dropped.
    Side,
}

impl Plane {
    /// Looks a plane up by its menu name: `"frontal"`, `"topo"` or `"lado"`.
    pub fn from_name(name: &str) -> Option<Plane> {
        match name {
            "frontal" => Some(Plane::Frontal),
            "topo" => Some(Plane::Top),
            "lado" => Some(Plane::Side),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Plane::Frontal => "frontal",
            Plane::Top => "topo",
            Plane::Side => "lado",
        }
    }

    fn drop_axis(&self, v: Vec3) -> Vec2 {
        match self {
            Plane::Frontal => Vec2::new(v.x, v.y),
            Plane::Top => Vec2::new(v.x, v.z),
            Plane::Side => Vec2::new(v.y, v.z),
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A projection from 3D vertices onto the integer grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Orthogonal(Plane),
    Cavalier { angle: f64 },
    Cabinet { angle: f64 },
    Oblique { k: f64, angle: f64 },
    Perspective { observer: Vec3, plane_z: f64 },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective {
            observer: DEFAULT_OBSERVER,
            plane_z: DEFAULT_PLANE_Z,
        }
    }
}

impl Projection {
    pub fn cavalier() -> Self {
        Projection::Cavalier {
            angle: DEFAULT_OBLIQUE_ANGLE,
        }
    }

    pub fn cabinet() -> Self {
        Projection::Cabinet {
            angle: DEFAULT_OBLIQUE_ANGLE,
        }
    }

    /// Projects every vertex, preserving order.
    pub fn project(&self, vertices: &[Vec3]) -> Vec<Point> {
        match *self {
            Projection::Orthogonal(plane) => orthogonal(vertices, plane),
            Projection::Cavalier { angle } => oblique(vertices, CAVALIER_DEPTH, angle),
            Projection::Cabinet { angle } => oblique(vertices, CABINET_DEPTH, angle),
            Projection::Oblique { k, angle } => oblique(vertices, k, angle),
            Projection::Perspective { observer, plane_z } => perspective(vertices, observer, plane_z),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Orthogonal(plane) => write!(f, "Orthogonal ({plane})"),
            Projection::Cavalier { angle } => write!(f, "Cavalier ({angle}°)"),
            Projection::Cabinet { angle } => write!(f, "Cabinet ({angle}°)"),
            Projection::Oblique { k, angle } => write!(f, "Oblique (k={k}, {angle}°)"),
            Projection::Perspective { observer, plane_z } => write!(
                f,
                "Perspective (observer=({}, {}, {}), plane z={plane_z})",
                observer.x, observer.y, observer.z
            ),
        }
    }
}

/// Drops the axis perpendicular to `plane`.
pub fn orthogonal(vertices: &[Vec3], plane: Plane) -> Vec<Point> {
    vertices
        .iter()
        .map(|&v| plane.drop_axis(v).to_point())
        .collect()
}

/// Shifts each vertex's `(x, y)` by `k * z` along `angle_degrees`.
pub fn oblique(vertices: &[Vec3], k: f64, angle_degrees: f64) -> Vec<Point> {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    vertices
        .iter()
        .map(|v| {
            Point::new(
                round_to_grid(v.x + k * v.z * cos),
                round_to_grid(v.y + k * v.z * sin),
            )
        })
        .collect()
}

pub fn cavalier(vertices: &[Vec3], angle_degrees: f64) -> Vec<Point> {
    oblique(vertices, CAVALIER_DEPTH, angle_degrees)
}

pub fn cabinet(vertices: &[Vec3], angle_degrees: f64) -> Vec<Point> {
    oblique(vertices, CABINET_DEPTH, angle_degrees)
}

/// Central projection from `observer` onto the plane `z = plane_z`.
pub fn perspective(vertices: &[Vec3], observer: Vec3, plane_z: f64) -> Vec<Point> {
    let plane_distance = observer.z - plane_z;
    vertices
        .iter()
        .map(|&v| {
            let dist_z = observer.z - v.z;
            if dist_z.abs() < COPLANAR_EPSILON {
                log::debug!(
                    "perspective: vertex ({}, {}, {}) is level with the observer, dropping z",
                    v.x,
                    v.y,
                    v.z
                );
                return Plane::Frontal.drop_axis(v).to_point();
            }
            let ratio = plane_distance / dist_z;
            Point::new(
                round_to_grid(observer.x + (v.x - observer.x) * ratio),
                round_to_grid(observer.y + (v.y - observer.y) * ratio),
            )
        })
        .collect()
}

/// The eight corners of an axis-aligned cube centred on the origin, `scale`
/// units from the centre along each axis. Back face (z = -scale) first.
pub fn standard_cube(scale: f64) -> [Vec3; 8] {
    let s = scale;
    [
        Vec3::new(-s, -s, -s),
        Vec3::new(s, -s, -s),
        Vec3::new(s, s, -s),
        Vec3::new(-s, s, -s),
        Vec3::new(-s, -s, s),
        Vec3::new(s, -s, s),
        Vec3::new(s, s, s),
        Vec3::new(-s, s, s),
    ]
}

/// Index pairs of the cube's 12 edges: back face, front face, then connectors.
pub fn cube_edges() -> [(usize, usize); 12] {
    [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ]
}

/// A solid as vertices plus index-pair edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
}

impl Wireframe {
    pub fn new(vertices: Vec<Vec3>, edges: Vec<(usize, usize)>) -> Self {
        Self { vertices, edges }
    }

    /// The reference cube; see [`standard_cube`].
    pub fn cube(scale: f64) -> Self {
        Self::new(standard_cube(scale).to_vec(), cube_edges().to_vec())
    }

    /// Projects every edge's endpoints.
    ///
    /// # Panics
    ///
    /// Panics if an edge refers to a vertex index that does not exist.
    pub fn project(&self, projection: &Projection) -> Vec<(Point, Point)> {
        let projected = projection.project(&self.vertices);
        self.edges
            .iter()
            .map(|&(a, b)| {
                assert!(
                    a < projected.len() && b < projected.len(),
                    "wireframe edge ({a}, {b}) out of range for {} vertices",
                    projected.len()
                );
                (projected[a], projected[b])
            })
            .collect()
    }

    /// Projects the wireframe and rasterizes every edge with Bresenham.
    ///
    /// Cells shared by several edges appear once per edge.
    pub fn rasterize(&self, projection: &Projection) -> Vec<Point> {
        self.project(projection)
            .into_iter()
            .flat_map(|(a, b)| rasterize_line(a, b))
            .collect()
    }
}
