//! Wireframes loaded from Wavefront OBJ files.
//!
//! Every object in the file is merged into one [`Wireframe`]. Each face
//! contributes its boundary edges, and an edge shared by two faces is kept
//! once, so a closed mesh draws every edge a single time.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};
use crate::math::Vec3;
use crate::projection::Wireframe;

fn load_options() -> tobj::LoadOptions {
    // Keep polygons intact so quads stay quads instead of gaining diagonals.
    tobj::LoadOptions {
        triangulate: false,
        single_index: true,
        ..Default::default()
    }
}

/// Load an OBJ file as a wireframe.
///
/// Materials are ignored. Fails with [`Error::Obj`] if the file cannot be
/// read or parsed, and with [`Error::EmptyModel`] if it has no edges.
pub fn load_wireframe(path: impl AsRef<Path>) -> Result<Wireframe> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(path, &load_options())?;
    wireframe_from_models(&models, &path.display().to_string())
}

/// Load OBJ data from a reader. `name` is only used in error messages.
pub fn load_wireframe_from_reader<R: BufRead>(reader: &mut R, name: &str) -> Result<Wireframe> {
    let (models, _materials) = tobj::load_obj_buf(reader, &load_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })?;
    wireframe_from_models(&models, name)
}

fn wireframe_from_models(models: &[tobj::Model], name: &str) -> Result<Wireframe> {
    let mut vertices = Vec::new();
    let mut edges = Vec::new();
    let mut seen = HashSet::new();

    for model in models {
        let mesh = &model.mesh;
        let base = vertices.len();
        vertices.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0] as f64, p[1] as f64, p[2] as f64)),
        );

        for face in faces(mesh) {
            for (i, &a) in face.iter().enumerate() {
                let b = face[(i + 1) % face.len()];
                if a == b {
                    continue;
                }
                let edge = (base + a.min(b) as usize, base + a.max(b) as usize);
                if seen.insert(edge) {
                    edges.push(edge);
                }
            }
        }
        log::trace!("model {}: object '{}' has {} vertices", name, model.name, mesh.positions.len() / 3);
    }

    if edges.is_empty() {
        return Err(Error::EmptyModel(name.to_string()));
    }
    log::debug!("model {}: {} vertices, {} edges", name, vertices.len(), edges.len());
    Ok(Wireframe::new(vertices, edges))
}

/// Splits a mesh's index buffer into faces. Without arities every face is a triangle.
fn faces(mesh: &tobj::Mesh) -> Vec<&[u32]> {
    if mesh.face_arities.is_empty() {
        return mesh.indices.chunks_exact(3).collect();
    }
    let mut faces = Vec::with_capacity(mesh.face_arities.len());
    let mut start = 0;
    for &arity in &mesh.face_arities {
        let end = start + arity as usize;
        if let Some(face) = mesh.indices.get(start..end) {
            faces.push(face);
        }
        start = end;
    }
    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const QUAD: &str = "\
o quad
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";

    const TWO_TRIANGLES: &str = "\
v 0 0 0
v 2 0 0
v 2 2 0
v 0 2 0
f 1 2 3
f 1 3 4
";

    #[test]
    fn quad_keeps_four_edges() {
        let wf = load_wireframe_from_reader(&mut Cursor::new(QUAD), "quad").unwrap();
        assert_eq!(wf.vertices.len(), 4);
        assert_eq!(wf.edges.len(), 4);
        approx::assert_relative_eq!(wf.vertices[2].x, 1.0);
        approx::assert_relative_eq!(wf.vertices[2].y, 1.0);
    }

    #[test]
    fn shared_edges_are_deduplicated() {
        let wf = load_wireframe_from_reader(&mut Cursor::new(TWO_TRIANGLES), "pair").unwrap();
        // 3 + 3 edges, the diagonal shared
        assert_eq!(wf.edges.len(), 5);
        for &(a, b) in &wf.edges {
            assert!(a < b && b < wf.vertices.len());
        }
    }

    #[test]
    fn no_faces_is_an_error() {
        let err = load_wireframe_from_reader(&mut Cursor::new("v 0 0 0\n"), "dots").unwrap_err();
        assert!(matches!(err, Error::EmptyModel(ref name) if name == "dots"));
    }

    #[test]
    fn missing_file_is_an_obj_error() {
        let err = load_wireframe("does/not/exist.obj").unwrap_err();
        assert!(matches!(err, Error::Obj(_)));
    }
}
