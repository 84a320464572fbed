//! Mesh dispatch adapter.
//!
//! Resolves a polymorphic mesh handle to a supported concrete element kind
//! and runs a per-dof evaluation against its geometry buffer. The kind is
//! resolved once per call; the evaluation itself is a data-parallel map over
//! the flat dof index range with one write per output slot.

use mesh_dataset::{Field, Mesh, Point3, ScalarDofs};
use rayon::prelude::*;

use crate::error::{ClipError, ClipResult};

/// Evaluate a per-point function over every geometry dof of a volume mesh,
/// wrapping the result as a scalar [`Field`] with the mesh's element kind and
/// interpolation order. The output buffer shares the geometry's dof layout.
///
/// # Errors
///
/// Returns [`ClipError::UnsupportedMesh`] when the mesh is not a supported
/// volume kind (surface meshes cannot be clipped).
pub fn evaluate_distance_field<F>(mesh: &Mesh, name: &str, eval: F) -> ClipResult<Field>
where
    F: Fn(&Point3<f64>) -> f64 + Sync,
{
    let shape = mesh.shape();
    if !shape.is_volume() {
        return Err(ClipError::UnsupportedMesh { shape });
    }
    let geometry = mesh.geometry();
    let distances: Vec<f64> = geometry.values().par_iter().map(|p| eval(p)).collect();
    let values = ScalarDofs::derived(geometry, distances);
    Ok(Field::new(name, shape, mesh.order(), values))
}
