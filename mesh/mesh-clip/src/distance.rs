//! Distance generators for the implicit clip primitives.
//!
//! Each primitive family has a closed-form distance evaluated independently
//! at every geometry dof. The field-level generators run the closed form over
//! a mesh through the dispatch adapter and wrap the result as a [`Field`]
//! whose dof layout is shared with the source geometry.

use mesh_dataset::{Aabb, Field, Mesh, Point3};

use crate::config::ClipPlane;
use crate::dispatch::evaluate_distance_field;
use crate::error::ClipResult;

/// Signed distance from a point to the surface of an axis-aligned box.
///
/// The maximum of the six half-space terms: negative strictly inside the box,
/// zero on the boundary, positive outside. On a face, exactly one term is
/// zero and dominates.
#[must_use]
pub fn box_distance(p: &Point3<f64>, bounds: &Aabb) -> f64 {
    let terms = [
        bounds.min.x - p.x,
        p.x - bounds.max.x,
        bounds.min.y - p.y,
        p.y - bounds.max.y,
        bounds.min.z - p.z,
        p.z - bounds.max.z,
    ];
    terms.into_iter().fold(f64::NEG_INFINITY, f64::max)
}

/// Euclidean distance from a point to a sphere center. Always non-negative;
/// points with distance below the radius are inside the sphere.
#[inline]
#[must_use]
pub fn sphere_distance(p: &Point3<f64>, center: &Point3<f64>) -> f64 {
    (p - center).norm()
}

/// Signed distance from a point to a plane: `dot(p - origin, unit_normal)`.
/// Negative on the normal's back side.
#[inline]
#[must_use]
pub fn plane_distance(p: &Point3<f64>, plane: &ClipPlane) -> f64 {
    (p - plane.origin).dot(&plane.normal)
}

/// Combined distance to a conjunction of planes: the minimum of the signed
/// per-plane distances.
#[must_use]
pub fn multi_plane_distance(p: &Point3<f64>, planes: &[ClipPlane]) -> f64 {
    planes
        .iter()
        .map(|plane| plane_distance(p, plane))
        .fold(f64::INFINITY, f64::min)
}

/// Box surface distance evaluated at every geometry dof of a mesh.
///
/// # Errors
///
/// Returns [`crate::ClipError::UnsupportedMesh`] for surface meshes.
pub fn box_distance_field(mesh: &Mesh, name: &str, bounds: &Aabb) -> ClipResult<Field> {
    evaluate_distance_field(mesh, name, |p| box_distance(p, bounds))
}

/// Sphere center distance evaluated at every geometry dof of a mesh.
///
/// # Errors
///
/// Returns [`crate::ClipError::UnsupportedMesh`] for surface meshes.
pub fn sphere_distance_field(mesh: &Mesh, name: &str, center: &Point3<f64>) -> ClipResult<Field> {
    evaluate_distance_field(mesh, name, |p| sphere_distance(p, center))
}

/// Signed plane distance evaluated at every geometry dof of a mesh.
///
/// # Errors
///
/// Returns [`crate::ClipError::UnsupportedMesh`] for surface meshes.
pub fn plane_distance_field(mesh: &Mesh, name: &str, plane: &ClipPlane) -> ClipResult<Field> {
    evaluate_distance_field(mesh, name, |p| plane_distance(p, plane))
}

/// Combined multi-plane distance evaluated at every geometry dof of a mesh.
///
/// # Errors
///
/// Returns [`crate::ClipError::UnsupportedMesh`] for surface meshes.
pub fn multi_plane_distance_field(
    mesh: &Mesh,
    name: &str,
    planes: &[ClipPlane],
) -> ClipResult<Field> {
    evaluate_distance_field(mesh, name, |p| multi_plane_distance(p, planes))
}
