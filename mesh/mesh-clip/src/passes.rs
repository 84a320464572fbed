//! Pass planning: how many clip passes a configuration needs, and which
//! distance generator and threshold each pass uses.

use mesh_dataset::{Field, Mesh};
use tracing::debug;

use crate::config::{ClipConfig, ClipShape};
use crate::distance::{
    box_distance_field, multi_plane_distance_field, plane_distance_field, sphere_distance_field,
};
use crate::driver::CLIP_FIELD_NAME;
use crate::error::ClipResult;

impl ClipConfig {
    /// Number of clipping passes this configuration requires.
    ///
    /// Box, sphere, and single-plane clips always take one pass. A
    /// multi-plane clip takes one pass per plane when multi-pass mode is on,
    /// otherwise a single pass over the combined minimum-distance field.
    /// Pure function of the configuration.
    #[must_use]
    pub fn num_passes(&self) -> usize {
        match self.shape() {
            ClipShape::MultiPlane(planes) if self.multi_pass() => planes.len(),
            _ => 1,
        }
    }
}

/// Build the distance field and clip threshold for one pass.
///
/// Dispatches by primitive family to the matching distance generator. For a
/// multi-plane configuration in multi-pass mode, `pass` selects the plane
/// clipped by this pass; in combined mode `pass` is ignored.
///
/// The threshold is 0 for every family except the sphere, whose distances
/// are compared against the radius.
///
/// # Errors
///
/// Returns [`crate::ClipError::UnsupportedMesh`] for surface meshes.
///
/// # Panics
///
/// Panics if `pass` is not below [`ClipConfig::num_passes`] for a
/// multi-plane configuration in multi-pass mode.
pub fn make_distances(config: &ClipConfig, mesh: &Mesh, pass: usize) -> ClipResult<(Field, f64)> {
    let (field, clip_value) = match config.shape() {
        ClipShape::Box(bounds) => (box_distance_field(mesh, CLIP_FIELD_NAME, bounds)?, 0.0),
        ClipShape::Sphere { center, radius } => (
            sphere_distance_field(mesh, CLIP_FIELD_NAME, center)?,
            *radius,
        ),
        ClipShape::Plane(plane) => (plane_distance_field(mesh, CLIP_FIELD_NAME, plane)?, 0.0),
        ClipShape::MultiPlane(planes) => {
            if config.multi_pass() {
                // One plane per pass; the driver never asks for a pass
                // beyond the plane count.
                let plane = &planes[pass];
                (plane_distance_field(mesh, CLIP_FIELD_NAME, plane)?, 0.0)
            } else {
                (multi_plane_distance_field(mesh, CLIP_FIELD_NAME, planes)?, 0.0)
            }
        }
    };
    debug!(
        pass,
        clip_value,
        dofs = field.values().len(),
        "distance field generated"
    );
    Ok((field, clip_value))
}
