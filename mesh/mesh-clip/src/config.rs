//! Clip configuration: which implicit primitive to clip against, and how.
//!
//! A [`ClipConfig`] is an immutable value passed into the clip driver. The
//! primitive families are mutually exclusive by construction; building a new
//! configuration is the only way to switch family.
//!
//! # Example
//!
//! ```
//! use mesh_clip::ClipConfig;
//! use mesh_dataset::{Aabb, Point3};
//!
//! // Keep the inside of a unit box, flipped.
//! let config = ClipConfig::box_clip(Aabb::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 1.0),
//! ))
//! .with_invert(true);
//! assert_eq!(config.num_passes(), 1);
//! ```

use mesh_dataset::{Aabb, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ClipError, ClipResult};

/// A clipping plane: a point on the plane and its normal.
///
/// Distances are positive on the side the normal points toward.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClipPlane {
    /// A point on the plane.
    pub origin: Point3<f64>,
    /// Unit normal of the plane.
    pub normal: Vector3<f64>,
}

impl ClipPlane {
    /// Create a plane, normalizing the normal to unit length.
    ///
    /// A zero-length normal is left as-is: every distance against such a
    /// plane evaluates to 0. This is a documented degenerate case, not an
    /// error.
    #[must_use]
    pub fn new(origin: Point3<f64>, normal: Vector3<f64>) -> Self {
        let mag = normal.norm();
        let normal = if mag > 0.0 { normal / mag } else { normal };
        Self { origin, normal }
    }
}

/// The implicit primitive a clip removes geometry against.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClipShape {
    /// Axis-aligned box; the keep threshold is 0 on the box surface distance.
    Box(Aabb),
    /// Sphere; the keep threshold is the radius on the Euclidean distance.
    Sphere {
        /// Sphere center.
        center: Point3<f64>,
        /// Sphere radius.
        radius: f64,
    },
    /// A single plane; the keep threshold is 0 on the signed distance.
    Plane(ClipPlane),
    /// Conjunction of 1 to 3 planes, combined as the minimum of the signed
    /// per-plane distances.
    MultiPlane(Vec<ClipPlane>),
}

/// Immutable clip configuration: primitive selection plus the invert and
/// multi-pass toggles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClipConfig {
    shape: ClipShape,
    invert: bool,
    multi_pass: bool,
}

impl ClipConfig {
    fn with_shape(shape: ClipShape) -> Self {
        Self {
            shape,
            invert: false,
            multi_pass: false,
        }
    }

    /// Clip against an axis-aligned box.
    #[must_use]
    pub fn box_clip(bounds: Aabb) -> Self {
        Self::with_shape(ClipShape::Box(bounds))
    }

    /// Clip against a sphere.
    #[must_use]
    pub fn sphere(center: Point3<f64>, radius: f64) -> Self {
        Self::with_shape(ClipShape::Sphere { center, radius })
    }

    /// Clip against a single plane.
    #[must_use]
    pub fn plane(origin: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self::with_shape(ClipShape::Plane(ClipPlane::new(origin, normal)))
    }

    /// Clip against the conjunction of two planes.
    #[must_use]
    pub fn two_planes(
        origin1: Point3<f64>,
        normal1: Vector3<f64>,
        origin2: Point3<f64>,
        normal2: Vector3<f64>,
    ) -> Self {
        Self::with_shape(ClipShape::MultiPlane(vec![
            ClipPlane::new(origin1, normal1),
            ClipPlane::new(origin2, normal2),
        ]))
    }

    /// Clip against the conjunction of three planes.
    #[must_use]
    pub fn three_planes(
        origin1: Point3<f64>,
        normal1: Vector3<f64>,
        origin2: Point3<f64>,
        normal2: Vector3<f64>,
        origin3: Point3<f64>,
        normal3: Vector3<f64>,
    ) -> Self {
        Self::with_shape(ClipShape::MultiPlane(vec![
            ClipPlane::new(origin1, normal1),
            ClipPlane::new(origin2, normal2),
            ClipPlane::new(origin3, normal3),
        ]))
    }

    /// Clip against the conjunction of 1 to 3 planes.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::InvalidPlaneCount`] if the slice holds 0 or more
    /// than 3 planes. Validation happens here, before any mesh is touched.
    pub fn planes(planes: &[(Point3<f64>, Vector3<f64>)]) -> ClipResult<Self> {
        if planes.is_empty() || planes.len() > 3 {
            return Err(ClipError::InvalidPlaneCount(planes.len()));
        }
        let planes = planes
            .iter()
            .map(|&(origin, normal)| ClipPlane::new(origin, normal))
            .collect();
        Ok(Self::with_shape(ClipShape::MultiPlane(planes)))
    }

    /// Flip which side of the threshold is kept.
    #[must_use]
    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// For multi-plane configurations, clip one plane per pass instead of a
    /// single pass over the combined minimum-distance field.
    ///
    /// Has no effect on the other primitive families.
    #[must_use]
    pub fn with_multi_pass(mut self, multi_pass: bool) -> Self {
        self.multi_pass = multi_pass;
        self
    }

    /// The selected primitive.
    #[inline]
    pub fn shape(&self) -> &ClipShape {
        &self.shape
    }

    /// Whether the kept region is flipped.
    #[inline]
    pub fn invert(&self) -> bool {
        self.invert
    }

    /// Whether multi-plane configurations clip one plane per pass.
    #[inline]
    pub fn multi_pass(&self) -> bool {
        self.multi_pass
    }
}
