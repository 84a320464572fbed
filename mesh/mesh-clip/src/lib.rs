//! Implicit-primitive clipping of high-order meshes.
//!
//! This crate removes the portion of an unstructured, possibly curved mesh
//! lying on one side of an implicit primitive: an axis-aligned box, a sphere,
//! a single plane, or a conjunction of up to three planes. It does so by
//! evaluating a closed-form distance field at every geometry degree of
//! freedom and handing the field to a topological clip operator that cuts
//! elements at the threshold iso-value.
//!
//! # Pipeline
//!
//! For every domain of a collection that has a mesh:
//!
//! 1. A distance generator evaluates the primitive's distance at each dof
//!    (in parallel via rayon) and wraps it as a scalar field sharing the
//!    geometry's dof layout.
//! 2. The field is attached to the dataset under a reserved transient name.
//! 3. The external [`FieldClipper`] collaborator cuts the mesh at the pass
//!    threshold.
//! 4. The transient field is removed from both the pre- and post-clip
//!    datasets, and the output feeds the next pass.
//!
//! A multi-plane configuration clips either in a single pass over the
//! combined minimum-distance field or, with
//! [`ClipConfig::with_multi_pass`], one plane per pass.
//!
//! # Example
//!
//! ```no_run
//! use mesh_clip::{clip_collection, ClipConfig, FieldClipper};
//! use mesh_dataset::{Aabb, Collection, Point3};
//!
//! fn run(domains: &Collection, clipper: &impl FieldClipper) -> mesh_clip::ClipResult<Collection> {
//!     let config = ClipConfig::box_clip(Aabb::new(
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 1.0, 1.0),
//!     ));
//!     clip_collection(domains, &config, clipper)
//! }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::similar_names)]

mod config;
mod dispatch;
mod distance;
mod driver;
mod error;
mod passes;

pub use config::{ClipConfig, ClipPlane, ClipShape};
pub use dispatch::evaluate_distance_field;
pub use distance::{
    box_distance, box_distance_field, multi_plane_distance, multi_plane_distance_field,
    plane_distance, plane_distance_field, sphere_distance, sphere_distance_field,
};
pub use driver::{clip_collection, clip_dataset, FieldClipParams, FieldClipper};
pub use error::{ClipError, ClipResult};
pub use passes::make_distances;

// Re-export the data model for convenience
pub use mesh_dataset::{Aabb, Collection, Dataset, Field, Mesh, Point3, Vector3};
