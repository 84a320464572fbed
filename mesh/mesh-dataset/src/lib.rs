//! Dof-buffer meshes, scalar fields, datasets, and collections.
//!
//! This crate holds the shared data model for filters that operate on
//! unstructured, possibly curved (high-order) meshes. Geometry is stored as a
//! flat buffer of control values (degrees of freedom) plus an element-to-dof
//! connectivity layout; a scalar field derived from a mesh reuses the same
//! layout with the value arity reduced from 3 components to 1.
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero engine dependencies. It can be used in
//! CLI tools, servers, and other pipelines.
//!
//! # Example
//!
//! ```
//! use mesh_dataset::{Dataset, DofLayout, ElementShape, GeometryDofs, Mesh, Point3};
//!
//! // A single linear hex element with 8 dofs.
//! let layout = DofLayout::new(8, 1, (0..8).collect());
//! let corners = (0..8)
//!     .map(|i| Point3::new(f64::from(i & 1), f64::from((i >> 1) & 1), f64::from(i >> 2)))
//!     .collect();
//! let geometry = GeometryDofs::new(layout, corners);
//! let mesh = Mesh::new("cube", ElementShape::Hex, 1, geometry);
//!
//! let dataset = Dataset::with_mesh(mesh);
//! assert_eq!(dataset.mesh_name(), Some("cube"));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]

mod bounds;
mod dataset;
mod dof;
mod field;
mod mesh;

pub use bounds::Aabb;
pub use dataset::{Collection, Dataset};
pub use dof::{DofLayout, GeometryDofs, ScalarDofs};
pub use field::Field;
pub use mesh::{ElementShape, Mesh};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
