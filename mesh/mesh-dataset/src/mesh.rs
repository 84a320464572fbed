//! Polymorphic mesh handles over a closed set of element kinds.

use crate::dof::GeometryDofs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Concrete element kind of an unstructured mesh.
///
/// Filters that only operate on volumetric meshes resolve this tag once per
/// call and reject the surface kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementShape {
    /// Hexahedral (brick) elements.
    Hex,
    /// Tetrahedral elements.
    Tet,
    /// Quadrilateral surface elements.
    Quad,
    /// Triangular surface elements.
    Tri,
}

impl ElementShape {
    /// Topological dimension of the element kind (3 for volumes, 2 for
    /// surfaces).
    #[inline]
    #[must_use]
    pub fn dimension(self) -> u32 {
        match self {
            Self::Hex | Self::Tet => 3,
            Self::Quad | Self::Tri => 2,
        }
    }

    /// Whether elements of this kind enclose volume.
    #[inline]
    #[must_use]
    pub fn is_volume(self) -> bool {
        self.dimension() == 3
    }
}

impl std::fmt::Display for ElementShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex => write!(f, "hex"),
            Self::Tet => write!(f, "tet"),
            Self::Quad => write!(f, "quad"),
            Self::Tri => write!(f, "tri"),
        }
    }
}

/// A named unstructured mesh: element kind, polynomial order, and geometry
/// degrees of freedom.
///
/// Order 1 is a linear mesh; higher orders describe curved elements whose
/// geometry has interior control points.
#[derive(Debug, Clone)]
pub struct Mesh {
    name: String,
    shape: ElementShape,
    order: u32,
    geometry: GeometryDofs,
}

impl Mesh {
    /// Create a mesh handle.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        shape: ElementShape,
        order: u32,
        geometry: GeometryDofs,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            order,
            geometry,
        }
    }

    /// The mesh name, used to associate fields with it.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The concrete element kind.
    #[inline]
    pub fn shape(&self) -> ElementShape {
        self.shape
    }

    /// Polynomial order of the geometry (1 = linear).
    #[inline]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// The geometry dof buffer.
    #[inline]
    pub fn geometry(&self) -> &GeometryDofs {
        &self.geometry
    }

    /// Number of elements.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.geometry.layout().element_count()
    }
}
