//! Degree-of-freedom buffers and their shared element layout.
//!
//! A mesh's geometry is a flat buffer of control values (one per degree of
//! freedom) plus a connectivity table mapping each element to its dofs.
//! Scalar fields computed over a mesh reuse the geometry buffer's layout
//! unchanged; only the value arity differs (3 components down to 1).

use std::sync::Arc;

use nalgebra::Point3;

/// Element-to-dof connectivity shared between a geometry buffer and any
/// scalar buffer derived from it.
///
/// The connectivity table holds `dofs_per_element * element_count` indices
/// into the value buffer. Cloning a layout is cheap; the table itself is
/// behind an [`Arc`], which is how a derived scalar buffer shares the layout
/// of its source geometry without copying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DofLayout {
    dofs_per_element: usize,
    element_count: usize,
    connectivity: Arc<[u32]>,
}

impl DofLayout {
    /// Create a layout from a connectivity table.
    ///
    /// # Panics
    ///
    /// Panics if the table length is not `dofs_per_element * element_count`.
    #[must_use]
    pub fn new(dofs_per_element: usize, element_count: usize, connectivity: Vec<u32>) -> Self {
        assert_eq!(
            connectivity.len(),
            dofs_per_element * element_count,
            "connectivity table length must be dofs_per_element * element_count"
        );
        Self {
            dofs_per_element,
            element_count,
            connectivity: connectivity.into(),
        }
    }

    /// Number of dofs each element references.
    #[inline]
    pub fn dofs_per_element(&self) -> usize {
        self.dofs_per_element
    }

    /// Number of elements in the layout.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Dof indices for one element.
    ///
    /// # Panics
    ///
    /// Panics if `element` is out of range.
    #[inline]
    pub fn element_dofs(&self, element: usize) -> &[u32] {
        let start = element * self.dofs_per_element;
        &self.connectivity[start..start + self.dofs_per_element]
    }

    /// The full connectivity table.
    #[inline]
    pub fn connectivity(&self) -> &[u32] {
        &self.connectivity
    }

    /// Whether two layouts share the same connectivity allocation.
    #[inline]
    pub fn shares_connectivity(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.connectivity, &other.connectivity)
    }
}

/// Geometry control values: one 3-component point per degree of freedom.
#[derive(Debug, Clone)]
pub struct GeometryDofs {
    layout: DofLayout,
    values: Vec<Point3<f64>>,
}

impl GeometryDofs {
    /// Create a geometry buffer from a layout and control points.
    #[must_use]
    pub fn new(layout: DofLayout, values: Vec<Point3<f64>>) -> Self {
        Self { layout, values }
    }

    /// The element-to-dof layout.
    #[inline]
    pub fn layout(&self) -> &DofLayout {
        &self.layout
    }

    /// The control points, indexed by dof.
    #[inline]
    pub fn values(&self) -> &[Point3<f64>] {
        &self.values
    }

    /// Number of degrees of freedom.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer holds no dofs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Scalar control values: one `f64` per degree of freedom.
///
/// Always carries the layout of the geometry buffer it was derived from, so
/// element-local interpolants of the scalar use the same connectivity as the
/// geometry.
#[derive(Debug, Clone)]
pub struct ScalarDofs {
    layout: DofLayout,
    values: Vec<f64>,
}

impl ScalarDofs {
    /// Create a scalar buffer derived from a geometry buffer.
    ///
    /// The layout is shared with the source, expressing the invariant that a
    /// derived scalar buffer has exactly the source's element connectivity
    /// and per-element dof count.
    ///
    /// # Panics
    ///
    /// Panics if the value count differs from the geometry's dof count.
    #[must_use]
    pub fn derived(source: &GeometryDofs, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            source.len(),
            "derived scalar buffer must have one value per geometry dof"
        );
        Self {
            layout: source.layout().clone(),
            values,
        }
    }

    /// The element-to-dof layout (identical to the source geometry's).
    #[inline]
    pub fn layout(&self) -> &DofLayout {
        &self.layout
    }

    /// The scalar values, indexed by dof.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of degrees of freedom.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer holds no dofs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
