//! Named scalar fields over a mesh.

use crate::dof::ScalarDofs;
use crate::mesh::ElementShape;

/// A named scalar quantity over a mesh's degrees of freedom.
///
/// Carries the element kind and polynomial order of the mesh it was computed
/// from, so element-local interpolants of the field can be reconstructed
/// without the mesh handle.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    mesh_name: String,
    shape: ElementShape,
    order: u32,
    values: ScalarDofs,
}

impl Field {
    /// Create a field.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        shape: ElementShape,
        order: u32,
        values: ScalarDofs,
    ) -> Self {
        Self {
            name: name.into(),
            mesh_name: String::new(),
            shape,
            order,
            values,
        }
    }

    /// The field name; datasets key their field maps by it.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the mesh this field is associated with.
    #[inline]
    pub fn mesh_name(&self) -> &str {
        &self.mesh_name
    }

    /// Associate the field with a mesh by name.
    pub fn set_mesh_name(&mut self, mesh_name: impl Into<String>) {
        self.mesh_name = mesh_name.into();
    }

    /// Element kind of the source mesh.
    #[inline]
    pub fn shape(&self) -> ElementShape {
        self.shape
    }

    /// Polynomial order of the source mesh.
    #[inline]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// The scalar dof buffer.
    #[inline]
    pub fn values(&self) -> &ScalarDofs {
        &self.values
    }
}
