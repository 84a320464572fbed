//! Datasets (one mesh plus named fields) and collections of datasets.

use std::collections::BTreeMap;

use crate::field::Field;
use crate::mesh::Mesh;

/// One domain of a simulation: an optional mesh handle plus a map from field
/// name to [`Field`].
///
/// Field names are unique; adding a field under an existing name replaces the
/// previous one, and removing an absent name is a no-op.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    mesh: Option<Mesh>,
    fields: BTreeMap<String, Field>,
}

impl Dataset {
    /// Create an empty dataset with no mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dataset holding a mesh.
    #[must_use]
    pub fn with_mesh(mesh: Mesh) -> Self {
        Self {
            mesh: Some(mesh),
            fields: BTreeMap::new(),
        }
    }

    /// The mesh handle, if any.
    #[inline]
    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_ref()
    }

    /// Name of the mesh, if a mesh is present.
    #[inline]
    pub fn mesh_name(&self) -> Option<&str> {
        self.mesh.as_ref().map(Mesh::name)
    }

    /// Replace the mesh handle.
    pub fn set_mesh(&mut self, mesh: Option<Mesh>) {
        self.mesh = mesh;
    }

    /// Add a field, keyed by its name. Replaces any field of the same name.
    pub fn add_field(&mut self, field: Field) {
        self.fields.insert(field.name().to_owned(), field);
    }

    /// Remove a field by name, returning it if present. No-op when absent.
    pub fn remove_field(&mut self, name: &str) -> Option<Field> {
        self.fields.remove(name)
    }

    /// Whether a field with the given name exists.
    #[inline]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Look up a field by name.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Names of all fields, in sorted order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Number of fields.
    #[inline]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// An ordered collection of datasets, one per domain.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    domains: Vec<Dataset>,
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of local domains.
    #[inline]
    pub fn local_size(&self) -> usize {
        self.domains.len()
    }

    /// Access a domain by index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn domain(&self, index: usize) -> &Dataset {
        &self.domains[index]
    }

    /// Iterate over all domains.
    pub fn domains(&self) -> impl Iterator<Item = &Dataset> {
        self.domains.iter()
    }

    /// Append a domain.
    pub fn add_domain(&mut self, dataset: Dataset) {
        self.domains.push(dataset);
    }
}
