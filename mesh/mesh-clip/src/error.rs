//! Error types for clip operations.

use mesh_dataset::ElementShape;
use thiserror::Error;

/// Result type for clip operations.
pub type ClipResult<T> = Result<T, ClipError>;

/// Errors that can occur while configuring or running a clip.
#[derive(Debug, Error)]
pub enum ClipError {
    /// A multi-plane configuration was given a plane count outside 1..=3.
    /// Raised at configuration time, before any domain is processed.
    #[error("multi-plane clip supports 1 to 3 planes, got {0}")]
    InvalidPlaneCount(usize),

    /// The mesh could not be resolved to a supported volume element kind.
    #[error("unsupported mesh element kind for clipping: {shape}")]
    UnsupportedMesh {
        /// The element kind that could not be dispatched.
        shape: ElementShape,
    },

    /// The external topological clip step failed. Propagated unchanged.
    #[error("topological clip failed: {0}")]
    Collaborator(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ClipError {
    /// Wrap a collaborator failure.
    pub fn collaborator(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Collaborator(Box::new(err))
    }
}
