//! Clip driver: runs the distance-generate / attach / clip / detach cycle
//! over every domain of a collection.
//!
//! The actual geometric cut is performed by an external collaborator behind
//! the [`FieldClipper`] trait: it consumes a dataset, a scalar field name,
//! and a threshold, and returns a new dataset whose mesh has been subdivided
//! so that only the selected side of the threshold remains.

use mesh_dataset::{Collection, Dataset};
use tracing::{debug, info};

use crate::config::{ClipConfig, ClipShape};
use crate::error::ClipResult;
use crate::passes::make_distances;

/// Reserved name for the transient distance field attached during a pass.
/// Never visible in input or output datasets once a pass completes.
pub(crate) const CLIP_FIELD_NAME: &str = "__clip_distance__";

/// Parameters handed to the topological clip collaborator for one pass.
#[derive(Debug, Clone)]
pub struct FieldClipParams<'a> {
    /// Name of the scalar field to clip against.
    pub field_name: &'a str,
    /// Threshold value; by default the region below it is kept.
    pub clip_value: f64,
    /// Keep the region above the threshold instead.
    pub invert: bool,
    /// Omit the clip field itself from the output dataset.
    pub exclude_clip_field: bool,
}

/// The external topological clip operator.
///
/// Implementations subdivide elements at the iso-value of the named field and
/// keep only the selected side. The returned dataset must retain a mesh
/// handle while any elements survive; a dataset without a mesh means
/// everything was clipped away.
pub trait FieldClipper {
    /// Clip `input` against the named scalar field at the given threshold.
    ///
    /// # Errors
    ///
    /// Implementation-defined failures are propagated unchanged as
    /// [`crate::ClipError::Collaborator`].
    fn clip(&self, input: &Dataset, params: &FieldClipParams<'_>) -> ClipResult<Dataset>;
}

/// Clip every domain of a collection against the configured primitive.
///
/// Domains without a mesh are skipped entirely (not copied into the result).
/// Each domain runs [`ClipConfig::num_passes`] passes; pass `k + 1` consumes
/// the output of pass `k`. The transient distance field never survives a
/// pass, on success or failure.
///
/// # Errors
///
/// Propagates distance-generation and collaborator failures; a failure in
/// one domain aborts the whole call.
pub fn clip_collection<C: FieldClipper>(
    collection: &Collection,
    config: &ClipConfig,
    clipper: &C,
) -> ClipResult<Collection> {
    let mut result = Collection::new();
    for dataset in collection.domains() {
        if let Some(output) = clip_dataset(dataset, config, clipper)? {
            result.add_domain(output);
        }
    }
    Ok(result)
}

/// Clip a single dataset, returning `None` when it has no mesh.
///
/// # Errors
///
/// Propagates distance-generation and collaborator failures for this domain.
pub fn clip_dataset<C: FieldClipper>(
    dataset: &Dataset,
    config: &ClipConfig,
    clipper: &C,
) -> ClipResult<Option<Dataset>> {
    let Some(mesh) = dataset.mesh() else {
        return Ok(None);
    };

    let npasses = config.num_passes();
    info!(
        domain = mesh.name(),
        passes = npasses,
        invert = config.invert(),
        "clipping domain"
    );

    // The sphere convention is flipped so that "inside the sphere" is the
    // natural keep region, matching VisIt. Preserved as a special case for
    // this family only.
    let invert = match config.shape() {
        ClipShape::Sphere { .. } => !config.invert(),
        _ => config.invert(),
    };

    let mut input = dataset.clone();
    for pass in 0..npasses {
        let Some(mesh) = input.mesh() else {
            // Everything was clipped away in an earlier pass; nothing left
            // for the remaining planes to cut.
            debug!(pass, "mesh emptied, skipping remaining passes");
            break;
        };

        let (mut field, clip_value) = make_distances(config, mesh, pass)?;
        field.set_mesh_name(mesh.name());
        input.add_field(field);

        let params = FieldClipParams {
            field_name: CLIP_FIELD_NAME,
            clip_value,
            invert,
            exclude_clip_field: true,
        };
        let clipped = clipper.clip(&input, &params);

        // The transient field must be gone from the pre-clip dataset on
        // every exit path, including collaborator failure.
        input.remove_field(CLIP_FIELD_NAME);
        let mut output = clipped?;
        output.remove_field(CLIP_FIELD_NAME);

        debug!(pass, clip_value, "pass complete");
        input = output;
    }

    Ok(Some(input))
}
