//! End-to-end clipping pipeline tests.
//!
//! These drive the full distance-generate / attach / clip / detach cycle
//! with a whole-element clipper double: elements are kept or discarded by
//! the field value at their dof centroid, with no subdivision. Grids are
//! chosen so no centroid lands exactly on a threshold.

use mesh_clip::{
    clip_collection, clip_dataset, ClipConfig, ClipResult, FieldClipParams, FieldClipper,
};
use mesh_dataset::{
    Aabb, Collection, Dataset, DofLayout, ElementShape, GeometryDofs, Mesh, Point3, Vector3,
};

/// Keeps whole elements classified by the mean field value over their dofs.
struct ElementClipper;

impl FieldClipper for ElementClipper {
    fn clip(&self, input: &Dataset, params: &FieldClipParams<'_>) -> ClipResult<Dataset> {
        let mesh = input.mesh().expect("clipper input must have a mesh");
        let field = input
            .field(params.field_name)
            .expect("clip field must be attached");
        let values = field.values().values();
        let layout = mesh.geometry().layout();

        let mut kept_connectivity: Vec<u32> = Vec::new();
        let mut kept_elements = 0;
        for element in 0..layout.element_count() {
            let dofs = layout.element_dofs(element);
            let mean = dofs.iter().map(|&d| values[d as usize]).sum::<f64>() / dofs.len() as f64;
            let keep = if params.invert {
                mean > params.clip_value
            } else {
                mean < params.clip_value
            };
            if keep {
                kept_connectivity.extend_from_slice(dofs);
                kept_elements += 1;
            }
        }

        let mut output = Dataset::new();
        if kept_elements > 0 {
            let new_layout =
                DofLayout::new(layout.dofs_per_element(), kept_elements, kept_connectivity);
            let geometry = GeometryDofs::new(new_layout, mesh.geometry().values().to_vec());
            output.set_mesh(Some(Mesh::new(
                mesh.name(),
                mesh.shape(),
                mesh.order(),
                geometry,
            )));
        }
        if !params.exclude_clip_field {
            output.add_field(field.clone());
        }
        Ok(output)
    }
}

/// Build an `n`×`n`×`n` linear hex grid spanning `[min, max]` on each axis.
fn hex_grid(name: &str, n: usize, min: f64, max: f64) -> Dataset {
    let npts = n + 1;
    let h = (max - min) / n as f64;
    let mut points = Vec::with_capacity(npts * npts * npts);
    for k in 0..npts {
        for j in 0..npts {
            for i in 0..npts {
                points.push(Point3::new(
                    min + i as f64 * h,
                    min + j as f64 * h,
                    min + k as f64 * h,
                ));
            }
        }
    }
    let idx = |i: usize, j: usize, k: usize| (k * npts * npts + j * npts + i) as u32;
    let mut connectivity = Vec::with_capacity(8 * n * n * n);
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                connectivity.extend_from_slice(&[
                    idx(i, j, k),
                    idx(i + 1, j, k),
                    idx(i + 1, j + 1, k),
                    idx(i, j + 1, k),
                    idx(i, j, k + 1),
                    idx(i + 1, j, k + 1),
                    idx(i + 1, j + 1, k + 1),
                    idx(i, j + 1, k + 1),
                ]);
            }
        }
    }
    let layout = DofLayout::new(8, n * n * n, connectivity);
    Dataset::with_mesh(Mesh::new(
        name,
        ElementShape::Hex,
        1,
        GeometryDofs::new(layout, points),
    ))
}

/// Element centroids, quantized and sorted so kept-element sets compare
/// exactly.
fn element_centroids(dataset: &Dataset) -> Vec<[i64; 3]> {
    let Some(mesh) = dataset.mesh() else {
        return Vec::new();
    };
    let layout = mesh.geometry().layout();
    let points = mesh.geometry().values();
    let mut centroids: Vec<[i64; 3]> = (0..layout.element_count())
        .map(|element| {
            let dofs = layout.element_dofs(element);
            let mut c = Vector3::zeros();
            for &d in dofs {
                c += points[d as usize].coords;
            }
            c /= dofs.len() as f64;
            [
                (c.x * 1024.0).round() as i64,
                (c.y * 1024.0).round() as i64,
                (c.z * 1024.0).round() as i64,
            ]
        })
        .collect();
    centroids.sort_unstable();
    centroids
}

fn element_count(dataset: &Dataset) -> usize {
    dataset.mesh().map_or(0, Mesh::element_count)
}

#[test]
fn box_clip_keeps_interior_elements() {
    let dataset = hex_grid("grid", 4, -1.0, 1.0);
    let config = ClipConfig::box_clip(Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)));

    let output = clip_dataset(&dataset, &config, &ElementClipper)
        .unwrap()
        .unwrap();
    // The [0,1]^3 box covers the 2x2x2 elements of the +++ octant.
    assert_eq!(element_count(&output), 8);
    for c in element_centroids(&output) {
        assert!(c.iter().all(|&v| v > 0), "kept centroid outside box: {c:?}");
    }
}

#[test]
fn box_clip_inverted_keeps_exterior_elements() {
    let dataset = hex_grid("grid", 4, -1.0, 1.0);
    let config = ClipConfig::box_clip(Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)))
        .with_invert(true);

    let output = clip_dataset(&dataset, &config, &ElementClipper)
        .unwrap()
        .unwrap();
    assert_eq!(element_count(&output), 64 - 8);
}

#[test]
fn plane_clip_keeps_back_side() {
    let dataset = hex_grid("grid", 4, -1.0, 1.0);
    let config = ClipConfig::plane(Point3::origin(), Vector3::x());

    let output = clip_dataset(&dataset, &config, &ElementClipper)
        .unwrap()
        .unwrap();
    assert_eq!(element_count(&output), 32);
    for c in element_centroids(&output) {
        assert!(c[0] < 0, "kept centroid on the normal side: {c:?}");
    }
}

#[test]
fn sphere_clip_default_keeps_exterior() {
    let dataset = hex_grid("grid", 4, -1.0, 1.0);
    // Mean corner distances per element on this grid are 0.56, 0.91, 1.15,
    // or 1.35; radius 0.7 leaves only the 8 innermost elements inside.
    let config = ClipConfig::sphere(Point3::origin(), 0.7);

    let output = clip_dataset(&dataset, &config, &ElementClipper)
        .unwrap()
        .unwrap();
    assert_eq!(element_count(&output), 64 - 8);
    for c in element_centroids(&output) {
        let norm = ((c[0] * c[0] + c[1] * c[1] + c[2] * c[2]) as f64).sqrt() / 1024.0;
        assert!(norm > 0.7, "kept centroid inside the sphere: {c:?}");
    }
}

#[test]
fn sphere_clip_inverted_keeps_interior() {
    let dataset = hex_grid("grid", 4, -1.0, 1.0);
    // Radius 2 encloses the whole grid; the flipped convention keeps all of
    // it, including the element around (1, 0, 0) at distance 1 < 2.
    let config = ClipConfig::sphere(Point3::origin(), 2.0).with_invert(true);

    let output = clip_dataset(&dataset, &config, &ElementClipper)
        .unwrap()
        .unwrap();
    assert_eq!(element_count(&output), 64);
}

#[test]
fn sphere_clip_can_empty_a_domain() {
    let dataset = hex_grid("grid", 2, -1.0, 1.0);
    // Radius 2 encloses the grid and the default convention keeps the
    // exterior, so nothing survives.
    let config = ClipConfig::sphere(Point3::origin(), 2.0);

    let output = clip_dataset(&dataset, &config, &ElementClipper)
        .unwrap()
        .unwrap();
    assert!(output.mesh().is_none());
}

#[test]
fn multipass_and_combined_agree_for_coincident_planes() {
    let dataset = hex_grid("grid", 4, -1.0, 1.0);
    let planes = [
        (Point3::origin(), Vector3::x()),
        (Point3::origin(), Vector3::x()),
    ];

    let combined = ClipConfig::planes(&planes).unwrap();
    let multipass = ClipConfig::planes(&planes).unwrap().with_multi_pass(true);

    let combined_out = clip_dataset(&dataset, &combined, &ElementClipper)
        .unwrap()
        .unwrap();
    let multipass_out = clip_dataset(&dataset, &multipass, &ElementClipper)
        .unwrap()
        .unwrap();

    assert_eq!(element_count(&combined_out), 32);
    assert_eq!(
        element_centroids(&combined_out),
        element_centroids(&multipass_out),
        "the two modes must retain the same elements"
    );
}

#[test]
fn inverted_clip_keeps_the_complement() {
    let dataset = hex_grid("grid", 4, -1.0, 1.0);
    let config = ClipConfig::plane(Point3::origin(), Vector3::x());

    let kept = clip_dataset(&dataset, &config, &ElementClipper)
        .unwrap()
        .unwrap();
    let complement = clip_dataset(&dataset, &config.clone().with_invert(true), &ElementClipper)
        .unwrap()
        .unwrap();

    let mut all = element_centroids(&kept);
    all.extend(element_centroids(&complement));
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 64, "the two runs must partition the grid");
    assert_eq!(all, element_centroids(&dataset));
}

#[test]
fn combined_three_planes_drop_the_octant_corner() {
    let dataset = hex_grid("grid", 4, -1.0, 1.0);
    // Octant corner at the origin with outward normals along +x, +y, +z.
    // The combined minimum distance is positive only where every coordinate
    // is positive, so exactly the +++ octant is removed.
    let config = ClipConfig::three_planes(
        Point3::origin(),
        Vector3::x(),
        Point3::origin(),
        Vector3::y(),
        Point3::origin(),
        Vector3::z(),
    );

    let output = clip_dataset(&dataset, &config, &ElementClipper)
        .unwrap()
        .unwrap();
    assert_eq!(element_count(&output), 64 - 8);
    for c in element_centroids(&output) {
        assert!(
            !c.iter().all(|&v| v > 0),
            "+++ octant centroid survived: {c:?}"
        );
    }
}

#[test]
fn multipass_three_planes_keep_the_opposite_octant() {
    let dataset = hex_grid("grid", 4, -1.0, 1.0);
    // Pass by pass, each plane keeps its negative side; what survives all
    // three passes is the --- octant.
    let config = ClipConfig::three_planes(
        Point3::origin(),
        Vector3::x(),
        Point3::origin(),
        Vector3::y(),
        Point3::origin(),
        Vector3::z(),
    )
    .with_multi_pass(true);

    let output = clip_dataset(&dataset, &config, &ElementClipper)
        .unwrap()
        .unwrap();
    assert_eq!(element_count(&output), 8);
    for c in element_centroids(&output) {
        assert!(c.iter().all(|&v| v < 0), "kept centroid outside ---: {c:?}");
    }
}

#[test]
fn no_transient_field_survives_any_pass() {
    let dataset = hex_grid("grid", 4, -1.0, 1.0);
    let config = ClipConfig::two_planes(
        Point3::origin(),
        Vector3::x(),
        Point3::origin(),
        Vector3::y(),
    )
    .with_multi_pass(true);

    let output = clip_dataset(&dataset, &config, &ElementClipper)
        .unwrap()
        .unwrap();
    assert_eq!(output.field_count(), 0);
    assert!(output.field_names().is_empty());
}

#[test]
fn collection_skips_meshless_domains() {
    let mut collection = Collection::new();
    collection.add_domain(hex_grid("a", 2, -1.0, 1.0));
    collection.add_domain(Dataset::new());
    collection.add_domain(hex_grid("b", 2, 0.0, 1.0));

    let config = ClipConfig::plane(Point3::new(0.5, 0.0, 0.0), Vector3::x());
    let result = clip_collection(&collection, &config, &ElementClipper).unwrap();

    // The meshless domain is dropped, not copied.
    assert_eq!(result.local_size(), 2);
    assert_eq!(result.domain(0).mesh_name(), Some("a"));
    assert_eq!(result.domain(1).mesh_name(), Some("b"));
}

#[test]
fn invalid_plane_count_fails_before_any_clipping() {
    let p = (Point3::origin(), Vector3::x());
    assert!(ClipConfig::planes(&[]).is_err());
    assert!(ClipConfig::planes(&[p; 4]).is_err());
}
