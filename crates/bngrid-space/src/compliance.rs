//! Traversal invariant helpers.
//!
//! Each function checks one property of the hierarchy and traversal
//! operations around a single reference. Reused by the test modules of
//! this crate at every resolution and at the grid corners.

use crate::hierarchy::{bng_to_children, bng_to_parent};
use crate::traversal::{
    bng_distance, bng_is_neighbour, bng_kdisc, bng_kring, bng_neighbours, DistanceMetric,
};
use bngrid_core::GridReference;
use indexmap::IndexSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(g: &GridReference) {
    for nb in &bng_neighbours(g).unwrap().value {
        assert!(
            bng_neighbours(nb).unwrap().value.contains(g),
            "neighbour symmetry violated: {nb:?} in N({g:?}) but not the reverse"
        );
        assert!(bng_is_neighbour(g, nb).unwrap());
    }
}

/// Assert that neighbours share the resolution and sit one cell away.
pub fn assert_neighbours_adjacent(g: &GridReference) {
    let step = f64::from(g.resolution_metres());
    for nb in &bng_neighbours(g).unwrap().value {
        assert_eq!(nb.resolution(), g.resolution());
        let d = bng_distance(g, nb, DistanceMetric::Centroid);
        assert!((d - step).abs() < 1e-9, "{nb:?} is {d}m from {g:?}");
        assert_eq!(bng_distance(g, nb, DistanceMetric::EdgeToEdge), 0.0);
    }
}

/// Assert distance reflexivity, symmetry and the triangle inequality over
/// the 2-disc around `g`.
pub fn assert_distance_metric(g: &GridReference) {
    let cells = bng_kdisc(g, 2).unwrap().value;
    for a in &cells {
        assert_eq!(bng_distance(a, a, DistanceMetric::Centroid), 0.0);
        for b in &cells {
            let dab = bng_distance(a, b, DistanceMetric::Centroid);
            assert_eq!(dab, bng_distance(b, a, DistanceMetric::Centroid));
            for c in &cells {
                let dac = bng_distance(a, c, DistanceMetric::Centroid);
                let dbc = bng_distance(b, c, DistanceMetric::Centroid);
                assert!(
                    dac <= dab + dbc + 1e-6,
                    "triangle inequality violated: d({a:?},{c:?})={dac} > {dab} + {dbc}"
                );
            }
        }
    }
}

/// Assert that rings partition the disc: no duplicates, the centre only in
/// the disc, and `disc(k) = disc(k-1) ∪ ring(k)`.
pub fn assert_rings_partition_disc(g: &GridReference) {
    let mut inner: IndexSet<GridReference> = IndexSet::from([g.clone()]);
    for k in 1..=3 {
        let ring = bng_kring(g, k).unwrap().value;
        let disc = bng_kdisc(g, k).unwrap().value;
        let ring_set: IndexSet<_> = ring.iter().cloned().collect();
        let disc_set: IndexSet<_> = disc.iter().cloned().collect();
        assert_eq!(ring_set.len(), ring.len(), "ring {k} around {g:?} has duplicates");
        assert_eq!(disc_set.len(), disc.len(), "disc {k} around {g:?} has duplicates");
        assert!(!ring_set.contains(g));
        assert!(disc_set.contains(g));
        assert!(ring_set.is_disjoint(&inner));
        let union: IndexSet<_> = inner.union(&ring_set).cloned().collect();
        assert_eq!(
            union.len(),
            disc_set.len(),
            "disc {k} around {g:?} is not disc {} plus ring {k}",
            k - 1
        );
        assert!(union.iter().all(|c| disc_set.contains(c)));
        inner = disc_set;
    }
}

/// Assert that `g` is among the children of its parent.
pub fn assert_parent_contains_child(g: &GridReference) {
    if let Ok(parent) = bng_to_parent(g) {
        assert!(parent.resolution().finer() == Some(g.resolution()));
        assert!(bng_to_children(&parent).unwrap().contains(g));
    }
}

/// Run every check.
pub fn run_full_compliance(g: &GridReference) {
    assert_neighbours_symmetric(g);
    assert_neighbours_adjacent(g);
    assert_distance_metric(g);
    assert_rings_partition_disc(g);
    assert_parent_contains_child(g);
}
