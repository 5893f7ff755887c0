// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural properties of the cube graph: degrees, adjacency symmetry,
//! incidence consistency across kinds, and counting arguments.

mod common;

use common::{corner, direction, edge};
use cube_topology::geometry::constants::{NCORNERS, NEDGES, NFACES};
use cube_topology::{Axis, Corner, Direction, Edge, EdgeSet};

#[test]
fn test_corner_degrees() {
    for c in Corner::ALL {
        assert_eq!(c.adjacents().len(), 3);
        assert_eq!(c.edges().len(), 3);
        assert_eq!(c.faces().len(), 3);
        // All distinct within each list.
        for i in 0..3 {
            for j in i + 1..3 {
                assert_ne!(c.adjacents()[i], c.adjacents()[j]);
                assert_ne!(c.edges()[i], c.edges()[j]);
                assert_ne!(c.faces()[i], c.faces()[j]);
            }
        }
    }
}

#[test]
fn test_edge_degrees() {
    for e in Edge::ALL {
        assert_ne!(e.corners()[0], e.corners()[1]);
        assert_ne!(e.faces()[0], e.faces()[1]);
        assert_eq!(EdgeSet::from_edges(&e.adjacent_edges()).len(), 4);
    }
}

#[test]
fn test_face_degrees() {
    for f in Direction::ALL {
        assert_eq!(f.corner_set().len(), 4);
        assert_eq!(f.edge_set().len(), 4);
        let around = f.adjacent_faces();
        for i in 0..4 {
            for j in i + 1..4 {
                assert_ne!(around[i], around[j]);
            }
        }
    }
}

#[test]
fn test_adjacency_symmetric_and_irreflexive() {
    for a in Corner::ALL {
        assert!(!a.is_adjacent(a));
        for b in Corner::ALL {
            assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
        }
    }
    for a in Edge::ALL {
        assert!(!a.is_adjacent(a));
        for b in Edge::ALL {
            assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
        }
    }
    for a in Direction::ALL {
        assert!(!a.is_adjacent(a));
        for b in Direction::ALL {
            assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
        }
    }
}

#[test]
fn test_cross_kind_incidence_agrees() {
    for c in Corner::ALL {
        for e in Edge::ALL {
            assert_eq!(c.is_on_edge(e), e.has_corner(c));
        }
        for f in Direction::ALL {
            assert_eq!(c.is_on_face(f), f.contains_corner(c));
        }
    }
    for e in Edge::ALL {
        for f in Direction::ALL {
            assert_eq!(e.is_on_face(f), f.contains_edge(e));
        }
    }
}

#[test]
fn test_incidence_lists_agree_with_predicates() {
    // Membership in a derived list and the direct predicate never disagree.
    for c in Corner::ALL {
        for e in Edge::ALL {
            assert_eq!(c.edges().contains(&e), c.is_on_edge(e));
        }
        for f in Direction::ALL {
            assert_eq!(c.faces().contains(&f), c.is_on_face(f));
        }
    }
    for f in Direction::ALL {
        for e in Edge::ALL {
            assert_eq!(f.edges().contains(&e), e.is_on_face(f));
        }
    }
}

#[test]
fn test_edge_canonicalization_over_all_ordered_pairs() {
    let mut ordered_adjacent_pairs = 0;
    for a in Corner::ALL {
        for b in Corner::ALL {
            if !a.is_adjacent(b) {
                continue;
            }
            ordered_adjacent_pairs += 1;
            let e = Edge::from_corners(a, b);
            assert_eq!(e, Edge::from_corners(b, a));
            assert_eq!(e, a.edge_to(b));
            // Endpoints round-trip as an unordered pair.
            let [c0, c1] = e.corners();
            assert!((c0 == a && c1 == b) || (c0 == b && c1 == a));
        }
    }
    // 12 edges, 2 orders each.
    assert_eq!(ordered_adjacent_pairs, 24);
}

#[test]
fn test_incidence_pigeonhole() {
    // Face-corner incidences counted from both sides.
    let by_faces: usize = Direction::ALL.iter().map(|f| f.corners().len()).sum();
    let by_corners: usize = Corner::ALL.iter().map(|c| c.faces().len()).sum();
    assert_eq!(by_faces, 24);
    assert_eq!(by_faces, by_corners);
    assert_eq!(by_faces, NFACES * 4);
    assert_eq!(by_corners, NCORNERS * 3);

    // Corner-edge incidences.
    let by_edges: usize = Edge::ALL.iter().map(|e| e.corners().len()).sum();
    let by_corner_edges: usize = Corner::ALL.iter().map(|c| c.edges().len()).sum();
    assert_eq!(by_edges, NEDGES * 2);
    assert_eq!(by_edges, by_corner_edges);

    // Edge-face incidences.
    let by_edge_faces: usize = Edge::ALL.iter().map(|e| e.faces().len()).sum();
    let by_face_edges: usize = Direction::ALL.iter().map(|f| f.edges().len()).sum();
    assert_eq!(by_edge_faces, NEDGES * 2);
    assert_eq!(by_edge_faces, by_face_edges);
}

#[test]
fn test_concrete_bottom_front_edge() {
    let e = edge((-1, -1, -1), (1, -1, -1));
    assert_eq!(e.base_axis(), Axis::X);
    assert_eq!(e.faces(), [direction(0, -1, 0), direction(0, 0, -1)]);
}

#[test]
fn test_direction_to_is_adjacency_inverse() {
    for a in Corner::ALL {
        for b in Corner::ALL {
            if !a.is_adjacent(b) {
                continue;
            }
            let d = a.direction_to(b);
            assert_eq!(a.adjacent(d), b);
            assert_eq!(b.direction_to(a), d.opposite());
            // The connecting edge runs along the same axis.
            assert_eq!(a.edge_to(b).base_axis(), d.axis());
        }
    }
}

#[test]
fn test_shared_corner_cardinality() {
    for a in Edge::ALL {
        assert_eq!(a.shared_corners(a).len(), 2);
        assert_eq!(a.shared_corners(a.opposite()).len(), 0);
        for b in Edge::ALL {
            let shared = a.shared_corners(b).len();
            assert!(shared <= 2);
            if a != b {
                // Distinct edges never span the same pair.
                assert!(shared <= 1);
                assert_eq!(a.is_adjacent(b), shared == 1);
            }
        }
    }
}

#[test]
fn test_face_adjacency_is_axis_difference() {
    for a in Direction::ALL {
        for b in Direction::ALL {
            let shares_two = a.corner_set().intersection(b.corner_set()).len() == 2;
            assert_eq!(a.is_adjacent(b), shares_two);
            assert_eq!(a.is_adjacent(b), a.axis() != b.axis());
        }
    }
}

#[test]
fn test_face_flip_walks_the_face_graph() {
    // Flipping across every boundary edge visits exactly the adjacent faces.
    for f in Direction::ALL {
        let mut reached: Vec<Direction> = f.edges().iter().map(|&e| f.flip(e)).collect();
        reached.sort();
        let mut around = f.adjacent_faces().to_vec();
        around.sort();
        assert_eq!(reached, around);
    }
}

#[test]
fn test_corner_faces_meet_in_corner() {
    // The 3 faces of a corner pairwise intersect in the 3 edges of that
    // corner.
    let c = corner(-1, -1, -1);
    let faces = c.faces();
    let mut meeting_edges: Vec<Edge> = Vec::new();
    for i in 0..3 {
        for j in i + 1..3 {
            let shared = faces[i].edge_set().intersection(faces[j].edge_set());
            assert_eq!(shared.len(), 1);
            meeting_edges.extend(shared.iter());
        }
    }
    meeting_edges.sort();
    let mut expected = c.edges().to_vec();
    expected.sort();
    assert_eq!(meeting_edges, expected);
}
