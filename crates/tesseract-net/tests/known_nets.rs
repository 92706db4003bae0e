//! End-to-end checks on hand-drawn and random grids.

use proptest::prelude::*;
use tesseract_net::api::{
    draw_polyomino, fits, validate, validate_with, FaceLabel, Grid, Outcome, PolyominoCfg,
    PolyominoReplay, RemovedEdge, SearchCfg, Validation, NUM_FACES,
};

fn fixture(name: &str) -> Grid {
    let text = match name {
        "snake" => include_str!("fixtures/snake.txt"),
        "tree" => include_str!("fixtures/tree.txt"),
        "cycle" => include_str!("fixtures/cycle.txt"),
        other => panic!("no fixture {other}"),
    };
    text.parse().unwrap()
}

fn labels(v: &Validation) -> Vec<String> {
    v.solution()
        .unwrap()
        .labels()
        .iter()
        .map(|l| l.unwrap().to_string())
        .collect()
}

/// Distinct faces, consistent shared edges, tree after removal, full path.
fn assert_net_invariants(v: &Validation) {
    let solution = v.solution().expect("valid result holds a solution");
    assert!(solution.is_complete());
    assert_eq!(solution.len(), NUM_FACES);

    let graph = v.graph();
    let removed = v.removed_edge();
    match removed {
        Some(RemovedEdge { i, j }) => {
            assert!(i < j);
            assert!(graph.contains_edge(i, j));
            assert_eq!(graph.edge_count(), NUM_FACES);
            let mut full = graph.clone();
            let trimmed = full.without_edge(i, j).unwrap();
            assert!(trimmed.is_tree());
        }
        None => assert!(graph.is_tree()),
    }

    for i in 0..graph.len() {
        for n in graph.neighbors(i) {
            if removed.is_some_and(|e| e.joins(i, n.index)) {
                continue;
            }
            let (here, there) = (solution.get(i).unwrap(), solution.get(n.index).unwrap());
            assert!(fits(there, here, n.dir), "squares {i} -> {}", n.index);
        }
    }

    let order = v.path_order();
    assert_eq!(order.len(), NUM_FACES);
    let mut seen = order.clone();
    seen.sort_unstable();
    assert_eq!(seen, (0..NUM_FACES).collect::<Vec<_>>());
    let start = match removed {
        Some(e) => e.i,
        None => solution.position(v.anchor()).unwrap(),
    };
    assert_eq!(order[0], start);
    for w in order.windows(2) {
        assert!(graph.contains_edge(w[0], w[1]));
        assert!(!removed.is_some_and(|e| e.joins(w[0], w[1])));
        let (a, b) = (solution.get(w[0]).unwrap(), solution.get(w[1]).unwrap());
        assert_eq!(a.shared_vertices(b), 2);
    }
}

#[test]
fn snake_net_is_valid_with_full_path() {
    let v = validate(&fixture("snake"));
    assert!(v.valid());
    assert_eq!(v.message(), "Path Unfolding!");
    assert_eq!(v.removed_edge(), None);
    assert_eq!(v.graph().edge_count(), 23);
    assert_eq!(
        labels(&v),
        [
            "ABCD", "DCcd", "CGgc", "GFfg", "gfbc", "gcdh", "cbad", "hdae", "eabf", "aABb", "AEFB",
            "EHGF", "FGCB", "eaAE", "adDA", "dhHD", "HEeh", "EFfe", "FBbf", "BCcb", "EADH", "DHGC",
            "HhgG", "hefg",
        ]
    );
    assert_eq!(
        v.path_order(),
        [0, 1, 2, 3, 4, 6, 5, 7, 8, 9, 10, 11, 12, 19, 18, 17, 16, 23, 22, 21, 15, 14, 13, 20]
    );
    assert_net_invariants(&v);
}

#[test]
fn branching_tree_net_is_rejected() {
    let g = fixture("tree");
    let v = validate(&g);
    assert!(v.graph().is_tree());
    assert!(!v.valid());
    assert_eq!(v.outcome(), Outcome::NoValidUnfolding);
    assert_eq!(v.message(), "Not a Tesseract unfolding");
    assert!(v.solution().is_none());
    assert!(v.path_order().is_empty());
    for seed in ["EFGH", "DCBA", "hgfe"] {
        let cfg = SearchCfg {
            seed_label: seed.parse().unwrap(),
            ..SearchCfg::default()
        };
        assert!(!validate_with(&g, cfg).valid(), "anchor {seed}");
    }
}

#[test]
fn single_cycle_net_is_valid_after_one_removal() {
    let v = validate(&fixture("cycle"));
    assert!(v.valid());
    assert_eq!(v.graph().edge_count(), 24);
    assert_eq!(v.removed_edge(), Some(RemovedEdge { i: 19, j: 20 }));
    assert_eq!(
        labels(&v),
        [
            "GHEF", "FEef", "gfbc", "feab", "cbBC", "CBFG", "GFfg", "bcda", "cghd", "gfeh", "adhe",
            "fbBF", "baAB", "aeEA", "ehHE", "FBAE", "EADH", "AadD", "DdhH", "ABCD", "DHGC", "HhgG",
            "DCcd", "CGgc",
        ]
    );
    assert_eq!(
        v.path_order(),
        [19, 22, 23, 20, 21, 18, 17, 16, 15, 11, 12, 13, 14, 10, 7, 8, 9, 6, 5, 4, 2, 3, 1, 0]
    );
    assert_net_invariants(&v);
}

#[test]
fn disconnected_and_blocky_grids_fail() {
    let halves: Grid = "############\n............\n############\n".parse().unwrap();
    let block: Grid = "############\n############\n".parse().unwrap();
    for g in [halves, block] {
        let v = validate(&g);
        assert_eq!(v.outcome(), Outcome::NoValidUnfolding);
        assert_eq!(v.message(), "Not a Tesseract unfolding");
        assert!(v.solution().is_none());
        assert!(v.path_order().is_empty());
    }
}

#[test]
fn other_anchors_relabel_the_same_nets() {
    let seeds: [FaceLabel; 3] = ["EFGH", "DCBA", "hgfe"].map(|s| s.parse().unwrap());
    for name in ["snake", "cycle"] {
        let g = fixture(name);
        let baseline = validate(&g).removed_edge();
        for seed in seeds {
            let v = validate_with(
                &g,
                SearchCfg {
                    seed_label: seed,
                    ..SearchCfg::default()
                },
            );
            assert!(v.valid(), "{name} with {seed}");
            assert_eq!(v.removed_edge(), baseline);
            assert_net_invariants(&v);
        }
    }
}

#[test]
fn validation_is_repeatable() {
    let g = fixture("cycle");
    let (a, b) = (validate(&g), validate(&g));
    assert_eq!(a.solution(), b.solution());
    assert_eq!(a.removed_edge(), b.removed_edge());
    assert_eq!(a.path_order(), b.path_order());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_trees_fold_as_full_paths_or_fail_cleanly(seed in any::<u64>(), index in 0u64..4) {
        let cfg = PolyominoCfg { tree_only: true, ..PolyominoCfg::default() };
        let Some(g) = draw_polyomino(cfg, PolyominoReplay { seed, index }) else {
            return Ok(());
        };
        prop_assert_eq!(g.filled_count(), NUM_FACES);
        let v = validate(&g);
        prop_assert!(v.graph().is_tree());
        if v.valid() {
            assert_net_invariants(&v);
        } else {
            prop_assert_eq!(v.outcome(), Outcome::NoValidUnfolding);
            prop_assert!(v.solution().is_none());
        }
    }
}
