use super::*;
use proptest::prelude::*;

fn grid(text: &str) -> Grid {
    text.parse().unwrap()
}

#[test]
fn parse_accepts_editor_and_ascii_cells() {
    let g = grid("g?g\n?gg\n");
    assert_eq!((g.rows(), g.cols()), (2, 3));
    assert!(g.get(0, 0) && !g.get(0, 1) && g.get(1, 2));
    assert_eq!(g, grid("\n#.#\r\n.##\n\n"));
    assert_eq!(g.to_string(), "#.#\n.##\n");
    assert_eq!(g.filled_count(), 4);
}

#[test]
fn malformed_grids_are_rejected() {
    assert_eq!("".parse::<Grid>(), Err(GridError::Empty));
    assert_eq!("\n  \n".parse::<Grid>(), Err(GridError::Empty));
    assert_eq!(Grid::new(vec![]), Err(GridError::Empty));
    assert_eq!(Grid::new(vec![vec![]]), Err(GridError::NoColumns));
    assert_eq!(
        "##\n#\n".parse::<Grid>(),
        Err(GridError::Ragged {
            row: 1,
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        "#.\n.*\n".parse::<Grid>(),
        Err(GridError::BadCell {
            row: 1,
            col: 1,
            ch: '*'
        })
    );
}

#[test]
fn set_rejects_cells_outside_the_grid() {
    let mut g = Grid::empty(2, 3);
    assert_eq!(g.set(1, 2, true), Ok(()));
    assert!(g.get(1, 2));
    assert_eq!(
        g.set(2, 0, true),
        Err(GridError::OutOfRange {
            row: 2,
            col: 0,
            rows: 2,
            cols: 3
        })
    );
    assert!(g.set(0, 3, true).is_err());
    assert_eq!(g.filled_count(), 1);
}

#[test]
fn trimmed_crops_to_filled_bounding_box() {
    let g = grid("....\n.#..\n.##.\n....\n");
    assert_eq!(g.trimmed(), grid("#.\n##\n"));
    assert_eq!(grid("...\n...\n").trimmed(), Grid::empty(1, 1));
}

#[test]
fn extract_numbers_squares_row_major() {
    let (squares, graph) = extract(&grid(".#.\n###\n.#.\n"));
    assert_eq!(
        squares,
        [
            Square { row: 0, col: 1 },
            Square { row: 1, col: 0 },
            Square { row: 1, col: 1 },
            Square { row: 1, col: 2 },
            Square { row: 2, col: 1 },
        ]
    );
    // Centre square sees N, W, E, S in ascending index order.
    let centre: Vec<(usize, Direction)> =
        graph.neighbors(2).iter().map(|n| (n.index, n.dir)).collect();
    assert_eq!(
        centre,
        [
            (0, Direction::North),
            (1, Direction::West),
            (3, Direction::East),
            (4, Direction::South),
        ]
    );
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.edges(), [(0, 2), (1, 2), (2, 3), (2, 4)]);
    assert_eq!(graph.first_leaf(), Some(0));
    assert!(graph.is_tree());
}

#[test]
fn extract_empty_grid_has_no_squares() {
    let (squares, graph) = extract(&Grid::empty(3, 3));
    assert!(squares.is_empty());
    assert!(graph.is_empty());
    assert!(!graph.is_tree());
}

#[test]
fn diagonal_cells_are_not_adjacent() {
    let (_, graph) = extract(&grid("#.\n.#\n"));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.reachable_from(0), 1);
}

#[test]
fn edge_removal_restores_neighbour_order() {
    let (_, mut graph) = extract(&grid("##\n##\n"));
    let before = graph.clone();
    assert!(!graph.is_tree());
    {
        let trial = graph.without_edge(0, 1).unwrap();
        assert_eq!(trial.edge(), (0, 1));
        assert!(!trial.contains_edge(0, 1));
        assert!(!trial.contains_edge(1, 0));
        assert!(trial.is_tree());
    }
    assert_eq!(graph, before);
    assert!(graph.without_edge(0, 3).is_none());
    assert_eq!(graph, before);
}

#[test]
fn edge_removal_restores_on_unwind() {
    let (_, mut graph) = extract(&grid("###\n#.#\n###\n"));
    let before = graph.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _trial = graph.without_edge(0, 1).unwrap();
        panic!("search aborted");
    }));
    assert!(result.is_err());
    assert_eq!(graph, before);
}

proptest! {
    #[test]
    fn adjacency_is_symmetric_with_opposite_directions(
        rows in proptest::collection::vec(proptest::collection::vec(any::<bool>(), 5), 1..6)
    ) {
        let g = Grid::new(rows).unwrap();
        let (squares, graph) = extract(&g);
        prop_assert_eq!(squares.len(), g.filled_count());
        for i in 0..graph.len() {
            for n in graph.neighbors(i) {
                let back = graph.neighbors(n.index).iter().find(|m| m.index == i);
                prop_assert_eq!(back.map(|m| m.dir), Some(n.dir.opposite()));
                let (a, b) = (squares[i], squares[n.index]);
                let dist = a.row.abs_diff(b.row) + a.col.abs_diff(b.col);
                prop_assert_eq!(dist, 1);
            }
        }
    }

    #[test]
    fn display_parses_back(
        rows in (1usize..7, 1usize..6).prop_flat_map(|(cols, rows)| {
            proptest::collection::vec(proptest::collection::vec(any::<bool>(), cols), rows)
        })
    ) {
        let g = Grid::new(rows).unwrap();
        prop_assert_eq!(g.to_string().parse::<Grid>().unwrap(), g);
    }
}
