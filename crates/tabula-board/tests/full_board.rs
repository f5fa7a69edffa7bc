use tabula_board::{BoardError, BoundsPolicy, Coord};
use tabula_test_utils::{init_logging, BoardBuilder, TileId};

#[test]
fn every_cell_round_trips_on_a_full_board() {
    init_logging();
    let builder = BoardBuilder::new(5, 7);
    let expected: Vec<_> = (0..5)
        .flat_map(|y| (0..7).map(move |x| (x, y)))
        .map(|(x, y)| (Coord::new(x, y), builder.tile_at(x, y)))
        .collect();
    let grid = builder.build().unwrap();

    assert_eq!(grid.len(), 35);
    for (coord, tile) in expected {
        assert_eq!(grid.position_at(coord.x, coord.y), Some(&tile));
        assert_eq!(grid.coordinate_of(&tile), Some(coord));
    }
}

#[test]
fn full_board_rejects_further_registration() {
    init_logging();
    let mut grid = BoardBuilder::new(2, 2).build().unwrap();

    assert_eq!(
        grid.register(1, 1, TileId(99)),
        Err(BoardError::CoordOccupied {
            coord: Coord::new(1, 1)
        })
    );
    assert_eq!(
        grid.register(5, 5, TileId(0)),
        Err(BoardError::PositionRegistered {
            existing: Coord::new(0, 0)
        })
    );
    assert_eq!(grid.len(), 4);
}

#[test]
fn unregistered_lookups_are_not_found() {
    let grid = BoardBuilder::new(3, 3).build().unwrap();
    assert_eq!(grid.position_at(3, 0), None);
    assert_eq!(grid.position_at(-1, -1), None);
    assert_eq!(grid.coordinate_of(&TileId(9)), None);
}

#[test]
fn enforced_board_refuses_off_board_tiles() {
    init_logging();
    let mut grid = BoardBuilder::new(3, 3)
        .bounds(BoundsPolicy::Enforce)
        .build()
        .unwrap();
    let err = grid.register(3, 1, TileId(100)).unwrap_err();
    assert!(matches!(err, BoardError::OutOfBounds { rows: 3, columns: 3, .. }));
    assert!(!grid.contains_position(&TileId(100)));
}

#[test]
fn enforced_empty_board_cannot_be_built() {
    let result = BoardBuilder::new(0, 4).bounds(BoundsPolicy::Enforce).build();
    assert_eq!(result.unwrap_err(), BoardError::EmptyGrid);
}
