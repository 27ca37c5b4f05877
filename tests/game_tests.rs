//! Game stepping integration tests, covering the multi-player ordering
//! rules: simultaneous falls, drop tie-breaks, respawn, and game over.

use multris::core::{Game, GameMap, Shape};
use multris::types::{PlayerId, Rotation, ShapeKind};

fn create_game(map: GameMap, shapes: &[Shape]) -> Game {
    let mut game = Game::new(map, 12345);
    for shape in shapes {
        game.register_player(shape.player);
        game.set_shape(shape.player, *shape);
    }
    game
}

fn o_shape(player: PlayerId, col: i8, row: i8) -> Shape {
    Shape::new(ShapeKind::O, player, col, row, Rotation::R0)
}

fn grounded_cells(game: &Game, player: PlayerId) -> usize {
    let map = game.map();
    let mut count = 0;
    for row in 0..map.height() as i8 {
        for col in 0..map.width() as i8 {
            if map.player_at(row, col) == Some(player) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_all_shapes_move_down_by_one() {
    let rows = [(1, 3), (2, 5)];
    let shapes: Vec<Shape> = rows.iter().map(|&(id, row)| o_shape(id, 5, row)).collect();
    let mut game = create_game(GameMap::new(10, 10), &shapes);

    game.step();

    let mut visited = 0;
    game.for_each_shape(|shape| {
        let (_, start_row) = rows.iter().find(|&&(id, _)| id == shape.player).unwrap();
        assert_eq!(shape.row, start_row + 1);
        assert_eq!(shape.col, 5);
        visited += 1;
    });
    assert_eq!(visited, 2);
}

#[test]
fn test_touching_shape_drops_others_keep_falling() {
    // Player 1 rests on the bottom of a 5-row grid, player 2 is mid-air.
    let shapes = [o_shape(1, 5, 3), o_shape(2, 2, 1)];
    let mut game = create_game(GameMap::new(10, 5), &shapes);

    game.step();

    // Only player 1 grounded.
    assert_eq!(grounded_cells(&game, 1), 4);
    assert_eq!(grounded_cells(&game, 2), 0);

    // Player 1 was respawned, player 2 just moved down.
    assert_eq!(game.shape(1).unwrap().row, 0);
    assert_eq!(game.shape(2).unwrap().row, 2);
}

#[test]
fn test_multiple_drops_replace_droppers_and_leave_others_alone() {
    let shapes = [o_shape(1, 1, 3), o_shape(2, 4, 1), o_shape(3, 7, 3)];
    let mut game = create_game(GameMap::new(12, 5), &shapes);

    game.step();

    assert_eq!(game.player_count(), 3);

    // Both touching shapes dropped and were replaced by fresh spawns.
    assert_eq!(grounded_cells(&game, 1), 4);
    assert_eq!(grounded_cells(&game, 3), 4);
    assert_eq!(game.shape(1).unwrap().row, 0);
    assert_eq!(game.shape(3).unwrap().row, 0);

    // The mid-air shape kept its identity and advanced by one row.
    let two = game.shape(2).unwrap();
    assert_eq!(two.kind, ShapeKind::O);
    assert_eq!((two.row, two.col), (2, 4));
}

#[test]
fn test_overlapping_blocked_shapes_drop_exactly_one() {
    // Identical footprints on a 10x5 grid, both touching ground.
    let shapes = [o_shape(1, 5, 3), o_shape(2, 5, 3)];
    let mut game = create_game(GameMap::new(10, 5), &shapes);

    game.step();

    // Exactly one drop this step; first registered wins.
    assert_eq!(grounded_cells(&game, 1), 4);
    assert_eq!(grounded_cells(&game, 2), 0);

    // Both players still have a shape afterwards.
    assert_eq!(game.player_count(), 2);
    assert!(game.shape(1).is_some());
    assert!(game.shape(2).is_some());
}

#[test]
fn test_drop_clears_completed_row() {
    let mut map = GameMap::new(8, 6);
    // Bottom row lacks only the two columns the O shape will fill.
    for col in [0, 3, 4, 5, 6, 7] {
        map.set(5, col, Some(9));
    }
    let mut game = create_game(map, &[o_shape(1, 0, 0)]);

    game.drop_shape(1);

    // O landed on rows 4..=5, row 5 completed and cleared; only the row-4
    // half of the shape survives, shifted to the bottom.
    assert_eq!(grounded_cells(&game, 1), 2);
    assert_eq!(game.map().player_at(5, 1), Some(1));
    assert_eq!(game.map().player_at(5, 2), Some(1));
    assert_eq!(game.map().player_at(5, 0), None);
    assert_eq!(game.map().player_at(5, 3), None);
}

#[test]
fn test_spawn_into_full_grid_is_game_over() {
    let mut map = GameMap::new(10, 4);
    for row in 0..4 {
        for col in 0..10 {
            map.set(row, col, Some(9));
        }
    }
    let mut game = Game::new(map, 1);
    game.register_player(1);

    game.add_new_shape(1);

    assert!(game.is_game_over());
    assert_eq!(game.player_count(), 0);
    for row in 0..4 {
        for col in 0..10 {
            assert_eq!(game.map().player_at(row, col), None);
        }
    }
}

#[test]
fn test_round_restarts_by_reconstruction() {
    let mut map = GameMap::new(10, 4);
    for row in 0..2 {
        for col in 0..10 {
            map.set(row, col, Some(9));
        }
    }
    let mut game = Game::new(map, 1);
    game.register_player(1);
    game.add_new_shape(1);
    assert!(game.is_game_over());

    // The external contract: the driver rebuilds the game and re-registers.
    let mut game = Game::new(GameMap::new(10, 4), 2);
    game.register_player(1);
    game.add_new_shape(1);

    assert!(!game.is_game_over());
    assert_eq!(game.shape(1).unwrap().row, 0);
}

#[test]
fn test_seeded_games_replay_identically() {
    let mut runs: Vec<Vec<(i8, i8)>> = Vec::new();
    for _ in 0..2 {
        let mut game = Game::new(GameMap::new(10, 20), 424242);
        for player in 0..3 {
            game.register_player(player);
            game.add_new_shape(player);
        }
        for _ in 0..200 {
            game.step();
        }
        let mut positions = Vec::new();
        game.for_each_shape(|shape| positions.push((shape.row, shape.col)));
        runs.push(positions);
    }
    assert_eq!(runs[0], runs[1]);
}
