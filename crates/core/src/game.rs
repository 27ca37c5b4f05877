//! Game state machine - advances every player's shape one step at a time
//!
//! The game owns the shared map and the player registry and is the only
//! thing that mutates either. A step moves each falling shape down by one
//! row where possible; shapes that cannot advance are collected and dropped
//! after the scan, in registration order. Dropping grounds the shape,
//! clears completed rows, respawns the owner, and re-validates everyone
//! else's shape against the changed grid.
//!
//! There are two states: running and game over. Game over is terminal; the
//! driver restarts a round by constructing a fresh `Game` and re-registering
//! its players.

use log::{debug, info};
use multris_types::PlayerId;

use crate::map::GameMap;
use crate::rng::SimpleRng;
use crate::shape::Shape;

/// One registered participant and their current falling shape, if any.
///
/// A player has no shape between registration and the first
/// [`Game::add_new_shape`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub shape: Option<Shape>,
}

/// The running game: shared map, player registry, and the game-over flag.
///
/// Players are visited in registration order everywhere order matters, which
/// makes the within-step tie-break deterministic.
#[derive(Debug, Clone)]
pub struct Game {
    map: GameMap,
    players: Vec<PlayerEntry>,
    rng: SimpleRng,
    game_over: bool,
}

impl Game {
    /// Create a game over the given map. The seed fixes the spawn sequence.
    pub fn new(map: GameMap, seed: u32) -> Self {
        Self {
            map,
            players: Vec::new(),
            rng: SimpleRng::new(seed),
            game_over: false,
        }
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Register a player with no shape yet. Returns false if the id is
    /// already taken.
    pub fn register_player(&mut self, player: PlayerId) -> bool {
        if self.entry(player).is_some() {
            return false;
        }
        self.players.push(PlayerEntry {
            id: player,
            shape: None,
        });
        true
    }

    /// Remove a player and their falling shape. Grounded cells stay.
    /// Returns false if the id is unknown.
    pub fn remove_player(&mut self, player: PlayerId) -> bool {
        let before = self.players.len();
        self.players.retain(|entry| entry.id != player);
        self.players.len() != before
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Registered players in registration order.
    pub fn players(&self) -> &[PlayerEntry] {
        &self.players
    }

    /// The player's falling shape, or `None` for an unknown player or one
    /// with no shape.
    pub fn shape(&self, player: PlayerId) -> Option<&Shape> {
        self.entry(player).and_then(|entry| entry.shape.as_ref())
    }

    /// Replace a player's shape outright. No collision check is performed;
    /// scenario setup and tests use this to place shapes precisely.
    /// Returns false if the player is unknown.
    pub fn set_shape(&mut self, player: PlayerId, shape: Shape) -> bool {
        match self.entry_mut(player) {
            Some(entry) => {
                entry.shape = Some(shape);
                true
            }
            None => false,
        }
    }

    /// Visit every falling shape, skipping players with none.
    pub fn for_each_shape(&self, mut f: impl FnMut(&Shape)) {
        for entry in &self.players {
            if let Some(shape) = &entry.shape {
                f(shape);
            }
        }
    }

    /// Advance the simulation by one step.
    ///
    /// First pass: every shape that can occupy the next row moves down by
    /// one; the rest are recorded as drop candidates with a snapshot of
    /// their current placement. Second pass: each snapshot is re-tested at
    /// its original position, because an earlier candidate's drop may have
    /// grounded cells there or replaced the candidate's shape entirely. Only
    /// a snapshot that still fits is dropped - so of two blocked shapes with
    /// overlapping footprints, exactly one grounds per step.
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }

        let mut candidates: Vec<(PlayerId, Shape)> = Vec::new();
        for entry in &mut self.players {
            let Some(shape) = entry.shape.as_mut() else {
                continue;
            };
            if self
                .map
                .test_shape_at(shape, shape.row + 1, shape.col, shape.rotation)
            {
                shape.row += 1;
            } else {
                candidates.push((entry.id, *shape));
            }
        }

        for (player, snapshot) in candidates {
            // A snapshot invalidated by an earlier drop this step fails
            // here; its owner was already handed a fresh shape.
            if self.map.test_shape(&snapshot) {
                self.drop_shape(player);
            }
        }
    }

    /// Drop the player's shape: ground it at its final row, clear completed
    /// rows, respawn the player, and re-validate everyone else's shape
    /// against the changed map. Unknown players and players without a shape
    /// are no-ops.
    pub fn drop_shape(&mut self, player: PlayerId) {
        let Some(entry) = self.entry_mut(player) else {
            return;
        };
        let Some(mut shape) = entry.shape.take() else {
            return;
        };

        self.map.drop_shape(&mut shape);
        self.map.clear_full_rows();
        self.add_new_shape(player);
        self.replace_blocked_shapes(player);
    }

    /// Give the player a fresh random shape at the top center of the map.
    /// A spawn that does not fit ends the game.
    pub fn add_new_shape(&mut self, player: PlayerId) {
        if self.entry(player).is_none() {
            return;
        }

        let spawn_col = (self.map.width() / 2) as i8;
        let shape = Shape::spawn(self.rng.next_kind(), player, spawn_col);
        let blocked = !self.map.test_shape(&shape);

        if let Some(entry) = self.entry_mut(player) {
            entry.shape = Some(shape);
        }

        if blocked {
            debug!("spawn blocked for player {player}");
            self.trigger_game_over();
        }
    }

    /// Respawn every player other than `dropped` whose shape no longer fits
    /// the map - grounded cells may have appeared under it, or rows may have
    /// shifted into it. Shapes are replaced, never moved to compensate.
    fn replace_blocked_shapes(&mut self, dropped: PlayerId) {
        let blocked: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|entry| entry.id != dropped)
            .filter(|entry| matches!(&entry.shape, Some(shape) if !self.map.test_shape(shape)))
            .map(|entry| entry.id)
            .collect();

        for player in blocked {
            debug!("shape of player {player} no longer fits, respawning");
            self.add_new_shape(player);
        }
    }

    /// Enter the terminal game-over state: drop all player entries and
    /// replace the grid with a fresh empty one of the same dimensions.
    fn trigger_game_over(&mut self) {
        info!("game over");
        self.game_over = true;
        self.players.clear();
        self.map = GameMap::new(self.map.width(), self.map.height());
    }

    fn entry(&self, player: PlayerId) -> Option<&PlayerEntry> {
        self.players.iter().find(|entry| entry.id == player)
    }

    fn entry_mut(&mut self, player: PlayerId) -> Option<&mut PlayerEntry> {
        self.players.iter_mut().find(|entry| entry.id == player)
    }
}
