//! Core simulation - pure, deterministic, and testable
//!
//! Everything that makes the game a game lives here: shape geometry, the
//! shared grid of grounded cells, and the per-step state machine that
//! advances all players at once. The module has no I/O and no timing of its
//! own; an external driver calls [`Game::step`] on a fixed interval and a
//! renderer reads the public state between steps.
//!
//! # Module structure
//!
//! - [`shape`]: falling-shape geometry and rotation offset tables
//! - [`map`]: the shared grid - collision tests, grounding, row clearing
//! - [`game`]: player registry and the step/drop/respawn state machine
//! - [`rng`]: seeded shape-kind selection, the sole source of randomness
//!
//! # Determinism
//!
//! All mutation happens synchronously inside `step()` or `drop_shape()`.
//! Players are visited in registration order, which fixes the tie-break when
//! two blocked shapes overlap in the same step. Shape kinds are drawn from a
//! seeded generator, so a given seed replays the same game.

pub mod game;
pub mod map;
pub mod rng;
pub mod shape;

pub use game::{Game, PlayerEntry};
pub use map::GameMap;
pub use rng::SimpleRng;
pub use shape::{shape_cells, Shape, ShapeCells};
