//! Exploration and puzzle-gating engine for *Temporal Paradox*.
//!
//! The player walks a fixed 10×10 mansion grid, collects items from room
//! features and must solve a strict chain of four puzzles. A room whose puzzle
//! is unsolved traps the player until it is solved.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

pub mod catalog;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod inventory;
pub mod map;
pub mod navigation;
pub mod player;
pub mod puzzle;
pub mod text;

pub use catalog::{Room, RoomCatalog, RoomId};
pub use config::{ConfigError, GameConfig};
pub use error::GameError;
pub use event::{Event, RoomView};
pub use game::{Game, Phase, is_won};
pub use inventory::{Inventory, InventoryError};
pub use map::{Grid, GridError};
pub use player::{PlayerState, Progress};
pub use puzzle::{PuzzleChain, PuzzleDefinition, PuzzleError, PuzzleId, PuzzleState};

/// Width and height of the mansion grid.
pub const GRID_SIZE: usize = 10;

/// Represents a 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four compass directions understood by `move`.
///
/// North decreases `y`, south increases it; east increases `x`, west
/// decreases it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Offset applied to a position when stepping in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Represents items that can sit in room features or the player's inventory.
///
/// The string form is the token the player types (`collect power_core`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Item {
    ResearchManual,
    BrokenKeycard,
    RepairedKeycard,
    PowerCore,
    PowerModule,
    CrystalVial,
    TemporalEssence,
    StrangeFlower,
    TimeShard,
}

impl Item {
    /// The token used for this item in commands and feature lists.
    pub fn token(self) -> &'static str {
        self.into()
    }

    /// Human readable name, e.g. `broken keycard`.
    pub fn display_name(self) -> String {
        self.token().replace('_', " ")
    }
}
