//! Movement across the mansion grid.

use std::str::FromStr;

use tracing::debug;

use crate::{
    Direction, Position,
    catalog::{RoomCatalog, RoomId},
    player::PlayerState,
    puzzle::{PuzzleChain, PuzzleId},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Please specify a direction. Choose from either (north, south, east, west).")]
    NoDirection,
    #[error("'{0}' is not a direction. Choose from either (north, south, east, west).")]
    InvalidDirection(String),
    #[error("You cannot move {0}. It's beyond the mansion's boundaries.")]
    OutOfBounds(Direction),
    #[error("You need to solve the puzzle in the {room} before leaving!")]
    ExitBlocked {
        room: &'static str,
        puzzle: PuzzleId,
    },
}

/// Where a successful move ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    EmptySpace,
    Room {
        id: RoomId,
        first_visit: bool,
        /// Unsolved puzzle waiting in the room just entered.
        pending_puzzle: Option<PuzzleId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub direction: Direction,
    pub to: Position,
    pub destination: Destination,
}

/// Resolves a direction token and moves the player if the rules allow it.
///
/// The checks run in a fixed order: direction, grid bounds, then the exit
/// lock of the current room. Any failure leaves `player` untouched.
pub fn attempt_move(
    player: &mut PlayerState,
    catalog: &RoomCatalog,
    chain: &PuzzleChain,
    token: &str,
) -> Result<Movement, MoveError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(MoveError::NoDirection);
    }
    let direction = Direction::from_str(token)
        .map_err(|_| MoveError::InvalidDirection(token.to_string()))?;

    let from = player.position;
    let to = catalog
        .glyphs()
        .step(from, direction)
        .map_err(|_| MoveError::OutOfBounds(direction))?;

    if let Some(room) = catalog.room_at(from) {
        if let Some(puzzle) = chain.for_room(room.id) {
            if !chain.is_solved(puzzle.id) {
                return Err(MoveError::ExitBlocked {
                    room: room.name,
                    puzzle: puzzle.id,
                });
            }
        }
    }

    player.position = to;
    let destination = match catalog.room_at(to) {
        Some(room) => {
            let first_visit = player.progress.visit(room.id);
            let pending_puzzle = chain
                .for_room(room.id)
                .filter(|puzzle| !chain.is_solved(puzzle.id))
                .map(|puzzle| puzzle.id);
            Destination::Room {
                id: room.id,
                first_visit,
                pending_puzzle,
            }
        }
        None => Destination::EmptySpace,
    };
    debug!(%from, %to, %direction, ?destination, "player moved");

    Ok(Movement {
        direction,
        to,
        destination,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;
    use strum::IntoEnumIterator;

    proptest! {
        #[test]
        fn move_then_opposite_returns_home(
            x in 0usize..10,
            y in 0usize..10,
            direction in select(Direction::iter().collect::<Vec<_>>()),
        ) {
            let catalog = RoomCatalog::mansion();
            let chain = PuzzleChain::temporal();
            let start = Position::new(x, y);
            let mut player = PlayerState::new(start);

            if let Ok(movement) = attempt_move(&mut player, &catalog, &chain, &direction.to_string()) {
                let back = direction.opposite().to_string();
                match attempt_move(&mut player, &catalog, &chain, &back) {
                    Ok(_) => prop_assert_eq!(player.position, start),
                    Err(MoveError::ExitBlocked { .. }) => {
                        prop_assert!(catalog.room_at(movement.to).is_some_and(|r| catalog.is_gated(r.id)));
                        prop_assert_eq!(player.position, movement.to);
                    }
                    Err(other) => prop_assert!(false, "unexpected error {other}"),
                }
            } else {
                prop_assert_eq!(player.position, start);
            }
        }
    }
}
