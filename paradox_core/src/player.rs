use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Item, Position, catalog::RoomId};

/// Visited rooms, collected room features and the running score.
///
/// Visits are counted but do not feed the score; only puzzle rewards do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    visited: BTreeSet<RoomId>,
    taken: BTreeSet<(RoomId, Item)>,
    puzzles_solved: u32,
    score: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `room` visited. Returns `true` on the first visit.
    pub fn visit(&mut self, room: RoomId) -> bool {
        self.visited.insert(room)
    }

    pub fn has_visited(&self, room: RoomId) -> bool {
        self.visited.contains(&room)
    }

    pub fn rooms_visited(&self) -> usize {
        self.visited.len()
    }

    /// Records that `item` was taken from `room`. Returns `false` if it
    /// already had been.
    pub fn take(&mut self, room: RoomId, item: Item) -> bool {
        self.taken.insert((room, item))
    }

    pub fn has_taken(&self, room: RoomId, item: Item) -> bool {
        self.taken.contains(&(room, item))
    }

    pub fn record_solve(&mut self, reward: u32) {
        self.puzzles_solved += 1;
        self.score = self.score.saturating_add(reward);
    }

    pub fn puzzles_solved(&self) -> u32 {
        self.puzzles_solved
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

/// Where the player stands and what they have achieved so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Position,
    pub progress: Progress,
}

impl PlayerState {
    pub fn new(start: Position) -> Self {
        Self {
            position: start,
            progress: Progress::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visit_only_counts_once() {
        let mut progress = Progress::new();
        assert!(progress.visit(RoomId(1)));
        assert!(!progress.visit(RoomId(1)));
        assert!(progress.visit(RoomId(4)));
        assert_eq!(progress.rooms_visited(), 2);
        assert!(progress.has_visited(RoomId(4)));
        assert_eq!(progress.score(), 0);
    }

    #[test]
    fn test_score_counts_puzzles_only() {
        let mut progress = Progress::new();
        progress.visit(RoomId(0));
        progress.record_solve(10);
        progress.record_solve(10);
        assert_eq!(progress.puzzles_solved(), 2);
        assert_eq!(progress.score(), 20);
    }

    #[test]
    fn test_take_is_per_room() {
        let mut progress = Progress::new();
        assert!(progress.take(RoomId(1), Item::ResearchManual));
        assert!(!progress.take(RoomId(1), Item::ResearchManual));
        assert!(progress.take(RoomId(0), Item::ResearchManual));
        assert!(progress.has_taken(RoomId(0), Item::ResearchManual));
    }
}
