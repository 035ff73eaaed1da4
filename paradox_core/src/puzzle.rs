//! The ordered chain of gating puzzles.
//!
//! Each puzzle is bound to one room and moves `Locked → Available → Solved`.
//! `Locked`/`Available` depends only on the chain: a puzzle is available once
//! every puzzle before it is solved. Held items gate the *attempt*, and the
//! first one missing is reported to the player.

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{info, warn};

use crate::{
    Item,
    catalog::{CHAIN_ROOMS, RoomId},
    inventory::Inventory,
};

/// Chain position of a puzzle (0 is solved first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PuzzleId(pub usize);

impl std::fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "puzzle#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum PuzzleState {
    /// An earlier puzzle in the chain is still unsolved.
    Locked,
    Available,
    /// Terminal; never regresses.
    Solved,
}

/// How a submitted answer is compared with the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerRule {
    Exact,
    CaseInsensitive,
}

impl AnswerRule {
    /// Compares after trimming surrounding whitespace from the submission.
    pub fn matches(self, expected: &str, submitted: &str) -> bool {
        let submitted = submitted.trim();
        match self {
            AnswerRule::Exact => submitted == expected,
            AnswerRule::CaseInsensitive => submitted.eq_ignore_ascii_case(expected),
        }
    }
}

/// Player-facing text attached to a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleText {
    /// Printed when the player walks into the unsolved room.
    pub arrival: &'static str,
    /// Printed when an attempt starts.
    pub approach: &'static str,
    pub title: &'static str,
    pub clues: &'static [&'static str],
    pub prompt: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
    /// Guidance once every prerequisite is held.
    pub objective: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleDefinition {
    pub id: PuzzleId,
    pub room: RoomId,
    /// Feature token that starts an attempt when examined.
    pub trigger: &'static str,
    /// Items that must be held, checked in order.
    pub prerequisites: &'static [Item],
    pub answer: &'static str,
    pub rule: AnswerRule,
    pub consumes: Item,
    pub produces: Item,
    pub reward: u32,
    pub text: PuzzleText,
}

/// Score awarded for each solved puzzle.
pub const PUZZLE_REWARD: u32 = 10;

const TEMPORAL_CHAIN: [PuzzleDefinition; 4] = [
    PuzzleDefinition {
        id: PuzzleId(0),
        room: CHAIN_ROOMS[0],
        trigger: "broken_keycard",
        prerequisites: &[Item::ResearchManual, Item::BrokenKeycard],
        answer: "1234",
        rule: AnswerRule::Exact,
        consumes: Item::BrokenKeycard,
        produces: Item::RepairedKeycard,
        reward: PUZZLE_REWARD,
        text: PuzzleText {
            arrival: "You notice a broken keycard that needs repair...",
            approach: "Using the research manual, you begin to understand the keycard mechanism.",
            title: "KEYCARD REPAIR PUZZLE",
            clues: &[
                "The broken keycard needs a 4-digit code to be repaired.",
                "Your research manual suggests looking for clues in the lab notes.",
                "Hint: The research notes mention: 'The year it all began, but backwards.'",
            ],
            prompt: "Enter the 4-digit code: ",
            success: "The keycard hums with energy as it repairs itself!",
            failure: "Nothing happens. That wasn't the correct code.",
            objective: "Use the research manual to repair the broken keycard (look at 'broken_keycard')",
        },
    },
    PuzzleDefinition {
        id: PuzzleId(1),
        room: CHAIN_ROOMS[1],
        trigger: "circuits",
        prerequisites: &[Item::RepairedKeycard, Item::PowerCore],
        answer: "POWER",
        rule: AnswerRule::CaseInsensitive,
        consumes: Item::PowerCore,
        produces: Item::PowerModule,
        reward: PUZZLE_REWARD,
        text: PuzzleText {
            arrival: "The room's circuits seem to need configuration...",
            approach: "You use the repaired keycard to access the circuit controls.",
            title: "CIRCUIT REPAIR PUZZLE",
            clues: &[
                "The circuit board needs a specific sequence of power routing.",
                "Hint: 'P_W_R' - Find the missing letters in the equipment around you.",
            ],
            prompt: "Enter the sequence: ",
            success: "The circuits light up in sequence! Power is restored!",
            failure: "The circuits remain dark. That wasn't the correct sequence.",
            objective: "Use the repaired keycard to fix the circuits in the Workshop (look at 'circuits')",
        },
    },
    PuzzleDefinition {
        id: PuzzleId(2),
        room: CHAIN_ROOMS[2],
        trigger: "recipe_book",
        prerequisites: &[Item::PowerModule, Item::CrystalVial],
        answer: "THYME",
        rule: AnswerRule::CaseInsensitive,
        consumes: Item::CrystalVial,
        produces: Item::TemporalEssence,
        reward: PUZZLE_REWARD,
        text: PuzzleText {
            arrival: "A mysterious recipe book catches your attention...",
            approach: "With power restored, you can clearly read the temporal recipe.",
            title: "TEMPORAL RECIPE PUZZLE",
            clues: &[
                "The recipe book contains a strange temporal recipe.",
                "Hint: 'What herb represents time? It's in the garden...'",
            ],
            prompt: "Enter the herb name: ",
            success: "The recipe glows with temporal energy!",
            failure: "The mixture fizzles out. That wasn't the right herb.",
            objective: "Use the power module to decode the recipe book (look at 'recipe_book')",
        },
    },
    PuzzleDefinition {
        id: PuzzleId(3),
        room: CHAIN_ROOMS[3],
        trigger: "sundial",
        prerequisites: &[Item::TemporalEssence, Item::StrangeFlower],
        answer: "12:00",
        rule: AnswerRule::Exact,
        consumes: Item::StrangeFlower,
        produces: Item::TimeShard,
        reward: PUZZLE_REWARD,
        text: PuzzleText {
            arrival: "The sundial seems to be stuck at the wrong time...",
            approach: "You apply the temporal essence to the sundial, making it responsive.",
            title: "SUNDIAL PUZZLE",
            clues: &[
                "The sundial seems stuck between times.",
                "Hint: 'When does the loop reset?' (Use format: HH:MM)",
            ],
            prompt: "Enter the time: ",
            success: "The sundial aligns perfectly! Time energy flows!",
            failure: "The sundial remains stuck. That wasn't the correct time.",
            objective: "Use the temporal essence to align the sundial (look at 'sundial')",
        },
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("There is no puzzle to solve here.")]
    Unknown(PuzzleId),
    #[error("You've already solved this room's puzzle.")]
    AlreadySolved(PuzzleId),
    #[error("You need the {} first.", .item.display_name())]
    MissingPrerequisite { puzzle: PuzzleId, item: Item },
    #[error("{failure}")]
    WrongAnswer {
        puzzle: PuzzleId,
        failure: &'static str,
    },
}

/// What a successful solve changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolvedPuzzle {
    pub id: PuzzleId,
    pub consumed: Item,
    pub produced: Item,
    pub reward: u32,
}

#[derive(Debug, Clone)]
struct ChainEntry {
    definition: PuzzleDefinition,
    solved: bool,
}

/// Puzzle definitions together with their solved flags, in chain order.
#[derive(Debug, Clone)]
pub struct PuzzleChain {
    entries: Vec<ChainEntry>,
}

impl PuzzleChain {
    /// The four puzzles of the mansion, all unsolved.
    pub fn temporal() -> Self {
        Self {
            entries: TEMPORAL_CHAIN
                .iter()
                .cloned()
                .map(|definition| ChainEntry {
                    definition,
                    solved: false,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &PuzzleDefinition> {
        self.entries.iter().map(|entry| &entry.definition)
    }

    pub fn get(&self, id: PuzzleId) -> Option<&PuzzleDefinition> {
        self.entries.get(id.0).map(|entry| &entry.definition)
    }

    /// The puzzle gating `room`, if any.
    pub fn for_room(&self, room: RoomId) -> Option<&PuzzleDefinition> {
        self.definitions().find(|definition| definition.room == room)
    }

    pub fn is_trigger(&self, token: &str) -> bool {
        self.definitions().any(|definition| definition.trigger == token)
    }

    pub fn is_solved(&self, id: PuzzleId) -> bool {
        self.entries.get(id.0).is_some_and(|entry| entry.solved)
    }

    pub fn state(&self, id: PuzzleId) -> PuzzleState {
        if self.is_solved(id) {
            PuzzleState::Solved
        } else if id.0 < self.len() && self.entries[..id.0].iter().all(|entry| entry.solved) {
            PuzzleState::Available
        } else {
            PuzzleState::Locked
        }
    }

    pub fn solved_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.solved).count()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|entry| entry.solved)
    }

    /// First puzzle in chain order that is not solved yet.
    pub fn next_unsolved(&self) -> Option<&PuzzleDefinition> {
        self.entries
            .iter()
            .find(|entry| !entry.solved)
            .map(|entry| &entry.definition)
    }

    /// Items produced by the chain; holding all of them is part of winning.
    pub fn terminal_items(&self) -> Vec<Item> {
        self.definitions().map(|definition| definition.produces).collect()
    }

    /// First prerequisite of `id` that the inventory lacks.
    pub fn missing_prerequisite(&self, id: PuzzleId, inventory: &Inventory) -> Option<Item> {
        self.get(id)?
            .prerequisites
            .iter()
            .copied()
            .find(|item| !inventory.contains(*item))
    }

    /// The item standing between the player and `id` while it is locked.
    fn locked_by(&self, definition: &PuzzleDefinition, inventory: &Inventory) -> Item {
        self.missing_prerequisite(definition.id, inventory)
            .or_else(|| {
                self.entries[..definition.id.0]
                    .iter()
                    .find(|entry| !entry.solved)
                    .map(|entry| entry.definition.produces)
            })
            .unwrap_or(definition.consumes)
    }

    /// Checks whether an attempt on `id` may start right now.
    pub fn check(
        &self,
        id: PuzzleId,
        inventory: &Inventory,
    ) -> Result<&PuzzleDefinition, PuzzleError> {
        let definition = self.get(id).ok_or(PuzzleError::Unknown(id))?;
        match self.state(id) {
            PuzzleState::Solved => Err(PuzzleError::AlreadySolved(id)),
            PuzzleState::Locked => Err(PuzzleError::MissingPrerequisite {
                puzzle: id,
                item: self.locked_by(definition, inventory),
            }),
            PuzzleState::Available => match self.missing_prerequisite(id, inventory) {
                Some(item) => Err(PuzzleError::MissingPrerequisite { puzzle: id, item }),
                None => Ok(definition),
            },
        }
    }

    /// Submits an answer for `id`.
    ///
    /// On a match the configured item is consumed, the reward item is added and
    /// the puzzle becomes `Solved`. On any error nothing changes.
    pub fn submit(
        &mut self,
        id: PuzzleId,
        answer: &str,
        inventory: &mut Inventory,
    ) -> Result<SolvedPuzzle, PuzzleError> {
        let definition = self.check(id, inventory)?.clone();
        if !definition.rule.matches(definition.answer, answer) {
            return Err(PuzzleError::WrongAnswer {
                puzzle: id,
                failure: definition.text.failure,
            });
        }

        inventory.remove(definition.consumes);
        if let Err(err) = inventory.add(definition.produces) {
            warn!(puzzle = id.0, %err, "no room for puzzle reward item");
        }
        self.entries[id.0].solved = true;
        info!(puzzle = id.0, produced = %definition.produces, "puzzle solved");

        Ok(SolvedPuzzle {
            id,
            consumed: definition.consumes,
            produced: definition.produces,
            reward: definition.reward,
        })
    }
}

impl Default for PuzzleChain {
    fn default() -> Self {
        Self::temporal()
    }
}
