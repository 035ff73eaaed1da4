//! Everything a turn reports back to the front end.
//!
//! Events carry data rather than text; `Display` renders the message the
//! player reads. The front end decides how and where to show it.

use std::fmt;

use crate::{
    Direction, Item,
    error::GameError,
    puzzle::PuzzleState,
    text,
};

/// Snapshot of the room the player is standing in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomView {
    pub name: &'static str,
    pub description: &'static str,
    /// State of the room's puzzle, for gated rooms.
    pub puzzle: Option<PuzzleState>,
    pub puzzles_solved: usize,
    pub puzzle_count: usize,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Banner,
    Welcome,
    Help,
    Room(RoomView),
    EmptySpace,
    Moved {
        direction: Direction,
        room: Option<&'static str>,
        /// The room had never been entered before.
        first_visit: bool,
    },
    /// The room just entered holds an unsolved puzzle.
    PuzzleArrival {
        arrival: &'static str,
        trigger: &'static str,
    },
    FeatureDescription(String),
    ItemDescription(Item),
    /// An attempt has started; the next input line is the answer.
    PuzzlePresented {
        approach: &'static str,
        title: &'static str,
        clues: &'static [&'static str],
    },
    PuzzleSolved {
        success: &'static str,
        consumed: Item,
        produced: Item,
        reward: u32,
    },
    Collected(Item),
    Inventory(Vec<Item>),
    Objective(String),
    /// Extra guidance following a failure.
    Advice(String),
    Score(u32),
    /// The player asked for the map; the front end renders it.
    Map,
    QuitPrompt,
    Farewell {
        score: u32,
    },
    Victory {
        score: u32,
    },
    Failed(GameError),
}

impl Event {
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::Failed(_))
    }
}

impl fmt::Display for RoomView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "You are in the {}", self.name)?;
        writeln!(f, "{}", self.description)?;
        match self.puzzle {
            Some(PuzzleState::Solved) => writeln!(f, "You have solved this room's puzzle.")?,
            Some(_) => writeln!(f, "This room contains an unsolved puzzle!")?,
            None => {}
        }
        writeln!(
            f,
            "\nPuzzles solved: {}/{}",
            self.puzzles_solved, self.puzzle_count
        )?;
        write!(f, "\nYou can see:")?;
        for feature in self.features {
            write!(f, "\n- {feature}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Banner => write!(f, "{}\n{}", text::BANNER, text::STORY),
            Event::Welcome => write!(f, "{}", text::WELCOME),
            Event::Help => write!(f, "{}", text::HELP),
            Event::Room(view) => write!(f, "{view}"),
            Event::EmptySpace => write!(f, "You are in an empty space in the mansion."),
            Event::Moved {
                direction,
                room: Some(room),
                first_visit,
            } => {
                write!(f, "You move {direction} to the {room}")?;
                if *first_visit {
                    write!(f, "\nYou have not been here before.")?;
                }
                Ok(())
            }
            Event::Moved {
                direction,
                room: None,
                ..
            } => write!(f, "You move {direction} to an empty space in the mansion."),
            Event::PuzzleArrival { arrival, trigger } => write!(
                f,
                "This room contains a puzzle that needs to be solved!\n{arrival}\nHint: Look at the '{trigger}' to attempt the puzzle."
            ),
            Event::FeatureDescription(description) => write!(f, "{description}"),
            Event::ItemDescription(item) => write!(f, "{}", text::item_description(item.token())),
            Event::PuzzlePresented {
                approach,
                title,
                clues,
            } => {
                write!(f, "{approach}\n\n=== {title} ===")?;
                for clue in clues.iter() {
                    write!(f, "\n{clue}")?;
                }
                Ok(())
            }
            Event::PuzzleSolved {
                success,
                consumed,
                produced,
                reward,
            } => write!(
                f,
                "{success}\nThe {} is used up. You now hold the {}. (+{reward} points)",
                consumed.display_name(),
                produced.display_name()
            ),
            Event::Collected(item) => write!(f, "You collected: {item}"),
            Event::Inventory(items) if items.is_empty() => write!(f, "Your inventory is empty."),
            Event::Inventory(items) => {
                write!(f, "Inventory contents:")?;
                for item in items {
                    write!(f, "\n{item}")?;
                }
                Ok(())
            }
            Event::Objective(objective) => write!(f, "=== CURRENT OBJECTIVE ===\n{objective}"),
            Event::Advice(advice) => write!(f, "{advice}"),
            Event::Score(score) => write!(f, "Current score: {score}"),
            Event::Map => write!(f, "You unfold the map of the mansion."),
            Event::QuitPrompt => write!(f, "{}", text::QUIT_PROMPT),
            Event::Farewell { score } => write!(f, "Thanks for playing! Final score: {score}"),
            Event::Victory { score } => write!(
                f,
                "{}\nFinal Score: {score}\n\nThank you for playing {}!\n{}",
                text::VICTORY,
                text::TITLE,
                "=".repeat(53)
            ),
            Event::Failed(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_view_rendering() {
        let view = RoomView {
            name: "Workshop",
            description: "A cluttered room",
            puzzle: Some(PuzzleState::Locked),
            puzzles_solved: 1,
            puzzle_count: 4,
            features: &["tools", "circuits"],
        };
        let rendered = view.to_string();
        assert!(rendered.starts_with("You are in the Workshop\n"));
        assert!(rendered.contains("This room contains an unsolved puzzle!"));
        assert!(rendered.contains("Puzzles solved: 1/4"));
        assert!(rendered.ends_with("- tools\n- circuits"));
    }

    #[test]
    fn test_moves_render_destination() {
        let into_room = Event::Moved {
            direction: Direction::North,
            room: Some("Library"),
            first_visit: false,
        };
        assert_eq!(into_room.to_string(), "You move north to the Library");
        let first_time = Event::Moved {
            direction: Direction::North,
            room: Some("Library"),
            first_visit: true,
        };
        assert_eq!(
            first_time.to_string(),
            "You move north to the Library\nYou have not been here before."
        );
        let into_space = Event::Moved {
            direction: Direction::East,
            room: None,
            first_visit: false,
        };
        assert_eq!(
            into_space.to_string(),
            "You move east to an empty space in the mansion."
        );
    }

    #[test]
    fn test_inventory_rendering() {
        assert_eq!(
            Event::Inventory(vec![]).to_string(),
            "Your inventory is empty."
        );
        assert_eq!(
            Event::Inventory(vec![Item::ResearchManual, Item::PowerCore]).to_string(),
            "Inventory contents:\nresearch_manual\npower_core"
        );
    }

    #[test]
    fn test_victory_includes_score() {
        let victory = Event::Victory { score: 40 }.to_string();
        assert!(victory.contains("Final Score: 40"));
        assert!(victory.contains("The time shard"));
    }
}
