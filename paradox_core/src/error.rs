use crate::{Item, inventory::InventoryError, navigation::MoveError, puzzle::PuzzleError};

/// Everything that can go wrong during a turn.
///
/// None of these end the session; the message is shown to the player and all
/// state stays as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Please enter a command. Type 'help' for available commands.")]
    EmptyInput,
    #[error("Unknown command '{0}'. Type 'help' for all of the available commands.")]
    UnknownCommand(String),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("There's nothing to collect here.")]
    NothingToCollect,
    #[error("You can't collect that.")]
    NotCollectible(String),
    #[error("You've already taken the {} from here.", .0.display_name())]
    AlreadyCollected(Item),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error("You don't see anything like that here.")]
    NothingToSee,
    #[error("You don't see any {0} here.")]
    NothingHere(String),
}
