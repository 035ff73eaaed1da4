//! Splits a raw input line into a verb and its argument.

use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::error::GameError;

/// Top-level commands the session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Verb {
    Move,
    Look,
    Collect,
    Inventory,
    Hint,
    Score,
    Map,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    /// Everything after the first word, trimmed. Empty when absent.
    pub argument: String,
}

impl Command {
    /// Parses a line: case-insensitive, surrounding whitespace ignored, the
    /// first word is the verb and the remainder is the argument.
    pub fn parse(input: &str) -> Result<Command, GameError> {
        let line = input.trim().to_lowercase();
        if line.is_empty() {
            return Err(GameError::EmptyInput);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line.as_str(), ""));
        let verb = Verb::from_str(word).map_err(|_| GameError::UnknownCommand(word.to_string()))?;
        Ok(Command {
            verb,
            argument: rest.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verb_and_argument() {
        let command = Command::parse("  MOVE   North ").unwrap();
        assert_eq!(command.verb, Verb::Move);
        assert_eq!(command.argument, "north");

        let command = Command::parse("look").unwrap();
        assert_eq!(command.verb, Verb::Look);
        assert!(command.argument.is_empty());
    }

    #[test]
    fn test_argument_keeps_inner_words() {
        let command = Command::parse("collect\tresearch_manual please").unwrap();
        assert_eq!(command.verb, Verb::Collect);
        assert_eq!(command.argument, "research_manual please");
    }

    #[test]
    fn test_empty_and_unknown_input() {
        assert_eq!(Command::parse("   "), Err(GameError::EmptyInput));
        assert_eq!(
            Command::parse("dance wildly"),
            Err(GameError::UnknownCommand("dance".to_string()))
        );
    }
}
