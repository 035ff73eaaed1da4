//! The session controller: one call per input line.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Item,
    catalog::{Room, RoomCatalog},
    command::{Command, Verb},
    config::GameConfig,
    error::GameError,
    event::{Event, RoomView},
    inventory::Inventory,
    navigation::{self, Destination},
    player::PlayerState,
    puzzle::{PuzzleChain, PuzzleError, PuzzleId},
    text,
};

/// What the next input line means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Exploring,
    /// A puzzle is being presented; the next line is its answer.
    Answering(PuzzleId),
    ConfirmingQuit,
    Won,
    Quit,
}

/// True iff every puzzle is solved and every chain reward item is held.
pub fn is_won(chain: &PuzzleChain, inventory: &Inventory) -> bool {
    chain.is_complete() && inventory.holds_all(&chain.terminal_items())
}

/// Owns all game state for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct Game {
    catalog: RoomCatalog,
    chain: PuzzleChain,
    inventory: Inventory,
    player: PlayerState,
    phase: Phase,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let catalog = RoomCatalog::mansion();
        let mut player = PlayerState::new(config.start);
        if let Some(room) = catalog.room_at(config.start) {
            player.progress.visit(room.id);
        }
        Self {
            catalog,
            chain: PuzzleChain::temporal(),
            inventory: Inventory::with_capacity(config.inventory_capacity),
            player,
            phase: Phase::Exploring,
        }
    }

    /// Events shown before the first command.
    pub fn opening(&self, show_banner: bool) -> Vec<Event> {
        let mut events = Vec::new();
        if show_banner {
            events.push(Event::Banner);
        }
        events.push(Event::Welcome);
        events.push(Event::Help);
        events.push(self.room_view());
        events
    }

    /// Processes one input line to completion.
    ///
    /// Once the game is won or quit every further line is ignored.
    pub fn handle_input(&mut self, line: &str) -> Vec<Event> {
        match self.phase {
            Phase::Won | Phase::Quit => Vec::new(),
            Phase::Answering(puzzle) => {
                self.phase = Phase::Exploring;
                self.submit_answer(puzzle, line)
                    .unwrap_or_else(|err| self.report(err))
            }
            Phase::ConfirmingQuit => {
                if line.trim().eq_ignore_ascii_case("yes") {
                    self.phase = Phase::Quit;
                    info!(score = self.score(), "player quit");
                    vec![Event::Farewell {
                        score: self.score(),
                    }]
                } else {
                    self.phase = Phase::Exploring;
                    Vec::new()
                }
            }
            Phase::Exploring => Command::parse(line)
                .and_then(|command| self.dispatch(command))
                .unwrap_or_else(|err| self.report(err)),
        }
    }

    /// Asks for quit confirmation; the next line decides.
    ///
    /// A pending puzzle answer is abandoned. Does nothing once the session is
    /// over.
    pub fn request_quit(&mut self) -> Vec<Event> {
        if self.is_over() {
            return Vec::new();
        }
        self.phase = Phase::ConfirmingQuit;
        vec![Event::QuitPrompt]
    }

    fn dispatch(&mut self, command: Command) -> Result<Vec<Event>, GameError> {
        let Command { verb, argument } = command;
        match verb {
            Verb::Move => self.attempt_move(&argument),
            Verb::Look if argument.is_empty() => Ok(vec![self.room_view()]),
            Verb::Look => self.look_at(&argument),
            Verb::Collect => self
                .collect(&argument)
                .map(|item| vec![Event::Collected(item)]),
            Verb::Inventory => Ok(vec![Event::Inventory(self.inventory.items().to_vec())]),
            Verb::Hint => Ok(vec![Event::Objective(self.objective())]),
            Verb::Score => Ok(vec![Event::Score(self.score())]),
            Verb::Map => Ok(vec![Event::Map]),
            Verb::Help => Ok(vec![Event::Help]),
            Verb::Quit => Ok(self.request_quit()),
        }
    }

    /// Turns an error into events, adding guidance for missing items.
    fn report(&self, err: GameError) -> Vec<Event> {
        let advice = match &err {
            GameError::Puzzle(PuzzleError::MissingPrerequisite { item, .. }) => {
                Some(Event::Advice(self.advice_for(*item)))
            }
            _ => None,
        };
        debug!(%err, "turn failed");
        std::iter::once(Event::Failed(err)).chain(advice).collect()
    }

    /// Moves the player one step.
    pub fn attempt_move(&mut self, direction: &str) -> Result<Vec<Event>, GameError> {
        let movement =
            navigation::attempt_move(&mut self.player, &self.catalog, &self.chain, direction)?;

        let mut events = Vec::new();
        match movement.destination {
            Destination::EmptySpace => events.push(Event::Moved {
                direction: movement.direction,
                room: None,
                first_visit: false,
            }),
            Destination::Room {
                id,
                first_visit,
                pending_puzzle,
            } => {
                events.push(Event::Moved {
                    direction: movement.direction,
                    room: Some(self.catalog.name(id)),
                    first_visit,
                });
                events.push(self.room_view());
                if let Some(puzzle) = pending_puzzle.and_then(|id| self.chain.get(id)) {
                    events.push(Event::PuzzleArrival {
                        arrival: puzzle.text.arrival,
                        trigger: puzzle.trigger,
                    });
                }
            }
        }
        Ok(events)
    }

    /// Examines a room feature or a held item.
    ///
    /// Examining a puzzle's trigger feature in its room starts an attempt.
    pub fn look_at(&mut self, target: &str) -> Result<Vec<Event>, GameError> {
        let room = self.current_room().cloned();

        if let Some(room) = &room {
            if room.has_feature(target) {
                let mut events = vec![Event::FeatureDescription(text::feature_description(
                    target,
                ))];
                let puzzle = self
                    .chain
                    .for_room(room.id)
                    .filter(|puzzle| puzzle.trigger == target)
                    .map(|puzzle| puzzle.id);
                if let Some(puzzle) = puzzle {
                    match self.begin_attempt(puzzle) {
                        Ok(presented) => events.extend(presented),
                        Err(err) => events.extend(self.report(err)),
                    }
                }
                return Ok(events);
            }
        }

        match Item::from_str(target) {
            Ok(item) if self.inventory.contains(item) => Ok(vec![Event::ItemDescription(item)]),
            _ if room.is_none() => Err(GameError::NothingToSee),
            _ => Err(GameError::NothingHere(target.to_string())),
        }
    }

    fn begin_attempt(&mut self, id: PuzzleId) -> Result<Vec<Event>, GameError> {
        let puzzle = self.chain.check(id, &self.inventory)?;
        let presented = Event::PuzzlePresented {
            approach: puzzle.text.approach,
            title: puzzle.text.title,
            clues: puzzle.text.clues,
        };
        self.phase = Phase::Answering(id);
        Ok(vec![presented])
    }

    /// Submits an answer for a puzzle and evaluates the win condition after a
    /// successful solve.
    pub fn submit_answer(&mut self, id: PuzzleId, answer: &str) -> Result<Vec<Event>, GameError> {
        let solved = self.chain.submit(id, answer, &mut self.inventory)?;
        self.player.progress.record_solve(solved.reward);

        let success = self.chain.get(id).map_or("", |puzzle| puzzle.text.success);
        let mut events = vec![Event::PuzzleSolved {
            success,
            consumed: solved.consumed,
            produced: solved.produced,
            reward: solved.reward,
        }];

        if self.is_won() {
            self.phase = Phase::Won;
            info!(score = self.score(), "time loop broken");
            events.push(Event::Victory {
                score: self.score(),
            });
        }
        Ok(events)
    }

    /// Moves a collectible feature of the current room into the inventory.
    ///
    /// Each room hands out a given item once; the feature stays listed.
    pub fn collect(&mut self, token: &str) -> Result<Item, GameError> {
        let room = self.current_room().ok_or(GameError::NothingToCollect)?;
        let (room_id, room_name) = (room.id, room.name);
        let item = room
            .collectible(token)
            .ok_or_else(|| GameError::NotCollectible(token.to_string()))?;

        if self.player.progress.has_taken(room_id, item) {
            return Err(GameError::AlreadyCollected(item));
        }
        self.inventory.add(item)?;
        self.player.progress.take(room_id, item);
        debug!(%item, room = room_name, "item collected");
        Ok(item)
    }

    /// Next-step guidance derived from the chain and the inventory.
    pub fn objective(&self) -> String {
        let Some(puzzle) = self.chain.next_unsolved() else {
            return if self.is_won() {
                "Congratulations! You have all the items needed to break free from the time loop!\n\
                 Your collection of temporal artifacts is complete."
                    .to_string()
            } else {
                "Check your inventory and make sure you have all required items.".to_string()
            };
        };

        match self.chain.missing_prerequisite(puzzle.id, &self.inventory) {
            Some(item) => self.advice_for(item),
            None => puzzle.text.objective.to_string(),
        }
    }

    /// Where to get `item`: here, another room, or an earlier puzzle.
    fn advice_for(&self, item: Item) -> String {
        let name = item.display_name();
        let token = item.token();

        if let Some(room) = self.current_room() {
            if room.has_feature(token) && !self.player.progress.has_taken(room.id, item) {
                return format!("The {name} is right here. Use 'collect {token}'.");
            }
        }
        if let Some(room) = self.catalog.sources_of(item).first() {
            return format!("Go to the {} and collect the {name} ('collect {token}')", room.name);
        }
        match self.chain.definitions().find(|puzzle| puzzle.produces == item) {
            Some(puzzle) => format!(
                "Solve the puzzle in the {} to obtain the {name}.",
                self.catalog.name(puzzle.room)
            ),
            None => format!("Find the {name} somewhere in the mansion."),
        }
    }

    /// View of the current room, or empty space.
    pub fn room_view(&self) -> Event {
        match self.current_room() {
            Some(room) => Event::Room(RoomView {
                name: room.name,
                description: room.description,
                puzzle: self
                    .chain
                    .for_room(room.id)
                    .map(|puzzle| self.chain.state(puzzle.id)),
                puzzles_solved: self.chain.solved_count(),
                puzzle_count: self.chain.len(),
                features: room.features,
            }),
            None => Event::EmptySpace,
        }
    }

    /// Text to show while waiting for the next line.
    pub fn prompt(&self) -> &'static str {
        match self.phase {
            Phase::Exploring => "Enter command: ",
            Phase::Answering(id) => self.chain.get(id).map_or("Answer: ", |p| p.text.prompt),
            Phase::ConfirmingQuit => "(yes/no) ",
            Phase::Won | Phase::Quit => "",
        }
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.catalog.room_at(self.player.position)
    }

    pub fn is_won(&self) -> bool {
        is_won(&self.chain, &self.inventory)
    }

    /// True once the session accepts no more commands.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Quit)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.player.progress.score()
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    pub fn chain(&self) -> &PuzzleChain {
        &self.chain
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
