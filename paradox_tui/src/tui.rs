//! Full-screen terminal front end.

use anyhow::Result;
use paradox_core::{Event as GameEvent, Game, Item, PuzzleState};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    prelude::*,
    widgets::*,
};
use std::io::{self, Stdout};

struct App {
    game: Game,
    /// Line being typed.
    input: String,
    /// Everything printed so far, oldest first.
    log: Vec<Line<'static>>,
    should_quit: bool,
}

impl App {
    fn new(game: Game, show_banner: bool) -> Self {
        let opening = game.opening(show_banner);
        let mut app = App {
            game,
            input: String::new(),
            log: Vec::new(),
            should_quit: false,
        };
        app.push_events(&opening);
        app
    }

    fn push_events(&mut self, events: &[GameEvent]) {
        for event in events {
            let style = match event {
                GameEvent::Failed(_) => Style::default().fg(Color::Red),
                GameEvent::PuzzleSolved { .. } | GameEvent::Victory { .. } => {
                    Style::default().fg(Color::Green).bold()
                }
                GameEvent::PuzzlePresented { .. } | GameEvent::PuzzleArrival { .. } => {
                    Style::default().fg(Color::Yellow)
                }
                _ => Style::default(),
            };
            for line in event.to_string().lines() {
                self.log.push(Line::styled(line.to_string(), style));
            }
        }
    }

    /// Hands the typed line to the game.
    fn submit(&mut self) {
        if self.game.is_over() {
            self.quit();
            return;
        }
        let line = std::mem::take(&mut self.input);
        self.log.push(Line::styled(
            format!("{}{line}", self.game.prompt()),
            Style::default().fg(Color::Cyan),
        ));
        let events = self.game.handle_input(&line);
        self.push_events(&events);
        if self.game.is_over() {
            self.log.push(Line::styled(
                "Press Enter or Esc to leave.",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    /// Esc leaves a finished game; during play it asks for confirmation.
    fn escape(&mut self) {
        if self.game.is_over() {
            self.quit();
            return;
        }
        let events = self.game.request_quit();
        self.push_events(&events);
    }

    fn quit(&mut self) {
        self.should_quit = true;
    }
}

pub fn run(game: Game, show_banner: bool) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(game, show_banner);
    let result = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}

/// Configures the terminal for TUI interaction.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(Into::into)
}

/// Restores the terminal to its original state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Redraws after every key; the game only advances on Enter.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => app.escape(),
                KeyCode::Enter => app.submit(),
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char(c) => app.input.push(c),
                _ => {}
            }
        }
    }
    Ok(())
}

fn ui(frame: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(40)])
        .split(frame.area());
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Min(6)])
        .split(columns[0]);
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(columns[1]);

    render_map(frame, side[0], &app.game);
    render_inventory(frame, side[1], &app.game);
    render_log(frame, main[0], &app.log);

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(app.game.prompt(), Style::default().fg(Color::Cyan)),
        Span::raw(app.input.as_str()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Score: {}  (Esc asks to quit)", app.game.score())),
    );
    frame.render_widget(prompt, main[1]);
}

/// Renders the last lines of the message log that fit in `area`.
fn render_log(frame: &mut Frame, area: Rect, log: &[Line<'static>]) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = log.len().saturating_sub(visible);
    let paragraph = Paragraph::new(log[start..].to_vec())
        .block(Block::default().borders(Borders::ALL).title("Temporal Paradox"));
    frame.render_widget(paragraph, area);
}

fn render_inventory(frame: &mut Frame, area: Rect, game: &Game) {
    let inventory = game.inventory();
    let terminal_items = game.chain().terminal_items();
    let items: Vec<ListItem> = inventory
        .iter()
        .map(|item: &Item| {
            let style = if terminal_items.contains(item) {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(item.display_name(), style))
        })
        .collect();

    let title = format!("Inventory {}/{}", inventory.len(), inventory.capacity());
    let widget = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(widget, area);
}

/// Room glyphs coloured by the state of the room's puzzle, player as `@`.
fn render_map(frame: &mut Frame, area: Rect, game: &Game) {
    let catalog = game.catalog();
    let chain = game.chain();
    let player = game.player().position;

    let glyphs = catalog.glyphs();
    let mut rows: Vec<Vec<Span>> = vec![Vec::with_capacity(glyphs.width()); glyphs.height()];
    for (position, glyph) in glyphs.enumerate() {
        let span = if position == player {
            Span::styled(" @ ", Style::default().fg(Color::Red).bold())
        } else if let Some(glyph) = glyph {
            let puzzle = catalog
                .room_at(position)
                .and_then(|room| chain.for_room(room.id))
                .map(|puzzle| chain.state(puzzle.id));
            let style = match puzzle {
                Some(PuzzleState::Solved) => Style::default().fg(Color::Green),
                Some(PuzzleState::Available) => Style::default().fg(Color::Yellow).bold(),
                Some(PuzzleState::Locked) => Style::default().fg(Color::Red),
                None => Style::default().fg(Color::White),
            };
            Span::styled(format!(" {glyph} "), style)
        } else {
            Span::styled(" . ", Style::default().fg(Color::DarkGray))
        };
        rows[position.y].push(span);
    }
    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();

    let room = game.current_room().map_or("Empty space", |room| room.name);
    let map = Paragraph::new(lines)
        .block(Block::default().title(room).borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(map, area);
}
