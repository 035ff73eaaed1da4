//! Line-oriented front end over stdin/stdout.

use anyhow::Result;
use paradox_core::{Event, Game, Grid, Position};
use std::io::{self, BufRead, Write};

pub fn run(mut game: Game, show_banner: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let mut lines = io::stdin().lock().lines();

    print_events(&mut stdout, &game, &game.opening(show_banner))?;

    while !game.is_over() {
        write!(stdout, "\n{}", game.prompt())?;
        stdout.flush()?;

        // EOF ends the session like a confirmed quit.
        let Some(line) = lines.next().transpose()? else {
            writeln!(stdout)?;
            break;
        };
        let events = game.handle_input(&line);
        print_events(&mut stdout, &game, &events)?;
    }
    Ok(())
}

fn print_events(out: &mut impl Write, game: &Game, events: &[Event]) -> io::Result<()> {
    for event in events {
        match event {
            Event::Map => write!(out, "{}", render_map(game.catalog().glyphs(), game.player().position))?,
            event => writeln!(out, "{event}")?,
        }
    }
    Ok(())
}

/// Draws the mansion grid with column and row headers and a legend.
pub fn render_map(glyphs: &Grid<Option<char>>, player: Position) -> String {
    let mut out = String::from("\n=== MANSION MAP ===\n   ");
    for x in 0..glyphs.width() {
        out.push_str(&format!("{x:^3}"));
    }
    out.push('\n');

    for y in 0..glyphs.height() {
        out.push_str(&format!("{y:>2} "));
        for x in 0..glyphs.width() {
            let position = Position::new(x, y);
            let cell = match (position == player, glyphs[position]) {
                (true, Some(_)) => "@*".to_string(),
                (true, None) => "@".to_string(),
                (false, Some(glyph)) => glyph.to_string(),
                (false, None) => ".".to_string(),
            };
            out.push_str(&format!("{cell:^3}"));
        }
        out.push('\n');
    }

    out.push_str(
        "\nLegend: @ = you, @* = you inside a room, . = empty space\n\
         M = Main Laboratory, L = Library, C = Conservatory, W = Workshop, S = Study\n\
         K = Kitchen, B = Basement Laboratory, A = Attic, G = Garden, F = First Bedroom\n",
    );
    out
}
