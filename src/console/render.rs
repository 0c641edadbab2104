//! Stateless text rendering of the board and game messages.

use crate::config::Settings;
use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use marubatsu_engine::{Cell, Coord, GameState, GameStatus, Mode, SIZE, Side};
use std::io::{self, Write};

const BANNER: &str = r"
  __  __                _           _
 |  \/  | __ _ _ __ _  _| |__   __ _| |_ ___ _   _
 | |\/| |/ _` | '__| | | | '_ \ / _` | __/ __| | | |
 | |  | | (_| | |  | |_| | |_) | (_| | |_\__ \ |_| |
 |_|  |_|\__,_|_|   \__,_|_.__/ \__,_|\__|___/\__,_|
";

const RULE: &str = "------------------------------";
const ROW_SEPARATOR: &str = "   -----------";

/// Draws the game as plain or ANSI-styled text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
    clear: bool,
}

impl Renderer {
    /// Creates a renderer with explicit styling options.
    pub fn new(color: bool, clear: bool) -> Self {
        Self { color, clear }
    }

    /// Creates a renderer from user settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(*settings.color(), *settings.clear_screen())
    }

    fn clear(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.clear {
            out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Mark for a side, green for O and red for X.
    pub fn mark(&self, side: Side) -> String {
        let text = side.to_string();
        match (self.color, side) {
            (false, _) => text,
            (true, Side::O) => text.green().to_string(),
            (true, Side::X) => text.red().to_string(),
        }
    }

    fn cell(&self, cell: Cell, highlight: bool) -> String {
        match cell {
            Cell::Empty => " ".to_string(),
            Cell::Occupied(side) if highlight && self.color => match side {
                Side::O => side.to_string().green().bold().to_string(),
                Side::X => side.to_string().red().bold().to_string(),
            },
            Cell::Occupied(side) => self.mark(side),
        }
    }

    /// Start screen: banner, welcome line and a rule.
    pub fn banner(&self, out: &mut dyn Write) -> io::Result<()> {
        self.clear(out)?;
        let welcome = "Welcome to marubatsu, three in a row!";
        if self.color {
            writeln!(out, "{}", BANNER.yellow())?;
            writeln!(out, "{}", welcome.blue())?;
        } else {
            writeln!(out, "{}", BANNER)?;
            writeln!(out, "{}", welcome)?;
        }
        writeln!(out, "{}", RULE)?;
        out.flush()
    }

    /// The board with row and column headers.
    ///
    /// In two-player mode an ongoing game also shows whose turn it is. With
    /// colour on, the marks of a completed line are drawn bold.
    pub fn board(&self, out: &mut dyn Write, game: &GameState) -> io::Result<()> {
        self.clear(out)?;
        let title = "Marubatsu (tic-tac-toe)";
        if self.color {
            writeln!(out, "{}", title.yellow())?;
        } else {
            writeln!(out, "{}", title)?;
        }
        writeln!(out, "{}", RULE)?;

        writeln!(out, "    0   1   2")?;
        let board = game.board();
        let winning: Vec<Coord> = board.winning_line().map(Vec::from).unwrap_or_default();
        let coords: Vec<Coord> = Coord::all().collect();
        for (row, row_coords) in coords.chunks(SIZE).enumerate() {
            let cells: Vec<String> = row_coords
                .iter()
                .map(|&coord| self.cell(board.cell(coord), winning.contains(&coord)))
                .collect();
            let line = format!("{}   {}", row, cells.join(" | "));
            writeln!(out, "{}", line.trim_end())?;
            if row < SIZE - 1 {
                writeln!(out, "{}", ROW_SEPARATOR)?;
            }
        }
        writeln!(out)?;

        if game.mode() == Mode::Two && !game.is_over() {
            let label = "Current player:";
            if self.color {
                writeln!(out, "{} {}", label.blue(), self.mark(game.current_side()))?;
            } else {
                writeln!(out, "{} {}", label, self.mark(game.current_side()))?;
            }
        }
        out.flush()
    }

    /// Winner or draw line for a finished game; nothing while ongoing.
    pub fn outcome(&self, out: &mut dyn Write, game: &GameState) -> io::Result<()> {
        match game.status() {
            GameStatus::Ongoing => {}
            GameStatus::Won(side) => {
                let label = "Winner:";
                if self.color {
                    writeln!(out, "{} {}", label.yellow(), self.mark(side))?;
                } else {
                    writeln!(out, "{} {}", label, self.mark(side))?;
                }
            }
            GameStatus::Draw => {
                let text = "It's a draw!";
                if self.color {
                    writeln!(out, "{}", text.yellow())?;
                } else {
                    writeln!(out, "{}", text)?;
                }
            }
        }
        out.flush()
    }
}
