//! Stonehenge: a hexagonal ley-line capture game.
//!
//! Players alternately claim lettered cells on a hexagonal board. A
//! ley-line is captured by the first player to claim at least half of its
//! member cells, and never changes hands afterwards. The first player to
//! capture at least half of all ley-lines wins.
//!
//! Board sizes 1 through 5 are supported; the ley-line tables are fixed
//! per size.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::game::{GameRules, GameState, ParseMoveError};

// Ley-line membership per board size, one string of cell labels per line.
// The first few lines of each table are the rows of the board, which is
// why the union of lines enumerates cells in alphabetical order.
const LINES_SIDE_1: &[&str] = &["AB", "C", "CA", "B", "BC", "A"];

const LINES_SIDE_2: &[&str] = &[
    "AB", "CDE", "FG", "FC", "GDA", "EB", "EG", "BDF", "AC",
];

const LINES_SIDE_3: &[&str] = &[
    "AB", "CDE", "FGHI", "JKL", "JF", "KGC", "LHDA", "EBI", "IL", "EHK",
    "BDGJ", "ACF",
];

const LINES_SIDE_4: &[&str] = &[
    "AB", "CDE", "FGHI", "JKLMN", "OPQR", "OJ", "PKF", "QLGC", "RMHDA", "NR",
    "IMQ", "EHLP", "BDGKO", "ACFJ", "NIEB",
];

const LINES_SIDE_5: &[&str] = &[
    "AB", "CDE", "FGHI", "JKLMN", "OPQRST", "UVWXY", "UO", "VPJ", "WQKF",
    "XRLGC", "YSMHDA", "TY", "NSX", "IMRW", "EHLQV", "BDGKPU", "ACFJO",
    "TNIEB",
];

fn line_table(side: u8) -> &'static [&'static str] {
    match side {
        1 => LINES_SIDE_1,
        2 => LINES_SIDE_2,
        3 => LINES_SIDE_3,
        4 => LINES_SIDE_4,
        5 => LINES_SIDE_5,
        _ => unreachable!("side length is validated at construction"),
    }
}

fn cell_count(side: u8) -> usize {
    match side {
        1 => 3,
        2 => 7,
        3 => 12,
        4 => 18,
        5 => 25,
        _ => unreachable!("side length is validated at construction"),
    }
}

fn line_cells(label_run: &str) -> impl Iterator<Item = usize> + '_ {
    label_run.bytes().map(|b| (b - b'A') as usize)
}

/// A stonehenge move: claim the cell with this index.
///
/// Text form is the cell's letter, `A` onwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell(pub u8);

impl Cell {
    /// The cell's letter label.
    #[must_use]
    pub fn label(self) -> char {
        (b'A' + self.0) as char
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Rules of a stonehenge game with a fixed board size.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Stonehenge {
    side: u8,
}

impl Stonehenge {
    /// Create the rules for a board of the given side length.
    ///
    /// # Panics
    ///
    /// Panics unless `side` is between 1 and 5.
    #[must_use]
    pub fn new(side: u8) -> Self {
        assert!((1..=5).contains(&side), "side length must be 1-5");
        Self { side }
    }

    /// The board's side length.
    #[must_use]
    pub fn side(&self) -> u8 {
        self.side
    }
}

impl GameRules for Stonehenge {
    type State = StonehengeState;

    fn instructions(&self) -> String {
        "Players take turns claiming cells from the game board. A player \
         that has claimed at least half of the cells in a ley-line captures \
         that ley-line. Once a cell or ley-line is claimed, the other \
         player cannot capture either. The first player to capture at \
         least half of the ley-lines on the game board is the winner."
            .to_string()
    }

    fn initial_state(&self, first_player: Player) -> StonehengeState {
        StonehengeState::new(first_player, self.side)
    }

    fn parse_move(&self, input: &str) -> Result<Cell, ParseMoveError> {
        let expected = "a single uppercase cell letter";
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => {
                let index = c as u8 - b'A';
                if (index as usize) < cell_count(self.side) {
                    Ok(Cell(index))
                } else {
                    Err(ParseMoveError::new(input, expected))
                }
            }
            _ => Err(ParseMoveError::new(input, expected)),
        }
    }
}

/// A stonehenge position: cell claims, ley-line markers, and the side to
/// move.
///
/// Cells and markers use `im` persistent vectors, so the clones taken for
/// every hypothetical position during search share structure instead of
/// copying the whole board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StonehengeState {
    player: Player,
    side: u8,
    cells: im::Vector<Option<Player>>,
    markers: im::Vector<Option<Player>>,
}

impl StonehengeState {
    /// The starting position for a board of the given side length.
    #[must_use]
    pub fn new(first_player: Player, side: u8) -> Self {
        assert!((1..=5).contains(&side), "side length must be 1-5");
        Self {
            player: first_player,
            side,
            cells: std::iter::repeat(None).take(cell_count(side)).collect(),
            markers: std::iter::repeat(None).take(line_table(side).len()).collect(),
        }
    }

    /// The claim on a cell, if any.
    #[must_use]
    pub fn cell_owner(&self, cell: Cell) -> Option<Player> {
        self.cells[cell.0 as usize]
    }

    /// The capturer of a ley-line, if any.
    #[must_use]
    pub fn line_owner(&self, line: usize) -> Option<Player> {
        self.markers[line]
    }

    /// Number of ley-lines on this board.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.markers.len()
    }

    /// Number of ley-lines captured by `player`.
    #[must_use]
    pub fn captured_lines(&self, player: Player) -> usize {
        self.markers.iter().filter(|m| **m == Some(player)).count()
    }

    /// Whether `player` holds at least half of all ley-lines.
    fn holds_half_the_lines(&self, player: Player) -> bool {
        2 * self.captured_lines(player) >= self.line_count()
    }
}

impl std::fmt::Display for StonehengeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stonehenge (side {}): p1 holds {} ley-lines, p2 holds {}, {} to move",
            self.side,
            self.captured_lines(Player::One),
            self.captured_lines(Player::Two),
            self.player
        )
    }
}

impl GameState for StonehengeState {
    type Move = Cell;

    fn player(&self) -> Player {
        self.player
    }

    /// Free cells in alphabetical label order, or nothing once the
    /// previous mover holds at least half of all ley-lines.
    ///
    /// Only the previous mover is checked: captures happen exclusively on
    /// a player's own move, so the side to move can never be the one that
    /// just reached the threshold.
    fn legal_moves(&self) -> Vec<Cell> {
        if self.holds_half_the_lines(self.player.opponent()) {
            return Vec::new();
        }

        self.cells
            .iter()
            .enumerate()
            .filter(|(_, owner)| owner.is_none())
            .map(|(i, _)| Cell(i as u8))
            .collect()
    }

    fn apply(&self, mv: &Cell) -> Self {
        assert!(self.is_legal(mv), "illegal stonehenge move {mv}");

        let mover = self.player;
        let mut cells = self.cells.clone();
        cells.set(mv.0 as usize, Some(mover));

        // Capture every still-unmarked line the mover now half-controls.
        let mut markers = self.markers.clone();
        for (line, labels) in line_table(self.side).iter().enumerate() {
            if markers[line].is_some() {
                continue;
            }
            let members = labels.len();
            let owned = line_cells(labels)
                .filter(|i| cells[*i] == Some(mover))
                .count();
            if 2 * owned >= members {
                markers.set(line, Some(mover));
            }
        }

        Self {
            player: mover.opponent(),
            side: self.side,
            cells,
            markers,
        }
    }
}
