use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize, ser::SerializeSeq as _};

use crate::piece::Piece;

/// Board width in cells.
pub const BOARD_WIDTH: usize = 10;
/// Board height in visible rows. Row 0 is the topmost visible row.
pub const BOARD_HEIGHT: usize = 20;

/// Color palette index stored in an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellColor {
    /// Blue.
    Blue = 0,
    /// Green.
    Green = 1,
    /// Red.
    Red = 2,
    /// Yellow.
    Yellow = 3,
}

impl Distribution<CellColor> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CellColor {
        match rng.random_range(0..=3) {
            0 => CellColor::Blue,
            1 => CellColor::Green,
            2 => CellColor::Red,
            _ => CellColor::Yellow,
        }
    }
}

impl CellColor {
    /// Number of palette entries (4).
    pub const LEN: usize = 4;

    /// Palette index of this color.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single character representation, used by the board's serialized form.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            CellColor::Blue => 'B',
            CellColor::Green => 'G',
            CellColor::Red => 'R',
            CellColor::Yellow => 'Y',
        }
    }

    /// Parses a color from its single character representation.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(CellColor::Blue),
            'G' => Some(CellColor::Green),
            'R' => Some(CellColor::Red),
            'Y' => Some(CellColor::Yellow),
            _ => None,
        }
    }
}

/// The playing field: a fixed 10×20 grid of optionally colored cells.
///
/// # Coordinate System
///
/// - `x` is the column (`0..BOARD_WIDTH`), increasing rightward
/// - `y` is the row (`0..BOARD_HEIGHT`), `y = 0` at the top, increasing
///   downward
///
/// Negative rows exist only transiently while a freshly spawned piece is
/// above the visible board; they are never stored. A piece that would commit
/// a cell above row 0 signals a terminal overflow (see [`Board::fill_piece`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<CellColor>; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: one string per row, '.' for empty (e.g. "..B...GG..")
        let mut seq = serializer.serialize_seq(Some(BOARD_HEIGHT))?;
        for row in &self.cells {
            let text: String = row
                .iter()
                .map(|cell| cell.map_or('.', CellColor::as_char))
                .collect();
            seq.serialize_element(&text)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<String>::deserialize(deserializer)?;
        if rows.len() != BOARD_HEIGHT {
            return Err(serde::de::Error::custom(format!(
                "expected {BOARD_HEIGHT} rows, got {}",
                rows.len()
            )));
        }

        let mut cells = [[None; BOARD_WIDTH]; BOARD_HEIGHT];
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != BOARD_WIDTH {
                return Err(serde::de::Error::custom(format!(
                    "row {y} must have {BOARD_WIDTH} cells, got '{row}'"
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                cells[y][x] = match ch {
                    '.' => None,
                    _ => Some(CellColor::from_char(ch).ok_or_else(|| {
                        serde::de::Error::custom(format!("invalid cell '{ch}' at ({x}, {y})"))
                    })?),
                };
            }
        }

        Ok(Board { cells })
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Returns the cell at `(x, y)`, or `None` if the cell is empty.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<CellColor> {
        self.cells[y][x]
    }

    /// Iterates the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<CellColor>; BOARD_WIDTH]> {
        self.cells.iter()
    }

    /// Number of occupied cells on the board.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Checks that `(x, y)` lies within the board columns and above the
    /// floor. There is no lower bound on `y`: rows above the board count as
    /// on-board so pieces can spawn there.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn is_on_board(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_WIDTH as i32 && y < BOARD_HEIGHT as i32
    }

    /// Checks whether `piece`, moved by `(dx, dy)`, overlaps nothing and
    /// stays on the board.
    ///
    /// Cells whose absolute row is negative are still above the board and
    /// always pass. Returns `false` on the first violation.
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub fn is_valid_position(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        for (cx, cy) in piece.cells() {
            let (cx, cy) = (cx + dx, cy + dy);
            if cy < 0 {
                continue;
            }
            if !Self::is_on_board(cx, cy) {
                return false;
            }
            if self.cells[cy as usize][cx as usize].is_some() {
                return false;
            }
        }
        true
    }

    /// Bounds-only variant of [`Board::is_valid_position`]: checks that
    /// `piece` moved by `dx` columns stays on the board, ignoring cell
    /// occupancy. Needs no board reference, so it can bound a horizontal
    /// sweep before any collision checks run.
    #[must_use]
    pub fn is_in_range(piece: &Piece, dx: i32) -> bool {
        piece
            .cells()
            .all(|(cx, cy)| cy < 0 || Self::is_on_board(cx + dx, cy))
    }

    /// Writes the piece's color into every occupied cell that lies on the
    /// board.
    ///
    /// Returns `false` if any occupied cell fell above the top row or left
    /// of the board, a partial off-board write. The on-board part of the
    /// write still happens; callers treat the `false` return as a terminal
    /// or unreachable placement and discard the board.
    #[expect(clippy::cast_sign_loss)]
    pub fn fill_piece(&mut self, piece: &Piece) -> bool {
        let mut inside = true;
        for (cx, cy) in piece.cells() {
            if cx < 0 || cy < 0 {
                inside = false;
                continue;
            }
            self.cells[cy as usize][cx as usize] = Some(piece.color());
        }
        inside
    }

    /// Checks whether every column at row `y` is occupied.
    #[must_use]
    pub fn is_complete_line(&self, y: usize) -> bool {
        self.cells[y].iter().all(|cell| cell.is_some())
    }

    /// Removes every complete row, shifting the rows above it down by one
    /// and clearing the vacated top row. Returns the number of rows removed.
    ///
    /// Rows are scanned bottom-up; after a shift the same row index is
    /// examined again so a row pulled down into a complete position is also
    /// removed.
    pub fn remove_complete_lines(&mut self) -> usize {
        let mut removed = 0;
        let mut y = BOARD_HEIGHT - 1;
        loop {
            if self.is_complete_line(y) {
                for pull_y in (1..=y).rev() {
                    self.cells[pull_y] = self.cells[pull_y - 1];
                }
                self.cells[0] = [None; BOARD_WIDTH];
                removed += 1;
                // Re-examine the same row: the row shifted into it may also
                // be complete.
            } else if y == 0 {
                break;
            } else {
                y -= 1;
            }
        }
        removed
    }

    /// Creates a `Board` from ASCII art for testing.
    /// '#' is an occupied cell, '.' an empty cell. Rows are given top to
    /// bottom and must cover the whole board.
    ///
    /// # Panics
    ///
    /// Panics unless the art has exactly `BOARD_HEIGHT` rows of
    /// `BOARD_WIDTH` cells.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert_eq!(
            lines.len(),
            BOARD_HEIGHT,
            "board art must have exactly {BOARD_HEIGHT} rows"
        );

        let mut board = Self::new();
        for (y, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| *c == '#' || *c == '.').collect();
            assert_eq!(
                chars.len(),
                BOARD_WIDTH,
                "row {y} must have exactly {BOARD_WIDTH} cells"
            );
            for (x, &ch) in chars.iter().enumerate() {
                if ch == '#' {
                    board.cells[y][x] = Some(CellColor::Blue);
                }
            }
        }
        board
    }
}
