use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use crate::{
    board::{BOARD_WIDTH, CellColor},
    catalog::{self, RotationCells, TEMPLATE_SIZE},
};

/// A falling tetromino at a specific anchor, rotation, and color.
///
/// The anchor `(x, y)` is the top-left corner of the shape's 5×5 template on
/// the board; it may be negative while the piece is above the visible rows.
/// Pieces are immutable; rotation and translation return new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    shape: Shape,
    rotation: u8,
    x: i32,
    y: i32,
    color: CellColor,
}

impl Piece {
    /// Spawn anchor column: the template is centered on the board.
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const SPAWN_X: i32 = (BOARD_WIDTH / 2) as i32 - (TEMPLATE_SIZE / 2) as i32;
    /// Spawn anchor row: above the visible board.
    pub const SPAWN_Y: i32 = -2;

    /// Creates a piece at the spawn anchor. The rotation index wraps modulo
    /// the shape's rotation-state count.
    #[must_use]
    pub fn new(shape: Shape, rotation: u8, color: CellColor) -> Self {
        Self {
            shape,
            rotation: rotation % shape.rotation_count(),
            x: Self::SPAWN_X,
            y: Self::SPAWN_Y,
            color,
        }
    }

    /// Spawns a fresh piece with random shape, rotation, and color.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let shape: Shape = rng.random();
        let rotation = rng.random_range(0..shape.rotation_count());
        let color: CellColor = rng.random();
        Self::new(shape, rotation, color)
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub fn color(&self) -> CellColor {
        self.color
    }

    /// Returns this piece advanced to its next rotation state, wrapping
    /// through the shape's states.
    #[must_use]
    pub fn rotated_next(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % self.shape.rotation_count(),
            ..*self
        }
    }

    /// Returns this piece moved by `(dx, dy)` board cells.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Occupied offsets within the 5×5 template for the current rotation.
    #[must_use]
    pub fn template_cells(&self) -> &'static RotationCells {
        catalog::cells_occupied(self.shape, self.rotation)
    }

    /// Iterates the absolute board coordinates occupied by this piece.
    ///
    /// Rows may be negative while the piece is above the visible board.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.template_cells()
            .iter()
            .map(move |&(dx, dy)| (self.x + i32::from(dx), self.y + i32::from(dy)))
    }
}

/// Enum representing the tetromino shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Shape {
    /// S-piece.
    S = 0,
    /// Z-piece.
    Z = 1,
    /// I-piece.
    I = 2,
    /// O-piece.
    O = 3,
    /// J-piece.
    J = 4,
    /// L-piece.
    L = 5,
    /// T-piece.
    T = 6,
}

impl Distribution<Shape> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        match rng.random_range(0..=6) {
            0 => Shape::S,
            1 => Shape::Z,
            2 => Shape::I,
            3 => Shape::O,
            4 => Shape::J,
            5 => Shape::L,
            _ => Shape::T,
        }
    }
}

impl Shape {
    /// Number of shapes (7).
    pub const LEN: usize = 7;

    /// All shapes, in catalog order.
    pub const ALL: [Shape; Shape::LEN] = [
        Shape::S,
        Shape::Z,
        Shape::I,
        Shape::O,
        Shape::J,
        Shape::L,
        Shape::T,
    ];

    /// Number of distinct rotation states for this shape.
    #[must_use]
    pub fn rotation_count(self) -> u8 {
        catalog::rotation_count(self)
    }

    /// Returns the single character representation of this shape.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Shape::S => 'S',
            Shape::Z => 'Z',
            Shape::I => 'I',
            Shape::O => 'O',
            Shape::J => 'J',
            Shape::L => 'L',
            Shape::T => 'T',
        }
    }

    /// Parses a shape from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'S' => Some(Shape::S),
            'Z' => Some(Shape::Z),
            'I' => Some(Shape::I),
            'O' => Some(Shape::O),
            'J' => Some(Shape::J),
            'L' => Some(Shape::L),
            'T' => Some(Shape::T),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn test_spawn_anchor() {
        let piece = Piece::new(Shape::T, 0, CellColor::Red);
        assert_eq!(piece.x(), 3);
        assert_eq!(piece.y(), -2);
    }

    #[test]
    fn test_rotation_wraps_in_constructor() {
        let piece = Piece::new(Shape::S, 5, CellColor::Blue);
        assert_eq!(piece.rotation(), 1);
        let o_piece = Piece::new(Shape::O, 3, CellColor::Blue);
        assert_eq!(o_piece.rotation(), 0);
    }

    #[test]
    fn test_rotated_next_cycles_through_all_states() {
        let mut piece = Piece::new(Shape::J, 0, CellColor::Green);
        let mut seen = vec![piece.rotation()];
        for _ in 0..3 {
            piece = piece.rotated_next();
            seen.push(piece.rotation());
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(piece.rotated_next().rotation(), 0);
    }

    #[test]
    fn test_translated_moves_all_cells() {
        let piece = Piece::new(Shape::L, 0, CellColor::Yellow);
        let moved = piece.translated(2, 5);
        let original: Vec<_> = piece.cells().collect();
        let shifted: Vec<_> = moved.cells().collect();
        for (&(x0, y0), &(x1, y1)) in original.iter().zip(&shifted) {
            assert_eq!((x1, y1), (x0 + 2, y0 + 5));
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let mut a = Pcg64Mcg::seed_from_u64(7);
        let mut b = Pcg64Mcg::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(Piece::spawn(&mut a), Piece::spawn(&mut b));
        }
    }

    #[test]
    fn test_spawn_rotation_always_valid() {
        let mut rng = Pcg64Mcg::seed_from_u64(11);
        for _ in 0..200 {
            let piece = Piece::spawn(&mut rng);
            assert!(piece.rotation() < piece.shape().rotation_count());
        }
    }

    #[test]
    fn test_shape_char_round_trip() {
        for shape in Shape::ALL {
            assert_eq!(Shape::from_char(shape.as_char()), Some(shape));
        }
        assert_eq!(Shape::from_char('X'), None);
    }
}
