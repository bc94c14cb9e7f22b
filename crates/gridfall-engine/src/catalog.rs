//! Static tetromino shape data.
//!
//! Every rotation state of every shape is defined as an occupancy pattern
//! inside a fixed 5×5 template. The tables are built at compile time from
//! byte-string rows, so the data next to each shape reads like the pattern
//! it encodes.
//!
//! Rotation-state counts differ per shape: O has 1, S/Z/I have 2, and
//! J/L/T have 4. Rotation indices wrap modulo that count.

use crate::piece::Shape;

/// Side length of the square template every rotation state is defined in.
pub const TEMPLATE_SIZE: usize = 5;

/// Occupied `(dx, dy)` offsets of one rotation state within the template.
///
/// Every tetromino occupies exactly four cells in every rotation state.
pub type RotationCells = [(i8, i8); 4];

/// Returns the occupied template offsets for `shape` in the given rotation
/// state. The rotation index wraps modulo the shape's state count.
#[must_use]
pub fn cells_occupied(shape: Shape, rotation: u8) -> &'static RotationCells {
    let states = SHAPE_CELLS[shape as usize];
    &states[rotation as usize % states.len()]
}

/// Number of distinct rotation states for `shape`.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn rotation_count(shape: Shape) -> u8 {
    SHAPE_CELLS[shape as usize].len() as u8
}

/// Extracts the occupied offsets from five template rows.
///
/// `b'O'` marks an occupied cell; anything else is empty. Panics at compile
/// time unless the pattern contains exactly four occupied cells.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn cells(rows: [&[u8; TEMPLATE_SIZE]; TEMPLATE_SIZE]) -> RotationCells {
    let mut out = [(0i8, 0i8); 4];
    let mut n = 0;
    let mut y = 0;
    while y < TEMPLATE_SIZE {
        let mut x = 0;
        while x < TEMPLATE_SIZE {
            if rows[y][x] == b'O' {
                assert!(n < 4, "template must occupy exactly four cells");
                out[n] = (x as i8, y as i8);
                n += 1;
            }
            x += 1;
        }
        y += 1;
    }
    assert!(n == 4, "template must occupy exactly four cells");
    out
}

const S_CELLS: [RotationCells; 2] = [
    cells([b".....", b".....", b"..OO.", b".OO..", b"....."]),
    cells([b".....", b"..O..", b"..OO.", b"...O.", b"....."]),
];

const Z_CELLS: [RotationCells; 2] = [
    cells([b".....", b".....", b".OO..", b"..OO.", b"....."]),
    cells([b".....", b"..O..", b".OO..", b".O...", b"....."]),
];

const I_CELLS: [RotationCells; 2] = [
    cells([b"..O..", b"..O..", b"..O..", b"..O..", b"....."]),
    cells([b".....", b".....", b"OOOO.", b".....", b"....."]),
];

const O_CELLS: [RotationCells; 1] = [cells([b".....", b".....", b".OO..", b".OO..", b"....."])];

const J_CELLS: [RotationCells; 4] = [
    cells([b".....", b".O...", b".OOO.", b".....", b"....."]),
    cells([b".....", b"..OO.", b"..O..", b"..O..", b"....."]),
    cells([b".....", b".....", b".OOO.", b"...O.", b"....."]),
    cells([b".....", b"..O..", b"..O..", b".OO..", b"....."]),
];

const L_CELLS: [RotationCells; 4] = [
    cells([b".....", b"...O.", b".OOO.", b".....", b"....."]),
    cells([b".....", b"..O..", b"..O..", b"..OO.", b"....."]),
    cells([b".....", b".....", b".OOO.", b".O...", b"....."]),
    cells([b".....", b".OO..", b"..O..", b"..O..", b"....."]),
];

const T_CELLS: [RotationCells; 4] = [
    cells([b".....", b"..O..", b".OOO.", b".....", b"....."]),
    cells([b".....", b"..O..", b"..OO.", b"..O..", b"....."]),
    cells([b".....", b".....", b".OOO.", b"..O..", b"....."]),
    cells([b".....", b"..O..", b".OO..", b"..O..", b"....."]),
];

static SHAPE_CELLS: [&[RotationCells]; Shape::LEN] = [
    &S_CELLS, &Z_CELLS, &I_CELLS, &O_CELLS, &J_CELLS, &L_CELLS, &T_CELLS,
];
