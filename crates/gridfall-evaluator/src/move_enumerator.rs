//! Enumeration of every reachable resting board for a piece.
//!
//! A move is one rotation state plus one horizontal offset followed by a
//! hard drop; there is no mid-drop horizontal movement. This cannot produce
//! placements that would require lateral motion beneath an overhang, a
//! known limitation of hard-drop-only play, not a defect.
//!
//! Candidates are full board copies with the piece committed. Line clearing
//! is not applied; complete rows are left for the evaluator to score.

use arrayvec::ArrayVec;
use gridfall_engine::{BOARD_HEIGHT, Board, Piece, catalog::TEMPLATE_SIZE};

/// Produces every board reachable from one rotation + column + hard-drop
/// choice of `piece` on `board`.
///
/// Output order is rotation-major (starting one past the piece's current
/// rotation state and wrapping through all states exactly once), then sweep
/// order within a rotation. Boards reached through rotationally symmetric
/// states are not deduplicated. Placements whose commit would write above
/// the top row are discarded.
#[must_use]
pub fn enumerate_drops(board: &Board, piece: &Piece) -> Vec<Board> {
    let mut candidates = Vec::new();

    for rotated in rotation_states(piece) {
        for dx in horizontal_sweep(&rotated) {
            if !board.is_valid_position(&rotated, dx, 0) {
                continue;
            }
            let resting = hard_drop(board, &rotated, dx);
            let mut candidate = board.clone();
            if candidate.fill_piece(&resting) {
                candidates.push(candidate);
            }
        }
    }

    candidates
}

/// All rotation states of `piece`, starting one past its current state and
/// wrapping through every state exactly once.
fn rotation_states(piece: &Piece) -> ArrayVec<Piece, 4> {
    let mut states = ArrayVec::new();
    let mut rotated = *piece;
    for _ in 0..piece.shape().rotation_count() {
        rotated = rotated.rotated_next();
        states.push(rotated);
    }
    states
}

/// Horizontal offsets in interleaved order `0, -1, +1, -2, +2, …`.
///
/// Offset 0 is always tried; each direction is explored until
/// [`Board::is_in_range`] first fails for it, after which that direction is
/// closed for good.
fn horizontal_sweep(piece: &Piece) -> Vec<i32> {
    let mut offsets = vec![0];
    let (mut left, mut right) = (-1, 1);
    let mut left_open = Board::is_in_range(piece, left);
    let mut right_open = Board::is_in_range(piece, right);
    while left_open || right_open {
        if left_open {
            offsets.push(left);
            left -= 1;
            left_open = Board::is_in_range(piece, left);
        }
        if right_open {
            offsets.push(right);
            right += 1;
            right_open = Board::is_in_range(piece, right);
        }
    }
    offsets
}

/// Finds the resting position of `piece` shifted by `dx` columns and dropped
/// straight down.
///
/// The probe distance increases monotonically and a piece can fall at most
/// the board height plus the template size before leaving the grid, so the
/// loop is bounded. If even the first probe collides the piece rests at its
/// original row.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn hard_drop(board: &Board, piece: &Piece, dx: i32) -> Piece {
    const MAX_PROBE: i32 = (BOARD_HEIGHT + TEMPLATE_SIZE) as i32;
    let mut landing = 0;
    for dy in 1..=MAX_PROBE {
        if !board.is_valid_position(piece, dx, dy) {
            break;
        }
        landing = dy;
    }
    piece.translated(dx, landing)
}

#[cfg(test)]
mod tests {
    use gridfall_engine::{CellColor, Shape};

    use super::*;

    #[test]
    fn test_o_piece_candidate_count_on_empty_board() {
        let board = Board::new();
        let piece = Piece::new(Shape::O, 0, CellColor::Blue);
        // One rotation state, anchor offsets -4..=4: nine columns.
        assert_eq!(enumerate_drops(&board, &piece).len(), 9);
    }

    #[test]
    fn test_i_piece_candidate_count_on_empty_board() {
        let board = Board::new();
        let piece = Piece::new(Shape::I, 0, CellColor::Red);
        // Vertical state reaches all 10 columns, horizontal 7 anchors.
        assert_eq!(enumerate_drops(&board, &piece).len(), 17);
    }

    #[test]
    fn test_candidates_add_exactly_four_cells() {
        let board = Board::from_ascii(
            "
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            #.........
            ##....#...
            ###..###..
            ",
        );
        let base = board.occupied_cells();
        for shape in Shape::ALL {
            let piece = Piece::new(shape, 0, CellColor::Green);
            let candidates = enumerate_drops(&board, &piece);
            assert!(!candidates.is_empty(), "{shape:?} should have moves");
            for candidate in candidates {
                assert_eq!(candidate.occupied_cells(), base + 4, "{shape:?}");
            }
        }
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let board = Board::new();
        let piece = Piece::new(Shape::T, 2, CellColor::Yellow);
        assert_eq!(
            enumerate_drops(&board, &piece),
            enumerate_drops(&board, &piece)
        );
    }

    #[test]
    fn test_first_candidate_is_next_rotation_at_center() {
        // Rotation-major order starting one past the current state: for a
        // T-piece in state 0, the first candidate is state 1 at offset 0.
        let board = Board::new();
        let piece = Piece::new(Shape::T, 0, CellColor::Blue);
        let candidates = enumerate_drops(&board, &piece);

        let mut expected = board.clone();
        let resting = hard_drop(&board, &piece.rotated_next(), 0);
        assert!(expected.fill_piece(&resting));
        assert_eq!(candidates[0], expected);
    }

    #[test]
    fn test_no_candidates_when_every_rest_overflows_the_top() {
        // Row 0 is blocked everywhere except column 5, so no horizontal I
        // placement is valid, and the vertical drop at column 5 is stopped
        // immediately by the block at row 2, resting with cells above the
        // board, which is discarded.
        let board = Board::from_ascii(
            "
            #####.####
            ..........
            .....#....
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ",
        );
        let piece = Piece::new(Shape::I, 0, CellColor::Red);
        assert!(board.is_valid_position(&piece, 0, 0));
        assert!(enumerate_drops(&board, &piece).is_empty());
    }

    #[test]
    fn test_overhang_pocket_is_unreachable() {
        // The pocket under the ledge at (0, 19) can only be reached by
        // lateral movement beneath an overhang, which hard-drop-only play
        // cannot perform.
        let board = Board::from_ascii(
            "
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ##........
            .#........
            ",
        );
        for shape in Shape::ALL {
            let piece = Piece::new(shape, 0, CellColor::Blue);
            for candidate in enumerate_drops(&board, &piece) {
                assert!(candidate.cell(0, 19).is_none(), "{shape:?} filled the pocket");
            }
        }
    }
}
