//! The puzzle descriptor: the serializable handoff shape for upload and
//! storage collaborators outside this crate.

use crate::board::{Board, Cell};
use crate::piece::{PieceKind, PiecesSet};
use serde::{Deserialize, Serialize};

/// A placed piece in the descriptor's wire shape: a lowercase type tag and
/// a `[row, col]` pair, rather than this crate's internal `Piece` struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceDescriptor {
    #[serde(rename = "type")]
    pub kind: PieceKind,
    pub position: [usize; 2],
}

/// The full handoff shape: a puzzle board, the pieces placed on it, and the
/// complete answer. `board` hides digits under piece squares (rendered as
/// `0`, same as any other empty square); `answer` shows every cell's real
/// digit, including the ones under pieces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub board: [[u8; 9]; 9],
    pub pieces: Vec<PieceDescriptor>,
    pub answer: [[u8; 9]; 9],
}

impl Puzzle {
    /// Builds the descriptor from a carved puzzle board, its pieces, and
    /// the uncarved answer board. `puzzle` and `answer` must describe the
    /// same piece placement; `answer` must be fully solved (no `Empty` or
    /// `Piece` cells remaining).
    pub fn new(puzzle: &Board, pieces: &PiecesSet, answer: &Board) -> Self {
        Puzzle {
            board: to_matrix(puzzle),
            pieces: pieces
                .iter()
                .map(|p| PieceDescriptor {
                    kind: p.kind,
                    position: [p.row, p.col],
                })
                .collect(),
            answer: to_matrix(answer),
        }
    }
}

fn to_matrix(board: &Board) -> [[u8; 9]; 9] {
    let mut out = [[0u8; 9]; 9];
    for r in 0..9 {
        for c in 0..9 {
            out[r][c] = match board.get(r, c) {
                Cell::Digit(d) => d,
                Cell::Empty | Cell::Piece(_) => 0,
            };
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn piece_squares_are_zero_in_the_puzzle_matrix_but_solved_in_the_answer() {
        let pieces = PiecesSet::new(vec![Piece::new(PieceKind::Bishop, 0, 0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(20);
        let answer = crate::generator::generate_complete(&pieces, &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        let result = crate::carver::carve(&answer, &pieces, 20, 0, &mut rng);

        let descriptor = Puzzle::new(&result.puzzle, &pieces, &answer);
        assert_eq!(descriptor.board[0][0], 0);
        assert_ne!(descriptor.answer[0][0], 0);
    }

    #[test]
    fn piece_kind_tag_is_lowercase() {
        let pieces = PiecesSet::new(vec![Piece::new(PieceKind::Knight, 1, 2)]).unwrap();
        let mut rng = StdRng::seed_from_u64(22);
        let answer = crate::generator::generate_complete(&pieces, &mut rng).unwrap();
        let descriptor = Puzzle::new(&answer, &pieces, &answer);
        assert_eq!(descriptor.pieces[0].kind.to_string(), "knight");
    }
}
