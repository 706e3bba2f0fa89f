//! Chess pieces, their attack geometry, and the placed-piece set.
//!
//! Attack geometry is pure: given a piece kind and an origin square, it
//! returns the squares that piece attacks on an empty board, ignoring
//! blockers. Sliding pieces (rook, bishop, queen) are deliberately
//! infinite-range: this is the intended Chess-Sudoku semantics, not a bug.

use crate::board::{self, SIZE};
use crate::error::ChessSudokuError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five chess piece kinds this core supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
        };
        f.write_str(s)
    }
}

/// A bitmask over the 81 board squares (row-major, bit `r*9+c`).
pub type SquareMask = u128;

#[inline]
pub fn square_bit(row: usize, col: usize) -> SquareMask {
    1u128 << board::index(row, col)
}

#[inline]
pub fn mask_contains(mask: SquareMask, row: usize, col: usize) -> bool {
    mask & square_bit(row, col) != 0
}

/// Every square set in `mask`, as `(row, col)` pairs.
pub fn mask_squares(mask: SquareMask) -> impl Iterator<Item = (usize, usize)> {
    (0..81).filter_map(move |idx| {
        if mask & (1u128 << idx) != 0 {
            Some(board::coords(idx))
        } else {
            None
        }
    })
}

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The squares `kind` attacks from `(row, col)` on an otherwise empty board.
pub fn attacked_squares(kind: PieceKind, row: usize, col: usize) -> SquareMask {
    match kind {
        PieceKind::Knight => leaper_mask(row, col, &KNIGHT_OFFSETS),
        PieceKind::King => leaper_mask(row, col, &KING_OFFSETS),
        PieceKind::Rook => rook_mask(row, col),
        PieceKind::Bishop => bishop_mask(row, col),
        PieceKind::Queen => rook_mask(row, col) | bishop_mask(row, col),
    }
}

fn leaper_mask(row: usize, col: usize, offsets: &[(i32, i32)]) -> SquareMask {
    let mut mask = 0;
    for &(dr, dc) in offsets {
        let r = row as i32 + dr;
        let c = col as i32 + dc;
        if (0..SIZE as i32).contains(&r) && (0..SIZE as i32).contains(&c) {
            mask |= square_bit(r as usize, c as usize);
        }
    }
    mask
}

fn rook_mask(row: usize, col: usize) -> SquareMask {
    let mut mask = 0;
    for c in 0..SIZE {
        if c != col {
            mask |= square_bit(row, c);
        }
    }
    for r in 0..SIZE {
        if r != row {
            mask |= square_bit(r, col);
        }
    }
    mask
}

fn bishop_mask(row: usize, col: usize) -> SquareMask {
    let mut mask = 0;
    for &(dr, dc) in &[(-1i32, -1i32), (-1, 1), (1, -1), (1, 1)] {
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        while (0..SIZE as i32).contains(&r) && (0..SIZE as i32).contains(&c) {
            mask |= square_bit(r as usize, c as usize);
            r += dr;
            c += dc;
        }
    }
    mask
}

/// An immutable, placed chess piece. Created once, never moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub row: usize,
    pub col: usize,
}

impl Piece {
    pub fn new(kind: PieceKind, row: usize, col: usize) -> Self {
        Piece { kind, row, col }
    }
}

/// The pieces placed on a board, with their attack masks precomputed once.
///
/// Construction only rejects out-of-bounds squares and two pieces sharing a
/// square. Mutually-attacking pieces (e.g. two rooks sharing a row) are
/// accepted: chess-sudoku already forbids same-row duplicates under plain
/// Sudoku, so a pair of attacking pieces does not by itself make the
/// configuration unsatisfiable — a sufficiently large mutually-attacking
/// group can, but that shows up as a `generate_complete` failure, not a
/// construction-time rejection.
#[derive(Debug, Clone)]
pub struct PiecesSet {
    pieces: Vec<Piece>,
    attacks: Vec<SquareMask>,
    /// Index into `pieces`/`attacks` for the piece occupying a given square,
    /// or `None` if the square is unoccupied.
    owner: [Option<usize>; board::CELLS],
}

impl PiecesSet {
    /// Builds a `PiecesSet`, validating placement invariants.
    pub fn new(pieces: Vec<Piece>) -> Result<Self, ChessSudokuError> {
        for p in &pieces {
            if p.row >= SIZE || p.col >= SIZE {
                return Err(ChessSudokuError::InvalidPlacement(format!(
                    "{} at ({}, {}) is out of bounds",
                    p.kind, p.row, p.col
                )));
            }
        }

        let mut owner = [None; board::CELLS];
        let mut attacks = Vec::with_capacity(pieces.len());
        for (i, p) in pieces.iter().enumerate() {
            let idx = board::index(p.row, p.col);
            if owner[idx].is_some() {
                return Err(ChessSudokuError::InvalidPlacement(format!(
                    "two pieces placed on ({}, {})",
                    p.row, p.col
                )));
            }
            owner[idx] = Some(i);
            attacks.push(attacked_squares(p.kind, p.row, p.col));
        }

        Ok(PiecesSet {
            pieces,
            attacks,
            owner,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    pub fn get(&self, i: usize) -> Piece {
        self.pieces[i]
    }

    /// The precomputed attack mask for the piece at index `i`.
    pub fn attacks(&self, i: usize) -> SquareMask {
        self.attacks[i]
    }

    /// The index of the piece occupying `(row, col)`, if any.
    pub fn owner_at(&self, row: usize, col: usize) -> Option<usize> {
        self.owner[board::index(row, col)]
    }

    pub fn is_piece_square(&self, row: usize, col: usize) -> bool {
        self.owner_at(row, col).is_some()
    }
}
