//! `LogicalSolver`: checks whether a puzzle board can be completed using
//! only human-style deduction, never guessing.
//!
//! This mirrors the techniques a human solver reaches for, in the order
//! they are cheapest to apply: constraint propagation, naked singles,
//! hidden singles (row, column, or box), and naked pairs (row or column
//! only — boxes are deliberately excluded, see the module-level note on
//! `find_naked_pairs`). The loop stops at a fixed point or after a hundred
//! iterations, whichever comes first; it never backtracks or guesses.

use crate::board::{self, Board, Cell};
use crate::constraints::{self, ConstraintIndex};
use crate::piece::PiecesSet;

const MAX_ITERATIONS: u32 = 100;

/// Returns true iff `board` can be driven to completion from its current
/// state using only the logical techniques below, given `pieces`. Operates
/// on a private clone: the caller's board is never touched.
pub fn is_solvable_logically(board: &Board, pieces: &PiecesSet) -> bool {
    let mut work = board.clone_board();
    let mut candidates = ConstraintIndex::build(&work, pieces);

    for _ in 0..MAX_ITERATIONS {
        let mut progress = false;

        if naked_singles(&mut work, pieces, &mut candidates) {
            progress = true;
        }
        if hidden_singles(&mut work, pieces, &mut candidates) {
            progress = true;
        }
        if naked_pairs(&work, &mut candidates) {
            progress = true;
        }

        if is_complete(&work) {
            log::debug!("is_solvable_logically: completed by pure deduction");
            return true;
        }
        if !progress {
            log::trace!("is_solvable_logically: stuck, no further deduction possible");
            return false;
        }
    }

    log::trace!(
        "is_solvable_logically: hit the {}-iteration cap without completing",
        MAX_ITERATIONS
    );
    false
}

fn is_complete(board: &Board) -> bool {
    (0..board::CELLS).all(|idx| !board.is_empty_idx(idx))
}

/// Fills every cell whose candidate mask has exactly one bit set, and
/// rebuilds affected neighbors' candidates afterward (a fresh `build` per
/// pass is simplest to reason about and cheap at 81 cells).
fn naked_singles(board: &mut Board, pieces: &PiecesSet, candidates: &mut ConstraintIndex) -> bool {
    let mut progress = false;
    for idx in 0..board::CELLS {
        if board.is_empty_idx(idx) {
            if let Some(d) = constraints::mask_single(candidates.mask(idx)) {
                let (r, c) = board::coords(idx);
                board.set(r, c, Cell::Digit(d));
                progress = true;
            }
        }
    }
    if progress {
        *candidates = ConstraintIndex::build(board, pieces);
    }
    progress
}

/// Fills any cell that is the only one in its row, column, or box still
/// able to hold a particular digit.
///
/// Rebuilds `candidates` immediately after every single assignment, not
/// once at the end of the scan: a digit placed while scanning row houses
/// can make another cell's mask stale by the time column or box houses are
/// scanned in the same call, and a hidden single found there against a
/// stale mask can collide with the earlier assignment in a shared house.
fn hidden_singles(board: &mut Board, pieces: &PiecesSet, candidates: &mut ConstraintIndex) -> bool {
    let mut progress = false;
    let houses: Vec<[usize; board::SIZE]> = board.rows().chain(board.cols()).chain(board.boxes()).collect();
    for digit in 1..=9u8 {
        for house in &houses {
            let mut only: Option<usize> = None;
            let mut count = 0;
            for &idx in house {
                if board.is_empty_idx(idx) && constraints::mask_contains(candidates.mask(idx), digit) {
                    count += 1;
                    only = Some(idx);
                }
            }
            if count == 1 {
                let idx = only.unwrap();
                if board.is_empty_idx(idx) {
                    let (r, c) = board::coords(idx);
                    board.set(r, c, Cell::Digit(digit));
                    *candidates = ConstraintIndex::build(board, pieces);
                    progress = true;
                }
            }
        }
    }
    progress
}

/// Removes a naked pair's two digits from the candidates of every other
/// cell sharing the pair's row or column.
///
/// Restricted to rows and columns only: boxes are intentionally left out
/// of this technique here, matching an inherited scope decision rather
/// than a box/row/col-complete naked-pairs implementation. Widening this
/// to boxes is a real improvement but changes which puzzles this solver
/// calls "logically solvable," so it is left for a deliberate decision
/// rather than folded in silently.
fn naked_pairs(board: &Board, candidates: &mut ConstraintIndex) -> bool {
    let mut progress = false;
    let lines: Vec<[usize; board::SIZE]> = board.rows().chain(board.cols()).collect();

    for line in lines {
        let empties: Vec<usize> = line.into_iter().filter(|&i| board.is_empty_idx(i)).collect();
        for i in 0..empties.len() {
            for j in (i + 1)..empties.len() {
                let (a, b) = (empties[i], empties[j]);
                let (ma, mb) = (candidates.mask(a), candidates.mask(b));
                if constraints::mask_count(ma) == 2 && ma == mb {
                    for &other in &empties {
                        if other != a && other != b {
                            let before = candidates.mask(other);
                            let after = before & !ma;
                            if after != before {
                                candidates.set_mask(other, after);
                                progress = true;
                            }
                        }
                    }
                }
            }
        }
    }
    progress
}
