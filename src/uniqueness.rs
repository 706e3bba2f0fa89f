//! `UniquenessChecker`: counts solutions up to a cap, to prove a puzzle has
//! exactly one.
//!
//! Shares the MRV-plus-forward-checking skeleton with [`crate::generator`],
//! but enumerates each cell's candidates in deterministic ascending digit
//! order instead of shuffling them: uniqueness proof only needs an exact
//! count, and a fixed order makes that count reproducible and this module
//! trivially testable.

use crate::board::{self, Board, Cell};
use crate::constraints::{self, ConstraintIndex};
use crate::piece::PiecesSet;

/// Counts solutions to `board` (with `pieces` already placed as markers) up
/// to `cap`, aborting the search as soon as `cap` is reached. A `board`
/// already fully solved counts as one solution; an already-contradictory
/// board counts as zero.
pub fn count_solutions(board: &Board, pieces: &PiecesSet, cap: usize) -> usize {
    let mut work = board.clone_board();
    let mut index = ConstraintIndex::build(&work, pieces);
    let mut found = 0usize;
    count(&mut work, pieces, &mut index, cap, &mut found);
    log::debug!("count_solutions: found {} (cap {})", found, cap);
    found
}

fn select_first_empty(board: &Board, index: &ConstraintIndex) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut best_count = u32::MAX;
    for idx in 0..board::CELLS {
        if board.is_empty_idx(idx) {
            let count = index.count(idx);
            if count < best_count {
                best_count = count;
                best = Some(idx);
                if count == 0 {
                    break;
                }
            }
        }
    }
    best
}

fn count(
    board: &mut Board,
    pieces: &PiecesSet,
    index: &mut ConstraintIndex,
    cap: usize,
    found: &mut usize,
) {
    if *found >= cap {
        return;
    }

    let cell = match select_first_empty(board, index) {
        None => {
            *found += 1;
            return;
        }
        Some(c) => c,
    };

    if index.count(cell) == 0 {
        return;
    }

    let original = board.get_idx(cell);
    for digit in constraints::mask_digits(index.mask(cell)).collect::<Vec<_>>() {
        board.set_idx(cell, Cell::Digit(digit));
        let saved_mask = index.clear(cell);

        let mut journal = Vec::new();
        let mut ok = true;
        for affected in crate::constraints::affected_cells(board, pieces, cell) {
            if index.remove(affected, digit) {
                journal.push(affected);
                if index.mask(affected) == 0 {
                    ok = false;
                }
            }
        }

        if ok {
            count(board, pieces, index, cap, found);
        }

        for j in journal.into_iter().rev() {
            index.restore(j, digit);
        }
        index.set_mask(cell, saved_mask);
        board.set_idx(cell, original);

        if *found >= cap {
            return;
        }
    }
}
