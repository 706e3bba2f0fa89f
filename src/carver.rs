//! `PuzzleCarver`: removes digits from a completed board until a puzzle of
//! the desired size remains, never committing a removal that the
//! [`LogicalSolver`](crate::logical_solver) can no longer solve.

use crate::board::{self, Board, Cell};
use crate::logical_solver::is_solvable_logically;
use crate::piece::PiecesSet;
use rand::distributions::WeightedIndex;
use rand::prelude::*;
use rand::Rng;

/// Carving states, entered monotonically; a carver never resumes past
/// `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CarverState {
    Initialized,
    Carving,
    Done,
}

/// Advisory difficulty label derived from the number of holes carved.
/// Never used to gate behaviour, only reported alongside the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    fn from_hole_count(holes: usize) -> Self {
        match holes {
            0..=25 => Difficulty::Easy,
            26..=40 => Difficulty::Medium,
            41..=50 => Difficulty::Hard,
            _ => Difficulty::Expert,
        }
    }
}

/// The outcome of a carve: the puzzle board and its advisory difficulty.
#[derive(Debug, Clone)]
pub struct CarveResult {
    pub puzzle: Board,
    pub holes_carved: usize,
    pub difficulty: Difficulty,
}

/// Removes up to `max_holes` digits from `answer`, each removal verified
/// not to break logical solvability, and returns the resulting puzzle.
///
/// Runs at most `3 * max_holes` attempts. If fewer than `min_holes` cells
/// could be carved within that budget, logs a warning and returns whatever
/// was achieved rather than failing: a smaller-than-requested puzzle is
/// not an error, just a carving shortfall.
pub fn carve(
    answer: &Board,
    pieces: &PiecesSet,
    max_holes: usize,
    min_holes: usize,
    rng: &mut impl Rng,
) -> CarveResult {
    let mut state = CarverState::Initialized;
    let mut puzzle = answer.clone_board();
    let mut carved: Vec<usize> = Vec::new();
    let mut unsuitable = vec![false; board::CELLS];

    state = advance(state, CarverState::Carving);

    let max_attempts = 3 * max_holes.max(1);
    let mut attempts = 0;
    while attempts < max_attempts && carved.len() < max_holes {
        attempts += 1;

        let groups = classify(&puzzle, pieces, &carved, &unsuitable);
        let Some(idx) = pick_cell(&groups, rng) else {
            log::debug!("carve: no carvable cell remains after {} attempt(s)", attempts);
            break;
        };

        let (r, c) = board::coords(idx);
        let original = puzzle.get(r, c);
        puzzle.set(r, c, Cell::Empty);

        if is_solvable_logically(&puzzle, pieces) {
            carved.push(idx);
        } else {
            puzzle.set(r, c, original);
            unsuitable[idx] = true;
        }
    }

    state = advance(state, CarverState::Done);
    debug_assert_eq!(state, CarverState::Done);

    if carved.len() < min_holes {
        log::warn!(
            "carve: only carved {} of the requested minimum {} holes ({} attempts used)",
            carved.len(),
            min_holes,
            attempts
        );
    }

    CarveResult {
        puzzle,
        holes_carved: carved.len(),
        difficulty: Difficulty::from_hole_count(carved.len()),
    }
}

fn advance(from: CarverState, to: CarverState) -> CarverState {
    debug_assert!(to > from, "carver state must advance monotonically");
    to
}

fn classify(
    puzzle: &Board,
    pieces: &PiecesSet,
    carved: &[usize],
    unsuitable: &[bool],
) -> [Vec<usize>; 3] {
    let mut completed_line = Vec::new();
    let mut unconstrained = Vec::new();
    let mut regular = Vec::new();

    for idx in 0..board::CELLS {
        if carved.contains(&idx) || unsuitable[idx] {
            continue;
        }
        let (r, c) = board::coords(idx);
        if !matches!(puzzle.get(r, c), Cell::Digit(_)) {
            continue;
        }
        if pieces.is_piece_square(r, c) {
            continue;
        }

        if is_in_completed_line(puzzle, idx) {
            completed_line.push(idx);
        } else if !is_attacked_by_any_piece(pieces, r, c) {
            unconstrained.push(idx);
        } else {
            regular.push(idx);
        }
    }

    [completed_line, unconstrained, regular]
}

fn is_in_completed_line(puzzle: &Board, idx: usize) -> bool {
    let (r, c) = board::coords(idx);
    let lines = [
        puzzle.rows().nth(r).unwrap(),
        puzzle.cols().nth(c).unwrap(),
        board::house_indices(r, c),
    ];
    lines.into_iter().any(|line| {
        line.iter()
            .all(|&i| matches!(puzzle.get_idx(i), Cell::Digit(_)))
    })
}

fn is_attacked_by_any_piece(pieces: &PiecesSet, row: usize, col: usize) -> bool {
    pieces
        .iter()
        .enumerate()
        .any(|(i, _)| crate::piece::mask_contains(pieces.attacks(i), row, col))
}

const WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];

/// Samples a group from the fixed three-way distribution
/// [completed-line: 0.6, unconstrained: 0.3, regular: 0.1], then falls
/// down the same priority order to the next non-empty group if the
/// sampled one turns out to be empty. This is a single sample against the
/// documented distribution followed by a deterministic step-down, not a
/// resample over a renormalized subset — those are different
/// distributions once any group is empty.
fn pick_cell(groups: &[Vec<usize>; 3], rng: &mut impl Rng) -> Option<usize> {
    if groups.iter().all(Vec::is_empty) {
        return None;
    }

    let dist = WeightedIndex::new(WEIGHTS).expect("WEIGHTS are fixed, positive, and finite");
    let sampled = dist.sample(rng);
    let chosen = (sampled..3).chain(0..sampled).find(|&g| !groups[g].is_empty())?;

    groups[chosen].choose(rng).copied()
}
