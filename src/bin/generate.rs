//! Demo binary: places a small chess-piece configuration, generates a
//! complete board, carves a puzzle out of it, and prints the result.

use chessudoku_core::piece::{Piece, PieceKind};
use chessudoku_core::{carve, generate_complete, Puzzle};
use color_eyre::eyre::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    log::info!("generate: using seed {}", seed);

    let pieces = chessudoku_core::PiecesSet::new(vec![
        Piece::new(PieceKind::Knight, 2, 2),
        Piece::new(PieceKind::Bishop, 6, 6),
    ])?;

    let mut rng = StdRng::seed_from_u64(seed);
    let answer = generate_complete(&pieces, &mut rng)?;
    let result = carve(&answer, &pieces, 45, 30, &mut rng);

    log::info!(
        "generate: carved {} holes, difficulty {:?}",
        result.holes_carved,
        result.difficulty
    );

    let descriptor = Puzzle::new(&result.puzzle, &pieces, &answer);
    println!("{}", render(&descriptor));

    Ok(())
}

fn render(descriptor: &Puzzle) -> String {
    let mut out = String::new();
    for row in &descriptor.board {
        for &cell in row {
            if cell == 0 {
                out.push('.');
            } else {
                out.push(char::from_digit(cell as u32, 10).unwrap());
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
