use chessudoku_core::piece::{Piece, PieceKind};
use chessudoku_core::{carve, generate_complete, PiecesSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_complete");

    group.bench_function(BenchmarkId::new("generate", "no_pieces"), |b| {
        let pieces = PiecesSet::new(vec![]).unwrap();
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(0);
            black_box(generate_complete(&pieces, &mut rng).unwrap())
        });
    });

    group.bench_function(BenchmarkId::new("generate", "knight_and_bishop"), |b| {
        let pieces = PiecesSet::new(vec![
            Piece::new(PieceKind::Knight, 2, 2),
            Piece::new(PieceKind::Bishop, 6, 6),
        ])
        .unwrap();
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(0);
            black_box(generate_complete(&pieces, &mut rng).unwrap())
        });
    });

    group.finish();
}

fn bench_carve(c: &mut Criterion) {
    let pieces = PiecesSet::new(vec![Piece::new(PieceKind::Knight, 4, 4)]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let answer = generate_complete(&pieces, &mut rng).unwrap();

    c.bench_function("carve_to_40_holes", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            black_box(carve(&answer, &pieces, 40, 30, &mut rng))
        });
    });
}

criterion_group!(benches, bench_generate, bench_carve);
criterion_main!(benches);
