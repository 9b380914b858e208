use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{
    pathing_grid::PathingGrid,
    solver::{astar::AstarSolver, astar::Heuristic, bfs::BfsSolver, GridSolver},
};
use grid_util::{grid::ValueGrid, Point};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 160;
const N_SCENARIOS: usize = 32;

/// Random obstacles at the given density plus a set of start/goal pairs on free cells.
fn random_setup(density: f64) -> (PathingGrid, Vec<(Point, Point)>) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut pathing_grid: PathingGrid = PathingGrid::new(N, N, false);
    for x in 0..N as i32 {
        for y in 0..N as i32 {
            pathing_grid.set(x, y, rng.gen_bool(density));
        }
    }
    pathing_grid.generate_components();
    let mut random_free = |grid: &PathingGrid| loop {
        let p = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if !grid.grid.get_point(p) {
            return p;
        }
    };
    let scenarios = (0..N_SCENARIOS)
        .map(|_| (random_free(&pathing_grid), random_free(&pathing_grid)))
        .collect();
    (pathing_grid, scenarios)
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    for density in [0.0, 0.2, 0.35] {
        let (pathing_grid, scenarios) = random_setup(density);
        c.bench_function(
            format!("{N}x{N} grid, {density} density, {solver_name}").as_str(),
            |b| {
                b.iter(|| {
                    for (start, end) in &scenarios {
                        let _ = black_box(solver.get_path_single_goal(&pathing_grid, *start, *end));
                    }
                })
            },
        );
    }
}

fn astar_manhattan_bench(c: &mut Criterion) {
    bench_solver(c, "A* (Manhattan)", AstarSolver::new());
}

fn astar_chebyshev_bench(c: &mut Criterion) {
    bench_solver(
        c,
        "A* (Chebyshev)",
        AstarSolver::with_heuristic(Heuristic::Chebyshev),
    );
}

fn bfs_bench(c: &mut Criterion) {
    bench_solver(c, "BFS", BfsSolver);
}

criterion_group!(
    benches,
    astar_manhattan_bench,
    astar_chebyshev_bench,
    bfs_bench
);
criterion_main!(benches);
