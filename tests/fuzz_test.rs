/// Fuzzes the path finder on many random grids: a path is found exactly when the goal lies in
/// the start's connected component and breadth-first search reaches it, every path is legal,
/// and path lengths are compared against the breadth-first optimum.
use grid_astar::{
    path::validate_path,
    pathing_grid::PathingGrid,
    solver::{astar::AstarSolver, astar::Heuristic, bfs::BfsSolver, GridSolver},
};
use grid_util::*;
use rand::prelude::*;

fn random_grid(w: usize, h: usize, rng: &mut StdRng, density: f64) -> PathingGrid {
    let mut pathing_grid: PathingGrid = PathingGrid::new(w, h, false);
    for x in 0..pathing_grid.width() as i32 {
        for y in 0..pathing_grid.height() as i32 {
            pathing_grid.set(x, y, rng.gen_bool(density))
        }
    }
    pathing_grid.generate_components();
    pathing_grid
}

fn visualize_grid(grid: &PathingGrid, start: &Point, end: &Point, path: &[Point]) {
    let grid = &grid.grid;
    for y in 0..grid.height as i32 {
        for x in 0..grid.width as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.get(x, y) {
                print!("#");
            } else if path.contains(&p) {
                print!("*");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut random_grid = random_grid(N, N, &mut rng, 0.4);
        random_grid.set_point(start, false);
        random_grid.set_point(end, false);
        let reachable = random_grid.reachable(&start, &end);
        let bfs_path = BfsSolver
            .get_path_single_goal(&random_grid, start, end)
            .unwrap();
        let path = solver
            .get_path_single_goal(&random_grid, start, end)
            .unwrap();
        // Show the grid if a path is not found
        if path.is_some() != reachable || bfs_path.is_some() != reachable {
            visualize_grid(&random_grid, &start, &end, &[]);
        }
        assert_eq!(path.is_some(), reachable);
        assert_eq!(bfs_path.is_some(), reachable);
        if let Some(path) = path {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert_eq!(validate_path(&random_grid, &path), Ok(()));
        }
    }
}

/// Manhattan distance overestimates under diagonal movement, so its paths may be longer than
/// the optimum; the Chebyshev heuristic must always match breadth-first search.
#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let manhattan = AstarSolver::with_heuristic(Heuristic::Manhattan);
    let chebyshev = AstarSolver::with_heuristic(Heuristic::Chebyshev);
    let mut suboptimal = 0;
    let mut compared = 0;
    for _ in 0..N_GRIDS {
        let mut random_grid = random_grid(N, N, &mut rng, 0.3);
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        random_grid.set_point(start, false);
        random_grid.set_point(end, false);
        random_grid.update();
        let Some(bfs_path) = BfsSolver
            .get_path_single_goal(&random_grid, start, end)
            .unwrap()
        else {
            continue;
        };
        compared += 1;
        let manhattan_path = manhattan
            .get_path_single_goal(&random_grid, start, end)
            .unwrap()
            .unwrap();
        let chebyshev_path = chebyshev
            .get_path_single_goal(&random_grid, start, end)
            .unwrap()
            .unwrap();
        assert_eq!(validate_path(&random_grid, &manhattan_path), Ok(()));
        assert_eq!(validate_path(&random_grid, &chebyshev_path), Ok(()));
        if chebyshev_path.len() != bfs_path.len() {
            visualize_grid(&random_grid, &start, &end, &chebyshev_path);
        }
        assert_eq!(chebyshev_path.len(), bfs_path.len());
        assert!(manhattan_path.len() >= bfs_path.len());
        if manhattan_path.len() > bfs_path.len() {
            suboptimal += 1;
        }
    }
    println!("Manhattan heuristic was suboptimal on {suboptimal} of {compared} solvable grids");
}

/// Grids whose components are stale must still be searched correctly.
#[test]
fn fuzz_dirty_components() {
    const N: usize = 8;
    let mut rng = StdRng::seed_from_u64(2);
    let solver = AstarSolver::new();
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..500 {
        let mut random_grid = random_grid(N, N, &mut rng, 0.2);
        for _ in 0..10 {
            let x = rng.gen_range(0..N as i32);
            let y = rng.gen_range(0..N as i32);
            random_grid.set(x, y, true);
        }
        random_grid.set_point(start, false);
        random_grid.set_point(end, false);
        let path = solver
            .get_path_single_goal(&random_grid, start, end)
            .unwrap();
        let bfs_path = BfsSolver
            .get_path_single_goal(&random_grid, start, end)
            .unwrap();
        assert_eq!(path.is_some(), bfs_path.is_some());
        random_grid.update();
        assert_eq!(random_grid.reachable(&start, &end), bfs_path.is_some());
    }
}

#[test]
fn fuzz_determinism() {
    const N: usize = 12;
    let mut rng = StdRng::seed_from_u64(3);
    let solver = AstarSolver::new();
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 / 2);
    for _ in 0..200 {
        let mut random_grid = random_grid(N, N, &mut rng, 0.3);
        random_grid.set_point(start, false);
        random_grid.set_point(end, false);
        random_grid.update();
        let first = solver.get_path_single_goal(&random_grid, start, end);
        let second = solver.get_path_single_goal(&random_grid, start, end);
        assert_eq!(first, second);
    }
}
