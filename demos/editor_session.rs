use grid_astar::Editor;
use grid_util::point::Point;
use std::time::Duration;

// In this example a path is found on a 12x6 grid with shape
//  ____________
// |     #      |
// |  S  #   G  |
// |     #      |
// |     ####   |
// |            |
// |            |
//  ____________
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// after which the goal walks back along the path to the start, one cell per 100 ms.

fn main() {
    let mut editor = Editor::new(12, 6);
    for y in 0..4 {
        editor.grid.paint_obstacle(Point::new(5, y));
    }
    for x in 6..9 {
        editor.grid.paint_obstacle(Point::new(x, 3));
    }
    editor.grid.place_start(Point::new(2, 1));
    editor.grid.place_goal(Point::new(9, 1));

    let mut now = Duration::ZERO;
    match editor.run_pathfinding(now) {
        Ok(Some(path)) => {
            println!("{}", editor.grid);
            println!("Path of {} cells:", path.len());
            for p in path {
                println!("{:?}", p);
            }
        }
        Ok(None) => println!("No path"),
        Err(err) => println!("Invalid request: {err}"),
    }

    while editor.animator.is_active() {
        now += Duration::from_millis(100);
        if let Some(goal) = editor.tick(now) {
            println!("Goal at {goal}");
        }
    }
    println!("{}", editor.grid);
}
