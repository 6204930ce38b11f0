use rand::{rngs::SmallRng, Rng};
use raylib::prelude::Rectangle;

use crate::config::{CELL_LENGTH, COLUMNS, ROWS, WALL_THICKNESS};

use super::Maze;

// Recursive-backtracker maze: a spanning walk that opens passages between
// cells, leaving every cell reachable from every other.
pub(super) fn generate_maze(rng: &mut SmallRng) -> Maze {
    let columns = COLUMNS;
    let rows = ROWS;
    let cell_count = columns * rows;

    let mut open_right = vec![false; cell_count];
    let mut open_down = vec![false; cell_count];
    let mut visited = vec![false; cell_count];

    let start = rng.random_range(0..cell_count);
    visited[start] = true;
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let col = cell % columns;
        let row = cell / columns;

        let mut neighbors = [0usize; 4];
        let mut count = 0;
        if col > 0 && !visited[cell - 1] {
            neighbors[count] = cell - 1;
            count += 1;
        }
        if col + 1 < columns && !visited[cell + 1] {
            neighbors[count] = cell + 1;
            count += 1;
        }
        if row > 0 && !visited[cell - columns] {
            neighbors[count] = cell - columns;
            count += 1;
        }
        if row + 1 < rows && !visited[cell + columns] {
            neighbors[count] = cell + columns;
            count += 1;
        }

        if count == 0 {
            stack.pop();
            continue;
        }

        let next = neighbors[rng.random_range(0..count)];
        if next == cell + 1 {
            open_right[cell] = true;
        } else if next + 1 == cell {
            open_right[next] = true;
        } else if next == cell + columns {
            open_down[cell] = true;
        } else {
            open_down[next] = true;
        }
        visited[next] = true;
        stack.push(next);
    }

    let walls = build_walls(&open_right, &open_down, columns, rows);
    Maze {
        columns,
        rows,
        walls,
        open_right,
        open_down,
    }
}

fn build_walls(
    open_right: &[bool],
    open_down: &[bool],
    columns: usize,
    rows: usize,
) -> Vec<Rectangle> {
    let mut walls = Vec::new();

    // Vertical segments sit on the left edge of each column line; the
    // extra thickness closes the corner gap with horizontal segments.
    for col in 0..=columns {
        for row in 0..rows {
            let boundary = col == 0 || col == columns;
            if boundary || !open_right[(col - 1) + row * columns] {
                walls.push(Rectangle {
                    x: col as f32 * CELL_LENGTH,
                    y: row as f32 * CELL_LENGTH,
                    width: WALL_THICKNESS,
                    height: CELL_LENGTH + WALL_THICKNESS,
                });
            }
        }
    }

    for row in 0..=rows {
        for col in 0..columns {
            let boundary = row == 0 || row == rows;
            if boundary || !open_down[col + (row - 1) * columns] {
                walls.push(Rectangle {
                    x: col as f32 * CELL_LENGTH,
                    y: row as f32 * CELL_LENGTH,
                    width: CELL_LENGTH + WALL_THICKNESS,
                    height: WALL_THICKNESS,
                });
            }
        }
    }

    walls
}
