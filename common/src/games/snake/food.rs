use std::collections::HashSet;

use crate::games::SessionRng;
use super::grid::Cell;

const SAMPLES_PER_CELL: usize = 16;

/// Picks a uniformly random free cell.
///
/// Rejection sampling with a cap; once the cap is hit the grid is scanned in
/// row order so a nearly full board still terminates. `None` means every cell
/// is occupied.
pub fn place_food(grid_size: usize, occupied: &HashSet<Cell>, rng: &mut SessionRng) -> Option<Cell> {
    let total_cells = grid_size * grid_size;
    if occupied.len() >= total_cells {
        return None;
    }

    for _ in 0..total_cells * SAMPLES_PER_CELL {
        let candidate = Cell::new(rng.random_below(grid_size), rng.random_below(grid_size));
        if !occupied.contains(&candidate) {
            return Some(candidate);
        }
    }

    (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Cell::new(x, y)))
        .find(|cell| !occupied.contains(cell))
}
