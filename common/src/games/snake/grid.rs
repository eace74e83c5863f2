use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in `direction` on a `grid_size` torus.
    pub fn neighbour(&self, direction: Direction, grid_size: usize) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(
            wrap(self.x as i64 + dx, grid_size),
            wrap(self.y as i64 + dy, grid_size),
        )
    }
}

pub fn wrap(coord: i64, grid_size: usize) -> usize {
    coord.rem_euclid(grid_size as i64) as usize
}

pub fn occupies<'a>(cells: impl IntoIterator<Item = &'a Cell>, target: &Cell) -> bool {
    cells.into_iter().any(|cell| cell == target)
}
