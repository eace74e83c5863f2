use std::collections::{HashSet, VecDeque};

use super::grid::Cell;

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
}

impl Snake {
    pub fn new(start: Cell) -> Self {
        Self::from_cells([start])
    }

    /// Head first. Callers guarantee the cells are distinct and non-empty.
    pub(crate) fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        let body_set = body.iter().copied().collect();
        Self { body, body_set }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body_set.contains(cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn occupied(&self) -> &HashSet<Cell> {
        &self.body_set
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
        self.body_set.insert(cell);
    }

    pub(crate) fn pop_tail(&mut self) {
        if self.body.len() <= 1 {
            return;
        }
        if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
    }
}
