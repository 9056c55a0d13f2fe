/// Fixed-size boolean board.
///
/// Storage is dense and column-major (`x * yrows + y`), so iterating `x` in
/// the outer loop and `y` in the inner loop walks memory linearly.
///
/// The topology is bounded: positions outside `0..xrows` × `0..yrows` do not
/// exist and are never counted as neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    xrows: usize,
    yrows: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(xrows: usize, yrows: usize) -> Self {
        Self {
            xrows,
            yrows,
            cells: vec![false; xrows * yrows],
        }
    }

    /// Returns `(xrows, yrows)`.
    #[inline]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.xrows, self.yrows)
    }

    #[inline]
    const fn index(&self, x: usize, y: usize) -> usize {
        x * self.yrows + y
    }

    #[inline]
    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.xrows && y < self.yrows
    }

    /// Returns whether `(x, y)` is alive. Out-of-range positions read as dead.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.cells[self.index(x, y)]
    }

    /// Sets `(x, y)`. Out-of-range positions are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = alive;
        }
    }

    /// Number of live cells among the up to 8 cells at Chebyshev distance 1.
    ///
    /// Edge cells have 5 in-bounds neighbors and corner cells 3.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let x_lo = x.saturating_sub(1);
        let y_lo = y.saturating_sub(1);
        let x_hi = x.saturating_add(1).min(self.xrows.saturating_sub(1));
        let y_hi = y.saturating_add(1).min(self.yrows.saturating_sub(1));

        let mut count = 0u8;
        for i in x_lo..=x_hi {
            for j in y_lo..=y_hi {
                if (i, j) != (x, y) && self.cells[self.index(i, j)] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Number of live cells on the whole board.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live coordinates in row-major order (`x` outer, `y` inner).
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let yrows = self.yrows;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(idx, _)| (idx / yrows, idx % yrows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(xrows: usize, yrows: usize) -> Grid {
        let mut g = Grid::new(xrows, yrows);
        for x in 0..xrows {
            for y in 0..yrows {
                g.set(x, y, true);
            }
        }
        g
    }

    // ── access ────────────────────────────────────────────────────────────

    #[test]
    fn new_grid_is_dead() {
        let g = Grid::new(3, 5);
        assert_eq!(g.dimensions(), (3, 5));
        assert_eq!(g.live_count(), 0);
    }

    #[test]
    fn set_then_get() {
        let mut g = Grid::new(4, 4);
        g.set(1, 2, true);
        assert!(g.get(1, 2));
        assert!(!g.get(2, 1));
    }

    #[test]
    fn out_of_range_reads_dead_and_writes_are_ignored() {
        let mut g = Grid::new(2, 2);
        g.set(2, 0, true);
        g.set(0, 7, true);
        assert_eq!(g.live_count(), 0);
        assert!(!g.get(5, 5));
    }

    // ── neighbors ─────────────────────────────────────────────────────────

    #[test]
    fn corner_counts_three_neighbors() {
        let g = full(4, 4);
        assert_eq!(g.count_live_neighbors(0, 0), 3);
        assert_eq!(g.count_live_neighbors(3, 3), 3);
        assert_eq!(g.count_live_neighbors(0, 3), 3);
        assert_eq!(g.count_live_neighbors(3, 0), 3);
    }

    #[test]
    fn edge_counts_five_neighbors() {
        let g = full(4, 4);
        assert_eq!(g.count_live_neighbors(0, 1), 5);
        assert_eq!(g.count_live_neighbors(2, 3), 5);
    }

    #[test]
    fn interior_counts_eight_neighbors() {
        let g = full(4, 4);
        assert_eq!(g.count_live_neighbors(1, 1), 8);
        assert_eq!(g.count_live_neighbors(2, 2), 8);
    }

    #[test]
    fn no_wraparound_across_edges() {
        let mut g = Grid::new(5, 5);
        g.set(4, 4, true);
        g.set(4, 0, true);
        g.set(0, 4, true);
        assert_eq!(g.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn cell_does_not_count_itself() {
        let mut g = Grid::new(3, 3);
        g.set(1, 1, true);
        assert_eq!(g.count_live_neighbors(1, 1), 0);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let g = full(1, 1);
        assert_eq!(g.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn far_out_of_range_position_counts_nothing() {
        let g = full(3, 3);
        assert_eq!(g.count_live_neighbors(usize::MAX, usize::MAX), 0);
        assert_eq!(g.count_live_neighbors(usize::MAX, 1), 0);
    }

    // ── iteration ─────────────────────────────────────────────────────────

    #[test]
    fn live_cells_are_row_major() {
        let mut g = Grid::new(3, 3);
        g.set(2, 0, true);
        g.set(0, 2, true);
        g.set(0, 1, true);
        g.set(1, 1, true);
        let cells: Vec<_> = g.live_cells().collect();
        assert_eq!(cells, vec![(0, 1), (0, 2), (1, 1), (2, 0)]);
    }
}
