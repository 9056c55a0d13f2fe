use crate::sim::Grid;

use super::BoardLayout;

/// Dense per-cell storage indexed by `(x, y)`, built once.
///
/// Order matches [`BoardLayout::index`] and [`Grid::live_cells`], so walking
/// the live cells of a grid visits handles in row-major order.
#[derive(Debug)]
pub struct CellArena<H> {
    layout: BoardLayout,
    items: Vec<H>,
}

impl<H> CellArena<H> {
    /// Fills the arena by calling `make(x, y)` for every cell in arena order.
    pub fn build(layout: BoardLayout, mut make: impl FnMut(usize, usize) -> H) -> Self {
        let (xrows, yrows) = layout.dimensions();
        let mut items = Vec::with_capacity(layout.cell_count());
        for x in 0..xrows {
            for y in 0..yrows {
                items.push(make(x, y));
            }
        }
        Self { layout, items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item for `(x, y)`, or `None` outside the board.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&H> {
        let (xrows, yrows) = self.layout.dimensions();
        if x < xrows && y < yrows {
            self.items.get(self.layout.index(x, y))
        } else {
            None
        }
    }

    /// Items whose cell is alive in `grid`, in row-major order.
    ///
    /// Live cells outside the arena's board are skipped.
    pub fn live<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = &'a H> + 'a {
        debug_assert_eq!(
            grid.dimensions(),
            self.layout.dimensions(),
            "grid shape differs from the cached board"
        );
        grid.live_cells().filter_map(move |(x, y)| self.get(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;

    fn arena(xrows: usize, yrows: usize) -> CellArena<(usize, usize)> {
        let layout = BoardLayout::new(xrows, yrows, Viewport::square(64.0)).unwrap();
        CellArena::build(layout, |x, y| (x, y))
    }

    #[test]
    fn one_item_per_cell() {
        let a = arena(4, 3);
        assert_eq!(a.len(), 12);
        assert_eq!(a.get(3, 2), Some(&(3, 2)));
        assert_eq!(a.get(4, 0), None);
    }

    #[test]
    fn live_visits_only_live_cells_in_row_major_order() {
        let a = arena(4, 4);
        let mut g = Grid::new(4, 4);
        for &(x, y) in &[(3, 0), (0, 3), (1, 1), (0, 0)] {
            g.set(x, y, true);
        }
        let drawn: Vec<_> = a.live(&g).copied().collect();
        assert_eq!(drawn, vec![(0, 0), (0, 3), (1, 1), (3, 0)]);
    }

    #[test]
    fn empty_grid_draws_nothing() {
        let a = arena(4, 4);
        assert_eq!(a.live(&Grid::new(4, 4)).count(), 0);
    }

    #[test]
    fn live_order_is_stable_across_calls() {
        let a = arena(5, 5);
        let mut g = Grid::new(5, 5);
        g.set(4, 1, true);
        g.set(2, 2, true);
        let first: Vec<_> = a.live(&g).copied().collect();
        let second: Vec<_> = a.live(&g).copied().collect();
        assert_eq!(first, second);
    }
}
