use super::Grid;

/// Transition predicates of B3/S23.
///
/// Exactly one rule applies to a cell per generation, selected by its current
/// liveness (see [`Rule::for_cell`]). Rules only read the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Rule {
    /// Dead cell comes alive with exactly 3 live neighbors.
    Born,
    /// Live cell stays alive with 2 or 3 live neighbors.
    Survive,
}

impl Rule {
    /// The fixed rule set, indexed by current liveness (`0` dead, `1` alive).
    pub const ALL: [Rule; 2] = [Rule::Born, Rule::Survive];

    /// Short lowercase label, used in log output.
    pub const fn name(self) -> &'static str {
        match self {
            Rule::Born => "born",
            Rule::Survive => "survive",
        }
    }

    /// Selects the rule that governs `(x, y)` in `grid`.
    #[inline]
    pub fn for_cell(grid: &Grid, x: usize, y: usize) -> Rule {
        if grid.get(x, y) { Rule::Survive } else { Rule::Born }
    }

    /// Evaluates the rule for `(x, y)` against `grid`.
    ///
    /// Each rule keeps the cell's current value when it is not the governing
    /// rule for that cell (`Born` never kills, `Survive` never revives).
    pub fn apply(self, grid: &Grid, x: usize, y: usize) -> bool {
        let alive = grid.get(x, y);
        match self {
            Rule::Born => alive || grid.count_live_neighbors(x, y) == 3,
            Rule::Survive => alive && matches!(grid.count_live_neighbors(x, y), 2 | 3),
        }
    }
}

/// Next value of `(x, y)`: the governing rule applied to the current grid.
#[inline]
pub fn next_state(grid: &Grid, x: usize, y: usize) -> bool {
    Rule::for_cell(grid, x, y).apply(grid, x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3×3 grid with the center set to `center` and `n` live neighbors
    /// filled in ring order.
    fn ring(center: bool, n: usize) -> Grid {
        const RING: [(usize, usize); 8] =
            [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)];
        let mut g = Grid::new(3, 3);
        g.set(1, 1, center);
        for &(x, y) in RING.iter().take(n) {
            g.set(x, y, true);
        }
        g
    }

    #[test]
    fn governing_rule_follows_liveness() {
        assert_eq!(Rule::for_cell(&ring(true, 0), 1, 1), Rule::Survive);
        assert_eq!(Rule::for_cell(&ring(false, 0), 1, 1), Rule::Born);
    }

    #[test]
    fn born_only_on_three() {
        for n in 0..=8 {
            assert_eq!(next_state(&ring(false, n), 1, 1), n == 3, "n = {n}");
        }
    }

    #[test]
    fn survive_on_two_or_three() {
        for n in 0..=8 {
            assert_eq!(next_state(&ring(true, n), 1, 1), n == 2 || n == 3, "n = {n}");
        }
    }

    #[test]
    fn rules_keep_value_outside_their_domain() {
        assert!(Rule::Born.apply(&ring(true, 0), 1, 1));
        assert!(!Rule::Survive.apply(&ring(false, 3), 1, 1));
    }

    #[test]
    fn rule_set_is_indexed_by_liveness() {
        for alive in [false, true] {
            let g = ring(alive, 2);
            assert_eq!(Rule::ALL[usize::from(alive)], Rule::for_cell(&g, 1, 1));
        }
    }

    #[test]
    fn names_are_distinct() {
        assert_ne!(Rule::Born.name(), Rule::Survive.name());
    }
}
