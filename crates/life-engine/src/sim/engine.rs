use rand::Rng;

use super::rule::Rule;
use super::{Grid, SimError};

/// Double-buffered Game of Life simulation.
///
/// Two grids of identical shape are owned by the engine; `current` selects the
/// authoritative one. [`Engine::step`] writes every cell of the other grid from
/// the current one and only then flips `current`, so callers always observe a
/// complete generation.
#[derive(Debug, Clone)]
pub struct Engine {
    grids: [Grid; 2],
    current: usize,
    rules: [Rule; 2],
    generation: u64,
}

impl Engine {
    /// Creates an engine with two dead `xrows × yrows` grids.
    pub fn new(xrows: usize, yrows: usize) -> Result<Self, SimError> {
        if xrows == 0 || yrows == 0 {
            return Err(SimError::InvalidDimension { xrows, yrows });
        }

        Ok(Self {
            grids: [Grid::new(xrows, yrows), Grid::new(xrows, yrows)],
            current: 0,
            rules: Rule::ALL,
            generation: 0,
        })
    }

    /// Returns `(xrows, yrows)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.grids[self.current].dimensions()
    }

    /// The installed rule set.
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of completed [`step`](Self::step) calls.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the current generation.
    #[inline]
    pub fn current_grid(&self) -> &Grid {
        &self.grids[self.current]
    }

    /// Sets a cell of the current grid. Out-of-range positions are ignored.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        self.grids[self.current].set(x, y, alive);
    }

    /// Seeds the current grid with independent fair coin flips from the
    /// thread-local RNG.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Seeds the current grid with independent fair coin flips from `rng`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let grid = &mut self.grids[self.current];
        let (xrows, yrows) = grid.dimensions();
        for x in 0..xrows {
            for y in 0..yrows {
                grid.set(x, y, rng.random_bool(0.5));
            }
        }
    }

    /// Advances one generation.
    ///
    /// Each cell is evaluated by the installed rule its current liveness
    /// selects.
    pub fn step(&mut self) {
        let next_idx = self.current ^ 1;
        let rules = self.rules;

        // Split borrow: read from one buffer while writing the other.
        let (a, b) = self.grids.split_at_mut(1);
        let (current, next) = if self.current == 0 {
            (&a[0], &mut b[0])
        } else {
            (&b[0], &mut a[0])
        };

        let (xrows, yrows) = current.dimensions();
        for x in 0..xrows {
            for y in 0..yrows {
                let rule = rules[usize::from(current.get(x, y))];
                next.set(x, y, rule.apply(current, x, y));
            }
        }

        self.current = next_idx;
        self.generation += 1;
    }
}
