mod grid;
mod neighbors;
mod rule;
mod stepper;

pub use self::grid::{Dimensions, Grid};
pub use self::neighbors::neighbor_count;
pub use self::rule::{NEIGHBOR_COUNTS, ParsedRule, RuleTable};
pub use self::stepper::{Strategy, step};

/// A double-buffered run of a two-state automaton on a torus
///
/// Owns both the current and the next grid. Each generation is written into
/// the next buffer and then the two buffers trade places.
#[derive(Debug)]
pub struct GameOfLife {
    current: Grid,
    next: Grid,
    rule: RuleTable,
    strategy: Strategy,
    generation: u64,
}

impl GameOfLife {
    pub fn new(initial: Grid, rule: RuleTable, strategy: Strategy) -> Self {
        let next = Grid::new(initial.dims());
        Self {
            current: initial,
            next,
            rule,
            strategy,
            generation: 0,
        }
    }

    pub fn next_generation(&mut self) {
        step(&self.current, &mut self.next, &self.rule, self.strategy);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Advances `n` generations
    pub fn advance(&mut self, n: u64) {
        for _ in 0..n {
            self.next_generation();
        }
    }

    #[inline]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    #[inline]
    pub fn rule(&self) -> &RuleTable {
        &self.rule
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.current.alive_count()
    }

    #[inline]
    pub fn take(self) -> Grid {
        self.current
    }
}
