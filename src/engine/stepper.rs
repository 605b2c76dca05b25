use std::num::NonZeroUsize;

use rayon::prelude::*;

use super::{Grid, RuleTable, neighbor_count};

/// How a generation is computed
///
/// Every strategy produces the same next generation for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Sequential,
    /// Rows are split into contiguous blocks, each block computed by a rayon task
    ///
    /// With no `block_rows` the grid is split evenly across the current
    /// rayon thread pool.
    Parallel { block_rows: Option<NonZeroUsize> },
}

impl Strategy {
    pub fn parallel() -> Self {
        Self::Parallel { block_rows: None }
    }
}

/// Writes the generation following `current` into `next`
///
/// `current` is only read and every cell of `next` is written exactly once,
/// so `next` may hold anything beforehand. Both grids must share dimensions.
pub fn step(current: &Grid, next: &mut Grid, rule: &RuleTable, strategy: Strategy) {
    assert_eq!(
        current.dims(),
        next.dims(),
        "current and next buffers must share dimensions"
    );

    match strategy {
        Strategy::Sequential => step_rows(current, next.cells_mut(), 0, rule),
        Strategy::Parallel { block_rows } => {
            // static partition: contiguous row blocks, one disjoint output slice each
            let rows_per_block = match block_rows {
                Some(rows) => rows.get(),
                None => current.height().div_ceil(rayon::current_num_threads().max(1)),
            }
            .min(current.height());
            next.cells_mut()
                .par_chunks_mut(current.width() * rows_per_block)
                .enumerate()
                .for_each(|(block, out)| step_rows(current, out, block * rows_per_block, rule));
        }
    }
}

/// Computes the rows backing `out`, which starts at row `first_row`
fn step_rows(current: &Grid, out: &mut [u8], first_row: usize, rule: &RuleTable) {
    let width = current.width();
    for (offset, out_row) in out.chunks_exact_mut(width).enumerate() {
        let row = first_row + offset;
        let cur_row = current.row(row);
        for (col, cell) in out_row.iter_mut().enumerate() {
            let count = neighbor_count(current, row, col);
            *cell = u8::from(rule.next_state(cur_row[col] != 0, count));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Dimensions};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn dims(width: i64, height: i64) -> Dimensions {
        Dimensions::new(width, height).expect("valid dimensions")
    }

    fn random_grid(width: i64, height: i64, seed: u64) -> Grid {
        let dims = dims(width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        let live: Vec<_> = (0..dims.height())
            .flat_map(|r| (0..dims.width()).map(move |c| Cell::new(r, c)))
            .filter(|_| rng.random_bool(0.35))
            .collect();
        Grid::from_live(dims, live)
    }

    fn stepped(grid: &Grid, rule: &RuleTable, strategy: Strategy) -> Grid {
        let mut next = Grid::new(grid.dims());
        step(grid, &mut next, rule, strategy);
        next
    }

    fn strategies() -> Vec<Strategy> {
        vec![
            Strategy::Sequential,
            Strategy::parallel(),
            Strategy::Parallel {
                block_rows: NonZeroUsize::new(1),
            },
            Strategy::Parallel {
                block_rows: NonZeroUsize::new(7),
            },
            Strategy::Parallel {
                block_rows: NonZeroUsize::new(1000),
            },
        ]
    }

    #[test]
    fn strategies_are_equivalent() {
        let rules = [
            RuleTable::conway(),
            RuleTable::from_spec("B36/S23"),
            RuleTable::from_spec("B028/S0124"),
        ];
        for (seed, (w, h)) in [(40, 30), (17, 23), (1, 9), (64, 1)].into_iter().enumerate() {
            let grid = random_grid(w, h, seed as u64);
            for rule in &rules {
                let expected = stepped(&grid, rule, Strategy::Sequential);
                for strategy in strategies() {
                    let next = stepped(&grid, rule, strategy);
                    assert_eq!(next, expected, "{:?} diverged on {}x{} {}", strategy, w, h, rule);
                }
            }
        }
    }

    #[test]
    fn preserves_dimensions() {
        let grid = random_grid(13, 5, 7);
        for strategy in strategies() {
            assert_eq!(stepped(&grid, &RuleTable::conway(), strategy).dims(), grid.dims());
        }
    }

    #[test]
    fn dead_grid_stays_dead() {
        let grid = Grid::new(dims(3, 3));
        for strategy in strategies() {
            assert_eq!(stepped(&grid, &RuleTable::conway(), strategy).alive_count(), 0);
        }
    }

    #[test]
    fn empty_rule_kills_everything() {
        let grid = random_grid(20, 20, 3);
        assert!(grid.alive_count() > 0);
        for strategy in strategies() {
            assert_eq!(stepped(&grid, &RuleTable::empty(), strategy).alive_count(), 0);
        }
    }

    #[test]
    fn overwrites_stale_next_buffer() {
        let grid = Grid::new(dims(5, 5));
        let mut next = random_grid(5, 5, 11);
        step(&grid, &mut next, &RuleTable::conway(), Strategy::parallel());

        assert_eq!(next.alive_count(), 0);
    }

    #[test]
    fn oversized_blocks_cover_the_whole_grid() {
        let grid = random_grid(2, 3, 5);
        let expected = stepped(&grid, &RuleTable::conway(), Strategy::Sequential);
        for rows in [usize::MAX, usize::MAX / 2 + 1] {
            let strategy = Strategy::Parallel {
                block_rows: NonZeroUsize::new(rows),
            };
            assert_eq!(stepped(&grid, &RuleTable::conway(), strategy), expected);
        }
    }

    #[test]
    fn b0_rule_births_everywhere() {
        let grid = Grid::new(dims(4, 4));
        let next = stepped(&grid, &RuleTable::from_spec("B0/S"), Strategy::Sequential);

        assert_eq!(next.alive_count(), 16);
    }
}
