use std::sync::OnceLock;

use rand::{Rng, SeedableRng, distr::Bernoulli, rngs::StdRng};
use regex::Regex;

use crate::{Cell, Dimensions, Error, Grid, Result};

/// Live-cell probability used when none is given
pub const DEFAULT_PROBABILITY: f64 = 0.25;

/// How the first generation is filled
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    /// Each cell is independently live with the given probability
    Random { probability: f64 },
    /// Exactly these cells are live, wrapped onto the grid
    Seeds(Vec<Cell>),
}

impl Default for Fill {
    fn default() -> Self {
        Self::Random {
            probability: DEFAULT_PROBABILITY,
        }
    }
}

impl Fill {
    /// Creates the initial grid, seeding the random source once from `rng_seed`
    /// or from the OS when none is given
    pub fn create(&self, dims: Dimensions, rng_seed: Option<u64>) -> Result<Grid> {
        let mut rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.create_with(dims, &mut rng)
    }

    pub fn create_with<R: Rng>(&self, dims: Dimensions, rng: &mut R) -> Result<Grid> {
        match self {
            Self::Random { probability } => {
                let bernoulli = Bernoulli::new(*probability)
                    .map_err(|_| Error::InvalidProbability(*probability))?;
                let mut grid = Grid::new(dims);
                for cell in grid.cells_mut() {
                    *cell = u8::from(rng.sample(bernoulli));
                }
                Ok(grid)
            }
            Self::Seeds(cells) => Ok(Grid::from_live(dims, cells.iter().copied())),
        }
    }
}

/// Parses a seed list such as `"10,40 10,41; 10,42"`
///
/// Pairs are `row,col` and may be separated by whitespace or `;`.
pub fn parse_seeds(s: &str) -> Result<Vec<Cell>> {
    static PAIR: OnceLock<Regex> = OnceLock::new();
    let pair = PAIR.get_or_init(|| Regex::new(r"(\d+)\s*,\s*(\d+)").expect("valid seed regex"));

    let is_separator = |gap: &str| gap.chars().all(|c| c.is_whitespace() || c == ';');
    let invalid = || Error::InvalidSeed(s.to_owned());

    let mut cells = Vec::new();
    let mut last_end = 0;
    for caps in pair.captures_iter(s) {
        let whole = caps.get(0).ok_or_else(invalid)?;
        if !is_separator(&s[last_end..whole.start()]) {
            return Err(invalid());
        }
        let row = caps[1].parse().map_err(|_| invalid())?;
        let col = caps[2].parse().map_err(|_| invalid())?;
        cells.push(Cell::new(row, col));
        last_end = whole.end();
    }
    if cells.is_empty() || !is_separator(&s[last_end..]) {
        return Err(invalid());
    }
    Ok(cells)
}
