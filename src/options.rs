use std::{num::NonZeroUsize, time::Duration};

use anyhow::Context;
use toruslife::{
    Cell, Dimensions, Fill, Strategy,
    init::{self, DEFAULT_PROBABILITY},
    patterns::Pattern,
};

const DEFAULT_SIZE: (i64, i64) = (80, 24);
const DEFAULT_RULE: &str = "B3/S23";
/// Frame interval when drawing, 10 generations per second
const DEFAULT_FRAME_MILLIS: u64 = 100;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> anyhow::Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("", "no-draw", "do not draw generations to the terminal");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt("r", "rule", "birth/survival rule, e.g. B36/S23", "RULE");
        opts.optopt("p", "prob", "live-cell probability of the random fill", "PROB");
        opts.optopt("", "seed", "explicit live cells, e.g. \"10,40 10,41\"", "CELLS");
        opts.optopt("", "pattern", "seed a named pattern at the grid center", "NAME");
        opts.optopt("", "rng-seed", "seed for the random fill", "SEED");
        opts.optopt("g", "steps", "number of generations to run", "COUNT");
        opts.optopt(
            "t",
            "threads",
            "step with a data-parallel pool of this many threads",
            "COUNT",
        );
        opts.optopt(
            "",
            "blockrows",
            "rows per parallel work block (implies parallel stepping)",
            "ROWS",
        );
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );

        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .context("invalid arguments")?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: toruslife [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }

    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn width(&self) -> anyhow::Result<Option<i64>> {
        self.matches.opt_get("width").context("invalid --width")
    }
    fn height(&self) -> anyhow::Result<Option<i64>> {
        self.matches.opt_get("height").context("invalid --height")
    }

    pub fn draw(&self) -> bool {
        !self.matches.opt_present("no-draw")
    }

    /// `None` runs until interrupted
    pub fn steps(&self) -> anyhow::Result<Option<u64>> {
        self.matches.opt_get("steps").context("invalid --steps")
    }

    pub fn sleep(&self) -> anyhow::Result<Option<Duration>> {
        let millis: Option<u64> = self.matches.opt_get("sleep").context("invalid --sleep")?;
        Ok(match millis {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.draw() => Some(Duration::from_millis(DEFAULT_FRAME_MILLIS)),
            None => None,
        })
    }

    pub fn rule(&self) -> String {
        self.matches
            .opt_str("rule")
            .unwrap_or_else(|| DEFAULT_RULE.to_owned())
    }

    pub fn rng_seed(&self) -> anyhow::Result<Option<u64>> {
        self.matches.opt_get("rng-seed").context("invalid --rng-seed")
    }

    /// Grid size, defaulting to the terminal size when drawing
    pub fn dimensions(&self) -> anyhow::Result<Dimensions> {
        let default = match crossterm::terminal::size() {
            // keep the last terminal row for the footer
            Ok((cols, rows)) if self.draw() && rows > 1 => (cols as i64, rows as i64 - 1),
            _ => DEFAULT_SIZE,
        };

        let width = self.width()?.unwrap_or(default.0);
        let height = self.height()?.unwrap_or(default.1);
        Ok(Dimensions::new(width, height)?)
    }

    pub fn fill(&self, dims: Dimensions) -> anyhow::Result<Fill> {
        if let Some(seeds) = self.matches.opt_str("seed") {
            return Ok(Fill::Seeds(init::parse_seeds(&seeds)?));
        }
        if let Some(name) = self.matches.opt_str("pattern") {
            let pattern = Pattern::new(name)?;
            let center = Cell::new(dims.height() / 2, dims.width() / 2);
            return Ok(Fill::Seeds(pattern.cells(pattern.origin_for_center(center))));
        }

        let probability: Option<f64> = self.matches.opt_get("prob").context("invalid --prob")?;
        Ok(Fill::Random {
            probability: probability.unwrap_or(DEFAULT_PROBABILITY),
        })
    }

    /// Size of the rayon pool, `None` when stepping sequentially
    pub fn threads(&self) -> anyhow::Result<Option<NonZeroUsize>> {
        let threads: Option<usize> = self.matches.opt_get("threads").context("invalid --threads")?;
        Ok(threads.and_then(NonZeroUsize::new))
    }

    pub fn strategy(&self) -> anyhow::Result<Strategy> {
        let block_rows: Option<usize> = self
            .matches
            .opt_get("blockrows")
            .context("invalid --blockrows")?;
        if block_rows.is_some() || self.threads()?.is_some() {
            Ok(Strategy::Parallel {
                block_rows: block_rows.and_then(NonZeroUsize::new),
            })
        } else {
            Ok(Strategy::Sequential)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::new(list).expect("valid args").expect("not help")
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).expect("valid args").is_none());
    }

    #[test]
    fn explicit_dimensions() {
        let dims = args(&["--no-draw", "-w", "12", "-h", "7"])
            .dimensions()
            .expect("dimensions");

        assert_eq!((dims.width(), dims.height()), (12, 7));
    }

    #[test]
    fn headless_defaults_to_80x24() {
        let dims = args(&["--no-draw"]).dimensions().expect("dimensions");

        assert_eq!((dims.width(), dims.height()), (80, 24));
    }

    #[test]
    fn non_positive_dimensions_are_fatal() {
        assert!(args(&["--no-draw", "-w", "0"]).dimensions().is_err());
        assert!(args(&["--no-draw", "--height=-3"]).dimensions().is_err());
    }

    #[test]
    fn sequential_by_default() {
        assert_eq!(args(&[]).strategy().expect("strategy"), Strategy::Sequential);
    }

    #[test]
    fn threads_select_parallel() {
        let a = args(&["-t", "4"]);

        assert_eq!(a.threads().expect("threads"), NonZeroUsize::new(4));
        assert_eq!(a.strategy().expect("strategy"), Strategy::parallel());
    }

    #[test]
    fn blockrows_select_parallel() {
        assert_eq!(
            args(&["--blockrows", "16"]).strategy().expect("strategy"),
            Strategy::Parallel {
                block_rows: NonZeroUsize::new(16)
            }
        );
    }

    #[test]
    fn seeds_take_precedence_over_random() {
        let a = args(&["--no-draw", "--seed", "1,2 3,4", "-p", "0.9"]);
        let dims = a.dimensions().expect("dimensions");

        assert_eq!(
            a.fill(dims).expect("fill"),
            Fill::Seeds(vec![Cell::new(1, 2), Cell::new(3, 4)])
        );
    }

    #[test]
    fn pattern_is_centered() {
        let a = args(&["--no-draw", "-w", "10", "-h", "10", "--pattern", "blinker"]);
        let dims = a.dimensions().expect("dimensions");

        assert_eq!(
            a.fill(dims).expect("fill"),
            Fill::Seeds(vec![Cell::new(5, 4), Cell::new(5, 5), Cell::new(5, 6)])
        );
    }

    #[test]
    fn random_fill_uses_probability() {
        let a = args(&["-p", "0.5"]);
        let dims = Dimensions::new(4, 4).expect("dimensions");

        assert_eq!(a.fill(dims).expect("fill"), Fill::Random { probability: 0.5 });
    }

    #[test]
    fn sleep_defaults_only_when_drawing() {
        assert_eq!(
            args(&[]).sleep().expect("sleep"),
            Some(Duration::from_millis(DEFAULT_FRAME_MILLIS))
        );
        assert_eq!(args(&["--no-draw"]).sleep().expect("sleep"), None);
    }
}
