use crate::{Cell, Error, Result};

/// Small named seed patterns for reproducible runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Moves one cell down and right every 4 generations
    Glider,
    /// Period-2 oscillator, starts horizontal
    Blinker,
    /// 2x2 still life
    Block,
    /// Methuselah, keeps changing for over a thousand generations on an open plane
    RPentomino,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [Self::Glider, Self::Blinker, Self::Block, Self::RPentomino];

    pub fn new<S: AsRef<str>>(s: S) -> Result<Self> {
        match s.as_ref() {
            "glider" => Ok(Self::Glider),
            "blinker" => Ok(Self::Blinker),
            "block" => Ok(Self::Block),
            "r-pentomino" => Ok(Self::RPentomino),
            other => Err(Error::UnknownPattern(other.to_owned())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Glider => "glider",
            Self::Blinker => "blinker",
            Self::Block => "block",
            Self::RPentomino => "r-pentomino",
        }
    }

    fn offsets(&self) -> &'static [(usize, usize)] {
        match self {
            Self::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Self::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Self::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Self::RPentomino => &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
        }
    }

    /// Height and width of the pattern's bounding box
    pub fn extent(&self) -> (usize, usize) {
        self.offsets()
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// The top-left corner that puts the pattern's middle on `center`
    pub fn origin_for_center(&self, center: Cell) -> Cell {
        let (h, w) = self.extent();
        Cell::new(center.row.saturating_sub(h / 2), center.col.saturating_sub(w / 2))
    }

    /// The live cells of this pattern with its top-left corner at `origin`
    pub fn cells(&self, origin: Cell) -> Vec<Cell> {
        self.offsets()
            .iter()
            .map(|&offset| origin + Cell::from(offset))
            .collect()
    }
}
