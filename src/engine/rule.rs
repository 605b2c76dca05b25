use std::fmt;

/// The number of distinct neighbor counts in an 8-neighborhood (0 through 8)
pub const NEIGHBOR_COUNTS: usize = 9;
type CountTable = [bool; NEIGHBOR_COUNTS];

/// Birth/survival membership tables for a two-state "B/S" rule
///
/// `birth[n]` means a dead cell with exactly `n` live neighbors becomes live,
/// `survive[n]` means a live cell with exactly `n` live neighbors stays live.
/// A table is never mutated once built, so a single instance can be shared by
/// every worker of a parallel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleTable {
    birth: CountTable,
    survive: CountTable,
}

impl RuleTable {
    /// Builds a table from explicit birth/survival counts
    ///
    /// Counts above 8 can never occur and are ignored.
    pub fn new(birth: &[u8], survive: &[u8]) -> Self {
        fn table(counts: &[u8]) -> CountTable {
            let mut table = [false; NEIGHBOR_COUNTS];
            for &n in counts {
                if let Some(entry) = table.get_mut(n as usize) {
                    *entry = true;
                }
            }
            table
        }
        Self {
            birth: table(birth),
            survive: table(survive),
        }
    }

    /// Conway's Game of Life, `B3/S23`
    pub fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// A rule under which nothing is ever born and nothing survives
    pub fn empty() -> Self {
        Self::new(&[], &[])
    }

    /// Parses a rule specification such as `B3/S23`, `b36/s23` or `S23B3`
    ///
    /// Whitespace and commas are stripped first. The first `B`/`b` and the
    /// first `S`/`s` each start a digit run which ends at the next marker, a
    /// `/` or the end of the input; the two runs may appear in either order.
    /// A string without any marker yields [`RuleTable::conway`].
    ///
    /// Digits outside `0..=8` never set an entry, they are collected into
    /// [`ParsedRule::ignored`] instead.
    pub fn parse(spec: &str) -> ParsedRule {
        let stripped: String = spec
            .chars()
            .filter(|&c| !c.is_whitespace() && c != ',')
            .collect();

        let birth_at = stripped.find(['B', 'b']);
        let survive_at = stripped.find(['S', 's']);
        if birth_at.is_none() && survive_at.is_none() {
            return ParsedRule {
                table: Self::conway(),
                ignored: Vec::new(),
            };
        }

        let mut parsed = ParsedRule {
            table: Self::empty(),
            ignored: Vec::new(),
        };
        // markers are ascii, so the digit run starts one byte past them
        if let Some(at) = birth_at {
            scan_counts(&stripped[at + 1..], &mut parsed.table.birth, &mut parsed.ignored);
        }
        if let Some(at) = survive_at {
            scan_counts(&stripped[at + 1..], &mut parsed.table.survive, &mut parsed.ignored);
        }
        parsed
    }

    /// Parses `spec` and reports ignored digits once through the log
    pub fn from_spec(spec: &str) -> Self {
        let parsed = Self::parse(spec);
        if let Some(warning) = parsed.warning() {
            log::warn!("{}", warning);
        }
        parsed.table
    }

    /// Counts above 8 never occur and are never set
    #[inline]
    pub fn births_on(&self, count: u8) -> bool {
        self.birth.get(count as usize).copied().unwrap_or(false)
    }

    #[inline]
    pub fn survives_on(&self, count: u8) -> bool {
        self.survive.get(count as usize).copied().unwrap_or(false)
    }

    /// Returns whether a cell is live in the next generation
    #[inline]
    pub fn next_state(&self, alive: bool, count: u8) -> bool {
        if alive {
            self.survives_on(count)
        } else {
            self.births_on(count)
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn counts(f: &mut fmt::Formatter<'_>, table: &CountTable) -> fmt::Result {
            for (n, _) in table.iter().enumerate().filter(|(_, set)| **set) {
                write!(f, "{}", n)?;
            }
            Ok(())
        }
        f.write_str("B")?;
        counts(f, &self.birth)?;
        f.write_str("/S")?;
        counts(f, &self.survive)
    }
}

/// Result of [`RuleTable::parse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    pub table: RuleTable,
    /// Out-of-range digits, deduplicated, in the order they were first seen
    pub ignored: Vec<char>,
}

impl ParsedRule {
    /// The single diagnostic for this parse, if any digit was ignored
    pub fn warning(&self) -> Option<String> {
        if self.ignored.is_empty() {
            return None;
        }
        let digits = self
            .ignored
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Some(format!("digits >8 ignored in rulestring: {}", digits))
    }
}

fn scan_counts(run: &str, table: &mut CountTable, ignored: &mut Vec<char>) {
    for c in run.chars() {
        match c {
            '/' | 'B' | 'b' | 'S' | 's' => break,
            '0'..='8' => table[c as usize - '0' as usize] = true,
            c if c.is_ascii_digit() => {
                if !ignored.contains(&c) {
                    ignored.push(c);
                }
            }
            // anything else is skipped without ending the run
            _ => {}
        }
    }
}
