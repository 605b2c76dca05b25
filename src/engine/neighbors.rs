use super::Grid;

/// Counts the live cells among the 8 neighbors of (`row`, `col`)
///
/// The grid is treated as a torus: the row above row 0 is the last row and
/// the column left of column 0 is the last column. The result is always in
/// `0..=8`.
#[inline]
pub fn neighbor_count(grid: &Grid, row: usize, col: usize) -> u8 {
    let (h, w) = (grid.height(), grid.width());
    // adding `h - 1` / `w - 1` instead of subtracting one keeps the math unsigned
    let rows = [(row + h - 1) % h, row, (row + 1) % h];
    let cols = [(col + w - 1) % w, col, (col + 1) % w];

    let mut count = 0;
    for (dy, &r) in rows.iter().enumerate() {
        let line = grid.row(r);
        for (dx, &c) in cols.iter().enumerate() {
            if dy != 1 || dx != 1 {
                count += line[c];
            }
        }
    }
    count
}
