use crate::model::{RankedLanguage, Rgb};
use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelCell {
    pub occupied: bool,
    pub slice: Option<usize>,
    pub color: Option<Rgb>,
}

/// Character grid for a pie chart: `2 * radius` rows by `4 * radius`
/// columns, since terminal cells are about twice as tall as wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieGrid {
    rows: usize,
    cols: usize,
    cells: Vec<PixelCell>,
}

impl PieGrid {
    fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![PixelCell::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&PixelCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    pub fn row(&self, row: usize) -> &[PixelCell] {
        let start = (row * self.cols).min(self.cells.len());
        let end = (start + self.cols).min(self.cells.len());
        &self.cells[start..end]
    }

    pub fn cells(&self) -> impl Iterator<Item = &PixelCell> + '_ {
        self.cells.iter()
    }

    /// Number of cells assigned to each slice, indexed like the input.
    pub fn slice_counts(&self, slices: usize) -> Vec<usize> {
        let mut counts = vec![0; slices];
        for slice in self.cells.iter().filter_map(|c| c.slice) {
            if let Some(n) = counts.get_mut(slice) {
                *n += 1;
            }
        }
        counts
    }
}

/// Rasterizes ranked shares into a pie, slices clockwise from 12 o'clock in
/// input order. Empty input or a zero total produces an all-empty grid.
pub fn rasterize_pie(ranked: &[RankedLanguage], radius: u16) -> PieGrid {
    let r = radius as usize;
    let mut grid = PieGrid::empty(2 * r, 4 * r);

    let total: f64 = ranked.iter().map(|l| l.percent).sum();
    if ranked.is_empty() || total <= 0.0 || r == 0 {
        return grid;
    }

    let boundaries: Vec<f64> = ranked
        .iter()
        .scan(0.0, |cumulative, lang| {
            *cumulative += lang.percent;
            Some(*cumulative / total * TAU)
        })
        .collect();
    let last = ranked.len() - 1;

    let half_rows = r as f64;
    let half_cols = 2.0 * r as f64;

    for row in 0..grid.rows {
        let y = (row as f64 + 0.5 - half_rows) / half_rows;
        for col in 0..grid.cols {
            let x = (col as f64 + 0.5 - half_cols) / half_cols;
            if x * x + y * y > 1.0 {
                continue;
            }

            // Screen y grows downward, so +π/2 puts angle 0 at the top and
            // increasing angles run clockwise.
            let angle = (y.atan2(x) + FRAC_PI_2).rem_euclid(TAU);
            let slice = boundaries
                .iter()
                .position(|&b| b >= angle)
                .unwrap_or(last);

            grid.cells[row * grid.cols + col] = PixelCell {
                occupied: true,
                slice: Some(slice),
                color: Some(ranked[slice].color),
            };
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ranked(percents: &[f64]) -> Vec<RankedLanguage> {
        percents
            .iter()
            .enumerate()
            .map(|(i, &p)| RankedLanguage {
                name: format!("L{i}"),
                color: Rgb::new(i as u8, 0, 0),
                size: p as u64,
                percent: p,
            })
            .collect()
    }

    fn inside_count(grid: &PieGrid) -> usize {
        grid.cells().filter(|c| c.occupied).count()
    }

    #[test]
    fn grid_is_twice_as_wide_as_tall() {
        let grid = rasterize_pie(&ranked(&[100.0]), 5);
        assert_eq!((grid.rows(), grid.cols()), (10, 20));
    }

    #[test]
    fn halves_split_evenly() {
        let input = ranked(&[50.0, 50.0]);
        let grid = rasterize_pie(&input, 6);
        let counts = grid.slice_counts(2);

        assert_eq!(counts.iter().sum::<usize>(), inside_count(&grid));
        assert!(grid
            .cells()
            .filter(|c| c.occupied)
            .all(|c| c.color == Some(input[c.slice.unwrap()].color)));
        assert!(counts[0].abs_diff(counts[1]) <= 2, "{counts:?}");
    }

    #[test]
    fn first_slice_starts_at_the_top_going_clockwise() {
        let grid = rasterize_pie(&ranked(&[25.0, 75.0]), 4);
        // Upper right quadrant belongs to the first quarter.
        assert_eq!(grid.cell(1, 10).unwrap().slice, Some(0));
        // Upper left quadrant comes last.
        assert_eq!(grid.cell(1, 5).unwrap().slice, Some(1));
        // Lower right quadrant is already past the first quarter.
        assert_eq!(grid.cell(6, 10).unwrap().slice, Some(1));
    }

    #[test]
    fn corners_are_outside_the_circle() {
        let grid = rasterize_pie(&ranked(&[100.0]), 6);
        for (r, c) in [(0, 0), (0, 23), (11, 0), (11, 23)] {
            assert_eq!(grid.cell(r, c), Some(&PixelCell::default()));
        }
        assert!(grid.cell(6, 12).unwrap().occupied);
    }

    #[test]
    fn percentages_need_not_sum_to_one_hundred() {
        let grid = rasterize_pie(&ranked(&[30.0, 30.0]), 6);
        let counts = grid.slice_counts(2);
        assert_eq!(counts.iter().sum::<usize>(), inside_count(&grid));
        assert!(counts[0].abs_diff(counts[1]) <= 2, "{counts:?}");
    }

    #[test]
    fn degenerate_input_is_blank() {
        for grid in [
            rasterize_pie(&[], 6),
            rasterize_pie(&ranked(&[0.0, 0.0]), 6),
        ] {
            assert_eq!((grid.rows(), grid.cols()), (12, 24));
            assert_eq!(inside_count(&grid), 0);
        }
        assert_eq!(rasterize_pie(&ranked(&[100.0]), 0).rows(), 0);
    }

    #[test]
    fn rasterizing_twice_is_identical() {
        let input = ranked(&[41.5, 33.2, 12.1, 8.0, 5.2]);
        assert_eq!(rasterize_pie(&input, 9), rasterize_pie(&input, 9));
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let grid = rasterize_pie(&ranked(&[100.0]), 2);
        assert!(grid.cell(4, 0).is_none());
        assert!(grid.cell(0, 8).is_none());
        assert_eq!(grid.row(0).len(), 8);
    }
}
