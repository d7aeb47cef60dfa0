//! Euclidean bucket grid over disk coordinates.
//!
//! Neighbour filter for relaxation. Near the center Euclidean cells track
//! hyperbolic neighbourhoods well; toward the boundary a cell covers an ever
//! larger hyperbolic area, so the filter becomes looser there.

use std::collections::HashMap;

use crate::hyperbolic::DiskPoint;

#[derive(Debug, Clone)]
pub(crate) struct SpatialGrid {
    cell_size: f64,
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl SpatialGrid {
    /// Bucket `positions[i]` under index `i`.
    pub(crate) fn build(cell_size: f64, positions: &[DiskPoint]) -> Self {
        let mut grid = Self {
            cell_size,
            cells: HashMap::with_capacity(positions.len()),
        };
        for (index, &z) in positions.iter().enumerate() {
            let cell = grid.cell_of(z);
            grid.cells.entry(cell).or_default().push(index);
        }
        grid
    }

    #[inline]
    fn cell_of(&self, z: DiskPoint) -> (i64, i64) {
        (
            (z.re / self.cell_size).floor() as i64,
            (z.im / self.cell_size).floor() as i64,
        )
    }

    /// Number of cell rings needed to cover a Euclidean radius.
    #[inline]
    pub(crate) fn reach_for(&self, euclidean_radius: f64) -> i64 {
        (euclidean_radius / self.cell_size).ceil().max(1.0) as i64
    }

    /// Indices bucketed within `reach` cells of the cell holding `z`
    /// (including `z`'s own bucket).
    pub(crate) fn neighbors(&self, z: DiskPoint, reach: i64) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy) = self.cell_of(z);
        (cx - reach..=cx + reach)
            .flat_map(move |x| (cy - reach..=cy + reach).map(move |y| (x, y)))
            .filter_map(move |cell| self.cells.get(&cell))
            .flat_map(|bucket| bucket.iter().copied())
    }
}
