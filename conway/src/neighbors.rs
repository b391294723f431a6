// neighbors.rs - Incremental live-neighbour bookkeeping
//
// Every count buffer is paired with one liveness buffer and must equal the
// number of live in-grid neighbours of each cell. Counts only ever change
// through `apply_neighbor_delta`; `recompute_all` exists for seeding and for
// cross-checking the incremental path.

use crate::grid::Grid;

/// Direction of a neighbour count update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delta {
    /// A cell became alive.
    Born,
    /// A cell died.
    Died,
}

/// Conway's rule: survive on 2 or 3, birth on exactly 3.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Adds `delta` to the count of every in-grid neighbour of `(x, y)`.
/// The cell's own count is never touched.
#[inline]
pub(crate) fn apply_neighbor_delta(
    grid: &Grid,
    counts: &mut [u8],
    x: usize,
    y: usize,
    delta: Delta,
) {
    debug_assert_eq!(counts.len(), grid.area(), "count buffer does not match the grid");
    debug_assert!(grid.contains(x, y), "cell ({x}, {y}) is off the grid");
    for n in grid.neighbors(x, y) {
        match delta {
            Delta::Born => counts[n] += 1,
            Delta::Died => counts[n] -= 1,
        }
    }
}

/// Rebuilds `counts` from scratch for `liveness`. O(width * height).
pub(crate) fn recompute_into(grid: &Grid, liveness: &[bool], counts: &mut [u8]) {
    debug_assert_eq!(liveness.len(), grid.area(), "liveness buffer does not match the grid");
    counts.fill(0);
    for (i, _) in liveness.iter().enumerate().filter(|(_, alive)| **alive) {
        let (x, y) = grid.coords(i);
        apply_neighbor_delta(grid, counts, x, y, Delta::Born);
    }
}

/// Fresh count buffer consistent with `liveness`, which must cover the grid.
pub fn recompute_all(grid: &Grid, liveness: &[bool]) -> Vec<u8> {
    let mut counts = vec![0; grid.area()];
    recompute_into(grid, liveness, &mut counts);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(grid: &Grid, liveness: &[bool]) -> Vec<u8> {
        let (w, h) = (grid.width() as i64, grid.height() as i64);
        let mut counts = vec![0u8; grid.area()];
        for y in 0..h {
            for x in 0..w {
                let mut count = 0;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        let (nx, ny) = (x + dx, y + dy);
                        if (dx, dy) == (0, 0) || nx < 0 || ny < 0 || nx >= w || ny >= h {
                            continue;
                        }
                        if liveness[(nx + w * ny) as usize] {
                            count += 1;
                        }
                    }
                }
                counts[(x + w * y) as usize] = count;
            }
        }
        counts
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn recompute_matches_brute_force() {
        let grid = Grid::new(7, 5).unwrap();
        let liveness: Vec<bool> = (0..grid.area()).map(|i| (i * 7 + i / 3) % 5 < 2).collect();
        assert_eq!(recompute_all(&grid, &liveness), brute_force(&grid, &liveness));
    }

    #[test]
    fn full_grid_counts() {
        let grid = Grid::new(3, 3).unwrap();
        let counts = recompute_all(&grid, &[true; 9]);
        assert_eq!(counts, vec![3, 5, 3, 5, 8, 5, 3, 5, 3]);
    }

    #[test]
    fn delta_skips_the_cell_itself() {
        let grid = Grid::new(3, 3).unwrap();
        let mut counts = vec![0; 9];
        apply_neighbor_delta(&grid, &mut counts, 1, 1, Delta::Born);
        assert_eq!(counts, vec![1, 1, 1, 1, 0, 1, 1, 1, 1]);
        apply_neighbor_delta(&grid, &mut counts, 1, 1, Delta::Died);
        assert_eq!(counts, vec![0; 9]);
    }

    #[test]
    fn corner_delta_touches_three_cells() {
        let grid = Grid::new(3, 3).unwrap();
        let mut counts = vec![0; 9];
        apply_neighbor_delta(&grid, &mut counts, 0, 0, Delta::Born);
        assert_eq!(counts, vec![0, 1, 0, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "off the grid")]
    fn delta_rejects_off_grid_cell() {
        let grid = Grid::new(3, 3).unwrap();
        let mut counts = vec![0; 9];
        apply_neighbor_delta(&grid, &mut counts, 3, 0, Delta::Born);
    }

    #[test]
    #[should_panic(expected = "count buffer does not match the grid")]
    fn delta_rejects_short_count_buffer() {
        let grid = Grid::new(3, 3).unwrap();
        let mut counts = vec![0; 4];
        apply_neighbor_delta(&grid, &mut counts, 0, 0, Delta::Born);
    }

    #[test]
    #[should_panic(expected = "liveness buffer does not match the grid")]
    fn recompute_rejects_oversized_liveness() {
        let grid = Grid::new(2, 2).unwrap();
        recompute_all(&grid, &[true; 6]);
    }

    #[test]
    fn recompute_into_overwrites_stale_counts() {
        let grid = Grid::new(4, 4).unwrap();
        let liveness = vec![false; 16];
        let mut counts = vec![7; 16];
        recompute_into(&grid, &liveness, &mut counts);
        assert!(counts.iter().all(|&c| c == 0));
    }
}
