// patterns.rs - Catalogue of classic Life patterns
//
// Cells are (x, y) offsets from the pattern's top-left corner.

use tracing::debug;

use crate::life::Life;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (24, 0), (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Columns spanned by the pattern.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    /// Rows spanned by the pattern.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }

    /// Sets the pattern's cells alive with its top-left corner at
    /// `(origin_x, origin_y)`. Cells that land off the grid are skipped.
    /// Returns how many cells were placed.
    pub fn place(&self, life: &mut Life, origin_x: usize, origin_y: usize) -> usize {
        let mut placed = 0;
        for &(dx, dy) in self.cells {
            let (Some(x), Some(y)) = (origin_x.checked_add(dx), origin_y.checked_add(dy)) else {
                continue;
            };
            if life.set_cell(x, y, true).is_ok() {
                placed += 1;
            }
        }
        placed
    }

    /// Places the pattern in the middle of the grid. Patterns larger than the
    /// grid are anchored at the top-left corner and clipped.
    pub fn place_centered(&self, life: &mut Life) -> usize {
        let x = life.width().saturating_sub(self.width()) / 2;
        let y = life.height().saturating_sub(self.height()) / 2;
        self.place(life, x, y)
    }
}

/// Clears the grid and loads `pattern` in its centre, starting a fresh run.
pub fn apply_pattern(life: &mut Life, pattern: &Pattern) {
    life.clear();
    let placed = pattern.place_centered(life);
    if placed < pattern.cells.len() {
        debug!(
            pattern = pattern.name,
            placed,
            total = pattern.cells.len(),
            "pattern clipped by grid boundary"
        );
    }
}

impl Life {
    /// Empty `width x height` grid with `pattern` centred on it.
    pub fn from_pattern(
        width: usize,
        height: usize,
        pattern: &Pattern,
    ) -> Result<Self, crate::LifeError> {
        let mut life = Self::new(width, height)?;
        apply_pattern(&mut life, pattern);
        Ok(life)
    }
}
