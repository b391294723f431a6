// life.rs - Double-buffered Game of Life engine

use rand::Rng;
use tracing::{debug, trace};

use crate::error::LifeError;
use crate::grid::Grid;
use crate::neighbors::{self, Delta};

/// Probability of a cell starting alive when randomizing without a preference.
pub const DEFAULT_FILL: f64 = 0.5;

/// One liveness snapshot with its paired neighbour counts.
#[derive(Debug, Clone)]
struct Generation {
    liveness: Vec<bool>,
    counts: Vec<u8>,
}

impl Generation {
    fn empty(area: usize) -> Self {
        Self {
            liveness: vec![false; area],
            counts: vec![0; area],
        }
    }

    fn clear(&mut self) {
        self.liveness.fill(false);
        self.counts.fill(0);
    }

    /// Flips one cell and moves its neighbours' counts with it.
    fn toggle(&mut self, grid: &Grid, x: usize, y: usize) {
        let i = grid.index(x, y);
        let delta = if self.liveness[i] { Delta::Died } else { Delta::Born };
        neighbors::apply_neighbor_delta(grid, &mut self.counts, x, y, delta);
        self.liveness[i] = !self.liveness[i];
    }
}

/// Conway's Game of Life on a fixed `width x height` grid.
///
/// Two generation slots ping-pong on [`advance`](Life::advance). The active
/// slot is the front generation: it is what [`is_alive`](Life::is_alive)
/// reads and what toggles, seeding and randomizing write. Its neighbour
/// counts are kept exact incrementally, so a step never recounts from scratch.
///
/// The engine does no locking; share it across threads only behind a lock.
#[derive(Debug, Clone)]
pub struct Life {
    grid: Grid,
    slots: [Generation; 2],
    active: usize,
    generation: u64,
}

impl Life {
    /// Empty grid: every cell dead, every count zero.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        let grid = Grid::new(width, height)?;
        debug!(width, height, "allocating life grid");
        Ok(Self {
            grid,
            slots: [Generation::empty(grid.area()), Generation::empty(grid.area())],
            active: 0,
            generation: 0,
        })
    }

    /// Grid seeded from row-major `cells`, which must hold exactly
    /// `width * height` entries.
    pub fn with_cells(width: usize, height: usize, cells: &[bool]) -> Result<Self, LifeError> {
        let mut life = Self::new(width, height)?;
        let expected = life.grid.area();
        if cells.len() != expected {
            return Err(LifeError::InvalidLength {
                expected,
                actual: cells.len(),
            });
        }

        let grid = life.grid;
        let front = life.front_mut();
        front.liveness.copy_from_slice(cells);
        neighbors::recompute_into(&grid, &front.liveness, &mut front.counts);
        Ok(life)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Generations advanced since construction or the last reset.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the front generation.
    pub fn population(&self) -> usize {
        self.front().liveness.iter().filter(|&&alive| alive).count()
    }

    /// Liveness of `(x, y)`. Off-grid cells are dead.
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.grid
            .checked_index(x, y)
            .is_some_and(|i| self.front().liveness[i])
    }

    /// Stored live-neighbour count of `(x, y)`, `None` off the grid.
    pub fn neighbor_count(&self, x: usize, y: usize) -> Option<u8> {
        self.grid.checked_index(x, y).map(|i| self.front().counts[i])
    }

    /// Row-major liveness of the front generation.
    pub fn cells(&self) -> &[bool] {
        &self.front().liveness
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.front()
            .liveness
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| self.grid.coords(i))
    }

    /// Flips `(x, y)` and updates its neighbours' counts.
    ///
    /// # Errors
    ///
    /// [`LifeError::OutOfRange`] when `(x, y)` is off the grid; nothing changes.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), LifeError> {
        if !self.grid.contains(x, y) {
            debug!(x, y, "ignoring toggle outside the grid");
            return Err(self.grid.out_of_range(x, y));
        }
        let grid = self.grid;
        self.front_mut().toggle(&grid, x, y);
        trace!(x, y, "toggled cell");
        Ok(())
    }

    /// Sets `(x, y)` to `alive`, toggling only if it differs.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), LifeError> {
        if self.grid.contains(x, y) && self.is_alive(x, y) == alive {
            return Ok(());
        }
        self.toggle_cell(x, y)
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.front_mut().clear();
        self.generation = 0;
        debug!("cleared life grid");
    }

    /// Refills the grid with independent coin flips using the thread RNG.
    /// [`DEFAULT_FILL`] gives even odds.
    pub fn randomize(&mut self, probability: f64) -> Result<(), LifeError> {
        self.randomize_with(&mut rand::thread_rng(), probability)
    }

    /// Refills the grid so each cell is alive with `probability`, then
    /// recounts neighbours from scratch. Resets the generation counter.
    ///
    /// # Errors
    ///
    /// [`LifeError::InvalidProbability`] unless `probability` is in
    /// `0.0..=1.0`; the grid is left as it was.
    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        probability: f64,
    ) -> Result<(), LifeError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(LifeError::InvalidProbability(probability));
        }

        let grid = self.grid;
        let front = self.front_mut();
        for cell in front.liveness.iter_mut() {
            *cell = rng.gen_bool(probability);
        }
        neighbors::recompute_into(&grid, &front.liveness, &mut front.counts);
        self.generation = 0;

        debug!(probability, population = self.population(), "randomized life grid");
        Ok(())
    }

    /// Computes the next generation into the back slot and makes it the front.
    ///
    /// The rule reads only the old generation's counts; the new generation's
    /// counts are rebuilt in the same pass by a `+1` delta per live cell.
    pub fn advance(&mut self) {
        let grid = self.grid;
        let [first, second] = &mut self.slots;
        let (current, next) = if self.active == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        next.counts.fill(0);
        let mut i = 0;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let alive = neighbors::next_state(current.liveness[i], current.counts[i]);
                next.liveness[i] = alive;
                if alive {
                    neighbors::apply_neighbor_delta(&grid, &mut next.counts, x, y, Delta::Born);
                }
                i += 1;
            }
        }

        self.active ^= 1;
        self.generation += 1;
        trace!(generation = self.generation, "advanced");
    }

    /// Recounts the front generation from scratch and compares it with the
    /// incrementally maintained counts.
    pub fn is_consistent(&self) -> bool {
        let front = self.front();
        neighbors::recompute_all(&self.grid, &front.liveness) == front.counts
    }

    #[inline]
    fn front(&self) -> &Generation {
        &self.slots[self.active]
    }

    #[inline]
    fn front_mut(&mut self) -> &mut Generation {
        &mut self.slots[self.active]
    }
}
