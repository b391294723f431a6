//! Conway's Game of Life on a fixed, bounded grid.
//!
//! [`Life`] keeps two generations and ping-pongs between them on every
//! [`Life::advance`]. Each generation carries a live-neighbour count per cell
//! that is updated incrementally: toggles touch at most eight counts, and a
//! step rebuilds the new counts as it decides which cells live. Nothing is
//! recounted from scratch except on seeding and randomizing.
//!
//! Cells outside the grid are permanently dead; there is no wraparound.
//!
//! ```
//! use conway::{Life, patterns};
//!
//! let blinker = patterns::find("Blinker").unwrap();
//! let mut life = Life::from_pattern(5, 5, blinker).unwrap();
//! life.advance();
//! assert!(life.is_alive(2, 1) && life.is_alive(2, 2) && life.is_alive(2, 3));
//! ```

pub mod error;
pub mod grid;
pub mod life;
pub mod neighbors;
pub mod patterns;

pub use error::LifeError;
pub use grid::Grid;
pub use life::Life;
pub use patterns::{PATTERNS, Pattern};
