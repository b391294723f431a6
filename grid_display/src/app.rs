// app.rs - Viewer state: the engine plus presentation and playback settings
//
// Colors, grid lines and tick cadence belong to the viewer; the engine only
// ever sees toggles, randomize and advance.

use std::time::{Duration, Instant};

use conway::{Life, LifeError, patterns};
use egui::Color32;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info};

pub const DELAY_STEP_MS: u64 = 20;
pub const MAX_DELAY_MS: u64 = 150;

/// Colors and grid-line switch.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub cells: Color32,
    pub grid_lines: Color32,
    pub show_grid: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color32::BLACK,
            cells: Color32::from_rgb(255, 0, 0),
            grid_lines: Color32::WHITE,
            show_grid: false,
        }
    }
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color32 {
    Color32::from_rgb(rng.r#gen(), rng.r#gen(), rng.r#gen())
}

/// When to advance: every frame (continuous) or once per step request.
#[derive(Debug, Clone)]
pub struct Playback {
    pub continuous: bool,
    step_requested: bool,
    delay: Duration,
    last_tick: Instant,
}

impl Playback {
    pub fn new(continuous: bool, delay_ms: u64) -> Self {
        Self {
            continuous,
            step_requested: false,
            delay: Duration::from_millis(delay_ms.min(MAX_DELAY_MS)),
            last_tick: Instant::now(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.delay = Duration::from_millis(delay_ms.min(MAX_DELAY_MS));
    }

    pub fn slower(&mut self) {
        let ms = self.delay.as_millis() as u64 + DELAY_STEP_MS;
        self.set_delay_ms(ms);
    }

    pub fn faster(&mut self) {
        let ms = (self.delay.as_millis() as u64).saturating_sub(DELAY_STEP_MS);
        self.set_delay_ms(ms);
    }

    /// Single step: leaves continuous mode and queues one generation.
    pub fn request_step(&mut self) {
        self.continuous = false;
        self.step_requested = true;
    }

    pub fn toggle_continuous(&mut self) {
        self.continuous = !self.continuous;
        self.last_tick = Instant::now();
    }

    /// Whether a generation is due at `now`; consumes a pending step request.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.step_requested {
            self.step_requested = false;
            self.last_tick = now;
            return true;
        }
        if self.continuous && now.duration_since(self.last_tick) >= self.delay {
            self.last_tick = now;
            return true;
        }
        false
    }
}

/// Something the user asked for, from the keyboard or the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Step,
    ToggleContinuous,
    Slower,
    Faster,
    Randomize,
    Clear,
    ToggleGrid,
    RecolorBackground,
    RecolorCells,
    RecolorGrid,
    RecolorAll,
    LoadPattern(usize),
    ToggleCell { x: usize, y: usize },
}

/// Keyboard shortcuts.
pub fn action_for_key(key: egui::Key) -> Option<Action> {
    use egui::Key;
    let action = match key {
        Key::Escape => Action::Quit,
        Key::Space => Action::Step,
        Key::C => Action::ToggleContinuous,
        Key::Z => Action::Slower,
        Key::X => Action::Faster,
        Key::L => Action::Randomize,
        Key::G => Action::ToggleGrid,
        Key::Q => Action::RecolorBackground,
        Key::W => Action::RecolorCells,
        Key::E => Action::RecolorGrid,
        Key::R => Action::RecolorAll,
        _ => return None,
    };
    Some(action)
}

/// Maps a pointer offset from the board's top-left corner to a cell.
pub fn cell_at(offset_x: f32, offset_y: f32, scale: f32) -> Option<(usize, usize)> {
    if offset_x < 0.0 || offset_y < 0.0 || scale <= 0.0 {
        return None;
    }
    Some(((offset_x / scale) as usize, (offset_y / scale) as usize))
}

pub struct GridDisplay {
    pub life: Life,
    pub palette: Palette,
    pub playback: Playback,
    pub scale: f32,
    pub fill: f64,
    pub selected_pattern: usize,
    pub quit_requested: bool,
    rng: StdRng,
}

impl GridDisplay {
    pub fn new(life: Life, playback: Playback, scale: f32, fill: f64, rng: StdRng) -> Self {
        Self {
            life,
            palette: Palette::default(),
            playback,
            scale,
            fill,
            selected_pattern: 0,
            quit_requested: false,
            rng,
        }
    }

    /// Applies `action`; engine errors leave the board untouched.
    pub fn apply(&mut self, action: Action) -> Result<(), LifeError> {
        debug!(?action, "viewer action");
        match action {
            Action::Quit => self.quit_requested = true,
            Action::Step => self.playback.request_step(),
            Action::ToggleContinuous => self.playback.toggle_continuous(),
            Action::Slower => self.playback.slower(),
            Action::Faster => self.playback.faster(),
            Action::Randomize => self.life.randomize_with(&mut self.rng, self.fill)?,
            Action::Clear => {
                self.playback.continuous = false;
                self.life.clear();
            }
            Action::ToggleGrid => self.palette.show_grid = !self.palette.show_grid,
            Action::RecolorBackground => self.palette.background = random_color(&mut self.rng),
            Action::RecolorCells => self.palette.cells = random_color(&mut self.rng),
            Action::RecolorGrid => self.palette.grid_lines = random_color(&mut self.rng),
            Action::RecolorAll => {
                self.palette.background = random_color(&mut self.rng);
                self.palette.cells = random_color(&mut self.rng);
                self.palette.grid_lines = random_color(&mut self.rng);
            }
            Action::LoadPattern(index) => {
                if let Some(pattern) = patterns::PATTERNS.get(index) {
                    self.playback.continuous = false;
                    patterns::apply_pattern(&mut self.life, pattern);
                    info!(pattern = pattern.name, "loaded pattern");
                }
            }
            Action::ToggleCell { x, y } => self.life.toggle_cell(x, y)?,
        }
        Ok(())
    }

    /// Advances the engine if playback says a generation is due.
    pub fn update_simulation(&mut self, now: Instant) -> bool {
        if self.playback.tick(now) {
            self.life.advance();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::life::DEFAULT_FILL;
    use rand::SeedableRng;

    fn display(width: usize, height: usize) -> GridDisplay {
        GridDisplay::new(
            Life::new(width, height).unwrap(),
            Playback::new(false, 0),
            4.0,
            DEFAULT_FILL,
            StdRng::seed_from_u64(9),
        )
    }

    #[test]
    fn delay_is_clamped() {
        let mut playback = Playback::new(true, 500);
        assert_eq!(playback.delay(), Duration::from_millis(MAX_DELAY_MS));
        playback.slower();
        assert_eq!(playback.delay(), Duration::from_millis(MAX_DELAY_MS));
        for _ in 0..10 {
            playback.faster();
        }
        assert_eq!(playback.delay(), Duration::ZERO);
        playback.slower();
        assert_eq!(playback.delay(), Duration::from_millis(DELAY_STEP_MS));
    }

    #[test]
    fn single_step_fires_once() {
        let mut playback = Playback::new(true, 0);
        playback.request_step();
        assert!(!playback.continuous);
        let now = Instant::now();
        assert!(playback.tick(now));
        assert!(!playback.tick(now));
    }

    #[test]
    fn continuous_waits_for_delay() {
        let mut playback = Playback::new(true, 100);
        let start = Instant::now();
        playback.last_tick = start;
        assert!(!playback.tick(start + Duration::from_millis(50)));
        assert!(playback.tick(start + Duration::from_millis(100)));
        assert!(!playback.tick(start + Duration::from_millis(150)));
    }

    #[test]
    fn pointer_mapping() {
        assert_eq!(cell_at(0.0, 0.0, 5.0), Some((0, 0)));
        assert_eq!(cell_at(9.9, 10.0, 5.0), Some((1, 2)));
        assert_eq!(cell_at(-1.0, 3.0, 5.0), None);
        assert_eq!(cell_at(3.0, 3.0, 0.0), None);
    }

    #[test]
    fn keys() {
        assert_eq!(action_for_key(egui::Key::Space), Some(Action::Step));
        assert_eq!(action_for_key(egui::Key::Z), Some(Action::Slower));
        assert_eq!(action_for_key(egui::Key::Escape), Some(Action::Quit));
        assert_eq!(action_for_key(egui::Key::A), None);
    }

    #[test]
    fn clicks_toggle_and_reject_off_board() {
        let mut view = display(4, 4);
        view.apply(Action::ToggleCell { x: 1, y: 1 }).unwrap();
        assert!(view.life.is_alive(1, 1));
        assert!(view.apply(Action::ToggleCell { x: 4, y: 1 }).is_err());
        assert_eq!(view.life.population(), 1);
    }

    #[test]
    fn step_action_advances_once() {
        let mut view = display(5, 5);
        view.apply(Action::LoadPattern(1)).unwrap();
        view.apply(Action::Step).unwrap();
        let now = Instant::now();
        assert!(view.update_simulation(now));
        assert!(!view.update_simulation(now));
        assert_eq!(view.life.generation(), 1);
    }

    #[test]
    fn recolor_leaves_cells_alone() {
        let mut view = display(6, 6);
        view.apply(Action::Randomize).unwrap();
        let cells = view.life.cells().to_vec();
        let before = view.palette.clone();
        view.apply(Action::RecolorAll).unwrap();
        view.apply(Action::ToggleGrid).unwrap();
        assert_ne!(view.palette, before);
        assert!(view.palette.show_grid);
        assert_eq!(view.life.cells(), &cells[..]);
    }
}
