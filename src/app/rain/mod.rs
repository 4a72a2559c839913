use rand::Rng;
use ratatui::style::Color;

pub mod colors;
mod widget;

pub use widget::{CELL_WIDTH, RainGrid};

use colors::{BACKGROUND, ColorSet, SHADE_COUNT};

/// Chance for a column to be raining after each reshuffle.
const ACTIVE_CHANCE: f64 = 0.3;

#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    pub rows: u16,
    pub cols: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 15, cols: 20 }
    }
}

/// Per-column animation state. `position` is the row just below the trail's
/// head and lives in [0, rows + 6) so the trail can slide fully off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drop {
    pub position: u16,
    pub active: bool,
}

pub struct RainState {
    config: GridConfig,
    drops: Vec<Drop>,
    colors: ColorSet,
}

impl RainState {
    pub fn new(config: GridConfig, rng: &mut impl Rng) -> Self {
        let drops = (0..config.cols)
            .map(|_| Drop {
                position: rng.random_range(0..config.rows),
                active: rng.random_bool(ACTIVE_CHANCE),
            })
            .collect();
        Self {
            config,
            drops,
            colors: ColorSet::default(),
        }
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    pub fn drops(&self) -> &[Drop] {
        &self.drops
    }

    fn cycle(&self) -> u16 {
        self.config.rows + SHADE_COUNT as u16
    }

    /// Fast tick: every active drop falls one row, wrapping at the cycle end.
    pub fn advance(&mut self) {
        let cycle = self.cycle();
        for drop in self.drops.iter_mut().filter(|drop| drop.active) {
            drop.position = (drop.position + 1) % cycle;
        }
    }

    /// Medium tick: re-roll which columns are raining. Positions keep their
    /// values so a re-activated column resumes where it left off.
    pub fn reshuffle(&mut self, rng: &mut impl Rng) {
        for drop in &mut self.drops {
            drop.active = rng.random_bool(ACTIVE_CHANCE);
        }
    }

    /// Slow tick: swap the whole gradient for a random palette color.
    pub fn recolor(&mut self, rng: &mut impl Rng) {
        self.colors = ColorSet::random(rng);
    }

    /// Pure projection from column state and row to the cell's color. Columns
    /// without a drop render as inactive.
    pub fn cell_color(&self, row: u16, col: u16) -> Color {
        match self.drops.get(col as usize) {
            Some(drop) if drop.active => {
                trail_shade(drop, row).map_or(BACKGROUND, |i| self.colors.shade(i).color())
            }
            _ => BACKGROUND,
        }
    }
}

/// Shade index for `row` if it lies in the 6-row trail behind the drop's
/// position, darkest at the tail.
fn trail_shade(drop: &Drop, row: u16) -> Option<usize> {
    let start = drop.position as i32 - SHADE_COUNT as i32;
    let row = row as i32;
    if row >= start && row < drop.position as i32 {
        Some((row - start) as usize)
    } else {
        None
    }
}
