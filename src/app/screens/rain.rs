use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Paragraph},
};

use crate::app::{
    rain::{CELL_WIDTH, GridConfig, RainGrid, RainState},
    ticker::Ticker,
    time::TIME,
};

use super::Activity;

const ADVANCE_INTERVAL: Duration = Duration::from_millis(100);
const RESHUFFLE_INTERVAL: Duration = Duration::from_millis(1500);
const RECOLOR_INTERVAL: Duration = Duration::from_millis(2000);

pub struct RainActivity {
    state: RainState,
    advance: Ticker,
    reshuffle: Ticker,
    recolor: Ticker,
    rng: Box<dyn RngCore>,

    pub exit: bool,
}

impl RainActivity {
    pub fn new(config: GridConfig, seed: Option<u64>) -> Self {
        let mut rng: Box<dyn RngCore> = match seed {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(rand::rng()),
        };
        let state = RainState::new(config, &mut rng);
        Self {
            state,
            advance: Ticker::new(ADVANCE_INTERVAL),
            reshuffle: Ticker::new(RESHUFFLE_INTERVAL),
            recolor: Ticker::new(RECOLOR_INTERVAL),
            rng,
            exit: false,
        }
    }

    fn step(&mut self, delta: Duration, event: Option<Event>) {
        // Once the activity is exiting its tickers are dead: nothing below
        // may touch the state again.
        if self.exit {
            return;
        }

        for _ in 0..self.advance.tick(delta) {
            self.state.advance();
        }
        if self.reshuffle.tick(delta) > 0 {
            self.state.reshuffle(&mut self.rng);
        }
        if self.recolor.tick(delta) > 0 {
            self.state.recolor(&mut self.rng);
        }

        let Some(Event::Key(key)) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.exit = true;
        }
    }
}

impl Activity for RainActivity {
    fn draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let config = self.state.config();
        let accent = self.state.colors().lightest().color();

        let [title, middle, footer] = Layout::vertical([
            Constraint::Max(1),
            Constraint::Min(0),
            Constraint::Max(1),
        ])
        .areas(area);

        // Center the bordered grid; the border adds one cell on each side.
        let [boxed] = Layout::vertical([Constraint::Length(config.rows + 2)])
            .flex(Flex::Center)
            .areas(middle);
        let [boxed] = Layout::horizontal([Constraint::Length(config.cols * CELL_WIDTH + 2)])
            .flex(Flex::Center)
            .areas(boxed);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent));
        let grid = block.inner(boxed);
        frame.render_widget(block, boxed);
        frame.render_widget(RainGrid::new(&self.state), grid);

        let header = Paragraph::new("~ rain ~")
            .alignment(Alignment::Center)
            .style(Style::default().fg(accent));
        frame.render_widget(header, title);
        frame.render_widget(Paragraph::new(" q to quit").dim(), footer);
    }

    fn update(&mut self, event: Option<Event>) {
        let delta = {
            let time = TIME.read().unwrap();
            time.delta
        };
        self.step(delta, event);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Option<Event> {
        Some(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn q_and_esc_request_exit() {
        let mut activity = RainActivity::new(GridConfig::default(), Some(42));
        activity.step(Duration::ZERO, key(KeyCode::Char('q')));
        assert!(activity.exit);

        let mut activity = RainActivity::new(GridConfig::default(), Some(42));
        activity.step(Duration::ZERO, key(KeyCode::Esc));
        assert!(activity.exit);

        let mut activity = RainActivity::new(GridConfig::default(), Some(42));
        activity.step(Duration::ZERO, key(KeyCode::Char('x')));
        assert!(!activity.exit);
    }

    #[test]
    fn advance_tick_moves_active_drops_one_row() {
        let mut activity = RainActivity::new(GridConfig::default(), Some(42));
        let before: Vec<_> = activity.state.drops().to_vec();
        activity.step(ADVANCE_INTERVAL, None);
        for (old, new) in before.iter().zip(activity.state.drops()) {
            if old.active {
                assert_eq!(new.position, (old.position + 1) % 21);
            } else {
                assert_eq!(new.position, old.position);
            }
        }
    }

    #[test]
    fn slow_frame_catches_up_on_advances() {
        let mut activity = RainActivity::new(GridConfig::default(), Some(42));
        let before: Vec<_> = activity.state.drops().to_vec();
        // Five advance periods in one frame, below the other intervals.
        activity.step(ADVANCE_INTERVAL * 5, None);
        for (old, new) in before.iter().zip(activity.state.drops()) {
            if old.active {
                assert_eq!(new.position, (old.position + 5) % 21);
            }
        }
    }

    #[test]
    fn recolor_tick_swaps_the_color_set() {
        let mut activity = RainActivity::new(GridConfig::default(), Some(9));
        let before = activity.state.colors().clone();
        // The rotation has six entries; a few ticks must land on a new one.
        let mut changed = false;
        for _ in 0..10 {
            activity.step(RECOLOR_INTERVAL, None);
            if *activity.state.colors() != before {
                changed = true;
                break;
            }
        }
        assert!(changed);
    }

    #[test]
    fn no_mutation_after_exit() {
        let mut activity = RainActivity::new(GridConfig::default(), Some(42));
        activity.step(Duration::ZERO, key(KeyCode::Char('q')));
        assert!(activity.exit);

        let drops: Vec<_> = activity.state.drops().to_vec();
        let colors = activity.state.colors().clone();
        activity.step(RECOLOR_INTERVAL * 3, None);
        assert_eq!(activity.state.drops(), drops);
        assert_eq!(*activity.state.colors(), colors);
    }
}
