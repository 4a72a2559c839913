use std::{io::Result, time::Duration};

use crossterm::event::{self, Event};
use ratatui::{Frame, Terminal, prelude::Backend};

use super::rain::GridConfig;

pub mod rain;

pub trait Activity {
    fn draw(&mut self, frame: &mut Frame<'_>);

    fn update(&mut self, event: Option<Event>);
}

pub struct App {
    rain: rain::RainActivity,
}

impl App {
    pub fn new(config: GridConfig, seed: Option<u64>) -> Self {
        Self {
            rain: rain::RainActivity::new(config, seed),
        }
    }

    /// One frame: advance the clock, poll input, paint, then mutate. Render
    /// always sees the state as the previous tick left it.
    pub fn update<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<bool> {
        crate::app::time::update_time();

        let event = if event::poll(Duration::from_millis(20))? {
            Some(event::read()?)
        } else {
            None
        };

        terminal.draw(|frame| self.rain.draw(frame))?;
        self.rain.update(event);

        Ok(self.rain.exit)
    }
}
