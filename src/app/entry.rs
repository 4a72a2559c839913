use std::{
    io::{Result, stdout},
    time::{Duration, Instant},
};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};

use super::{rain::GridConfig, screens::App};

pub const FPS: u64 = 30;

pub fn run_app(config: GridConfig, seed: Option<u64>) -> Result<()> {
    let mut app = App::new(config, seed);

    init()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let frame_duration = Duration::from_millis(1000 / FPS);
    loop {
        let frame_start = Instant::now();

        let exit = app.update(&mut terminal)?;
        if exit {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    leave()?;
    Ok(())
}

pub fn init() -> Result<()> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    Ok(())
}

pub fn leave() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
