use std::io::Result;

use clap::Parser;

use app::{entry::leave, rain::GridConfig};

mod app;

/// Decorative falling-rain grid animation for the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of grid rows.
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(1..=256))]
    rows: u16,

    /// Number of grid columns.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..=256))]
    cols: u16,

    /// Seed for a deterministic animation; omit for a random one.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    std::panic::set_hook(Box::new(|panic_info| {
        let _ = leave();
        println!("{panic_info}");
    }));

    app::entry::run_app(
        GridConfig {
            rows: cli.rows,
            cols: cli.cols,
        },
        cli.seed,
    )
}
