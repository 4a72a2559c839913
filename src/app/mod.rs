pub mod entry;
pub mod rain;
pub mod screens;
pub mod ticker;
pub mod time;
