// Library root for the draft board core: player data, stat formatting,
// lineup state, dataset loading and configuration. No terminal code lives
// here so the board can be driven and tested headless.

pub mod board;
pub mod category;
pub mod config;
pub mod dataset;
pub mod player;
pub mod pool;
