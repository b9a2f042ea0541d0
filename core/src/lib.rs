pub mod best_time;
pub mod catalog;
pub mod engine;
pub mod grid;
pub mod placement;
pub mod rng;
pub mod timer;

pub use best_time::{BestTime, NO_RECORD_LABEL};
pub use catalog::{background_by_slug, pick_background, BackgroundImage};
pub use engine::{EngineEvent, GamePhase, PuzzleEngine};
pub use grid::{tile_col, tile_region, tile_row, TileId, COLS, ROWS, TOTAL};
pub use placement::Placement;
pub use timer::{format_clock, CountdownTimer, Tick, TimerGeneration, ROUND_SECONDS};
