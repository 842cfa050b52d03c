// lib.rs - Conway's Game of Life on a board that fills the window
//
// The board is rebuilt (empty) whenever the window is resized, evolves once
// per second on a background task, and is edited with the mouse. `P` pauses.

pub mod animation;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod input;
pub mod logging;
pub mod patterns;
pub mod state;
pub mod ui;

pub use animation::{AnimationLoop, StopHandle};
pub use board::{Board, Cell};
pub use config::Config;
pub use error::{LifeError, Result};
pub use grid::{CellRects, Geometry};
pub use input::{EventHandler, InputController};
pub use state::{BoardView, PauseSwitch, Redraw, SharedBoard};
