// config.rs - Fixed settings for the board, the tick loop and the window

use egui::{Color32, Key};
use std::time::Duration;

// Board size constants
pub const OUTER_SPACE_SIZE: f32 = 20.0;
pub const OUTER_BORDER_SIZE: f32 = 2.0;
pub const SQUARE_BORDER_SIZE: f32 = 1.0;
pub const SQUARE_SIZE: f32 = 15.0;

pub const TICK_TIME: Duration = Duration::from_millis(1000);
pub const MIN_SLEEP: Duration = Duration::from_millis(2);

/// Everything the app treats as a constant, gathered in one place.
#[derive(Debug, Clone)]
pub struct Config {
    pub outer_space: f32,
    pub outer_border: f32,
    pub square_border: f32,
    pub square_size: f32,

    pub tick_time: Duration,
    pub min_sleep: Duration,

    pub pause_key: Key,
    pub clear_key: Key,
    pub random_key: Key,

    pub window_size: [f32; 2],
    pub background_color: Color32,
    pub outer_border_color: Color32,
    pub square_border_color: Color32,
    pub empty_color: Color32,
    pub filled_color: Color32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            outer_space: OUTER_SPACE_SIZE,
            outer_border: OUTER_BORDER_SIZE,
            square_border: SQUARE_BORDER_SIZE,
            square_size: SQUARE_SIZE,
            tick_time: TICK_TIME,
            min_sleep: MIN_SLEEP,
            pause_key: Key::P,
            clear_key: Key::C,
            random_key: Key::R,
            window_size: [500.0, 500.0],
            background_color: Color32::WHITE,
            outer_border_color: Color32::BLACK,
            square_border_color: Color32::GRAY,
            empty_color: Color32::WHITE,
            filled_color: Color32::BLACK,
        }
    }
}
