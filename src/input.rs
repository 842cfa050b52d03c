// input.rs - Pointer, keyboard and resize events turned into board changes

use std::sync::atomic::{AtomicU64, Ordering};

use egui::{Key, Pos2, Vec2};
use tracing::{debug, info};

use crate::config::Config;
use crate::patterns;
use crate::state::{PauseSwitch, Redraw, SharedBoard};

/// Events delivered by the window. Coordinates are relative to the drawing area.
pub trait EventHandler {
    fn on_click(&self, point: Pos2);
    fn on_key(&self, key: Key);
    fn on_resize(&self, size: Vec2);
}

/// Keys that stamp a seed pattern, in [`patterns::PATTERNS`] order.
const PATTERN_KEYS: [Key; 5] = [Key::Num1, Key::Num2, Key::Num3, Key::Num4, Key::Num5];

pub struct InputController<R> {
    board: SharedBoard,
    pause: PauseSwitch,
    redraw: R,
    pause_key: Key,
    clear_key: Key,
    random_key: Key,
    seeds: AtomicU64,
}

impl<R: Redraw> InputController<R> {
    pub fn new(board: SharedBoard, pause: PauseSwitch, redraw: R, config: &Config) -> Self {
        Self {
            board,
            pause,
            redraw,
            pause_key: config.pause_key,
            clear_key: config.clear_key,
            random_key: config.random_key,
            seeds: AtomicU64::new(0),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }
}

impl<R: Redraw> EventHandler for InputController<R> {
    fn on_click(&self, point: Pos2) {
        let mut view = self.board.lock();
        let Some((x, y)) = view.rects.hit(point) else {
            return;
        };
        let state = view.board.toggle(x, y);
        drop(view);

        debug!(x, y, ?state, "cell toggled");
        self.redraw.request_redraw();
    }

    fn on_key(&self, key: Key) {
        if key == self.pause_key {
            let paused = self.pause.toggle();
            info!(paused, "pause toggled");
            return;
        }

        let mut view = self.board.lock();
        if key == self.clear_key {
            view.board.clear();
            info!("board cleared");
        } else if key == self.random_key {
            let seed = self.seeds.fetch_add(1, Ordering::Relaxed);
            patterns::apply_random_pattern(&mut view.board, seed);
            info!(seed, population = view.board.population(), "random fill");
        } else if let Some(pattern) = PATTERN_KEYS
            .iter()
            .position(|k| *k == key)
            .and_then(|i| patterns::PATTERNS.get(i))
        {
            patterns::apply_pattern(&mut view.board, pattern);
            info!(pattern = pattern.name, "pattern applied");
        } else {
            return;
        }
        drop(view);

        self.redraw.request_redraw();
    }

    fn on_resize(&self, size: Vec2) {
        self.board.lock().fit_viewport(size);
        self.redraw.request_redraw();
    }
}
