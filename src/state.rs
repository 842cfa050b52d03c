// state.rs - The board shared between the tick loop, the input handler and the renderer

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use egui::Vec2;
use tokio::sync::watch;
use tracing::info;

use crate::board::Board;
use crate::grid::{CellRects, Geometry};

/// Anything that can be asked to draw the board again.
pub trait Redraw: Send + Sync {
    fn request_redraw(&self);
}

impl Redraw for egui::Context {
    fn request_redraw(&self) {
        self.request_repaint();
    }
}

impl<R: Redraw + ?Sized> Redraw for Arc<R> {
    fn request_redraw(&self) {
        (**self).request_redraw();
    }
}

/// Board plus the rectangles it is drawn into. Both are always resized together.
#[derive(Debug, Clone)]
pub struct BoardView {
    pub geometry: Geometry,
    pub board: Board,
    pub rects: CellRects,
}

impl BoardView {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            board: Board::default(),
            rects: CellRects::default(),
        }
    }

    /// Rebuild board and rectangles for a viewport of `size`. Always destructive.
    pub fn fit_viewport(&mut self, size: Vec2) -> (usize, usize) {
        let (width, height) = self.geometry.grid_size(size);
        self.board.resize(width, height);
        self.rects = CellRects::new(&self.geometry, width, height);
        info!(width, height, viewport = ?size, "board resized");
        (width, height)
    }
}

/// Coarse lock around the [`BoardView`]. Cloning shares the same board.
#[derive(Debug, Clone)]
pub struct SharedBoard {
    inner: Arc<Mutex<BoardView>>,
}

impl SharedBoard {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BoardView::new(geometry))),
        }
    }

    /// Lock the board. Every mutation leaves the board whole, so a poisoned
    /// lock is still safe to use.
    pub fn lock(&self) -> MutexGuard<'_, BoardView> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Board {
        self.lock().board.clone()
    }
}

/// Shared run/pause flag. `true` means paused.
#[derive(Debug, Clone)]
pub struct PauseSwitch {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for PauseSwitch {
    fn default() -> Self {
        Self::new(false)
    }
}

impl PauseSwitch {
    pub fn new(paused: bool) -> Self {
        let (tx, _rx) = watch::channel(paused);
        Self { tx: Arc::new(tx) }
    }

    pub fn is_paused(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn set_paused(&self, paused: bool) {
        self.tx.send_replace(paused);
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&self) -> bool {
        let mut now = false;
        self.tx.send_modify(|paused| {
            *paused = !*paused;
            now = *paused;
        });
        now
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}
