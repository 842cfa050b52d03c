// ui.rs - eframe front end: draws the board and forwards window events

use egui::{Align2, FontId, Key, Rect, Stroke, Vec2};
use tokio::runtime::Runtime;
use tracing::info;

use crate::animation::{AnimationLoop, StopHandle};
use crate::config::Config;
use crate::grid::Geometry;
use crate::input::{EventHandler, InputController};
use crate::state::{PauseSwitch, SharedBoard};

pub struct LifeApp {
    board: SharedBoard,
    input: InputController<egui::Context>,
    config: Config,
    last_size: Option<Vec2>,
    stop: StopHandle,
    _runtime: Runtime, // must outlive the animation task
}

impl LifeApp {
    /// Build the app and start the animation loop on `runtime`.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config, runtime: Runtime) -> Self {
        let ctx = cc.egui_ctx.clone();
        let board = SharedBoard::new(Geometry::from_config(&config));
        let pause = PauseSwitch::default();

        let animation = AnimationLoop::new(board.clone(), &pause, ctx.clone(), &config);
        let stop = animation.stop_handle();
        runtime.spawn(animation.run());

        let input = InputController::new(board.clone(), pause, ctx, &config);

        Self {
            board,
            input,
            config,
            last_size: None,
            stop,
            _runtime: runtime,
        }
    }

    fn draw(&self, painter: &egui::Painter, area: Rect) {
        let offset = area.min.to_vec2();
        let view = self.board.lock();
        let geometry = view.geometry;
        let (width, height) = view.board.dimensions();

        // Grid lines: fill the whole inner area, squares are drawn over it
        painter.rect_filled(
            geometry.inner_area_rect(width, height).translate(offset),
            0.0,
            self.config.square_border_color,
        );
        painter.rect_stroke(
            geometry.outer_border_rect(width, height).translate(offset),
            0.0,
            Stroke::new(geometry.outer_border, self.config.outer_border_color),
        );

        for ((x, y), rect) in view.rects.iter() {
            let color = if view.board.get(x, y).is_alive() {
                self.config.filled_color
            } else {
                self.config.empty_color
            };
            painter.rect_filled(rect.translate(offset), 0.0, color);
        }

        let status = format!(
            "gen {}  pop {}{}",
            view.board.generation(),
            view.board.population(),
            if self.input.is_paused() { "  [paused]" } else { "" }
        );
        drop(view);

        painter.text(
            area.left_bottom() + Vec2::new(geometry.outer_space, -2.0),
            Align2::LEFT_BOTTOM,
            status,
            FontId::monospace(11.0),
            egui::Color32::DARK_GRAY,
        );
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let keys: Vec<Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        ..
                    } => Some(*key),
                    _ => None,
                })
                .collect()
        });
        for key in keys {
            self.input.on_key(key);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.config.background_color))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click());
                let area = response.rect;

                if self.last_size != Some(area.size()) {
                    self.last_size = Some(area.size());
                    self.input.on_resize(area.size());
                }

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        self.input.on_click(pos - area.min.to_vec2());
                    }
                }

                self.draw(&painter, area);
            });
    }
}

impl Drop for LifeApp {
    fn drop(&mut self) {
        info!("window closed");
        self.stop.stop();
    }
}
