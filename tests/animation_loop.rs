// animation_loop.rs - Loop tests on tokio's paused clock so ticks land on exact times

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use egui::{Key, Vec2};
use pretty_assertions::assert_eq;
use tokio::time::sleep;

use conway_live::{
    AnimationLoop, Board, Cell, Config, EventHandler, Geometry, InputController, PauseSwitch,
    Redraw, SharedBoard,
};

#[derive(Default)]
struct Counter(AtomicUsize);

impl Redraw for Counter {
    fn request_redraw(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

impl Counter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

struct Harness {
    board: SharedBoard,
    pause: PauseSwitch,
    input: InputController<Arc<Counter>>,
    redraws: Arc<Counter>,
}

/// 5x5 board holding a horizontal blinker in the middle row.
fn harness(paused: bool) -> (Harness, AnimationLoop<Arc<Counter>>) {
    let config = Config::default();
    let board = SharedBoard::new(Geometry::from_config(&config));
    let pause = PauseSwitch::new(paused);
    let redraws = Arc::new(Counter::default());

    let input = InputController::new(board.clone(), pause.clone(), redraws.clone(), &config);
    input.on_resize(Vec2::splat(130.0));
    for x in 1..4 {
        board.lock().board.set(x, 2, Cell::Alive);
    }

    let anim = AnimationLoop::new(board.clone(), &pause, redraws.clone(), &config);
    (
        Harness {
            board,
            pause,
            input,
            redraws,
        },
        anim,
    )
}

fn alive(board: &Board) -> Vec<(usize, usize)> {
    board.iter_alive().collect()
}

const HORIZONTAL: [(usize, usize); 3] = [(1, 2), (2, 2), (3, 2)];
const VERTICAL: [(usize, usize); 3] = [(2, 1), (2, 2), (2, 3)];

#[tokio::test(start_paused = true)]
async fn ticks_once_per_period() {
    let (h, anim) = harness(false);
    let stop = anim.stop_handle();
    let task = tokio::spawn(anim.run());

    // Ticks at 0, 1000 and 2000 ms
    sleep(Duration::from_millis(2500)).await;
    let snap = h.board.snapshot();
    assert_eq!(snap.generation(), 3);
    assert_eq!(alive(&snap), VERTICAL.to_vec());
    // One redraw for the initial resize, one per tick
    assert_eq!(h.redraws.count(), 4);

    stop.stop();
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn pause_freezes_board_and_resume_continues() {
    let (h, anim) = harness(false);
    let stop = anim.stop_handle();
    let task = tokio::spawn(anim.run());

    sleep(Duration::from_millis(2500)).await;
    h.input.on_key(Key::P);
    assert!(h.pause.is_paused());
    let frozen = h.board.snapshot();
    assert_eq!(frozen.generation(), 3);

    // Five periods pass while paused
    sleep(Duration::from_millis(5000)).await;
    assert_eq!(h.board.snapshot(), frozen);

    // Resume ticks straight away, then once per period, with no catch-up
    h.input.on_key(Key::P);
    sleep(Duration::from_millis(1500)).await;
    let snap = h.board.snapshot();
    assert_eq!(snap.generation(), 5);
    assert_eq!(alive(&snap), VERTICAL.to_vec());

    sleep(Duration::from_millis(1000)).await;
    let snap = h.board.snapshot();
    assert_eq!(snap.generation(), 6);
    assert_eq!(alive(&snap), HORIZONTAL.to_vec());

    stop.stop();
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn starting_paused_never_ticks() {
    let (h, anim) = harness(true);
    let stop = anim.stop_handle();
    let task = tokio::spawn(anim.run());

    sleep(Duration::from_millis(10_000)).await;
    let snap = h.board.snapshot();
    assert_eq!(snap.generation(), 0);
    assert_eq!(alive(&snap), HORIZONTAL.to_vec());

    stop.stop();
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn loop_ends_when_pause_switch_is_gone() {
    let (h, anim) = harness(true);
    let task = tokio::spawn(anim.run());
    sleep(Duration::from_millis(100)).await;

    drop(h);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn resize_restarts_from_an_empty_board() {
    let (h, anim) = harness(false);
    let stop = anim.stop_handle();
    let task = tokio::spawn(anim.run());

    sleep(Duration::from_millis(1500)).await;
    assert_eq!(h.board.snapshot().generation(), 2);

    h.input.on_resize(Vec2::new(200.0, 150.0));
    let snap = h.board.snapshot();
    assert_eq!(snap.dimensions(), (9, 6));
    assert_eq!(snap.generation(), 0);

    // Next tick at 2000 ms runs on the new, empty board
    sleep(Duration::from_millis(1000)).await;
    let snap = h.board.snapshot();
    assert_eq!(snap.dimensions(), (9, 6));
    assert_eq!(snap.generation(), 1);
    assert_eq!(snap.population(), 0);

    stop.stop();
    task.await.unwrap();
}

#[test]
fn stale_generation_is_discarded_after_resize() {
    let (h, _anim) = harness(false);
    let before = h.board.snapshot();
    let next = conway_live::engine::step(&before);

    h.input.on_resize(Vec2::splat(130.0));
    assert!(!h.board.lock().board.replace_all(next));
    assert_eq!(h.board.snapshot().population(), 0);
}

#[test]
fn click_between_step_and_replace_is_kept() {
    let (h, _anim) = harness(false);
    let before = h.board.snapshot();
    let next = conway_live::engine::step(&before);

    h.input.on_click(Geometry::default().cell_rect(0, 0).center());
    assert!(!h.board.lock().board.replace_all(next));

    let snap = h.board.snapshot();
    assert_eq!(snap.get(0, 0), Cell::Alive);
    assert_eq!(snap.population(), 4);
    assert_eq!(snap.generation(), 0);
}

#[test]
fn clear_between_step_and_replace_is_kept() {
    let (h, _anim) = harness(false);
    let next = conway_live::engine::step(&h.board.snapshot());

    h.input.on_key(Key::C);
    assert!(!h.board.lock().board.replace_all(next));

    let snap = h.board.snapshot();
    assert_eq!(snap.population(), 0);
    assert_eq!(snap.generation(), 0);
}

#[test]
fn tick_after_an_edit_uses_the_edited_board() {
    let (h, anim) = harness(false);
    h.input.on_key(Key::C);
    h.input.on_key(Key::Num5); // block

    assert!(anim.tick());
    let snap = h.board.snapshot();
    assert_eq!(snap.population(), 4);
    assert_eq!(snap.generation(), 1);
}
