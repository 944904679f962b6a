mod common;

use common::{running_session, seeded_rng, RecordingSurface};
use shadows_adventure::compute::{apply_command, init_session};
use shadows_adventure::consts::*;
use shadows_adventure::entities::*;
use shadows_adventure::frame::*;
use shadows_adventure::input::{Command, InputState};

#[test]
fn first_frame_has_zero_delta() {
    let mut d = FrameDriver::new();
    assert_eq!(d.advance(12_345.0), 0.0);
    assert_eq!(d.advance(12_361.0), 16.0);
}

#[test]
fn backwards_and_garbage_timestamps_give_zero() {
    let mut d = FrameDriver::new();
    d.advance(100.0);
    assert_eq!(d.advance(90.0), 0.0);
    assert_eq!(d.advance(f64::NAN), 0.0);
    assert_eq!(d.advance(106.0), 16.0);
}

#[test]
fn long_stalls_are_capped() {
    let mut d = FrameDriver::new();
    d.advance(0.0);
    assert_eq!(d.advance(60_000.0), MAX_FRAME_DELTA_MS);
}

#[test]
fn waits_until_started() {
    let mut rng = seeded_rng();
    let mut s = init_session(Mode::Easy, &mut rng);
    let mut d = FrameDriver::new();
    let mut surface = RecordingSurface::default();
    let outcome = d
        .run_frame(&mut s, &InputState::new(), 0.0, &mut rng, &mut surface)
        .unwrap();
    assert_eq!(outcome, FrameOutcome::Waiting);
    assert!(surface.calls.is_empty());
    assert_eq!(s.frame, 0);
}

#[test]
fn running_frames_step_and_draw() {
    let mut s = running_session(Mode::Easy);
    let mut rng = seeded_rng();
    let mut d = FrameDriver::new();
    let mut surface = RecordingSurface::default();
    for i in 0..3 {
        let outcome = d
            .run_frame(&mut s, &InputState::new(), i as f64 * 16.0, &mut rng, &mut surface)
            .unwrap();
        assert_eq!(outcome, FrameOutcome::Continue);
    }
    assert_eq!(s.frame, 3);
    assert!(!surface.calls.is_empty());
    assert!(d.last_events().fatal.is_none());
}

#[test]
fn halts_after_drawing_the_final_frame() {
    let mut s = running_session(Mode::Easy);
    let mut enemy = Enemy::new();
    enemy.pos.x = 0.0;
    s.enemies.push(enemy);
    let mut rng = seeded_rng();
    let mut d = FrameDriver::new();
    let mut surface = RecordingSurface::default();

    let outcome = d
        .run_frame(&mut s, &InputState::new(), 0.0, &mut rng, &mut surface)
        .unwrap();
    assert_eq!(outcome, FrameOutcome::Halted);
    assert!(d.is_halted());
    assert!(surface.texts().contains(&GAME_OVER_TEXT));

    let drawn = surface.calls.len();
    let outcome = d
        .run_frame(&mut s, &InputState::new(), 16.0, &mut rng, &mut surface)
        .unwrap();
    assert_eq!(outcome, FrameOutcome::Halted);
    assert_eq!(surface.calls.len(), drawn);
    assert_eq!(s.frame, 1);
}

#[test]
fn frame_count_lives_on_the_session() {
    let mut rng = seeded_rng();
    let mut s = init_session(Mode::Easy, &mut rng);
    let mut d = FrameDriver::new();
    let mut surface = RecordingSurface::default();
    for i in 0..2 {
        d.run_frame(&mut s, &InputState::new(), i as f64 * 16.0, &mut rng, &mut surface)
            .unwrap();
    }
    assert_eq!(s.frame, 0);

    apply_command(&mut s, Command::Start, &mut rng);
    let outcome = d
        .run_frame(&mut s, &InputState::new(), 32.0, &mut rng, &mut surface)
        .unwrap();
    assert_eq!(outcome, FrameOutcome::Continue);
    assert_eq!(s.frame, 1);
}
