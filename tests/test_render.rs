mod common;

use common::{running_session, Call, RecordingSurface};
use shadows_adventure::compute::end_game;
use shadows_adventure::compute::DeathCause;
use shadows_adventure::consts::*;
use shadows_adventure::entities::*;
use shadows_adventure::render::*;

#[test]
fn frame_draw_order() {
    let mut s = running_session(Mode::Easy);
    s.enemies.push(Enemy::new());
    let mut surface = RecordingSurface::default();
    render(&s, &mut surface).unwrap();
    assert_eq!(
        surface.images(),
        vec![ImageId::Background, ImageId::Background, ImageId::Player, ImageId::Enemy]
    );
    assert_eq!(surface.texts(), vec!["Score: 0", "Score: 0"]);
}

#[test]
fn background_second_tile_overlaps_by_speed() {
    let mut s = running_session(Mode::Easy);
    s.background.pos.x = -100.0;
    let mut surface = RecordingSurface::default();
    s.background.draw(&mut surface).unwrap();
    let dst_x: Vec<f32> = surface
        .calls
        .iter()
        .map(|c| match c {
            Call::Image(_, _, dst) => dst.pos.x,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(dst_x, vec![-100.0, -100.0 + 2400.0 - 7.0]);
}

#[test]
fn player_blits_current_animation_cell() {
    let mut p = Player::new();
    p.anim.frame_index = 3;
    p.anim.frame_row = PLAYER_JUMP_ROW;
    let mut surface = RecordingSurface::default();
    p.draw(&mut surface).unwrap();
    assert_eq!(
        surface.calls,
        vec![Call::Image(
            ImageId::Player,
            Rect::new(600.0, 200.0, 200.0, 200.0),
            Rect::new(0.0, 520.0, 200.0, 200.0),
        )]
    );
}

#[test]
fn enemy_blits_from_first_row() {
    let mut e = Enemy::new();
    e.anim.frame_index = 2;
    let mut surface = RecordingSurface::default();
    e.draw(&mut surface).unwrap();
    match &surface.calls[0] {
        Call::Image(ImageId::Enemy, src, _) => {
            assert_eq!(*src, Rect::new(320.0, 0.0, 160.0, 119.0))
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[test]
fn score_has_black_shadow_then_white_text() {
    let mut s = running_session(Mode::Easy);
    s.score = 7;
    let mut surface = RecordingSurface::default();
    draw_status(&s, &mut surface).unwrap();
    assert_eq!(
        surface.calls,
        vec![
            Call::Text(
                "Score: 7".into(),
                Vec2::new(20.0, 50.0),
                TextStyle::new(STATUS_FONT_PX, Fill::Black)
            ),
            Call::Text(
                "Score: 7".into(),
                Vec2::new(22.0, 52.0),
                TextStyle::new(STATUS_FONT_PX, Fill::White)
            ),
        ]
    );
}

#[test]
fn game_over_line_is_centered() {
    let mut s = running_session(Mode::Easy);
    end_game(&mut s, DeathCause::Enemy);
    let mut surface = RecordingSurface::default();
    draw_status(&s, &mut surface).unwrap();
    let last = surface.calls.last().cloned();
    assert_eq!(
        last,
        Some(Call::Text(
            GAME_OVER_TEXT.into(),
            Vec2::new(402.0, 202.0),
            TextStyle::new(STATUS_FONT_PX, Fill::White).centered()
        ))
    );
}

#[test]
fn hard_mode_draws_coin_and_hazard() {
    let mut s = running_session(Mode::Hard);
    s.hazard = Some(FlyingHazard::at(Vec2::new(500.0, 50.0)));
    let mut surface = RecordingSurface::default();
    render(&s, &mut surface).unwrap();
    let texts = surface.texts();
    assert_eq!(texts[0], COIN_GLYPH);
    assert_eq!(texts[1], HAZARD_GLYPH);
}

#[test]
fn easy_mode_hides_existing_hazard_and_coin() {
    let mut s = running_session(Mode::Easy);
    s.hazard = Some(FlyingHazard::at(Vec2::new(500.0, 50.0)));
    s.collectible = Some(Collectible::at(Vec2::new(300.0, 50.0)));
    let mut surface = RecordingSurface::default();
    render(&s, &mut surface).unwrap();
    assert!(!surface.texts().contains(&HAZARD_GLYPH));
    assert!(!surface.texts().contains(&COIN_GLYPH));
}
