use shadows_adventure::consts::*;
use shadows_adventure::entities::*;

#[test]
fn enums_compare_and_default() {
    assert_eq!(Mode::default(), Mode::Easy);
    assert_ne!(Mode::Easy, Mode::Hard);
    assert_eq!(GamePhase::default(), GamePhase::NotStarted);
    assert_ne!(GamePhase::Running, GamePhase::Over);
}

#[test]
fn rect_center() {
    let r = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(r.center(), Vec2::new(60.0, 45.0));
}

#[test]
fn player_starts_on_the_ground_at_left_edge() {
    let p = Player::new();
    assert_eq!(p.pos, Vec2::new(0.0, 520.0));
    assert_eq!(p.size, Vec2::new(200.0, 200.0));
    assert!(p.on_ground());
    assert_eq!(p.anim.frame_row, PLAYER_RUN_ROW);
    assert_eq!(p.anim.max_frame, PLAYER_RUN_MAX_FRAME);
}

#[test]
fn enemy_starts_at_right_edge_on_the_ground() {
    let e = Enemy::new();
    assert_eq!(e.pos, Vec2::new(800.0, 601.0));
    assert_eq!(e.size, Vec2::new(160.0, 119.0));
    assert!(!e.marked_for_deletion);
}

#[test]
fn hazard_and_coin_carry_their_glyphs() {
    let h = FlyingHazard::at(Vec2::new(800.0, 10.0));
    assert_eq!(h.glyph, "🐲");
    assert_eq!(h.size, Vec2::splat(60.0));
    let c = Collectible::at(Vec2::ZERO);
    assert_eq!(c.glyph, "💰");
    assert_eq!(c.bounds().size, Vec2::splat(50.0));
}

#[test]
fn session_clone_is_independent() {
    let original = GameSession {
        player: Player::new(),
        background: Background::new(),
        enemies: Vec::new(),
        hazard: None,
        collectible: None,
        scheduler: shadows_adventure::spawn::SpawnScheduler::with_jitter(0.0),
        score: 0,
        mode: Mode::Easy,
        phase: GamePhase::Running,
        frame: 0,
    };
    let mut cloned = original.clone();

    cloned.player.pos.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy::new());

    assert_eq!(original.player.pos.x, 0.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
    assert!(original.is_running());
    assert!(original.is_started());
    assert!(!original.is_over());
}
