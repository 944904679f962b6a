//! Game-logic functions.
//!
//! Every update mutates the session in place. All randomness comes through
//! an injected `Rng` so callers control determinism (tests pass a seeded
//! `StdRng`).

use log::{debug, info};
use rand::Rng;

use crate::collision::{touching, within};
use crate::consts::*;
use crate::entities::{
    Background, Collectible, Enemy, FlyingHazard, GamePhase, GameSession, Mode, Player,
    SpriteAnimation,
};
use crate::input::{Command, Direction, InputState};
use crate::spawn::{coin_y, hazard_y, random_collectible, random_hazard, SpawnScheduler};

// ── Frame results ─────────────────────────────────────────────────────────────

/// What ended the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathCause {
    Enemy,
    Hazard,
}

/// Notable things that happened during one `tick`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameEvents {
    pub enemies_spawned: u32,
    pub enemies_escaped: u32,
    pub coins_collected: u32,
    pub hazard_regenerated: bool,
    /// First lethal contact of the frame, if any.
    pub fatal: Option<DeathCause>,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a session waiting on the start screen. Rolls the per-session enemy
/// jitter; a `Hard` preselection creates the coin straight away.
pub fn init_session(mode: Mode, rng: &mut impl Rng) -> GameSession {
    let mut session = GameSession {
        player: Player::new(),
        background: Background::new(),
        enemies: Vec::new(),
        hazard: None,
        collectible: None,
        scheduler: SpawnScheduler::new(rng),
        score: 0,
        mode: Mode::Easy,
        phase: GamePhase::NotStarted,
        frame: 0,
    };
    if mode == Mode::Hard {
        apply_command(&mut session, Command::SelectHard, rng);
    }
    session
}

// ── Commands ─────────────────────────────────────────────────────────────────

/// Apply a start/mode command. Returns whether it had any effect.
///
/// `Start` only works once. Mode changes are accepted until the run is
/// over; picking hard for the first time drops a coin onto the field.
pub fn apply_command(session: &mut GameSession, cmd: Command, rng: &mut impl Rng) -> bool {
    match cmd {
        Command::Start => {
            if session.phase != GamePhase::NotStarted {
                return false;
            }
            session.phase = GamePhase::Running;
            info!("game started in {:?} mode", session.mode);
            true
        }
        Command::SelectEasy | Command::SelectHard if session.is_over() => false,
        Command::SelectEasy => {
            session.mode = Mode::Easy;
            info!("mode set to easy");
            true
        }
        Command::SelectHard => {
            session.mode = Mode::Hard;
            if session.collectible.is_none() {
                session.collectible = Some(random_collectible(rng));
            }
            info!("mode set to hard");
            true
        }
    }
}

/// Flip `Running → Over`. Later calls are ignored.
pub fn end_game(session: &mut GameSession, cause: DeathCause) {
    if session.phase == GamePhase::Running {
        session.phase = GamePhase::Over;
        info!(
            "game over ({:?}) after {} frames, score {}",
            cause, session.frame, session.score
        );
    }
}

fn award(session: &mut GameSession, points: u32) {
    session.score = session.score.saturating_add(points);
}

// ── Sprite animation ─────────────────────────────────────────────────────────

impl SpriteAnimation {
    /// Step the frame timer. A frame that advances the sprite resets the
    /// timer instead of accumulating `dt`.
    pub fn advance(&mut self, dt: f32) {
        if self.frame_timer > self.frame_interval {
            self.frame_index = if self.frame_index >= self.max_frame {
                0
            } else {
                self.frame_index + 1
            };
            self.frame_timer = 0.0;
        } else {
            self.frame_timer += dt;
        }
    }

    /// Switch sprite-sheet row. The index wraps if the new row is shorter.
    pub fn set_pose(&mut self, row: u32, max_frame: u32) {
        self.frame_row = row;
        self.max_frame = max_frame;
        if self.frame_index > max_frame {
            self.frame_index = 0;
        }
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// The player's reaction to the held keys for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    MoveRight,
    MoveLeft,
    Jump,
    Idle,
}

/// Control priority. The first row whose key is held (and whose ground
/// requirement holds) wins; only one control fires per frame. Jumping keeps
/// the previous horizontal speed.
const CONTROL_TABLE: &[(Direction, bool, Control)] = &[
    (Direction::Right, false, Control::MoveRight),
    (Direction::Left, false, Control::MoveLeft),
    (Direction::Up, true, Control::Jump),
];

pub fn decide_control(input: &InputState, on_ground: bool) -> Control {
    CONTROL_TABLE
        .iter()
        .find(|(dir, needs_ground, _)| input.is_held(*dir) && (on_ground || !needs_ground))
        .map(|&(_, _, control)| control)
        .unwrap_or(Control::Idle)
}

/// Contacts the player made at the start of its update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerContact {
    pub lethal: bool,
    pub collected: bool,
}

impl Player {
    /// Advance one frame. Contacts are measured against the positions from
    /// before the move; the caller applies their consequences.
    pub fn update(
        &mut self,
        input: &InputState,
        dt: f32,
        enemies: &[Enemy],
        collectible: Option<&Collectible>,
    ) -> PlayerContact {
        let me = self.bounds();
        let contact = PlayerContact {
            lethal: enemies.iter().any(|e| touching(&e.bounds(), &me)),
            collected: collectible
                .is_some_and(|c| within(&c.bounds(), &me, COIN_PICKUP_RADIUS)),
        };

        self.anim.advance(dt);

        match decide_control(input, self.on_ground()) {
            Control::MoveRight => self.speed = PLAYER_SPEED,
            Control::MoveLeft => self.speed = -PLAYER_SPEED,
            Control::Jump => self.vy -= PLAYER_JUMP_IMPULSE,
            Control::Idle => self.speed = 0.0,
        }

        self.pos.x = (self.pos.x + self.speed).clamp(0.0, WORLD_WIDTH - self.size.x);

        self.pos.y += self.vy;
        // Ceiling
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vy = self.vy.max(0.0);
        }
        if self.on_ground() {
            self.vy = 0.0;
            self.anim.set_pose(PLAYER_RUN_ROW, PLAYER_RUN_MAX_FRAME);
        } else {
            self.vy += self.weight;
            self.anim.set_pose(PLAYER_JUMP_ROW, PLAYER_JUMP_MAX_FRAME);
        }
        let ground = self.ground_y();
        if self.pos.y > ground {
            self.pos.y = ground;
        }

        contact
    }
}

// ── Enemy ────────────────────────────────────────────────────────────────────

impl Enemy {
    /// Move left one step. Returns true on the single frame the enemy has
    /// fully cleared the left edge and gets marked for deletion.
    pub fn update(&mut self, dt: f32) -> bool {
        self.anim.advance(dt);
        self.pos.x -= self.speed;
        if !self.marked_for_deletion && self.pos.x < -self.size.x {
            self.marked_for_deletion = true;
            return true;
        }
        false
    }
}

// ── Background ───────────────────────────────────────────────────────────────

impl Background {
    pub fn update(&mut self) {
        self.pos.x -= self.speed;
        if self.pos.x < -self.size.x {
            self.pos.x = 0.0;
        }
    }
}

// ── Flying hazard & collectible ──────────────────────────────────────────────

impl FlyingHazard {
    /// Move left; on passing the left edge re-enter from the right at a new
    /// height.
    pub fn update(&mut self, rng: &mut impl Rng) {
        self.pos.x -= self.speed;
        if self.pos.x < 0.0 {
            self.pos.x = WORLD_WIDTH;
            self.pos.y = hazard_y(rng);
        }
    }
}

impl Collectible {
    /// Move left; on passing the left edge re-enter from the right at a new
    /// height.
    pub fn update(&mut self, rng: &mut impl Rng) {
        self.pos.x -= self.speed;
        if self.pos.x < 0.0 {
            self.pos.x = WORLD_WIDTH;
            self.pos.y = coin_y(rng);
        }
    }

    /// Jump to a brand new random spot after being picked up.
    pub fn relocate(&mut self, rng: &mut impl Rng) {
        self.pos = random_collectible(rng).pos;
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame of `dt` milliseconds.
///
/// Does nothing unless the session is running. A lethal contact ends the
/// run but the rest of the frame still completes, so scoring from the same
/// frame is kept.
pub fn tick(
    session: &mut GameSession,
    input: &InputState,
    dt: f32,
    rng: &mut impl Rng,
) -> FrameEvents {
    let mut events = FrameEvents::default();
    if !session.is_running() {
        return events;
    }
    session.frame += 1;
    let hard = session.is_hard();

    // ── 1. Scroll background ─────────────────────────────────────────────────
    session.background.update();

    // ── 2. Player, with enemy and coin contact ───────────────────────────────
    let coin = if hard { session.collectible.as_ref() } else { None };
    let contact = session.player.update(input, dt, &session.enemies, coin);
    if contact.lethal {
        events.fatal = events.fatal.or(Some(DeathCause::Enemy));
        end_game(session, DeathCause::Enemy);
    }
    if contact.collected {
        award(session, COIN_POINTS);
        if let Some(coin) = session.collectible.as_mut() {
            coin.relocate(rng);
        }
        events.coins_collected += 1;
        debug!("coin collected, score {}", session.score);
    }

    // ── 3. Coin drift (hard only) ────────────────────────────────────────────
    if hard {
        if let Some(coin) = session.collectible.as_mut() {
            coin.update(rng);
        }
    }

    // ── 4. Hazard: timer always runs, movement and contact hard only ─────────
    if session.scheduler.hazard_due(dt) {
        session.hazard = Some(random_hazard(rng));
        events.hazard_regenerated = true;
        debug!("hazard regenerated at frame {}", session.frame);
    }
    let mut hazard_hit = false;
    if hard {
        if let Some(hazard) = session.hazard.as_mut() {
            hazard.update(rng);
            hazard_hit = within(
                &hazard.bounds(),
                &session.player.bounds(),
                HAZARD_CONTACT_RADIUS,
            );
        }
    }
    if hazard_hit {
        events.fatal = events.fatal.or(Some(DeathCause::Hazard));
        end_game(session, DeathCause::Hazard);
    }

    // ── 5. Enemies: spawn, move, score escapes, purge ────────────────────────
    if session.scheduler.enemy_due(dt) {
        session.enemies.push(Enemy::new());
        events.enemies_spawned += 1;
        debug!("enemy spawned ({} live)", session.enemies.len());
    }
    for enemy in session.enemies.iter_mut() {
        if enemy.update(dt) {
            events.enemies_escaped += 1;
        }
    }
    session.enemies.retain(|e| !e.marked_for_deletion);
    if events.enemies_escaped > 0 {
        award(session, events.enemies_escaped * ENEMY_ESCAPE_POINTS);
        debug!("{} enemy escaped, score {}", events.enemies_escaped, session.score);
    }

    events
}
