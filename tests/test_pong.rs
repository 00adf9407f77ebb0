use glam::Vec2;

use retro_arcade::engine::input::{InputEvent, InputSnapshot, Key};
use retro_arcade::engine::phase::Phase;
use retro_arcade::engine::rng::{seeded, GameRng};
use retro_arcade::games::pong::compute::*;
use retro_arcade::games::pong::entities::*;

const FIELD: Vec2 = Vec2::new(800.0, 600.0);

fn seeded_rng() -> GameRng {
    seeded(42)
}

fn make_state(rng: &mut GameRng) -> PongGame {
    init_state(FIELD, rng)
}

fn press(tick: u64, key: Key) -> InputSnapshot {
    InputSnapshot::empty(tick).with_event(InputEvent::KeyDown(key))
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_layout() {
    let s = make_state(&mut seeded_rng());
    assert_eq!(s.phase.phase(), Phase::Playing);
    assert_eq!(s.player.rect.x, PADDLE_MARGIN);
    assert_eq!(s.ai.rect.right(), FIELD.x - PADDLE_MARGIN);
    assert_eq!(s.ball.pos, FIELD / 2.0);
    assert!(s.ball.vel.x > 0.0); // first serve heads for the AI
    assert!((s.ball.vel.length() - SERVE_SPEED).abs() < 1e-3);
    assert_eq!((s.player_score, s.ai_score), (0, 0));
}

#[test]
fn paddles_start_on_whole_pixel_halves() {
    // 720 / 2 - 185 / 2 in integer halves
    let p = Paddle::new(Side::Player, DEFAULT_FIELD);
    assert_eq!(p.rect.y, 268.0);
    assert_eq!(Paddle::new(Side::Ai, FIELD).rect.y, 208.0);
}

#[test]
fn serve_angle_is_bounded() {
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let ball = Ball::serve(FIELD, Side::Player, &mut rng);
        assert!(ball.vel.x < 0.0);
        let angle = (ball.vel.y / ball.vel.x.abs()).atan();
        assert!(angle.abs() <= SERVE_ANGLE + 1e-4);
    }
}

// ── ball ──────────────────────────────────────────────────────────────────────

#[test]
fn ball_from_centre_scores_on_tick_26() {
    // (400 - 10) / 15 = 26
    let mut ball = Ball::new(FIELD / 2.0, Vec2::new(15.0, 0.0));
    let mut scored = None;
    for t in 1..=40 {
        ball.advance(FIELD);
        if let Some(side) = ball.goal(FIELD) {
            scored = Some((t, side));
            break;
        }
    }
    assert_eq!(scored, Some((26, Side::Player)));
}

#[test]
fn ball_leaving_the_left_scores_for_ai() {
    let ball = Ball::new(Vec2::new(BALL_RADIUS, 300.0), Vec2::new(-5.0, 0.0));
    assert_eq!(ball.goal(FIELD), Some(Side::Ai));
}

#[test]
fn ball_reflects_off_top_and_bottom() {
    let mut ball = Ball::new(Vec2::new(400.0, 15.0), Vec2::new(0.0, -10.0));
    ball.advance(FIELD);
    assert_eq!(ball.pos.y, BALL_RADIUS);
    assert_eq!(ball.vel.y, 10.0);

    let mut ball = Ball::new(Vec2::new(400.0, 585.0), Vec2::new(0.0, 10.0));
    ball.advance(FIELD);
    assert_eq!(ball.pos.y, FIELD.y - BALL_RADIUS);
    assert_eq!(ball.vel.y, -10.0);
}

#[test]
fn trail_keeps_last_ten_positions() {
    let mut ball = Ball::new(Vec2::new(100.0, 300.0), Vec2::new(1.0, 0.0));
    for _ in 0..25 {
        ball.advance(FIELD);
    }
    assert_eq!(ball.trail.len(), TRAIL_LEN);
    assert_eq!(ball.trail.back(), Some(&Vec2::new(124.0, 300.0)));
}

// ── paddles ───────────────────────────────────────────────────────────────────

#[test]
fn player_paddle_is_clamped() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    for t in 0..20 {
        update(&mut s, &InputSnapshot::empty(t).with_held(Key::Up));
    }
    assert_eq!(s.player.rect.top(), 0.0);
    assert_eq!(s.player.vy, -PADDLE_SPEED);
}

#[test]
fn released_paddle_glides_to_a_stop() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    update(&mut s, &InputSnapshot::empty(0).with_held(Key::Down));
    update(&mut s, &InputSnapshot::empty(1));
    assert!((s.player.vy - PADDLE_SPEED * PADDLE_DRAG).abs() < 1e-4);
}

#[test]
fn ai_chases_at_limited_speed() {
    let mut ai = Paddle::new(Side::Ai, FIELD);
    let start = ai.rect.center().y;
    track_ball(&mut ai, 0.0, FIELD);
    assert!((start - ai.rect.center().y - PADDLE_SPEED * AI_SPEED_FACTOR).abs() < 1e-3);

    // Close enough: lands exactly on target.
    let mut ai = Paddle::new(Side::Ai, FIELD);
    let target = ai.rect.center().y + 5.0;
    track_ball(&mut ai, target, FIELD);
    assert_eq!(ai.rect.center().y, target);
}

#[test]
fn ai_follows_previous_ball_position() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    s.ball = Ball::new(Vec2::new(400.0, 290.0), Vec2::new(5.0, 40.0));
    let target = s.ball.pos.y;
    let ai_center = s.ai.rect.center().y;
    update(&mut s, &InputSnapshot::empty(0));
    let moved = s.ai.rect.center().y - ai_center;
    assert!((moved - (target - ai_center)).abs() < 1e-3);
}

// ── collisions ────────────────────────────────────────────────────────────────

#[test]
fn centre_hit_returns_flat_and_faster() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    let y = s.player.rect.center().y;
    s.ball = Ball::new(Vec2::new(s.player.rect.right() + 5.0, y), Vec2::new(-25.0, 0.0));
    s.ball.speed = SERVE_SPEED;

    collide(&mut s);
    assert_eq!(s.ball.pos.x, s.player.rect.right() + BALL_RADIUS + 1.0);
    assert!(s.ball.vel.x > 0.0);
    assert!(s.ball.vel.y.abs() < 1e-4);
    assert_eq!(s.ball.speed, SERVE_SPEED + SPEED_UP);
}

#[test]
fn edge_hit_returns_steeply() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    let top = s.ai.rect.top();
    s.ball = Ball::new(Vec2::new(s.ai.rect.left(), top), Vec2::new(20.0, 0.0));

    collide(&mut s);
    assert!(s.ball.vel.x < 0.0);
    assert!(s.ball.vel.y < 0.0);
    let angle = (s.ball.vel.y / s.ball.vel.x).abs().atan();
    assert!((angle - MAX_BOUNCE_ANGLE).abs() < 1e-3);
    assert_eq!(s.ball.pos.x, s.ai.rect.left() - BALL_RADIUS - 1.0);
}

#[test]
fn ball_speed_is_capped() {
    let mut ball = Ball::new(Vec2::new(80.0, 300.0), Vec2::new(-99.0, 0.0));
    ball.speed = 99.0;
    let paddle = Paddle::new(Side::Player, FIELD);
    bounce(&mut ball, &paddle, Side::Player);
    assert_eq!(ball.speed, MAX_BALL_SPEED);
}

#[test]
fn point_holds_and_reserves_toward_scorer() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    s.ball = Ball::new(Vec2::new(770.0, 300.0), Vec2::new(15.0, 0.0));

    assert_eq!(tick(&mut s, &InputSnapshot::empty(0), &mut rng), None);
    let hold = tick(&mut s, &InputSnapshot::empty(1), &mut rng);
    assert_eq!(hold, Some(POINT_HOLD));
    assert_eq!((s.player_score, s.ai_score), (1, 0));
    assert_eq!(s.ball.pos, FIELD / 2.0);
    assert!(s.ball.in_play);
    assert!(s.ball.vel.x < 0.0);
}

#[test]
fn goal_is_scored_once_per_tick() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    s.ball = Ball::new(Vec2::new(5.0, 300.0), Vec2::new(-15.0, 0.0));
    s.player.rect.y = 0.0;

    assert_eq!(collide(&mut s), Some(POINT_HOLD));
    assert_eq!(collide(&mut s), None);
    assert_eq!(s.ai_score, 1);
    assert_eq!(s.pending_serve, Some(Side::Ai));
}

#[test]
fn seventh_point_ends_the_match() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    s.ai_score = WIN_SCORE - 1;
    s.player.rect.y = 0.0;
    s.ball = Ball::new(Vec2::new(5.0, 500.0), Vec2::new(-15.0, 0.0));

    assert_eq!(collide(&mut s), Some(MATCH_HOLD));
    assert_eq!(s.phase.phase(), Phase::RoundOver);
    assert_eq!(s.winner, Some(Side::Ai));
    assert_eq!(s.pending_serve, None);
}

// ── phases ────────────────────────────────────────────────────────────────────

#[test]
fn pause_freezes_the_ball() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    tick(&mut s, &press(0, Key::Char('p')), &mut rng);
    assert_eq!(s.phase.phase(), Phase::Paused);

    let frozen = s.ball.pos;
    for t in 1..30 {
        assert_eq!(tick(&mut s, &InputSnapshot::empty(t), &mut rng), None);
    }
    assert_eq!(s.ball.pos, frozen);

    tick(&mut s, &press(30, Key::Char('p')), &mut rng);
    assert_eq!(s.phase.phase(), Phase::Playing);
    assert_ne!(s.ball.pos, frozen);
}

#[test]
fn enter_does_nothing_mid_match() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    s.player_score = 3;
    tick(&mut s, &press(0, Key::Enter), &mut rng);
    assert_eq!(s.phase.phase(), Phase::Playing);
    assert_eq!(s.player_score, 3);
}

#[test]
fn enter_restarts_a_finished_match() {
    let mut rng = seeded_rng();
    let mut s = make_state(&mut rng);
    s.player_score = WIN_SCORE - 1;
    s.ball = Ball::new(Vec2::new(795.0, 100.0), Vec2::new(15.0, 0.0));
    s.ai.rect.y = FIELD.y - PADDLE_SIZE.y;
    collide(&mut s);
    assert_eq!(s.phase.phase(), Phase::RoundOver);

    tick(&mut s, &press(1, Key::Enter), &mut rng);
    assert_eq!(s.phase.phase(), Phase::Playing);
    assert_eq!((s.player_score, s.ai_score), (0, 0));
    assert_eq!(s.winner, None);
    assert_eq!(s.player.rect, Paddle::new(Side::Player, FIELD).rect);
}

// ── determinism ───────────────────────────────────────────────────────────────

#[test]
fn same_seed_same_rally() {
    let script: Vec<InputSnapshot> = (0..900)
        .map(|t| {
            let key = if (t / 30) % 2 == 0 { Key::Up } else { Key::Down };
            InputSnapshot::empty(t).with_held(key)
        })
        .collect();

    let run = || {
        let mut rng = seeded(3);
        let mut s = make_state(&mut rng);
        for input in &script {
            tick(&mut s, input, &mut rng);
        }
        (s.ball, s.player.rect, s.ai.rect, s.player_score, s.ai_score)
    };
    assert_eq!(run(), run());
}
