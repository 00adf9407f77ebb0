use retro_arcade::engine::input::{InputEvent, InputSnapshot, Key};
use retro_arcade::engine::phase::Phase;
use retro_arcade::engine::rng::{seeded, GameRng};
use retro_arcade::games::flappy::compute::*;
use retro_arcade::games::flappy::entities::*;

fn seeded_rng() -> GameRng {
    seeded(42)
}

fn idle(tick: u64) -> InputSnapshot {
    InputSnapshot::empty(tick)
}

fn click(tick: u64) -> InputSnapshot {
    InputSnapshot::empty(tick).with_event(InputEvent::MouseDown)
}

/// A game that has just started its round, with no pipe on the field yet.
fn playing_state(rng: &mut GameRng) -> FlappyGame {
    let mut s = init_state(rng);
    start_round(&mut s, rng);
    s
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_starts_on_title_screen() {
    let s = init_state(&mut seeded_rng());
    assert_eq!(s.phase.phase(), Phase::Attract);
    assert!(s.bird.alive);
    assert_eq!(s.bird.rect.y, rest_y());
    assert_eq!(rest_y(), 204.0); // ⌊409.6⌋ / 2
    assert!(s.pipes.is_empty());
    assert_eq!(s.score, 0);
    assert_eq!(s.speed, 0.0);
}

#[test]
fn attract_bobs_without_spawning() {
    let mut rng = seeded_rng();
    let mut s = init_state(&mut rng);
    for t in 0..200 {
        tick(&mut s, &idle(t), &mut rng);
        assert!((s.bird.rect.y - rest_y()).abs() <= BOB_LIMIT + 1.0);
    }
    assert_eq!(s.phase.phase(), Phase::Attract);
    assert!(s.pipes.is_empty());
}

// ── start ─────────────────────────────────────────────────────────────────────

#[test]
fn click_starts_round_and_spawns_first_pipe() {
    let mut rng = seeded_rng();
    let mut s = init_state(&mut rng);
    tick(&mut s, &click(0), &mut rng);
    assert_eq!(s.phase.phase(), Phase::Playing);
    assert_eq!(s.speed, SCROLL_SPEED);
    assert_eq!(s.pipes.len(), 1);
}

#[test]
fn space_up_and_enter_also_start() {
    for key in [Key::Space, Key::Up, Key::Enter] {
        let mut rng = seeded_rng();
        let mut s = init_state(&mut rng);
        let input = InputSnapshot::empty(0).with_event(InputEvent::KeyDown(key));
        tick(&mut s, &input, &mut rng);
        assert_eq!(s.phase.phase(), Phase::Playing, "{key:?}");
    }
}

// ── flap & gravity ────────────────────────────────────────────────────────────

#[test]
fn flap_sets_upward_velocity() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    tick(&mut s, &click(1), &mut rng);
    // Flap sets -6, then gravity adds 0.3 in the same tick.
    assert!((s.bird.vel - (FLAP_VELOCITY + GRAVITY)).abs() < 1e-5);
    // -5.7 moves five whole pixels.
    assert_eq!(s.bird.rect.y, rest_y() - 5.0);
}

#[test]
fn bird_moves_in_whole_pixels() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    let mut heights = Vec::new();
    for _ in 0..5 {
        update(&mut s);
        heights.push(s.bird.rect.y - rest_y());
    }
    // vel 0.3, 0.6, 0.9, 1.2, 1.5: nothing moves until it passes 1.
    assert_eq!(heights, vec![0.0, 0.0, 0.0, 1.0, 2.0]);
}

#[test]
fn fall_speed_is_capped() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    s.bird.vel = 7.9;
    update(&mut s);
    assert_eq!(s.bird.vel, MAX_FALL_SPEED);
}

#[test]
fn bird_never_sinks_below_ground() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    for _ in 0..200 {
        update(&mut s);
        assert!(s.bird.rect.bottom() <= GROUND_Y + 1e-3);
    }
}

// ── spawner ───────────────────────────────────────────────────────────────────

#[test]
fn pipes_spawn_every_interval() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    let mut spawned_at = Vec::new();
    for t in 0..250u32 {
        let before = s.pipes.len();
        spawn(&mut s, &mut rng);
        if s.pipes.len() > before {
            spawned_at.push(t);
        }
    }
    assert_eq!(spawned_at, vec![0, PIPE_INTERVAL, 2 * PIPE_INTERVAL]);
}

#[test]
fn gap_centres_stay_on_the_grid() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    for _ in 0..(PIPE_INTERVAL * 40) {
        spawn(&mut s, &mut rng);
    }
    for pipe in &s.pipes {
        let offset = pipe.gap_center - rest_y();
        assert!((-100.0..=96.0).contains(&offset), "offset {offset}");
        assert_eq!(offset % 4.0, 0.0);
        assert_eq!(pipe.x, FIELD.x);
    }
}

#[test]
fn no_pipes_spawn_after_crash() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    s.bird.alive = false;
    spawn(&mut s, &mut rng);
    assert!(s.pipes.is_empty());
}

#[test]
fn pipes_leave_the_field() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    s.pipes.push(PipePair::new(-PIPE_WIDTH + 1.0, 200.0));
    update(&mut s);
    assert!(s.pipes.is_empty());
}

// ── collisions ────────────────────────────────────────────────────────────────

#[test]
fn passing_a_pipe_scores_once() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    s.pipes.push(PipePair::new(BIRD_X - PIPE_WIDTH - 5.0, rest_y()));
    collide(&mut s, &mut rng);
    assert_eq!(s.score, 1);
    assert_eq!(s.particles.len(), BURST_COUNT);

    // Same tick, second pass: nothing left to score.
    collide(&mut s, &mut rng);
    assert_eq!(s.score, 1);
}

#[test]
fn hitting_a_pipe_kills_but_keeps_falling() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    // Gap far below the bird: the top pipe covers it.
    s.pipes.push(PipePair::new(BIRD_X, 400.0));
    collide(&mut s, &mut rng);
    assert!(!s.bird.alive);
    assert_eq!(s.phase.phase(), Phase::Playing);
    assert_eq!(s.particles.len(), BURST_COUNT);

    collide(&mut s, &mut rng);
    assert_eq!(s.particles.len(), BURST_COUNT); // burst emitted once
}

#[test]
fn ceiling_kills() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    s.bird.rect.y = -1.0;
    collide(&mut s, &mut rng);
    assert!(!s.bird.alive);
}

#[test]
fn dead_bird_does_not_score() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    s.bird.alive = false;
    s.pipes.push(PipePair::new(0.0 - PIPE_WIDTH, rest_y()));
    collide(&mut s, &mut rng);
    assert_eq!(s.score, 0);
}

#[test]
fn ground_ends_the_round() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    s.bird.rect.y = GROUND_Y - BIRD_SIZE;
    collide(&mut s, &mut rng);
    assert_eq!(s.phase.phase(), Phase::RoundOver);
    assert!(!s.bird.alive);
    assert_eq!(s.speed, 0.0);
}

#[test]
fn falling_bird_reaches_round_over_without_input() {
    let mut rng = seeded_rng();
    let mut s = init_state(&mut rng);
    tick(&mut s, &click(0), &mut rng);
    for t in 1..120 {
        tick(&mut s, &idle(t), &mut rng);
    }
    assert_eq!(s.phase.phase(), Phase::RoundOver);
}

// ── restart ───────────────────────────────────────────────────────────────────

#[test]
fn restart_clears_round_state() {
    let mut rng = seeded_rng();
    let mut s = playing_state(&mut rng);
    s.pipes.push(PipePair::new(100.0, 200.0));
    s.score = 5;
    s.bird.rect.y = GROUND_Y - BIRD_SIZE;
    collide(&mut s, &mut rng);
    assert_eq!(s.phase.phase(), Phase::RoundOver);

    tick(&mut s, &click(10), &mut rng);
    assert_eq!(s.phase.phase(), Phase::Attract);
    assert!(s.pipes.is_empty());
    assert!(s.particles.is_empty());
    assert_eq!(s.score, 0);
    assert!(s.bird.alive);
    assert_eq!(s.bird.rect.y, rest_y());
}

// ── determinism ───────────────────────────────────────────────────────────────

#[test]
fn same_seed_same_run() {
    let script: Vec<InputSnapshot> = (0..400)
        .map(|t| if t % 25 == 0 { click(t) } else { idle(t) })
        .collect();

    let run = || {
        let mut rng = seeded(7);
        let mut s = init_state(&mut rng);
        for input in &script {
            tick(&mut s, input, &mut rng);
        }
        (s.bird.rect, s.pipes.clone(), s.score, s.phase.phase())
    };
    assert_eq!(run(), run());
}
