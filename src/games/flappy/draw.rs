//! Retro Bird frame building. Reads state only.

use glam::Vec2;

use super::entities::*;
use crate::display::{blink, Anchor, Frame, Rgb};
use crate::engine::geom::Rect;
use crate::engine::phase::Phase;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Rgb = Rgb::YELLOW;
const C_SUBTITLE: Rgb = Rgb::GREEN;
const C_SCORE: Rgb = Rgb::YELLOW;
const C_GROUND_EDGE: Rgb = Rgb::WHITE;
const C_GROUND_GRID: Rgb = Rgb(40, 40, 40);
const C_GAME_OVER: Rgb = Rgb::RED;
const C_HINT: Rgb = Rgb::WHITE;
const C_BEAK: Rgb = Rgb::YELLOW;

const CAP_HEIGHT: f32 = 20.0;
const GROUND_GRID_SPACING: f32 = 20.0;

// ── Public entry point ────────────────────────────────────────────────────────

pub fn draw(state: &FlappyGame, frame: &mut Frame) {
    for pipe in &state.pipes {
        draw_pipe(frame, pipe, state.pipe_color);
    }
    draw_ground(frame, state);
    draw_bird(frame, &state.bird);

    match state.phase.phase() {
        Phase::Attract => draw_title(frame, state.frame),
        _ => draw_score(frame, state.score),
    }

    for p in state.particles.iter() {
        frame.circle(p.pos, p.size, p.color.dim(0.4 + 0.6 * p.fade()));
    }

    if !state.bird.alive {
        draw_game_over(frame, state);
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_pipe(frame: &mut Frame, pipe: &PipePair, color: Rgb) {
    let top = pipe.top();
    let bottom = pipe.bottom();
    frame.rect(top, color);
    frame.rect(bottom, color);

    // Caps face the gap.
    let cap_w = PIPE_WIDTH + 6.0;
    frame.rect_with(
        Rect::new(pipe.x - 3.0, top.bottom() - CAP_HEIGHT, cap_w, CAP_HEIGHT),
        '▓',
        color,
    );
    frame.rect_with(Rect::new(pipe.x - 3.0, bottom.top(), cap_w, CAP_HEIGHT), '▓', color);
}

fn draw_ground(frame: &mut Frame, state: &FlappyGame) {
    let field = frame.field();
    frame.rect_with(
        Rect::new(0.0, GROUND_Y, field.x, field.y - GROUND_Y),
        '▒',
        state.pipe_color.dim(0.6),
    );

    // Grid stripes scroll with the pipes.
    let mut x = -(state.ground_offset % GROUND_GRID_SPACING);
    while x < field.x {
        frame.rect_with(Rect::new(x, GROUND_Y, 1.0, field.y - GROUND_Y), '│', C_GROUND_GRID);
        x += GROUND_GRID_SPACING;
    }
    frame.hline(GROUND_Y, 3.0, '▀', C_GROUND_EDGE);
}

fn draw_bird(frame: &mut Frame, bird: &Bird) {
    let c = bird.rect.center();
    frame.circle(c, BIRD_SIZE / 2.0, bird.color);
    frame.circle(c + Vec2::new(8.0, -5.0), 5.0, Rgb::WHITE);
    frame.rect(Rect::new(c.x + 15.0, c.y - 3.0, 10.0, 6.0), C_BEAK);

    // Wing: up for the first half of the flap cycle.
    let wing = if bird.flap_frame < 3 { '^' } else { 'v' };
    frame.text(c + Vec2::new(-8.0, 4.0), wing.to_string(), Anchor::Center, Rgb::BLACK);
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_title(frame: &mut Frame, tick: u64) {
    let cx = FIELD.x / 2.0;
    frame.text(Vec2::new(cx, 60.0), "R E T R O", Anchor::Center, C_TITLE);
    frame.text(Vec2::new(cx, 110.0), "B I R D", Anchor::Center, C_SUBTITLE);
    if blink(tick, 60) {
        frame.text(Vec2::new(cx, FIELD.y - 100.0), "CLICK TO START", Anchor::Center, C_HINT);
    }
}

fn draw_score(frame: &mut Frame, score: u32) {
    frame.text(Vec2::new(FIELD.x / 2.0, 60.0), score.to_string(), Anchor::Center, C_SCORE);
    frame.hline(100.0, 2.0, '─', C_SCORE);
}

fn draw_game_over(frame: &mut Frame, state: &FlappyGame) {
    let cx = FIELD.x / 2.0;
    let panel = Rect::new(20.0, 150.0, FIELD.x - 40.0, 200.0);
    frame.rect_with(panel, ' ', Rgb::BLACK);
    frame.rect_with(Rect::new(panel.x, panel.y, panel.w, 4.0), '═', C_GAME_OVER);
    frame.rect_with(Rect::new(panel.x, panel.bottom() - 4.0, panel.w, 4.0), '═', C_GAME_OVER);

    frame.text(Vec2::new(cx, 190.0), "GAME OVER", Anchor::Center, C_GAME_OVER);
    frame.text(
        Vec2::new(cx, 280.0),
        format!("SCORE: {}", state.score),
        Anchor::Center,
        C_SCORE,
    );
    if state.phase.phase() == Phase::RoundOver && blink(state.frame, 48) {
        frame.text(Vec2::new(cx, 320.0), "CLICK TO RESTART", Anchor::Center, C_HINT);
    }
}
