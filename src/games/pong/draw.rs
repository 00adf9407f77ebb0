//! Pong frame building.

use glam::Vec2;

use super::entities::*;
use crate::display::{blink, Anchor, Frame, Rgb};
use crate::engine::geom::Rect;
use crate::engine::phase::Phase;

const GRID_SPACING: f32 = 80.0;
const BORDER: f32 = 8.0;

pub fn draw(state: &PongGame, frame: &mut Frame) {
    draw_field(frame);

    if state.phase.phase() == Phase::RoundOver {
        draw_winner(frame, state);
        return;
    }

    draw_paddle(frame, &state.player, GREEN);
    draw_paddle(frame, &state.ai, AMBER);
    draw_ball(frame, &state.ball);
    draw_hud(frame, state);

    if state.phase.phase() == Phase::Paused {
        draw_pause(frame);
    }
}

fn draw_field(frame: &mut Frame) {
    let field = frame.field();

    let mut x = 0.0;
    while x < field.x {
        frame.rect_with(Rect::new(x, 0.0, 1.0, field.y), '┊', GREEN_DARK);
        x += GRID_SPACING;
    }

    // Dashed centre line.
    let mut y = 0.0;
    while y < field.y {
        frame.rect(Rect::new(field.x / 2.0 - 4.0, y, 8.0, 14.0), GREEN_DIM);
        y += 24.0;
    }

    frame.hline(0.0, BORDER, '▀', GREEN);
    frame.hline(field.y - BORDER, BORDER, '▄', GREEN);
}

fn draw_paddle(frame: &mut Frame, paddle: &Paddle, color: Rgb) {
    let r = paddle.rect;
    frame.rect(Rect::new(r.x - 4.0, r.y - 4.0, r.w + 8.0, r.h + 8.0), color.dim(0.25));
    frame.rect(r, color);
}

fn draw_ball(frame: &mut Frame, ball: &Ball) {
    let n = ball.trail.len().max(1) as f32;
    for (i, p) in ball.trail.iter().enumerate() {
        let alpha = (i + 1) as f32 / n;
        let radius = (BALL_RADIUS * alpha * 0.6).max(3.0);
        frame.circle(*p, radius, Rgb(0, (120.0 * alpha) as u8, (30.0 * alpha) as u8));
    }
    frame.circle(ball.pos, BALL_RADIUS + 4.0, GREEN_DIM);
    frame.circle(ball.pos, BALL_RADIUS, GREEN);
}

fn draw_hud(frame: &mut Frame, state: &PongGame) {
    let field = frame.field();
    let left = field.x / 4.0;
    let right = field.x * 3.0 / 4.0;

    frame.text(Vec2::new(left, 70.0), state.player_score.to_string(), Anchor::Center, GREEN);
    frame.text(Vec2::new(right, 70.0), state.ai_score.to_string(), Anchor::Center, AMBER);
    frame.text(Vec2::new(left, 130.0), "< PLAYER >", Anchor::Center, GREEN_DIM);
    frame.text(Vec2::new(right, 130.0), "<  A.I.  >", Anchor::Center, AMBER_DIM);

    frame.text(
        Vec2::new(field.x / 2.0, field.y - 22.0),
        "[ UP/DN ] MOVE    [ P ] PAUSE    [ ESC ] QUIT",
        Anchor::Center,
        GREEN_DIM,
    );
    if blink(state.frame, 84) {
        frame.text(
            Vec2::new(field.x / 2.0, field.y - 50.0),
            format!("* FIRST TO {WIN_SCORE} WINS *"),
            Anchor::Center,
            GREEN_DIM,
        );
    }
}

fn draw_pause(frame: &mut Frame) {
    let field = frame.field();
    let c = field / 2.0;
    frame.rect_with(Rect::new(0.0, c.y - 60.0, field.x, 140.0), ' ', Rgb::BLACK);
    frame.text(c, "** PAUSED **", Anchor::Center, GREEN);
    frame.text(
        c + Vec2::new(0.0, 60.0),
        "PRESS  P  TO  CONTINUE",
        Anchor::Center,
        GREEN_DIM,
    );
}

fn draw_winner(frame: &mut Frame, state: &PongGame) {
    let field = frame.field();
    let c = field / 2.0;
    let winner = state.winner.unwrap_or(Side::Player);
    let color = match winner {
        Side::Player => GREEN,
        Side::Ai => AMBER,
    };

    if blink(state.frame, 40) {
        let inset = 40.0;
        let w = field.x - 2.0 * inset;
        let h = field.y - 2.0 * inset;
        frame.rect_with(Rect::new(inset, inset, w, 4.0), '─', color);
        frame.rect_with(Rect::new(inset, inset + h - 4.0, w, 4.0), '─', color);
        frame.rect_with(Rect::new(inset, inset, 4.0, h), '│', color);
        frame.rect_with(Rect::new(inset + w - 4.0, inset, 4.0, h), '│', color);
    }

    let flash = if blink(state.frame, 30) { Rgb::WHITE } else { color };
    frame.text(c - Vec2::new(0.0, 130.0), "** GAME  OVER **", Anchor::Center, GREEN_DIM);
    frame.text(c - Vec2::new(0.0, 40.0), "WINNER", Anchor::Center, flash);
    frame.text(c + Vec2::new(0.0, 70.0), winner.label(), Anchor::Center, color);
    frame.text(
        c + Vec2::new(0.0, 110.0),
        format!("{} - {}", state.player_score, state.ai_score),
        Anchor::Center,
        color,
    );
    frame.text(
        c + Vec2::new(0.0, 160.0),
        "PRESS  ENTER  TO  PLAY  AGAIN",
        Anchor::Center,
        GREEN_DIM,
    );
}
