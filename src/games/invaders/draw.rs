//! Space Battle frame building. Reads state only.

use glam::Vec2;

use super::entities::*;
use crate::display::{blink, Anchor, Frame, Rgb};
use crate::engine::geom::Rect;
use crate::engine::phase::Phase;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SHIP: Rgb = Rgb::CYAN;
const C_COCKPIT: Rgb = Rgb::WHITE;
const C_FLAME: Rgb = Rgb::ORANGE;
const C_BULLET: Rgb = Rgb::YELLOW;
const C_BOLT: Rgb = Rgb::MAGENTA;
const C_SHIELD: Rgb = Rgb(0, 200, 255);
const C_HUD: Rgb = Rgb::WHITE;
const C_HUD_POWER: Rgb = Rgb::YELLOW;
const C_GAME_OVER: Rgb = Rgb::RED;

const HUD_LINE: f32 = 30.0;

// ── Public entry point ────────────────────────────────────────────────────────

pub fn draw(state: &InvadersGame, frame: &mut Frame) {
    for star in &state.stars {
        let shade = star.brightness;
        frame.circle(star.pos, star.size, Rgb(shade, shade, shade).dim(0.5));
    }

    for alien in &state.aliens {
        draw_alien(frame, alien);
    }
    for shot in &state.projectiles {
        draw_projectile(frame, shot);
    }
    for p in &state.power_ups {
        draw_power_up(frame, p);
    }
    for p in state.particles.iter() {
        frame.circle(p.pos, p.size, p.color.dim(p.fade()));
    }

    if state.phase.phase() != Phase::RoundOver {
        draw_player(frame, &state.player);
    }
    draw_hud(frame, state);

    if state.phase.phase() == Phase::RoundOver {
        draw_game_over(frame, state);
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player(frame: &mut Frame, player: &Player) {
    let r = player.rect;
    let c = r.center();

    // Hull narrows towards the nose.
    frame.rect(Rect::new(c.x - 5.0, r.top(), 10.0, r.h * 0.4), C_SHIP);
    frame.rect(Rect::new(c.x - 18.0, r.top() + r.h * 0.4, 36.0, r.h * 0.4), C_SHIP);
    frame.rect(Rect::new(r.left(), r.bottom() - r.h * 0.3, r.w, r.h * 0.2), BLUE);
    frame.circle(Vec2::new(c.x, r.top() + 15.0), 5.0, C_COCKPIT);

    let flame = if player.engine_glow < 5 { 10.0 } else { 6.0 };
    frame.rect(Rect::new(c.x - 6.0, r.bottom() - r.h * 0.1, 12.0, flame), C_FLAME);

    if player.shielded() {
        frame.circle(c, r.w * 0.7, C_SHIELD.dim(0.5));
    }
}

fn draw_alien(frame: &mut Frame, alien: &Alien) {
    let r = alien.rect;
    let c = r.center();
    let color = alien.kind.color();

    match alien.kind {
        AlienKind::Octopus => {
            frame.circle(Vec2::new(c.x, c.y - 5.0), r.w * 0.4, color);
            // Tentacles.
            for i in 0..4 {
                let x = r.left() + 8.0 + i as f32 * 10.0;
                frame.rect(Rect::new(x, c.y + 5.0, 4.0, r.h * 0.35), color.dim(0.7));
            }
        }
        AlienKind::Insect => {
            frame.rect(Rect::new(r.left() + 10.0, r.top() + 10.0, r.w - 20.0, r.h - 20.0), color);
            frame.rect_with(Rect::new(r.left(), c.y - 8.0, 10.0, 16.0), '▒', color.dim(0.7));
            frame.rect_with(Rect::new(r.right() - 10.0, c.y - 8.0, 10.0, 16.0), '▒', color.dim(0.7));
        }
        AlienKind::Saucer => {
            frame.rect(Rect::new(r.left(), c.y - 5.0, r.w, 12.0), color);
            frame.circle(Vec2::new(c.x, c.y - 8.0), r.w * 0.2, Rgb::CYAN);
        }
    }

    // Eyes.
    frame.text(c, "••", Anchor::Center, Rgb::WHITE);
}

fn draw_projectile(frame: &mut Frame, shot: &Projectile) {
    match shot.owner {
        Owner::Player => frame.rect_with(shot.rect, '│', C_BULLET),
        Owner::Alien => frame.rect_with(shot.rect, '┇', C_BOLT),
    }
}

fn draw_power_up(frame: &mut Frame, p: &PowerUp) {
    let label = match p.kind {
        PowerUpKind::TripleShot => "T",
        PowerUpKind::Shield => "S",
    };
    frame.circle(p.rect.center(), p.rect.w / 2.0, p.kind.color());
    frame.text(p.rect.center(), label, Anchor::Center, Rgb::BLACK);
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud(frame: &mut Frame, state: &InvadersGame) {
    let field = frame.field();
    frame.text(
        Vec2::new(10.0, 10.0),
        format!("SCORE: {}", state.score),
        Anchor::Left,
        C_HUD,
    );
    frame.text(
        Vec2::new(field.x / 2.0, 10.0),
        format!("LEVEL: {}", state.level),
        Anchor::Center,
        C_HUD,
    );
    frame.text(
        Vec2::new(field.x - 10.0, 10.0),
        format!("LIVES: {}", state.lives),
        Anchor::Right,
        C_HUD,
    );

    let mut y = 10.0 + HUD_LINE;
    let player = &state.player;
    if player.triple_shot > 0 {
        let secs = player.triple_shot / 60;
        frame.text(Vec2::new(10.0, y), format!("TRIPLE SHOT: {secs}s"), Anchor::Left, C_HUD_POWER);
        y += HUD_LINE;
    }
    if player.shield > 0 {
        let secs = player.shield / 60;
        frame.text(Vec2::new(10.0, y), format!("SHIELD: {secs}s"), Anchor::Left, C_SHIELD);
    }
}

fn draw_game_over(frame: &mut Frame, state: &InvadersGame) {
    let field = frame.field();
    let cx = field.x / 2.0;
    let cy = field.y / 2.0;

    frame.rect_with(Rect::new(0.0, cy - 90.0, field.x, 180.0), ' ', Rgb::BLACK);
    frame.text(Vec2::new(cx, cy - 50.0), "GAME OVER", Anchor::Center, C_GAME_OVER);
    frame.text(
        Vec2::new(cx, cy + 10.0),
        format!("FINAL SCORE: {}", state.score),
        Anchor::Center,
        C_HUD,
    );
    frame.text(
        Vec2::new(cx, cy + 35.0),
        format!("LEVEL {}  ·  {} ALIENS DESTROYED", state.level, state.kills),
        Anchor::Center,
        C_HUD_POWER,
    );
    if blink(state.frame, 60) {
        frame.text(
            Vec2::new(cx, cy + 70.0),
            "PRESS R TO RESTART",
            Anchor::Center,
            C_HUD,
        );
    }
}
