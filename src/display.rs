//! Rendering layer.  All terminal I/O lives here.
//!
//! `TerminalSink` is the game's Audio / Effects / Render implementation: it
//! only records what the core tells it, and `render` turns that record into
//! terminal commands scaled to the current window.

use std::collections::HashMap;
use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use tracing::trace;

use arcade_shooter::entities::Playfield;
use arcade_shooter::host::{Audio, Effects, EntityRef, HudLabel, Render, Sound};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_PROJECTILE: Color = Color::Cyan;
const C_BURST: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;
const C_GAME_OVER: Color = Color::Red;

/// Frames a burst stays on screen.
const BURST_FRAMES: u32 = 8;

// ── Sink ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
struct Sprite {
    x: f32,
    y: f32,
    visible: bool,
}

#[derive(Clone, Copy, Debug)]
struct Burst {
    x: f32,
    y: f32,
    count: u32,
    frames: u32,
}

pub struct TerminalSink {
    field: Playfield,
    sprites: HashMap<EntityRef, Sprite>,
    texts: HashMap<HudLabel, String>,
    bursts: Vec<Burst>,
    bell: bool,
}

impl TerminalSink {
    pub fn new(field: Playfield) -> Self {
        TerminalSink {
            field,
            sprites: HashMap::new(),
            texts: HashMap::new(),
            bursts: Vec::new(),
            bell: false,
        }
    }

    /// Age bursts by one frame and drop the expired ones.
    pub fn advance(&mut self) {
        for burst in &mut self.bursts {
            burst.frames = burst.frames.saturating_sub(1);
        }
        self.bursts.retain(|b| b.frames > 0);
    }

    /// Visible sprites in paint order: projectiles, then enemies, then the
    /// player on top.  Slots of a kind paint in index order.
    fn draw_order(&self) -> Vec<(EntityRef, &Sprite)> {
        let mut visible: Vec<_> = self
            .sprites
            .iter()
            .filter(|(_, sprite)| sprite.visible)
            .map(|(entity, sprite)| (*entity, sprite))
            .collect();
        visible.sort_by_key(|(entity, _)| match *entity {
            EntityRef::Projectile(slot) => (0, slot.0),
            EntityRef::Enemy(slot) => (1, slot.0),
            EntityRef::Player => (2, 0),
        });
        visible
    }

    fn sprite(&mut self, entity: EntityRef) -> &mut Sprite {
        self.sprites.entry(entity).or_insert(Sprite {
            x: 0.0,
            y: 0.0,
            visible: false,
        })
    }
}

impl Audio for TerminalSink {
    fn play(&mut self, sound: Sound) {
        trace!(?sound, "play");
        if sound == Sound::PlayerDestroyed {
            self.bell = true;
        }
    }
}

impl Effects for TerminalSink {
    fn burst(&mut self, x: f32, y: f32, count: u32) {
        self.bursts.push(Burst {
            x,
            y,
            count,
            frames: BURST_FRAMES,
        });
    }
}

impl Render for TerminalSink {
    fn set_position(&mut self, entity: EntityRef, x: f32, y: f32) {
        let sprite = self.sprite(entity);
        sprite.x = x;
        sprite.y = y;
    }

    fn set_visible(&mut self, entity: EntityRef, visible: bool) {
        self.sprite(entity).visible = visible;
    }

    fn set_text(&mut self, label: HudLabel, text: &str) {
        self.texts.insert(label, text.to_string());
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Maps playfield coordinates onto the cells inside the border.
struct Viewport {
    width: u16,
    height: u16,
    field: Playfield,
}

impl Viewport {
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let inner_w = self.width.saturating_sub(2) as f32;
        let inner_h = self.height.saturating_sub(4) as f32;
        if x < 0.0 || y < 0.0 || x > self.field.width || y > self.field.height {
            return None;
        }
        let col = 1.0 + (x / self.field.width * inner_w).min(inner_w - 1.0);
        let row = 2.0 + (y / self.field.height * inner_h).min(inner_h - 1.0);
        Some((col.max(1.0) as u16, row.max(2.0) as u16))
    }
}

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, sink: &mut TerminalSink) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport {
        width,
        height,
        field: sink.field,
    };

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, sink, &view)?;

    for (entity, sprite) in sink.draw_order() {
        draw_sprite(out, &view, entity, sprite)?;
    }
    for burst in &sink.bursts {
        draw_burst(out, &view, burst)?;
    }

    draw_controls_hint(out, &view)?;

    if let Some(text) = sink.texts.get(&HudLabel::GameOver) {
        draw_game_over(out, &view, text)?;
    }

    if std::mem::take(&mut sink.bell) {
        out.queue(Print("\x07"))?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, sink: &TerminalSink, view: &Viewport) -> std::io::Result<()> {
    if let Some(score) = sink.texts.get(&HudLabel::Score) {
        out.queue(cursor::MoveTo(1, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(Print(score))?;
    }

    if let Some(lives) = sink.texts.get(&HudLabel::Lives) {
        let rx = view
            .width
            .saturating_sub(lives.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(rx, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
        out.queue(Print(lives))?;
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_sprite<W: Write>(
    out: &mut W,
    view: &Viewport,
    entity: EntityRef,
    sprite: &Sprite,
) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(sprite.x, sprite.y) else {
        return Ok(());
    };
    let (glyph, color) = match entity {
        EntityRef::Player => ("▲", C_PLAYER),
        EntityRef::Enemy(_) => ("▼", C_ENEMY),
        EntityRef::Projectile(_) => ("║", C_PROJECTILE),
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

/// A burst grows a ring of sparks around its origin as it ages.
fn draw_burst<W: Write>(out: &mut W, view: &Viewport, burst: &Burst) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(burst.x, burst.y) else {
        return Ok(());
    };
    let reach = ((BURST_FRAMES - burst.frames) as i32 / 2 + 1).min(1 + burst.count as i32 / 20);
    out.queue(style::SetForegroundColor(C_BURST))?;
    for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (1, 1), (-1, 1), (1, -1)] {
        let c = col as i32 + dx * reach;
        let r = row as i32 + dy * reach;
        if c >= 1 && r >= 2 && c < view.width as i32 - 1 && r < view.height as i32 - 2 {
            out.queue(cursor::MoveTo(c as u16, r as u16))?;
            out.queue(Print("*"))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: &Viewport, text: &str) -> std::io::Result<()> {
    let col = (view.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, view.height / 2))?;
    out.queue(style::SetForegroundColor(C_GAME_OVER))?;
    out.queue(Print(text))?;
    Ok(())
}
