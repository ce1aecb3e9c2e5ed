//! Seams between the simulation and whatever hosts it.
//!
//! The core only ever talks to input, audio, effects and rendering through
//! these traits, so a frame can be driven without a window or a terminal.

use crate::pool::SlotId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Laser,
    EnemyDestroyed,
    PlayerDestroyed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HudLabel {
    Score,
    Lives,
    GameOver,
}

/// Handle a renderer uses to track a visual across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Player,
    Enemy(SlotId),
    Projectile(SlotId),
}

pub trait Input {
    fn is_left_down(&self) -> bool;
    fn is_right_down(&self) -> bool;
    /// True only on the frame the fire button went down.
    fn is_fire_just_pressed(&self) -> bool;
}

pub trait Audio {
    fn play(&mut self, sound: Sound);
}

pub trait Effects {
    fn burst(&mut self, x: f32, y: f32, count: u32);
}

pub trait Render {
    fn set_position(&mut self, entity: EntityRef, x: f32, y: f32);
    fn set_visible(&mut self, entity: EntityRef, visible: bool);
    fn set_text(&mut self, label: HudLabel, text: &str);
}

pub trait Clock {
    /// Seconds elapsed since the previous call.
    fn delta(&mut self) -> f32;
}

/// Everything the core reports back to the host during a tick.
pub trait Feedback: Audio + Effects + Render {}

impl<T: Audio + Effects + Render> Feedback for T {}

// ── Plain implementations ────────────────────────────────────────────────────

/// A snapshot of the buttons for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Input for InputState {
    fn is_left_down(&self) -> bool {
        self.left
    }

    fn is_right_down(&self) -> bool {
        self.right
    }

    fn is_fire_just_pressed(&self) -> bool {
        self.fire
    }
}

/// Constant time step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStep(pub f32);

impl Clock for FixedStep {
    fn delta(&mut self) -> f32 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Played(Sound),
    Burst { x: f32, y: f32, count: u32 },
    Moved { entity: EntityRef, x: f32, y: f32 },
    Visible { entity: EntityRef, visible: bool },
    Text { label: HudLabel, text: String },
}

/// Records every call in order.  Useful headless and in tests.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<HostEvent>,
}

impl EventLog {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn sounds(&self) -> Vec<Sound> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Played(sound) => Some(*sound),
                _ => None,
            })
            .collect()
    }

    pub fn bursts(&self) -> Vec<(f32, f32, u32)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Burst { x, y, count } => Some((*x, *y, *count)),
                _ => None,
            })
            .collect()
    }

    /// Most recent text published for `label`.
    pub fn text(&self, label: HudLabel) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::Text { label: l, text } if *l == label => Some(text.as_str()),
            _ => None,
        })
    }

    /// Most recent visibility published for `entity`.
    pub fn visible(&self, entity: EntityRef) -> Option<bool> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::Visible { entity: r, visible } if *r == entity => Some(*visible),
            _ => None,
        })
    }
}

impl Audio for EventLog {
    fn play(&mut self, sound: Sound) {
        self.events.push(HostEvent::Played(sound));
    }
}

impl Effects for EventLog {
    fn burst(&mut self, x: f32, y: f32, count: u32) {
        self.events.push(HostEvent::Burst { x, y, count });
    }
}

impl Render for EventLog {
    fn set_position(&mut self, entity: EntityRef, x: f32, y: f32) {
        self.events.push(HostEvent::Moved { entity, x, y });
    }

    fn set_visible(&mut self, entity: EntityRef, visible: bool) {
        self.events.push(HostEvent::Visible { entity, visible });
    }

    fn set_text(&mut self, label: HudLabel, text: &str) {
        self.events.push(HostEvent::Text {
            label,
            text: text.to_string(),
        });
    }
}
