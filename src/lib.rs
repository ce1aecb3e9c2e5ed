//! Entity lifecycle and collision core of a single-screen arcade shooter.
//!
//! A host calls [`frame::FrameController::tick`] once per rendered frame and
//! implements the traits in [`host`] to hear about sounds, bursts and visuals.

pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod frame;
pub mod host;
pub mod motion;
pub mod pool;
pub mod sweep;
pub mod world;

pub use config::{CollisionMode, GameConfig};
pub use error::ConfigError;
pub use frame::{FrameController, FrameReport};
