//! Tracker engine for bosswatch.
//!
//! Owns the hazard tile scheduler, encounter roster, and alert fan-out,
//! consumes the host's world event stream one event at a time, and
//! exposes the current hazard set to the renderer. Completely headless
//! (no game-client dependency), enabling deterministic testing.

pub mod alerts;
pub mod classifier;
pub mod encounter;
pub mod engine;
pub mod hazard;

pub use bosswatch_core as core;
pub use engine::TrackerEngine;
