//! Core types and definitions for the bosswatch tracker.
//!
//! This crate defines the vocabulary shared across all other crates:
//! world/domain events, hostile profiles, configuration accessors,
//! state snapshots, and constants.
//! It has no dependency on any game client or runtime framework.

pub mod config;
pub mod constants;
pub mod events;
pub mod profile;
pub mod state;
pub mod types;
