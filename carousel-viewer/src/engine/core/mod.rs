//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
pub mod app_setup;

/// Loading/Running state machine and its transition.
pub mod app_state;

/// Seedable randomness behind every scene draw.
pub mod rng;

/// Startup settings, read from a JSON file on native targets.
pub mod viewer_config;
