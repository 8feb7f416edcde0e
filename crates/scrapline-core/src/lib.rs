//! Core types and definitions for the SCRAPLINE side-scroller.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, per-frame input, state snapshots, events, and constants.
//! It has no dependency on any windowing or rendering framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
