//! Simulation engine for SCRAPLINE.
//!
//! Owns the hecs ECS world, runs systems at a fixed frame rate,
//! and produces FrameSnapshots for the frontend.

pub mod engine;
pub mod rounds;
pub mod systems;
pub mod world_setup;

pub use engine::SessionEngine;
pub use scrapline_core as core;
