//! Pseudo-3D first-person wireframe view of a top-down polyline world.
//!
//! One camera, one bounded field of view. Every wall point is tested against
//! the camera's projection plane, mapped to a vertical screen edge, and
//! joined to its neighbours by top and bottom outline edges.

pub mod config;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
