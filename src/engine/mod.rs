mod engine;
pub mod overview;
pub mod pipeline;
pub mod types;

pub use engine::Engine;
pub use overview::draw_overview;
pub use pipeline::FramePipeline;
pub use types::{Screen, ScreenEdge};
