pub mod camera;
pub mod geometry;
pub mod level;
pub mod lines;

pub use camera::{Camera, Optics, Visibility};
pub use geometry::{FULL_HEIGHT, Point, PointId, Wall, WallId};
pub use level::{World, WorldError};
pub use lines::{Segment, angle_to_vector, heading_from_degrees, intersect};
