use glam::Vec2;
use thiserror::Error;

use super::{
    camera::Camera,
    geometry::{Point, PointId, Wall, WallId},
};

/// Why a wall could not be added.
#[derive(Error, Debug, PartialEq)]
pub enum WorldError {
    #[error("a wall needs at least one point")]
    EmptyWall,

    #[error("wall point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinitePoint { index: usize, x: f32, y: f32 },

    #[error("wall height must be finite and non-negative, got {0}")]
    BadHeight(f32),
}

/// Point arena plus the walls threaded through it.
///
/// Points are only ever appended, so a [`PointId`] handed out once stays
/// valid for the lifetime of the world.
#[derive(Clone, Debug, Default)]
pub struct World {
    points: Vec<Point>,
    walls: Vec<Wall>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `points` as a new polyline of the given `height`.
    ///
    /// Nothing is stored if any input is rejected.
    pub fn add_wall(
        &mut self,
        points: &[Vec2],
        height: f32,
        closed: bool,
    ) -> Result<WallId, WorldError> {
        if points.is_empty() {
            return Err(WorldError::EmptyWall);
        }
        if !height.is_finite() || height < 0.0 {
            return Err(WorldError::BadHeight(height));
        }
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(WorldError::NonFinitePoint {
                index,
                x: p.x,
                y: p.y,
            });
        }

        let first = self.points.len();
        self.points
            .extend(points.iter().map(|&pos| Point::new(pos, height)));
        self.walls.push(Wall {
            first,
            len: points.len(),
            closed,
        });
        Ok(self.walls.len() - 1)
    }

    /// Refresh `visible`, `horizontal_field` and `distance` of every point
    /// against `camera`.
    pub fn update_camera(&mut self, camera: &Camera) {
        for p in &mut self.points {
            let v = camera.visibility_test(p.pos);
            p.visible = v.visible;
            p.horizontal_field = v.field;
            p.distance = camera.distance(p.pos);
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn point(&self, id: PointId) -> Option<&Point> {
        self.points.get(id)
    }

    #[inline]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Every wall connection of the world, wall by wall.
    pub fn connections(&self) -> impl Iterator<Item = (PointId, PointId)> + '_ {
        self.walls.iter().flat_map(Wall::connections)
    }

    /// True if `pos` coincides exactly with one of the world's points.
    pub fn contains_point(&self, pos: Vec2) -> bool {
        self.points.iter().any(|p| p.pos == pos)
    }
}
