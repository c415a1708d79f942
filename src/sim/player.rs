use glam::Vec2;
use log::debug;
use thiserror::Error;

use super::Action;
use crate::world::{Camera, World, angle_to_vector, heading_from_degrees};

/// Degrees turned by one `Left`/`Right`.
pub const TURN_STEP_DEG: f32 = 10.0;
/// World units walked by one `Up`/`Down`.
pub const MOVE_STEP: f32 = 4.0;

#[derive(Error, Debug, PartialEq)]
pub enum MoveError {
    /// The eye may never sit exactly on a world point: perspective scaling
    /// divides by the eye → point distance.
    #[error("move to ({}, {}) would put the camera on a wall point", .0.x, .0.y)]
    OnWorldPoint(Vec2),
}

/// Viewer pose as the user steers it; heading kept in whole degrees so turns
/// stay exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub degrees: f32,
}

impl Player {
    pub fn new(pos: Vec2, degrees: f32) -> Self {
        Self { pos, degrees }
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        heading_from_degrees(self.degrees)
    }

    /// Apply one action. Returns `Ok(true)` if the pose changed.
    ///
    /// A step that would land exactly on a point of `world` is refused and
    /// the pose stays as it was.
    pub fn apply(&mut self, action: Action, world: &World) -> Result<bool, MoveError> {
        match action {
            Action::Left => self.degrees -= TURN_STEP_DEG,
            Action::Right => self.degrees += TURN_STEP_DEG,
            Action::Up | Action::Down => {
                let mut step = angle_to_vector(self.heading(), MOVE_STEP);
                if action == Action::Down {
                    step = -step;
                }
                let next = self.pos + step;
                if world.contains_point(next) {
                    return Err(MoveError::OnWorldPoint(next));
                }
                self.pos = next;
            }
            Action::Quit | Action::Noop => return Ok(false),
        }
        debug!("pose: ({}, {}) @ {}°", self.pos.x, self.pos.y, self.degrees);
        Ok(true)
    }

    /// Push the pose into `camera`.
    pub fn sync(&self, camera: &mut Camera) {
        camera.set(self.pos, self.heading());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn turns_are_ten_degrees() {
        let world = World::new();
        let mut p = Player::new(Vec2::ZERO, -95.0);
        assert_eq!(p.apply(Action::Left, &world), Ok(true));
        assert_eq!(p.degrees, -105.0);
        p.apply(Action::Right, &world).unwrap();
        p.apply(Action::Right, &world).unwrap();
        assert_eq!(p.degrees, -85.0);
        assert_eq!(p.pos, Vec2::ZERO);
    }

    #[test]
    fn up_and_down_walk_along_heading() {
        let world = World::new();
        let mut p = Player::new(vec2(10.0, 10.0), 90.0);
        p.apply(Action::Up, &world).unwrap();
        assert!((p.pos - vec2(10.0, 14.0)).length() < 1e-5);
        p.apply(Action::Down, &world).unwrap();
        p.apply(Action::Down, &world).unwrap();
        assert!((p.pos - vec2(10.0, 6.0)).length() < 1e-5);
    }

    #[test]
    fn quit_and_noop_leave_pose_alone() {
        let world = World::new();
        let mut p = Player::new(vec2(1.0, 2.0), 30.0);
        assert_eq!(p.apply(Action::Quit, &world), Ok(false));
        assert_eq!(p.apply(Action::Noop, &world), Ok(false));
        assert_eq!(p, Player::new(vec2(1.0, 2.0), 30.0));
    }

    #[test]
    fn refuses_to_step_onto_a_wall_point() {
        let mut world = World::new();
        world.add_wall(&[vec2(4.0, 0.0)], 1.0, false).unwrap();
        let mut p = Player::new(Vec2::ZERO, 0.0);
        assert_eq!(
            p.apply(Action::Up, &world),
            Err(MoveError::OnWorldPoint(vec2(4.0, 0.0)))
        );
        assert_eq!(p.pos, Vec2::ZERO);
    }

    #[test]
    fn full_turn_returns_to_start_heading() {
        let world = World::new();
        let mut p = Player::new(Vec2::ZERO, -95.0);
        for _ in 0..36 {
            p.apply(Action::Right, &world).unwrap();
        }
        assert_eq!(p.degrees, -95.0 + 360.0);
        let a = angle_to_vector(p.heading(), 1.0);
        let b = angle_to_vector(heading_from_degrees(-95.0), 1.0);
        assert!((a - b).length() < 1e-5);
    }

    #[test]
    fn sync_moves_the_camera() {
        use crate::world::Optics;
        let optics = Optics {
            focal_distance: 40.0,
            focal_width: 35.0,
            focal_height: 300.0,
        };
        let mut cam = Camera::new(optics, Vec2::ZERO, 0.0);
        let p = Player::new(vec2(140.0, 160.0), -95.0);
        p.sync(&mut cam);
        assert_eq!(cam.pos(), vec2(140.0, 160.0));
        assert_eq!(cam.heading(), p.heading());
    }
}
