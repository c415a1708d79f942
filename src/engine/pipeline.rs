use glam::vec2;
use log::trace;

use crate::{
    engine::types::{Screen, ScreenEdge},
    renderer::{Colour, DrawCall},
    world::{Camera, World},
};

/// Turns a camera-updated [`World`] into first-person draw calls.
///
/// Owns its scratch buffers so steady-state frames do not allocate.
#[derive(Debug, Default)]
pub struct FramePipeline {
    edges: Vec<Option<ScreenEdge>>,
    calls: Vec<DrawCall>,
}

impl FramePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the first-person view in panel-local pixels.
    ///
    /// `world` must already be updated against `camera`
    /// ([`World::update_camera`]).
    pub fn run(&mut self, world: &World, camera: &Camera, screen: Screen) -> &[DrawCall] {
        self.project(world, camera, screen);
        self.calls.clear();
        self.emit_vertical_edges(world);
        self.emit_wall_outlines(world);
        trace!(
            "first-person frame: {} points, {} draw calls",
            world.points().len(),
            self.calls.len()
        );
        &self.calls
    }

    /// Screen mapping of every point from the last `run`, indexed like
    /// [`World::points`]. `None` where the point's distance is zero.
    #[inline]
    pub fn edges(&self) -> &[Option<ScreenEdge>] {
        &self.edges
    }

    /* Every point is mapped, visible or not: an outline edge with only one
     * visible endpoint still needs the other end's coordinates. */
    fn project(&mut self, world: &World, camera: &Camera, screen: Screen) {
        self.edges.clear();
        self.edges.extend(
            world
                .points()
                .iter()
                .map(|p| camera.map_point_to_screen(p, screen)),
        );
    }

    fn emit_vertical_edges(&mut self, world: &World) {
        for (p, edge) in world.points().iter().zip(&self.edges) {
            if let (true, Some(e)) = (p.visible, edge) {
                self.calls.push(DrawCall::segment(
                    vec2(e.x, e.y_top),
                    vec2(e.x, e.y_bottom),
                    Colour::Black,
                ));
            }
        }
    }

    fn emit_wall_outlines(&mut self, world: &World) {
        let points = world.points();
        for (a, b) in world.connections() {
            if !(points[a].visible || points[b].visible) {
                continue;
            }
            let (Some(ea), Some(eb)) = (self.edges[a], self.edges[b]) else {
                continue;
            };
            self.calls.push(DrawCall::segment(
                vec2(ea.x, ea.y_top),
                vec2(eb.x, eb.y_top),
                Colour::Black,
            ));
            self.calls.push(DrawCall::segment(
                vec2(ea.x, ea.y_bottom),
                vec2(eb.x, eb.y_bottom),
                Colour::Black,
            ));
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Optics, heading_from_degrees};
    use glam::{Vec2, vec2};

    const OPTICS: Optics = Optics {
        focal_distance: 40.0,
        focal_width: 35.0,
        focal_height: 300.0,
    };
    const SCREEN: Screen = Screen { w: 500, h: 500 };

    fn segments(calls: &[DrawCall]) -> Vec<(Vec2, Vec2)> {
        calls
            .iter()
            .map(|c| match *c {
                DrawCall::Segment { from, to, .. } => (from, to),
                DrawCall::Point { .. } => panic!("pipeline emits segments only"),
            })
            .collect()
    }

    fn build_frame(world: &mut World, camera: &Camera, screen: Screen) -> Vec<DrawCall> {
        world.update_camera(camera);
        FramePipeline::new().run(world, camera, screen).to_vec()
    }

    fn is_vertical((a, b): &(Vec2, Vec2)) -> bool {
        a.x == b.x
    }

    #[test]
    fn visible_wall_emits_posts_and_outline() {
        // Wall straight ahead, across the boresight.
        let mut world = World::new();
        world
            .add_wall(&[vec2(100.0, -10.0), vec2(100.0, 10.0)], 1.0, false)
            .unwrap();
        let cam = Camera::new(OPTICS, Vec2::ZERO, 0.0);

        let calls = build_frame(&mut world, &cam, SCREEN);
        let segs = segments(&calls);
        // two posts + top + bottom
        assert_eq!(segs.len(), 4);
        assert_eq!(segs.iter().filter(|s| is_vertical(s)).count(), 2);

        let (top, bottom) = (segs[2], segs[3]);
        // post tops/bottoms are the outline's endpoints
        assert_eq!(top.0, segs[0].0);
        assert_eq!(bottom.0, segs[0].1);
        assert_eq!(top.1, segs[1].0);
        assert_eq!(bottom.1, segs[1].1);
    }

    #[test]
    fn half_visible_edge_still_draws_outline() {
        let mut world = World::new();
        // first point in view, second far off to the side
        world
            .add_wall(&[vec2(100.0, 0.0), vec2(100.0, 400.0)], 1.0, false)
            .unwrap();
        let cam = Camera::new(OPTICS, Vec2::ZERO, 0.0);

        let mut pipeline = FramePipeline::new();
        world.update_camera(&cam);
        let segs = segments(pipeline.run(&world, &cam, SCREEN));

        assert!(world.points()[0].visible);
        assert!(!world.points()[1].visible);
        assert_eq!(segs.iter().filter(|s| is_vertical(s)).count(), 1);
        assert_eq!(segs.len(), 3);

        // the hidden end lands off the panel, right of the screen
        let hidden = pipeline.edges()[1].unwrap();
        assert!(hidden.x > SCREEN.w as f32);
    }

    #[test]
    fn hidden_wall_emits_nothing() {
        let mut world = World::new();
        world
            .add_wall(&[vec2(-100.0, -10.0), vec2(-100.0, 10.0)], 1.0, true)
            .unwrap();
        let cam = Camera::new(OPTICS, Vec2::ZERO, 0.0);
        assert!(build_frame(&mut world, &cam, SCREEN).is_empty());
    }

    #[test]
    fn closed_box_draws_wraparound_edge() {
        let mut world = World::new();
        world
            .add_wall(
                &[
                    vec2(100.0, 100.0),
                    vec2(105.0, 100.0),
                    vec2(105.0, 95.0),
                    vec2(100.0, 95.0),
                ],
                80.0 / 300.0,
                true,
            )
            .unwrap();
        let cam = Camera::new(OPTICS, vec2(140.0, 160.0), heading_from_degrees(-95.0));
        let calls = build_frame(&mut world, &cam, SCREEN);
        assert!(world.points().iter().all(|p| p.visible));
        // 4 posts + 4 connections × (top, bottom)
        assert_eq!(calls.len(), 4 + 8);
    }

    #[test]
    fn point_under_the_eye_is_skipped() {
        let mut world = World::new();
        world
            .add_wall(&[vec2(0.0, 0.0), vec2(100.0, 0.0)], 1.0, false)
            .unwrap();
        let cam = Camera::new(OPTICS, Vec2::ZERO, 0.0);
        let mut pipeline = FramePipeline::new();
        world.update_camera(&cam);
        let n = pipeline.run(&world, &cam, SCREEN).len();
        assert_eq!(pipeline.edges()[0], None);
        // only the far point's post; the outline needs both ends
        assert_eq!(n, 1);
    }

    #[test]
    fn pipeline_reuses_buffers_between_frames() {
        let mut world = World::new();
        world
            .add_wall(&[vec2(100.0, -10.0), vec2(100.0, 10.0)], 1.0, false)
            .unwrap();
        let mut cam = Camera::new(OPTICS, Vec2::ZERO, 0.0);
        let mut pipeline = FramePipeline::new();

        world.update_camera(&cam);
        assert_eq!(pipeline.run(&world, &cam, SCREEN).len(), 4);

        cam.set(Vec2::ZERO, std::f32::consts::PI);
        world.update_camera(&cam);
        assert!(pipeline.run(&world, &cam, SCREEN).is_empty());
        assert_eq!(pipeline.edges().len(), 2);
    }
}
