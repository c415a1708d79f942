use glam::{Vec2, vec2};
use log::trace;

use crate::{
    engine::{overview::draw_overview, pipeline::FramePipeline, types::Screen},
    renderer::{Colour, DrawCall, Renderer, RendererExt, Rgba},
    world::{Camera, World},
};

/// Owns everything needed to turn one camera pose into one displayed frame.
///
/// The output image is two panels wide: top-down map on the left,
/// first-person view on the right, split by a black divider.
pub struct Engine<R: Renderer> {
    pub renderer: R,
    pub world: World,
    pub camera: Camera,
    pub screen: Screen,
    pipeline: FramePipeline,
    calls: Vec<DrawCall>,
}

impl<R: Renderer> Engine<R> {
    pub fn new(renderer: R, world: World, camera: Camera, screen: Screen) -> Self {
        Self {
            renderer,
            world,
            camera,
            screen,
            pipeline: FramePipeline::new(),
            calls: Vec::new(),
        }
    }

    /// Size of the composed image (both panels).
    #[inline]
    pub fn frame_size(&self) -> (usize, usize) {
        (self.screen.w * 2, self.screen.h)
    }

    /// Sync the world with the camera and collect the frame's draw calls.
    pub fn compose(&mut self) -> &[DrawCall] {
        self.world.update_camera(&self.camera);

        self.calls.clear();
        draw_overview(&self.world, &self.camera, &mut self.calls);

        let w = self.screen.w as f32;
        self.calls.push(DrawCall::segment(
            vec2(w, 0.0),
            vec2(w, self.screen.h as f32),
            Colour::Black,
        ));

        let offset = Vec2::new(w, 0.0);
        let first_person = self.pipeline.run(&self.world, &self.camera, self.screen);
        self.calls
            .extend(first_person.iter().map(|c| c.translated(offset)));

        trace!("frame composed: {} draw calls", self.calls.len());
        &self.calls
    }

    /// Compose and rasterise one frame, then loan the pixels to `submit`.
    pub fn render_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        self.compose();
        let (w, h) = self.frame_size();
        self.renderer.draw_frame(w, h, &self.calls, submit)
    }
}
