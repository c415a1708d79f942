/// Constants that depend on the *frame-buffer*, not on the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
}

impl Screen {
    pub const fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }
}

/// Vertical edge of a wall at one world point, in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenEdge {
    pub x: f32,
    pub y_top: f32,
    pub y_bottom: f32,
}

impl ScreenEdge {
    /// Drawn height in pixels.
    #[inline]
    pub fn span(&self) -> f32 {
        self.y_bottom - self.y_top
    }
}
