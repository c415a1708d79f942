//! Rendering abstraction layer.
//!
//! *The rest of the viewer never touches a pixel buffer directly.*
//! The frame pipeline produces a list of [`DrawCall`]s and hands them to a
//! type that implements [`Renderer`].
//!
//! * Draw order only affects layering, never correctness.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use glam::Vec2;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// The fixed palette every draw call picks from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Colour {
    Black,
    Blue,
    Green,
    Red,
    Yellow,
}

impl Colour {
    #[inline]
    pub const fn rgba(self) -> Rgba {
        match self {
            Colour::Black => 0x00_000000,
            Colour::Blue => 0x00_0000FF,
            Colour::Green => 0x00_00FF00,
            Colour::Red => 0x00_FF0000,
            Colour::Yellow => 0x00_FFFF00,
        }
    }
}

/// One primitive in screen pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCall {
    Segment { from: Vec2, to: Vec2, colour: Colour },
    Point { at: Vec2, colour: Colour },
}

impl DrawCall {
    #[inline]
    pub fn segment(from: Vec2, to: Vec2, colour: Colour) -> Self {
        Self::Segment { from, to, colour }
    }

    #[inline]
    pub fn point(at: Vec2, colour: Colour) -> Self {
        Self::Point { at, colour }
    }

    /// Same primitive shifted by `offset` (used to place a panel).
    pub fn translated(self, offset: Vec2) -> Self {
        match self {
            Self::Segment { from, to, colour } => Self::Segment {
                from: from + offset,
                to: to + offset,
                colour,
            },
            Self::Point { at, colour } => Self::Point {
                at: at + offset,
                colour,
            },
        }
    }

    #[inline]
    pub fn colour(&self) -> Colour {
        match *self {
            Self::Segment { colour, .. } | Self::Point { colour, .. } => colour,
        }
    }
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise a straight segment; parts outside the buffer are dropped.
    fn draw_segment(&mut self, from: Vec2, to: Vec2, colour: Colour);

    /// Rasterise a small dot centred on `at`.
    fn draw_point(&mut self, at: Vec2, colour: Colour);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// `submit(&[Rgba], w, h)` is run exactly once per frame; its result is
    /// passed back to the caller.
    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T;
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F, T>(&mut self, width: usize, height: usize, calls: &[DrawCall], submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        self.begin_frame(width, height);
        for c in calls {
            match *c {
                DrawCall::Segment { from, to, colour } => self.draw_segment(from, to, colour),
                DrawCall::Point { at, colour } => self.draw_point(at, colour),
            }
        }
        self.end_frame(submit)
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod software;

pub use software::Software;
