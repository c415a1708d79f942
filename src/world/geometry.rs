use glam::Vec2;

pub type PointId = usize;
pub type WallId = usize;

/// Height of an ordinary wall, as a multiple of the camera's focal height.
pub const FULL_HEIGHT: f32 = 1.0;

/*--------------------------- points ---------------------------------*/

/// World-plane vertex plus the per-frame camera-relative state written by
/// [`World::update_camera`](super::World::update_camera).
#[derive(Clone, Debug)]
pub struct Point {
    pub pos: Vec2,
    /// Multiplier against the camera's focal height (1.0 = full wall).
    pub height: f32,

    /* refreshed every frame */
    pub visible: bool,
    pub horizontal_field: f32, // 0 = left edge, 1 = right edge
    pub distance: f32,
}

impl Point {
    /// Fresh point; camera state is blank until the first camera update.
    pub fn new(pos: Vec2, height: f32) -> Self {
        Self {
            pos,
            height,
            visible: false,
            horizontal_field: 0.0,
            distance: 0.0,
        }
    }
}

/*---------------------------- walls ---------------------------------*/

/// Polyline through points of the owning [`World`](super::World).
///
/// Stores indices only; `first..first + len` is the contiguous block the
/// wall's points were appended as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wall {
    pub first: PointId,
    pub len: usize,
    pub closed: bool,
}

impl Wall {
    /// Point indices in connection order, with the first one repeated at the
    /// end when the wall is closed.
    pub fn path(&self) -> impl Iterator<Item = PointId> + '_ {
        let wrap = (self.closed && self.len > 0).then_some(self.first);
        self.points().chain(wrap)
    }

    /// Consecutive `(from, to)` pairs: `len − 1` for an open wall, `len` for
    /// a closed one.
    pub fn connections(&self) -> impl Iterator<Item = (PointId, PointId)> + '_ {
        self.path().zip(self.path().skip(1))
    }

    #[inline]
    pub fn points(&self) -> std::ops::Range<PointId> {
        self.first..self.first + self.len
    }
}
