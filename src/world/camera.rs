use glam::Vec2;

use super::{
    geometry::Point,
    lines::{Segment, angle_to_vector, in_box, intersect},
};
use crate::engine::types::{Screen, ScreenEdge};

/// Fixed optical parameters of the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Optics {
    /// Camera → projection-plane distance (world units).
    pub focal_distance: f32,
    /// Half-width of the projection plane (world units).
    pub focal_width: f32,
    /// Screen-space height of a full wall seen at `focal_distance`.
    pub focal_height: f32,
}

/// Result of projecting one world point through the field segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub visible: bool,
    /// Position along the field segment. Meaningful in `[0, 1]` only when
    /// `visible`; `0.0` when the ray never crosses the field line in front of
    /// the camera.
    pub field: f32,
}

impl Visibility {
    const HIDDEN: Self = Self {
        visible: false,
        field: 0.0,
    };
}

/// Viewer pose plus the projection plane derived from it.
///
/// The field segment is rebuilt on every pose change, so it can never be
/// observed out of sync with `pos`/`heading`.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pos: Vec2,
    heading: f32, // radians (0 = +X, counter-clockwise)
    optics: Optics,
    field: Segment,
}

impl Camera {
    /// Create a camera at `pos`, facing `heading`.
    pub fn new(optics: Optics, pos: Vec2, heading: f32) -> Self {
        let mut cam = Self {
            pos,
            heading,
            optics,
            field: Segment::new(pos, pos),
        };
        cam.rebuild_field();
        cam
    }

    /// Move and turn in one go; rebuilds the field segment.
    pub fn set(&mut self, pos: Vec2, heading: f32) {
        self.pos = pos;
        self.heading = heading;
        self.rebuild_field();
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn optics(&self) -> &Optics {
        &self.optics
    }

    /// Projection-plane chord: perpendicular to the view direction at
    /// `focal_distance`, `2 · focal_width` long. `a` (field 0) is the left edge when the world
    /// is drawn y-down.
    #[inline]
    pub fn field_segment(&self) -> Segment {
        self.field
    }

    /// Unit vector pointing where the camera looks.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        angle_to_vector(self.heading, 1.0)
    }

    fn rebuild_field(&mut self) {
        let o = &self.optics;
        let centre = self.pos + self.forward() * o.focal_distance;
        let perp = angle_to_vector(self.heading + std::f32::consts::FRAC_PI_2, o.focal_width);
        self.field = Segment::new(centre - perp, centre + perp);
    }

    /*───────────────────────── visibility ─────────────────────────*/

    /// Where the ray from `p` to the eye crosses the field segment.
    ///
    /// The "behind the eye" check is an axis-aligned box test on
    /// `p → crossing`, not an exact betweenness test along the ray.
    pub fn visibility_test(&self, p: Vec2) -> Visibility {
        let Some(cross) = intersect(&self.field, &Segment::new(p, self.pos)) else {
            return Visibility::HIDDEN;
        };

        if in_box(p, cross, self.pos) {
            return Visibility::HIDDEN;
        }

        match self.field.fraction_of(cross) {
            Some(field) => Visibility {
                visible: (0.0..=1.0).contains(&field),
                field,
            },
            None => Visibility::HIDDEN,
        }
    }

    /// Euclidean distance from the eye to `p`.
    #[inline]
    pub fn distance(&self, p: Vec2) -> f32 {
        self.pos.distance(p)
    }

    /*───────────────────────── projection ─────────────────────────*/

    /// Screen column and vertical span of `point`'s wall edge.
    ///
    /// ```text
    /// scale  = focal_distance / distance
    /// height = point.height · focal_height · scale
    /// bottom = (screen_h − focal_height · scale) / 2
    /// ```
    ///
    /// Uses the point's last camera update. Returns `None` when that distance
    /// is not strictly positive.
    pub fn map_point_to_screen(&self, point: &Point, screen: Screen) -> Option<ScreenEdge> {
        if !point.distance.is_finite() || point.distance <= 0.0 {
            return None;
        }
        let o = &self.optics;
        let screen_h = screen.h as f32;

        let scale = o.focal_distance / point.distance;
        let height = point.height * o.focal_height * scale;
        let bottom_offset = (screen_h - o.focal_height * scale) * 0.5;
        let top_offset = screen_h - bottom_offset - height;

        Some(ScreenEdge {
            x: point.horizontal_field * screen.w as f32,
            y_top: top_offset,
            y_bottom: screen_h - bottom_offset,
        })
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
