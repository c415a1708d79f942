use glam::{Vec2, vec2};

/// Straight segment between two world-plane points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// `b - a`.
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.b - self.a
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.delta().length()
    }

    /// Fraction in `a → b` of a point `p` already known to lie on the
    /// segment's line.
    ///
    /// Interpolates on the axis with the larger extent rather than on x
    /// unless the segment is vertical; both agree for points on the line.
    /// Returns `None` when the segment has zero length.
    pub fn fraction_of(&self, p: Vec2) -> Option<f32> {
        let d = self.delta();
        if d.x == 0.0 && d.y == 0.0 {
            return None;
        }
        if d.x.abs() >= d.y.abs() {
            Some((p.x - self.a.x) / d.x)
        } else {
            Some((p.y - self.a.y) / d.y)
        }
    }
}

/// Intersection point of the two *infinite lines* through `s1` and `s2`.
///
/// ```text
/// t = ((x1−x3)(y3−y4) − (y1−y3)(x3−x4)) / ((x1−x2)(y3−y4) − (y1−y2)(x3−x4))
/// p = s1.a + t · (s1.b − s1.a)
/// ```
///
/// Parallel or coincident lines give `None`. Whether `p` falls inside either
/// segment is the caller's business.
pub fn intersect(s1: &Segment, s2: &Segment) -> Option<Vec2> {
    let (x1, y1, x2, y2) = (s1.a.x, s1.a.y, s1.b.x, s1.b.y);
    let (x3, y3, x4, y4) = (s2.a.x, s2.a.y, s2.b.x, s2.b.y);

    let t_den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if t_den == 0.0 {
        return None;
    }
    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / t_den;

    Some(vec2(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
}

/// Vector of length `len` pointing along `angle` (radians, 0 = +X, CCW).
#[inline]
pub fn angle_to_vector(angle: f32, len: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    vec2(c * len, s * len)
}

/// `degrees / 360 · 2π`.
#[inline]
pub fn heading_from_degrees(degrees: f32) -> f32 {
    degrees / 360.0 * std::f32::consts::TAU
}

/// True if `p` lies inside the axis-aligned box spanned by `a` and `b`
/// (edges inclusive).
#[inline]
pub fn in_box(a: Vec2, b: Vec2, p: Vec2) -> bool {
    let lo = a.min(b);
    let hi = a.max(b);
    (lo.x..=hi.x).contains(&p.x) && (lo.y..=hi.y).contains(&p.y)
}
