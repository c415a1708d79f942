//! ---------------------------------------------------------------------------
//! CPU line renderer
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * White background, integer Bresenham segments, filled dots.
//! ---------------------------------------------------------------------------

use glam::{DVec2, Vec2};

use crate::renderer::{Colour, Renderer, Rgba};

const BACKGROUND: Rgba = 0x00_FFFFFF;

/// Radius (pixels) of the dot drawn by `draw_point`.
const DOT_RADIUS: i32 = 2;

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(BACKGROUND);
    }

    fn draw_segment(&mut self, from: Vec2, to: Vec2, colour: Colour) {
        // Far-off endpoints (points barely in front of the eye) would make
        // Bresenham walk millions of pixels; clip to a generous band first.
        let Some((from, to)) = self.clip(from, to) else {
            return;
        };
        self.line(
            from.x as i32,
            from.y as i32,
            to.x as i32,
            to.y as i32,
            colour.rgba(),
        );
    }

    fn draw_point(&mut self, at: Vec2, colour: Colour) {
        if !at.is_finite() {
            return;
        }
        let (cx, cy) = (at.x as i32, at.y as i32);
        let col = colour.rgba();
        for dy in -DOT_RADIUS..=DOT_RADIUS {
            for dx in -DOT_RADIUS..=DOT_RADIUS {
                if dx * dx + dy * dy <= DOT_RADIUS * DOT_RADIUS {
                    self.put(cx + dx, cy + dy, col);
                }
            }
        }
    }

    fn end_frame<F, T>(&mut self, submit: F) -> T
    where
        F: FnOnce(&[Rgba], usize, usize) -> T,
    {
        submit(&self.scratch, self.width, self.height)
    }
}

/*──────────────────────── rasterisation ──────────────────────────────*/
impl Software {
    #[inline]
    fn put(&mut self, x: i32, y: i32, col: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.scratch[y as usize * self.width + x as usize] = col;
        }
    }

    /// Integer Bresenham line-drawing algorithm.
    fn line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, col: Rgba) {
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, col);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Liang–Barsky clip of `a → b` against the frame grown by one frame
    /// size on every side. `None` if nothing is left.
    ///
    /// Runs in f64: endpoints can be ~1e9 px away when a point sits right
    /// next to the eye.
    fn clip(&self, a: Vec2, b: Vec2) -> Option<(Vec2, Vec2)> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        let (a, b) = (a.as_dvec2(), b.as_dvec2());
        let (w, h) = (self.width as f64, self.height as f64);
        let (min, max) = (DVec2::new(-w, -h), DVec2::new(2.0 * w, 2.0 * h));
        let d = b - a;

        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        for (p, q) in [
            (-d.x, a.x - min.x),
            (d.x, max.x - a.x),
            (-d.y, a.y - min.y),
            (d.y, max.y - a.y),
        ] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some(((a + d * t0).as_vec2(), (a + d * t1).as_vec2()))
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.scratch[y * self.width + x]
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, RendererExt};
    use glam::vec2;

    #[test]
    fn software_renders_segment() {
        let mut sw = Software::default();
        let calls = [DrawCall::segment(vec2(1.0, 1.0), vec2(6.0, 1.0), Colour::Green)];
        let greens = sw.draw_frame(8, 8, &calls, |fb, w, h| {
            assert_eq!((w, h), (8, 8));
            fb.iter().filter(|&&px| px == Colour::Green.rgba()).count()
        });
        assert_eq!(greens, 6);
    }

    #[test]
    fn begin_frame_clears_to_white() {
        let mut sw = Software::default();
        sw.begin_frame(4, 4);
        sw.draw_point(vec2(2.0, 2.0), Colour::Red);
        sw.begin_frame(4, 4);
        assert!(sw.scratch.iter().all(|&px| px == BACKGROUND));
    }

    #[test]
    fn point_is_a_filled_dot() {
        let mut sw = Software::default();
        sw.begin_frame(9, 9);
        sw.draw_point(vec2(4.0, 4.0), Colour::Blue);
        assert_eq!(sw.pixel(4, 4), Colour::Blue.rgba());
        assert_eq!(sw.pixel(4, 2), Colour::Blue.rgba());
        assert_eq!(sw.pixel(2, 2), BACKGROUND);
    }

    #[test]
    fn off_screen_geometry_is_dropped() {
        let mut sw = Software::default();
        sw.begin_frame(8, 8);
        sw.draw_point(vec2(-50.0, 3.0), Colour::Red);
        sw.draw_segment(vec2(100.0, 100.0), vec2(200.0, 120.0), Colour::Red);
        sw.draw_segment(vec2(f32::NAN, 0.0), vec2(3.0, 3.0), Colour::Red);
        assert!(sw.scratch.iter().all(|&px| px == BACKGROUND));
    }

    #[test]
    fn huge_segments_are_clipped_not_walked() {
        let mut sw = Software::default();
        sw.begin_frame(8, 8);
        sw.draw_segment(vec2(-1e9, 4.0), vec2(1e9, 4.0), Colour::Black);
        for x in 0..8 {
            assert_eq!(sw.pixel(x, 4), Colour::Black.rgba());
        }
    }
}
