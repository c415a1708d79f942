//! Startup configuration: compiled-in defaults, optionally overridden from
//! the command line. Nothing here changes once the viewer is running.

use clap::Parser;
use glam::{Vec2, vec2};
use thiserror::Error;

use crate::{
    engine::Screen,
    sim::Player,
    world::{Camera, FULL_HEIGHT, Optics, World, WorldError, heading_from_degrees},
};

/// Height of the two little boxes, relative to a full wall.
pub const SHORT_HEIGHT: f32 = 80.0 / 300.0;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("screen must be at least 1×1 pixels, got {w}×{h}")]
    EmptyScreen { w: usize, h: usize },

    #[error("{name} must be finite and > 0, got {value}")]
    BadOptic { name: &'static str, value: f32 },

    #[error("start pose ({x}, {y}) @ {degrees}° is not finite")]
    BadStart { x: f32, y: f32, degrees: f32 },

    #[error("start position ({x}, {y}) coincides with a wall point")]
    StartOnWallPoint { x: f32, y: f32 },
}

/// Command-line overrides; every flag falls back to [`Config::default`].
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Args {
    /// Width of one view panel in pixels (the window is twice as wide)
    #[arg(long)]
    pub width: Option<usize>,

    /// Height of the window in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Eye → projection-plane distance (world units)
    #[arg(long)]
    pub focal_distance: Option<f32>,

    /// Half-width of the projection plane (world units)
    #[arg(long)]
    pub focal_width: Option<f32>,

    /// On-screen height of a full wall seen at the focal distance (pixels)
    #[arg(long)]
    pub focal_height: Option<f32>,

    /// Start position, x
    #[arg(long, allow_hyphen_values = true)]
    pub x: Option<f32>,

    /// Start position, y
    #[arg(long, allow_hyphen_values = true)]
    pub y: Option<f32>,

    /// Start heading in degrees (0 = +x, positive turns towards +y)
    #[arg(long, allow_hyphen_values = true)]
    pub heading: Option<f32>,
}

/// One polyline of the static map.
#[derive(Clone, Debug, PartialEq)]
pub struct WallSpec {
    pub points: Vec<Vec2>,
    pub height: f32,
    pub closed: bool,
}

impl WallSpec {
    fn open(points: &[(f32, f32)]) -> Self {
        Self {
            points: points.iter().map(|&(x, y)| vec2(x, y)).collect(),
            height: FULL_HEIGHT,
            closed: false,
        }
    }

    fn short_box(points: &[(f32, f32)]) -> Self {
        Self {
            height: SHORT_HEIGHT,
            closed: true,
            ..Self::open(points)
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub screen: Screen,
    pub optics: Optics,
    pub start: Vec2,
    pub start_degrees: f32,
    pub walls: Vec<WallSpec>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen: Screen::new(500, 500),
            optics: Optics {
                focal_distance: 40.0,
                focal_width: 35.0,
                focal_height: 300.0,
            },
            start: vec2(140.0, 160.0),
            start_degrees: -95.0,
            walls: default_walls(),
        }
    }
}

/// Two corridors, a winding wall and two short boxes.
pub fn default_walls() -> Vec<WallSpec> {
    vec![
        WallSpec::open(&[
            (20.0, 120.0),
            (60.0, 120.0),
            (60.0, 60.0),
            (100.0, 60.0),
            (100.0, 20.0),
        ]),
        WallSpec::open(&[
            (160.0, 20.0),
            (160.0, 60.0),
            (200.0, 60.0),
            (200.0, 120.0),
            (240.0, 120.0),
        ]),
        WallSpec::open(&[
            (20.0, 160.0),
            (60.0, 160.0),
            (60.0, 200.0),
            (60.0, 240.0),
            (100.0, 280.0),
            (140.0, 280.0),
        ]),
        WallSpec::short_box(&[
            (100.0, 100.0),
            (105.0, 100.0),
            (105.0, 95.0),
            (100.0, 95.0),
        ]),
        WallSpec::short_box(&[
            (160.0, 100.0),
            (165.0, 100.0),
            (165.0, 95.0),
            (160.0, 95.0),
        ]),
    ]
}

impl Config {
    /// Defaults with the command-line overrides applied, then validated.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        cfg.screen.w = args.width.unwrap_or(cfg.screen.w);
        cfg.screen.h = args.height.unwrap_or(cfg.screen.h);
        let o = &mut cfg.optics;
        o.focal_distance = args.focal_distance.unwrap_or(o.focal_distance);
        o.focal_width = args.focal_width.unwrap_or(o.focal_width);
        o.focal_height = args.focal_height.unwrap_or(o.focal_height);
        cfg.start.x = args.x.unwrap_or(cfg.start.x);
        cfg.start.y = args.y.unwrap_or(cfg.start.y);
        cfg.start_degrees = args.heading.unwrap_or(cfg.start_degrees);

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Screen { w, h } = self.screen;
        if w == 0 || h == 0 {
            return Err(ConfigError::EmptyScreen { w, h });
        }

        let o = &self.optics;
        for (name, value) in [
            ("focal distance", o.focal_distance),
            ("focal width", o.focal_width),
            ("focal height", o.focal_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::BadOptic { name, value });
            }
        }

        if !self.start.is_finite() || !self.start_degrees.is_finite() {
            return Err(ConfigError::BadStart {
                x: self.start.x,
                y: self.start.y,
                degrees: self.start_degrees,
            });
        }
        if self.walls.iter().flat_map(|w| &w.points).any(|&p| p == self.start) {
            return Err(ConfigError::StartOnWallPoint {
                x: self.start.x,
                y: self.start.y,
            });
        }
        Ok(())
    }

    pub fn build_world(&self) -> Result<World, WorldError> {
        let mut world = World::new();
        for w in &self.walls {
            world.add_wall(&w.points, w.height, w.closed)?;
        }
        Ok(world)
    }

    pub fn player(&self) -> Player {
        Player::new(self.start, self.start_degrees)
    }

    pub fn camera(&self) -> Camera {
        Camera::new(
            self.optics,
            self.start,
            heading_from_degrees(self.start_degrees),
        )
    }
}
