//! Top-down map panel, drawn 1:1 in world units.

use crate::{
    renderer::{Colour, DrawCall},
    world::{Camera, World},
};

/// Append the map view of `world` and `camera` to `out`.
///
/// * wall connections – black segments
/// * visible points   – black dots
/// * eye              – blue dot
/// * field segment    – green segment
pub fn draw_overview(world: &World, camera: &Camera, out: &mut Vec<DrawCall>) {
    let points = world.points();

    out.extend(
        world
            .connections()
            .map(|(a, b)| DrawCall::segment(points[a].pos, points[b].pos, Colour::Black)),
    );
    out.extend(
        points
            .iter()
            .filter(|p| p.visible)
            .map(|p| DrawCall::point(p.pos, Colour::Black)),
    );

    out.push(DrawCall::point(camera.pos(), Colour::Blue));
    let field = camera.field_segment();
    out.push(DrawCall::segment(field.a, field.b, Colour::Green));
}
