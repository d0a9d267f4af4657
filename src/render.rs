// Stateless drawing over macroquad primitives. No physics in here; the scene
// is read-only.

use macroquad::prelude::*;

use crate::physics::{Cannon, Projectile};
use crate::scene::Scene;

const SKY_COLOR: Color = Color::new(0.529, 0.808, 0.922, 1.0); // light blue
const GROUND_COLOR: Color = Color::new(0.133, 0.545, 0.133, 1.0); // forest green
const CANNON_COLOR: Color = BLACK;
const PROJECTILE_COLOR: Color = BLACK;
const PATH_COLOR: Color = BLACK;

const PATH_DOT_RADIUS: f32 = 2.0;

/// Clear and redraw the whole frame in back-to-front order.
pub fn draw_scene(scene: &Scene) {
    draw_background(scene.bounds.width, scene.bounds.height, scene.bounds.ground_y);
    draw_path(&scene.path);
    draw_cannon(&scene.cannon);
    draw_projectile(&scene.projectile);
}

/// Sky down to the ground line, ground below it. Clearing to the sky color
/// doubles as the per-frame clear.
pub fn draw_background(width: f32, height: f32, ground_y: f32) {
    clear_background(SKY_COLOR);
    draw_rectangle(0.0, ground_y, width, height - ground_y, GROUND_COLOR);
}

pub fn draw_path(points: &[(f32, f32)]) {
    for &(x, y) in points {
        draw_circle(x, y, PATH_DOT_RADIUS, PATH_COLOR);
    }
}

/// The barrel is a rectangle pivoting on its ground end. Unrotated it extends
/// left of the pivot; the stored angle is negative (up-left), so the screen
/// rotation is its negation (y grows downward).
pub fn draw_cannon(cannon: &Cannon) {
    draw_rectangle_ex(
        cannon.x,
        cannon.y,
        cannon.width,
        cannon.height,
        DrawRectangleParams {
            offset: vec2(1.0, 0.5),
            rotation: -cannon.angle,
            color: CANNON_COLOR,
        },
    );
}

pub fn draw_projectile(projectile: &Projectile) {
    draw_circle(projectile.x, projectile.y, projectile.radius, PROJECTILE_COLOR);
}
