// Projectile kinematics: constant gravity, explicit Euler steps, ground contact.

/// Downward acceleration per step², in screen units (y grows downward).
pub const GRAVITY: f32 = 0.5;

pub const CANNON_WIDTH: f32 = 50.0;
pub const CANNON_HEIGHT: f32 = 20.0;
pub const PROJECTILE_RADIUS: f32 = 5.0;

#[derive(Clone, Copy, Debug)]
pub struct Cannon {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Barrel angle in radians, negative = up and to the left.
    pub angle: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Projectile {
    /// One Euler step: gravity first, then position from the updated velocity.
    pub fn step(&mut self) {
        self.vy += GRAVITY;
        self.x += self.vx;
        self.y += self.vy;
    }

    pub fn touches_ground(&self, ground_y: f32) -> bool {
        self.y + self.radius >= ground_y
    }
}
