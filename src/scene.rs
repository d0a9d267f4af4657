// Per-round scene state and the three operations the loop runs over it:
// physics step, path sample, ground check.

use crate::physics::{Cannon, Projectile, CANNON_HEIGHT, CANNON_WIDTH, PROJECTILE_RADIUS};
use crate::rng::SimRng;
use crate::trajectory::{self, Launch};

/// Record a path dot every this many frames.
pub const PATH_SAMPLE_INTERVAL: u32 = 4;

/// Drawing surface size, captured once at startup. Ground sits at 90% height.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub ground_y: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Bounds {
            width,
            height,
            ground_y: height * 0.9,
        }
    }
}

pub struct Scene {
    pub bounds: Bounds,
    pub cannon: Cannon,
    pub projectile: Projectile,
    pub path: Vec<(f32, f32)>,
    /// True while the projectile is airborne; gates physics updates.
    pub shooting: bool,
    pub frame: u32,
}

impl Scene {
    pub fn new(bounds: Bounds, rng: &mut SimRng) -> Scene {
        let mut scene = Scene {
            bounds,
            cannon: Cannon {
                x: 0.0,
                y: 0.0,
                width: CANNON_WIDTH,
                height: CANNON_HEIGHT,
                angle: 0.0,
            },
            projectile: Projectile {
                x: 0.0,
                y: 0.0,
                radius: PROJECTILE_RADIUS,
                vx: 0.0,
                vy: 0.0,
            },
            path: Vec::new(),
            shooting: false,
            frame: 0,
        };
        scene.reset(rng);
        scene
    }

    /// Start a fresh round: fixed cannon pose, new random launch, empty path.
    /// Returns the launch for logging.
    pub fn reset(&mut self, rng: &mut SimRng) -> Launch {
        let cx = self.bounds.width - CANNON_WIDTH;
        let cy = self.bounds.ground_y;
        // The cannon sits `cx` units from the left edge; that distance bounds
        // the allowed range.
        let launch = trajectory::random_launch(rng, cx);
        let (vx, vy) = launch.velocity();

        self.cannon = Cannon {
            x: cx,
            y: cy,
            width: CANNON_WIDTH,
            height: CANNON_HEIGHT,
            angle: -launch.angle,
        };
        self.projectile = Projectile {
            x: cx,
            y: cy,
            radius: PROJECTILE_RADIUS,
            vx,
            vy,
        };
        self.path.clear();
        self.shooting = true;
        self.frame = 0;
        launch
    }

    /// One physics step; no-op once the projectile has landed.
    pub fn step_physics(&mut self) {
        if !self.shooting {
            return;
        }
        self.projectile.step();
    }

    /// Record a path dot every 4th frame. The counter advances every call,
    /// shooting or not.
    pub fn sample_path(&mut self) {
        if self.frame % PATH_SAMPLE_INTERVAL == 0 {
            self.path.push((self.projectile.x, self.projectile.y));
        }
        self.frame += 1;
    }

    /// Ground-contact check. On first contact, clamps the projectile onto the
    /// ground and clears the shooting flag. Returns true only on that
    /// airborne-to-landed transition; later calls mutate nothing.
    pub fn check_landing(&mut self) -> bool {
        if !self.shooting {
            return false;
        }
        if self.projectile.touches_ground(self.bounds.ground_y) {
            self.projectile.y = self.bounds.ground_y;
            self.shooting = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with_seed(seed: u32) -> (Scene, SimRng) {
        let mut rng = SimRng::new(seed);
        let scene = Scene::new(Bounds::new(1000.0, 600.0), &mut rng);
        (scene, rng)
    }

    #[test]
    fn fresh_round_invariants() {
        let (scene, _) = scene_with_seed(1);
        assert!(scene.shooting);
        assert!(scene.path.is_empty());
        assert_eq!(scene.frame, 0);
        assert_eq!(scene.cannon.x, 950.0);
        assert_eq!(scene.cannon.y, 540.0);
        assert_eq!(scene.projectile.x, scene.cannon.x);
        assert_eq!(scene.projectile.y, scene.cannon.y);
        assert!(scene.cannon.angle < 0.0);
        assert!(scene.projectile.vx < 0.0 && scene.projectile.vy < 0.0);
    }

    #[test]
    fn path_records_every_fourth_frame() {
        let (mut scene, _) = scene_with_seed(2);
        // Park the projectile far above ground so the round never ends here.
        scene.projectile.y = -1.0e6;
        scene.projectile.vy = 0.0;
        for k in 1..=40u32 {
            scene.step_physics();
            scene.sample_path();
            scene.check_landing();
            // samples at frames 0, 4, 8, ...
            assert_eq!(scene.path.len() as u32, (k + 3) / 4);
        }
    }

    #[test]
    fn stepper_is_gated_by_the_shooting_flag() {
        let (mut scene, _) = scene_with_seed(3);
        scene.shooting = false;
        let before = (scene.projectile.x, scene.projectile.y, scene.projectile.vy);
        scene.step_physics();
        assert_eq!(
            before,
            (scene.projectile.x, scene.projectile.y, scene.projectile.vy)
        );
    }

    #[test]
    fn landing_clamps_once_and_stays_frozen() {
        let (mut scene, _) = scene_with_seed(4);
        let ground = scene.bounds.ground_y;
        scene.projectile.y = ground - 1.0;
        scene.projectile.vy = 10.0;
        scene.step_physics();
        assert!(scene.check_landing());
        assert_eq!(scene.projectile.y, ground);
        assert!(!scene.shooting);

        // Repeated checks after landing are no-ops.
        let frozen = (scene.projectile.x, scene.projectile.y);
        for _ in 0..10 {
            scene.step_physics();
            assert!(!scene.check_landing());
        }
        assert_eq!(frozen, (scene.projectile.x, scene.projectile.y));
    }

    #[test]
    fn reset_clears_the_previous_round() {
        let (mut scene, mut rng) = scene_with_seed(5);
        for _ in 0..12 {
            scene.step_physics();
            scene.sample_path();
        }
        assert!(!scene.path.is_empty());
        scene.reset(&mut rng);
        assert!(scene.path.is_empty());
        assert_eq!(scene.frame, 0);
        assert!(scene.shooting);
        assert_eq!(scene.projectile.x, scene.cannon.x);
    }
}
