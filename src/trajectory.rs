// Randomized launch parameters, bounded so every shot lands on screen.

use crate::physics::GRAVITY;
use crate::rng::SimRng;

pub const ANGLE_MIN_DEG: f32 = 20.0;
pub const ANGLE_MAX_DEG: f32 = 80.0;
pub const SPEED_FRACTION_MIN: f32 = 0.40;
pub const SPEED_FRACTION_MAX: f32 = 0.95;

#[derive(Clone, Copy, Debug)]
pub struct Launch {
    /// Elevation above horizontal, radians, always positive here.
    pub angle: f32,
    pub speed: f32,
}

impl Launch {
    /// Velocity components in screen coordinates: left is -x, up is -y.
    pub fn velocity(&self) -> (f32, f32) {
        (-self.speed * self.angle.cos(), -self.speed * self.angle.sin())
    }
}

/// Largest launch speed whose flat-ground range `v²·sin(2θ)/g` still fits
/// within `range_limit`. The angle range keeps sin(2θ) well away from zero,
/// so the division is safe.
pub fn max_speed(angle: f32, range_limit: f32) -> f32 {
    (range_limit * GRAVITY / (2.0 * angle).sin()).sqrt()
}

/// Draw a random elevation in [20°, 80°] and a speed between 40% and 95% of
/// the largest speed that keeps the landing point within `range_limit`.
pub fn random_launch(rng: &mut SimRng, range_limit: f32) -> Launch {
    let angle = rng.gen_range(ANGLE_MIN_DEG, ANGLE_MAX_DEG).to_radians();
    let speed = max_speed(angle, range_limit)
        * rng.gen_range(SPEED_FRACTION_MIN, SPEED_FRACTION_MAX);
    Launch { angle, speed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_stays_clear_of_the_sin2theta_singularity() {
        let mut rng = SimRng::new(99);
        for _ in 0..1000 {
            let l = random_launch(&mut rng, 950.0);
            let deg = l.angle.to_degrees();
            assert!((ANGLE_MIN_DEG..ANGLE_MAX_DEG).contains(&deg));
            // min of sin(2θ) on [20°, 80°] is sin(160°) = sin(20°) ≈ 0.342
            assert!((2.0 * l.angle).sin() > 0.34);
        }
    }

    #[test]
    fn speed_and_range_stay_within_bounds() {
        let mut rng = SimRng::new(5);
        let limit = 950.0;
        for _ in 0..1000 {
            let l = random_launch(&mut rng, limit);
            let cap = max_speed(l.angle, limit);
            assert!(l.speed >= SPEED_FRACTION_MIN * cap - 1e-3);
            assert!(l.speed <= SPEED_FRACTION_MAX * cap + 1e-3);
            let range = l.speed * l.speed * (2.0 * l.angle).sin() / GRAVITY;
            assert!(range <= limit + 1e-2);
        }
    }

    #[test]
    fn max_speed_matches_hand_computation() {
        // 45° with a 950-unit bound and g = 0.5: v² = 950·0.5/sin 90° = 475
        let v = max_speed(45.0_f32.to_radians(), 950.0);
        assert!((v - 475.0_f32.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn velocity_points_up_and_left() {
        let l = Launch {
            angle: 45.0_f32.to_radians(),
            speed: 13.08,
        };
        let (vx, vy) = l.velocity();
        assert!(vx < 0.0 && vy < 0.0);
        assert!((vx - vy).abs() < 1e-4); // 45°: equal components
    }
}
