// Loop driver: owns the scene, the rng and the scheduler, and turns fired
// callbacks into physics steps or round restarts.

use macroquad::logging::info;

use crate::rng::SimRng;
use crate::scene::{Bounds, Scene};
use crate::scheduler::{Handle, Scheduler};

/// Pause between a landing and the next launch, in milliseconds.
pub const RESTART_DELAY_MS: f64 = 5000.0;

pub struct Simulation<S: Scheduler> {
    scene: Scene,
    rng: SimRng,
    sched: S,
    /// The one outstanding callback (frame or restart timer). Reset cancels
    /// it, so two trajectories can never run interleaved.
    pending: Option<Handle>,
}

impl<S: Scheduler> Simulation<S> {
    pub fn new(width: f32, height: f32, seed: u32, sched: S) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "drawing surface has no area ({width}x{height})"
        );
        let mut rng = SimRng::new(seed);
        let scene = Scene::new(Bounds::new(width, height), &mut rng);
        let mut sim = Simulation {
            scene,
            rng,
            sched,
            pending: None,
        };
        sim.reset();
        sim
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Start a fresh round: cancel whatever callback is still pending, roll
    /// a new trajectory and arm the first frame.
    pub fn reset(&mut self) {
        if let Some(h) = self.pending.take() {
            self.sched.cancel(h);
        }
        let launch = self.scene.reset(&mut self.rng);
        info!(
            "fired: angle {:.1} deg, speed {:.2}",
            launch.angle.to_degrees(),
            launch.speed
        );
        self.pending = Some(self.sched.schedule_frame());
    }

    /// Run whatever callback has come due. Returns true when scene state
    /// changed (the host redraws every frame regardless).
    pub fn poll(&mut self) -> bool {
        let Some(fired) = self.sched.poll() else {
            return false;
        };
        if self.pending != Some(fired) {
            // Stale handle from before a reset; the cancel in reset() should
            // make this unreachable, but a stale callback must never touch
            // the new round.
            return false;
        }
        self.pending = None;

        if !self.scene.shooting {
            // The restart timer fired.
            self.reset();
            return true;
        }

        self.scene.step_physics();
        self.scene.sample_path();
        if self.scene.check_landing() {
            info!("landed at x {:.0}", self.scene.projectile.x);
            self.pending = Some(self.sched.schedule_timeout(RESTART_DELAY_MS));
        } else {
            self.pending = Some(self.sched.schedule_frame());
        }
        true
    }
}
