mod physics;
mod render;
mod rng;
mod scene;
mod scheduler;
mod sim;
mod trajectory;

use macroquad::prelude::*;

use scheduler::DisplayScheduler;
use sim::Simulation;

fn window_conf() -> Conf {
    Conf {
        window_title: "Cannonade".to_string(),
        window_width: 1280,
        window_height: 720,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Wall-clock seed; low bits vary per run.
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64 as u32;
    let mut sim = Simulation::new(
        screen_width(),
        screen_height(),
        seed,
        DisplayScheduler::new(),
    );

    loop {
        sim.poll();
        render::draw_scene(sim.scene());
        next_frame().await;
    }
}
