//! A boid flock of bats swirling in front of the moon.

use libm::sinf;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::boids::{FlightBox, Flock, FlockParams, ForceWeights};
use crate::color::Rgb;
use crate::scene::{Backdrop, Scene, Tick, draw_big_moon};
use crate::surface::{HEIGHT, Surface, WIDTH};

const BAT_COLOR: Rgb = Rgb {
    r: 30,
    g: 10,
    b: 30,
};

const WEIGHTS: ForceWeights = ForceWeights {
    separation: 1.5,
    alignment: 1.0,
    cohesion: 1.0,
    boundary: 2.0,
};

pub struct BatFlockScene {
    flock: Flock,
    moon_phase: f32,
}

impl BatFlockScene {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut flock = Flock::new(
            FlockParams {
                desired_separation: 3.0,
                neighbor_radius: 8.0,
                max_speed: 1.5,
                max_force: 0.03,
                flight_box: FlightBox {
                    left: 0.0,
                    right: WIDTH as f32,
                    top: 0.0,
                    bottom: HEIGHT as f32,
                    margin: 4.0,
                    push: 0.1,
                    bottom_push: 0.1,
                },
                scatter_chance: 0.0,
            },
            rng.random(),
        );
        flock.spawn(12, (8.0, 24.0), (8.0, 24.0));
        Self {
            flock,
            moon_phase: 0.0,
        }
    }
}

impl Scene for BatFlockScene {
    fn update(&mut self, _tick: &Tick<'_>) {
        self.moon_phase += 0.02;
        self.flock.step(WEIGHTS);
    }

    fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop) {
        backdrop.draw(fb);
        draw_big_moon(fb, self.moon_phase);

        fb.set_pen(BAT_COLOR);
        for boid in self.flock.boids() {
            let x = boid.x as i32;
            let y = boid.y as i32;
            fb.pixel(x, y);
            if sinf(boid.wing_phase) > 0.0 {
                fb.pixel(x - 1, y - 1);
                fb.pixel(x, y - 1);
                fb.pixel(x + 1, y - 1);
            } else {
                fb.pixel(x - 1, y + 1);
                fb.pixel(x + 1, y + 1);
            }
        }
    }
}
