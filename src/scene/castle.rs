//! Castle silhouette with lit windows and bats overhead.

use libm::{sinf, sqrtf};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::boids::{FlightBox, Flock, FlockParams, ForceWeights};
use crate::color::{Rgb, channel};
use crate::scene::{Backdrop, Scene, Tick};
use crate::surface::{HEIGHT, Surface, WIDTH};

const WEIGHTS: ForceWeights = ForceWeights {
    separation: 1.5,
    alignment: 1.0,
    cohesion: 1.0,
    boundary: 2.0,
};

pub struct CastleScene {
    window_phase: f32,
    flock: Flock,
}

impl CastleScene {
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
            window_phase: 0.0,
            flock,
        }
    }
}

impl Scene for CastleScene {
    fn update(&mut self, _tick: &Tick<'_>) {
        self.window_phase += 0.04;
        self.flock.step(WEIGHTS);
    }

    fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop) {
        backdrop.draw(fb);

        // Crescent moon in the corner
        fb.set_pen(Rgb {
            r: 220,
            g: 220,
            b: 180,
        });
        for dy in -3..=3_i32 {
            for dx in -3..=3_i32 {
                let dist = sqrtf((dx * dx + dy * dy) as f32);
                if dist <= 3.0 {
                    let carve_x = dx as f32 + 1.5;
                    if sqrtf(carve_x * carve_x + (dy * dy) as f32) > 2.5 {
                        fb.pixel(8 + dx, 6 + dy);
                    }
                }
            }
        }

        // Silhouette, built from the foundation up
        fb.set_pen(Rgb {
            r: 80,
            g: 30,
            b: 80,
        });
        fill_rect(fb, 8, 28, 24, 31);
        fill_rect(fb, 10, 18, 22, 27);
        fill_rect(fb, 8, 12, 12, 27);
        fill_rect(fb, 20, 12, 24, 27);
        fill_rect(fb, 14, 8, 18, 17);

        // Battlements
        for x in (8..=12).step_by(2) {
            fb.pixel(x, 11);
        }
        for x in (20..=24).step_by(2) {
            fb.pixel(x, 11);
        }
        for x in (14..=18).step_by(2) {
            fb.pixel(x, 7);
        }

        // Gate with arch
        fb.set_pen(Rgb { r: 5, g: 5, b: 5 });
        fill_rect(fb, 15, 24, 17, 27);
        fb.pixel(15, 23);
        fb.pixel(17, 23);
        fb.pixel(16, 22);

        // Windows, breathing between dim and bright
        let window_glow = 0.7 + 0.3 * sinf(self.window_phase * 1.2);
        let bright = channel(window_glow * 255.0);
        let amber = channel(window_glow * 200.0);
        fb.set_pen(Rgb {
            r: bright,
            g: amber,
            b: 0,
        });
        let windows = [
            (10, 15),
            (10, 20),
            (10, 24),
            (22, 15),
            (22, 20),
            (22, 24),
            (16, 10),
            (16, 13),
            (12, 21),
            (20, 21),
            (14, 24),
            (18, 24),
        ];
        for (x, y) in windows {
            fb.pixel(x, y);
        }

        if window_glow > 0.8 {
            fb.set_pen(Rgb {
                r: bright / 2,
                g: amber / 2,
                b: 0,
            });
            for (x, y) in [(10, 15), (22, 20), (16, 10)] {
                fb.pixel(x - 1, y);
                fb.pixel(x + 1, y);
                fb.pixel(x, y - 1);
                fb.pixel(x, y + 1);
            }
        }

        // Ground fog
        fb.set_pen(Rgb {
            r: 30,
            g: 25,
            b: 35,
        });
        for i in 0..8 {
            let fog_x = 6.0 + i as f32 * 2.5 + sinf(self.window_phase * 0.5 + i as f32 * 0.8) * 1.5;
            let fog_y = 29.0 + sinf(self.window_phase * 0.3 + i as f32) * 0.5;
            fb.pixel(fog_x as i32, fog_y as i32);
        }

        // Bats circling the towers
        fb.set_pen(Rgb {
            r: 30,
            g: 10,
            b: 30,
        });
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

fn fill_rect(fb: &mut Surface, x0: i32, y0: i32, x1: i32, y1: i32) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            fb.pixel(x, y);
        }
    }
}
