//! Swaying dead tree with glowing eyes in its hollow.

use libm::sinf;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::color::Rgb;
use crate::eyes::{EyeConfig, EyeEngine, EyeShape};
use crate::scene::{Backdrop, Scene, Tick};
use crate::surface::Surface;

const TREE_X: i32 = 16;
const TREE_BASE_Y: i32 = 30;

pub struct HauntedTreeScene {
    sway_phase: f32,
    glow_phase: f32,
    eyes: EyeEngine,
}

impl HauntedTreeScene {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut eyes = EyeEngine::new(rng.random());
        let left = EyeConfig {
            x: (TREE_X - 4) as f32,
            y: (TREE_BASE_Y - 5) as f32,
            color: Rgb { r: 255, g: 0, b: 0 },
            radius_x: 1.0,
            radius_y: 0.5,
            shape: EyeShape::Triangle,
            glow: 0.9,
        };
        let right = EyeConfig {
            x: (TREE_X + 4) as f32,
            ..left
        };
        eyes.add_pair(left, right);

        Self {
            sway_phase: 0.0,
            glow_phase: 0.0,
            eyes,
        }
    }
}

impl Scene for HauntedTreeScene {
    fn update(&mut self, tick: &Tick<'_>) {
        self.sway_phase += 0.5;
        self.glow_phase += 0.04;
        self.eyes.update(tick.now);
    }

    fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop) {
        backdrop.draw(fb);

        let sway = sinf(self.sway_phase) * 2.0;

        // Trunk bends more the higher it goes
        fb.set_pen(Rgb {
            r: 80,
            g: 60,
            b: 40,
        });
        for y in (TREE_BASE_Y - 12..=TREE_BASE_Y).rev() {
            let height_factor = (TREE_BASE_Y - y) as f32 / 12.0;
            let sway_x = TREE_X + (sway * height_factor) as i32;
            for x in sway_x - 1..=sway_x + 1 {
                fb.pixel(x, y);
            }
        }

        // Gnarled branches
        fb.set_pen(Rgb {
            r: 60,
            g: 45,
            b: 30,
        });
        let branch_start_y = TREE_BASE_Y - 8;
        for i in 0..6 {
            let x = TREE_X - 2 - i + (sway * 0.5) as i32;
            let y = branch_start_y - i / 2 + (sinf(self.sway_phase + i as f32 * 0.5) * 1.5) as i32;
            fb.pixel(x, y);
        }
        for i in 0..5 {
            let x = TREE_X + 2 + i + (sway * 0.5) as i32;
            let y =
                branch_start_y - 2 - i / 2 + (sinf(self.sway_phase + i as f32 * 0.3) * 1.2) as i32;
            fb.pixel(x, y);
        }

        // Hanging moss and cobwebs
        fb.set_pen(Rgb {
            r: 40,
            g: 40,
            b: 40,
        });
        for i in 0..4 {
            let web_sway = sinf(self.sway_phase * 1.5 + i as f32 * 0.8) * 0.5;
            let x = TREE_X - 4 + i * 2 + (web_sway + sway * 0.2) as i32;
            for j in 0..3 + i % 2 {
                fb.pixel(x, TREE_BASE_Y - 15 + j);
            }
        }

        self.eyes.draw(fb, self.glow_phase);
    }
}
