//! Skull and crossbones with burning eye sockets.

use libm::sinf;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::color::{BLACK, Rgb, scale_rgb};
use crate::eyes::{EyeConfig, EyeEngine, EyeShape};
use crate::scene::{Backdrop, Scene, Tick};
use crate::surface::Surface;

const SKULL_X: i32 = 16;
const SKULL_Y: i32 = 16;

const BONE: Rgb = Rgb {
    r: 180,
    g: 170,
    b: 140,
};
const SKULL: Rgb = Rgb {
    r: 220,
    g: 220,
    b: 200,
};

pub struct SkullScene {
    glow_phase: f32,
    eyes: EyeEngine,
}

impl SkullScene {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut eyes = EyeEngine::new(rng.random());
        let left = EyeConfig {
            x: (SKULL_X - 4) as f32,
            y: (SKULL_Y - 1) as f32,
            color: Rgb { r: 255, g: 0, b: 0 },
            radius_x: 1.0,
            radius_y: 0.5,
            shape: EyeShape::Oval,
            glow: 1.0,
        };
        let right = EyeConfig {
            x: (SKULL_X + 2) as f32,
            ..left
        };
        eyes.add_pair(left, right);

        Self {
            glow_phase: 0.0,
            eyes,
        }
    }
}

impl Scene for SkullScene {
    fn update(&mut self, tick: &Tick<'_>) {
        self.glow_phase += 0.03;
        self.eyes.update(tick.now);
    }

    fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop) {
        backdrop.draw(fb);

        let glow = 0.8 + 0.3 * sinf(self.glow_phase * 1.5);

        // Crossbones
        fb.set_pen(scale_rgb(BONE, glow));
        for i in -8..=8 {
            fb.pixel(SKULL_X + i, SKULL_Y + i);
            fb.pixel(SKULL_X - i, SKULL_Y + i);
        }
        for dx in -1..=1 {
            for dy in -1..=1 {
                for (ex, ey) in [(-7, -7), (7, -7), (-7, 7), (7, 7)] {
                    fb.pixel(SKULL_X + ex + dx, SKULL_Y + ey + dy);
                }
            }
        }

        // Cranium and jaw
        fb.set_pen(scale_rgb(SKULL, glow));
        for y in -4..=2 {
            for x in -3..=3 {
                if x * x + y * y <= 12 {
                    fb.pixel(SKULL_X + x, SKULL_Y + y);
                }
            }
        }
        for x in -2..=2 {
            fb.pixel(SKULL_X + x, SKULL_Y + 3);
        }
        fb.pixel(SKULL_X - 1, SKULL_Y + 4);
        fb.pixel(SKULL_X, SKULL_Y + 4);
        fb.pixel(SKULL_X + 1, SKULL_Y + 4);

        // Sockets, nose cavity, teeth gaps
        fb.set_pen(BLACK);
        fb.pixel(SKULL_X - 2, SKULL_Y - 1);
        fb.pixel(SKULL_X - 1, SKULL_Y - 1);
        fb.pixel(SKULL_X - 2, SKULL_Y);
        fb.pixel(SKULL_X + 2, SKULL_Y - 1);
        fb.pixel(SKULL_X + 1, SKULL_Y - 1);
        fb.pixel(SKULL_X + 2, SKULL_Y);
        fb.pixel(SKULL_X, SKULL_Y + 1);
        fb.pixel(SKULL_X - 1, SKULL_Y + 3);
        fb.pixel(SKULL_X + 1, SKULL_Y + 3);

        self.eyes.draw(fb, self.glow_phase);
    }
}
