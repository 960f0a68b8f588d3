//! Full-screen fire with a dark grinning face looking out of it.

use libm::sinf;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::color::{Rgb, channel};
use crate::eyes::{EyeConfig, EyeEngine, EyeShape};
use crate::scene::heat::{HEAT_ROWS, HeatField};
use crate::scene::{Backdrop, Scene, Tick};
use crate::surface::{HEIGHT, Surface, WIDTH};

const FACE_X: i32 = 16;
const FACE_Y: i32 = 16;

pub struct FlameFaceScene {
    heat: HeatField,
    flicker_phase: f32,
    mouth_phase: f32,
    eyes: EyeEngine,
    rng: SmallRng,
}

impl FlameFaceScene {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut eyes = EyeEngine::new(rng.random());
        let left = EyeConfig {
            x: 10.0,
            y: 14.0,
            color: Rgb { r: 255, g: 0, b: 0 },
            radius_x: 4.0,
            radius_y: 4.0,
            shape: EyeShape::Oval,
            glow: 1.0,
        };
        let right = EyeConfig { x: 18.0, ..left };
        eyes.add_pair(left, right);

        Self {
            heat: HeatField::new(),
            flicker_phase: 0.0,
            mouth_phase: 0.0,
            eyes,
            rng,
        }
    }
}

impl Scene for FlameFaceScene {
    fn update(&mut self, tick: &Tick<'_>) {
        self.flicker_phase += 0.08;
        self.mouth_phase += 0.04;

        self.heat.diffuse(0.94);
        self.heat.clear_row(HEAT_ROWS - 1);
        self.heat.clear_row(HEAT_ROWS - 2);

        // A row of turbulent heat sources along the bottom
        let flicker1 = 0.9 + 0.3 * sinf(self.flicker_phase * 12.0);
        let flicker2 = 0.85 + 0.35 * sinf(self.flicker_phase * 10.0 + 2.1);
        let mut base_x = 2;
        while base_x < 30 {
            let local = flicker1 + 0.1 * sinf(self.flicker_phase * 15.0 + base_x as f32 * 0.5);
            for spread in -1..=1 {
                let fx = base_x + spread + self.rng.random_range(0..3) - 1;
                self.heat.set(fx, 32, local);
                self.heat.set(fx, 31, local * 0.9);
                self.heat.set(fx, 30, local * 0.8);
            }
            base_x += 4;
        }

        // Mid-level sources for extra turbulence
        let mut mid_x = 4;
        while mid_x < 28 {
            for spread in -1..=1 {
                self.heat.set(mid_x + spread, 20, flicker2 * 0.7);
                self.heat.set(mid_x + spread, 19, flicker2 * 0.56);
            }
            mid_x += 6;
        }

        self.eyes.update(tick.now);
    }

    fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let heat = self.heat.get(x, y + 3);
                if heat <= 0.1 {
                    continue;
                }
                let color = if heat > 0.6 {
                    Rgb {
                        r: 255,
                        g: 255,
                        b: channel(255.0 * heat),
                    }
                } else if heat > 0.5 {
                    Rgb {
                        r: 255,
                        g: channel(255.0 * heat),
                        b: 60,
                    }
                } else if heat > 0.4 {
                    let orange = channel(255.0 * heat);
                    Rgb {
                        r: orange,
                        g: channel(f32::from(orange) * 0.6),
                        b: 0,
                    }
                } else if heat > 0.3 {
                    let red = channel(255.0 * heat);
                    Rgb {
                        r: red,
                        g: channel(f32::from(red) * 0.3),
                        b: 0,
                    }
                } else if heat > 0.2 {
                    Rgb {
                        r: channel(200.0 * heat),
                        g: 0,
                        b: 0,
                    }
                } else {
                    let ember = channel(120.0 * heat);
                    Rgb {
                        r: ember,
                        g: channel(f32::from(ember) * 0.2),
                        b: 0,
                    }
                };
                fb.set_pen(color);
                fb.pixel(x, y);
            }
        }

        self.eyes.draw(fb, backdrop.phase());

        // Sinister grin, curving and widening with its own phase
        let mouth_curve = sinf(self.mouth_phase) * 2.0;
        let mouth_width = sinf(self.mouth_phase * 0.7) * 0.5 + 1.0;
        fb.set_pen(Rgb { r: 0, g: 0, b: 0 });
        for mx in -8..=8_i32 {
            let normalized = mx as f32 / 8.0;
            let mouth_y = FACE_Y + 6 + (mouth_curve * normalized * normalized) as i32;
            if (mx.abs() as f32) < 6.0 * mouth_width {
                fb.pixel(FACE_X + mx, mouth_y);
                if mx.abs() < 4 {
                    fb.pixel(FACE_X + mx, mouth_y + 1);
                }
            }
        }
        if sinf(self.mouth_phase * 2.0) > 0.3 {
            for tooth in [-2, 0, 2_i32] {
                fb.pixel(FACE_X + tooth * 2, FACE_Y + 5);
            }
        }
    }
}
