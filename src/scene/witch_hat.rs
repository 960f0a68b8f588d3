//! Witch hat under a rainbow of drifting sparkles.

use libm::{cosf, sinf};

use crate::color::{Hsv, Rgb, channel, hsv2rgb};
use crate::scene::{Backdrop, Scene, Tick};
use crate::surface::Surface;

pub struct WitchHatScene {
    sparkle_phase: f32,
}

impl WitchHatScene {
    pub const fn new() -> Self {
        Self { sparkle_phase: 0.0 }
    }
}

impl Default for WitchHatScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for WitchHatScene {
    fn update(&mut self, _tick: &Tick<'_>) {
        self.sparkle_phase += 0.03;
    }

    fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop) {
        backdrop.draw(fb);

        let cx = 16;
        let cy = 20;
        let phase = self.sparkle_phase;

        // Moon behind the hat
        fb.set_pen(Rgb {
            r: 200,
            g: 200,
            b: 150,
        });
        for y in -3..=3_i32 {
            for x in -3..=3_i32 {
                if x * x + y * y <= 9 {
                    fb.pixel(25 + x, 6 + y);
                }
            }
        }

        // Brim and cone
        fb.set_pen(Rgb { r: 50, g: 0, b: 50 });
        for x in -8..=8 {
            fb.pixel(cx + x, cy);
            fb.pixel(cx + x, cy + 1);
        }
        for y in 0..15 {
            let width = (6 - y / 3).max(1);
            for x in -width..=width {
                fb.pixel(cx + x, cy - y - 1);
            }
        }
        fb.pixel(cx, cy - 16);

        // Orbiting sparkles cycling through the full hue wheel
        for i in 0..8 {
            let angle = phase + i as f32 * 0.785;
            let sparkle_x = cx + (cosf(angle) * (8.0 + sinf(phase * 2.0) * 2.0)) as i32;
            let sparkle_y = cy - 8 + (sinf(angle) * (8.0 + cosf(phase * 2.0) * 2.0)) as i32;

            let hue = ((phase * 60.0 + i as f32 * 45.0) % 360.0) / 360.0 * 255.0;
            let value = 0.5 + sinf(phase * 3.0 + i as f32) * 0.5;
            fb.set_pen(hsv2rgb(Hsv {
                hue: hue as u8,
                sat: 255,
                val: channel(value * 255.0),
            }));
            fb.pixel(sparkle_x, sparkle_y);
        }
    }
}
