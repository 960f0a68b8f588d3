//! Pulsing jack-o'-lantern.

use libm::{cosf, sinf, sqrtf};

use crate::color::{BLACK, Rgb, channel};
use crate::scene::{Backdrop, Scene, Tick};
use crate::surface::Surface;

pub struct PumpkinScene {
    glow_phase: f32,
}

impl PumpkinScene {
    pub const fn new() -> Self {
        Self { glow_phase: 0.0 }
    }
}

impl Default for PumpkinScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PumpkinScene {
    fn update(&mut self, _tick: &Tick<'_>) {
        self.glow_phase += 0.05;
    }

    fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop) {
        backdrop.draw(fb);

        let cx = 16;
        let cy = 16;
        let phase = self.glow_phase;
        let glow_multiplier = 0.8 + 0.4 * sinf(phase * 1.5);
        let secondary_glow = 0.6 + 0.3 * sinf(phase * 2.3);

        // Aura ring around the whole pumpkin
        for y in -10..=10_i32 {
            for x in -8..=8_i32 {
                let dist = sqrtf((x * x) as f32 + (y * y) as f32 * 0.8);
                if dist > 6.5 && dist <= 9.0 {
                    let intensity = (9.0 - dist) / 2.5 * glow_multiplier * 0.3;
                    let orange = channel(intensity * 150.0);
                    if orange > 10 {
                        fb.set_pen(Rgb {
                            r: orange,
                            g: channel(intensity * 80.0),
                            b: 0,
                        });
                        fb.pixel(cx + x, cy + y);
                    }
                }
            }
        }

        // Body, flickering like candlelight inside
        for y in -8..=8_i32 {
            for x in -6..=6_i32 {
                let dist = sqrtf((x * x) as f32 + (y * y) as f32 * 0.8);
                if dist <= 6.5 {
                    let depth = (6.5 - dist) / 6.5;
                    let base = 180.0 + sinf(phase) * 75.0 * glow_multiplier;
                    let flicker = sinf(phase * 4.0 + x as f32 * 0.3 + y as f32 * 0.2) * 0.1 + 1.0;
                    let orange = channel(base * (0.7 + depth * 0.3) * flicker);
                    fb.set_pen(Rgb {
                        r: orange,
                        g: channel(f32::from(orange) * 0.6),
                        b: 0,
                    });
                    fb.pixel(cx + x, cy + y);
                }
            }
        }

        // Vertical ridges
        let ridge = channel(140.0 + sinf(phase * 0.8) * 40.0);
        fb.set_pen(Rgb {
            r: ridge,
            g: channel(f32::from(ridge) * 0.5),
            b: 0,
        });
        for y in cy - 6..=cy + 6 {
            fb.pixel(cx - 3, y);
            fb.pixel(cx, y);
            fb.pixel(cx + 3, y);
        }

        // Carved face
        fb.set_pen(BLACK);
        for side in [-1, 1_i32] {
            fb.pixel(cx + side * 3, cy - 2);
            fb.pixel(cx + side * 2, cy - 1);
            fb.pixel(cx + side, cy - 1);
            fb.pixel(cx + side * 2, cy);
        }
        for x in -4..=4_i32 {
            fb.pixel(cx + x, cy + 3);
            if x % 2 == 0 && x != 0 {
                fb.pixel(cx + x, cy + 2);
            }
            if x.abs() == 2 {
                fb.pixel(cx + x, cy + 4);
            }
        }
        fb.pixel(cx - 1, cy + 2);
        fb.pixel(cx + 1, cy + 2);

        // Stem and leaves
        fb.set_pen(Rgb {
            r: 0,
            g: channel(80.0 + sinf(phase * 0.5) * 30.0),
            b: 0,
        });
        fb.pixel(cx, cy - 9);
        fb.pixel(cx, cy - 10);
        fb.pixel(cx, cy - 11);
        fb.pixel(cx - 1, cy - 10);
        fb.pixel(cx + 1, cy - 10);

        // Eye glow bleeding out of the sockets
        let eye_glow = sinf(phase * 2.0) * 0.5 + 0.5;
        if eye_glow > 0.3 {
            let red = channel(eye_glow * 255.0);
            let amber = channel(eye_glow * 200.0);
            fb.set_pen(Rgb {
                r: red,
                g: amber,
                b: channel(eye_glow * 100.0),
            });
            fb.pixel(cx - 2, cy - 1);
            fb.pixel(cx + 2, cy - 1);

            fb.set_pen(Rgb {
                r: red / 2,
                g: amber / 2,
                b: 0,
            });
            for side in [-1, 1_i32] {
                fb.pixel(cx + side * 4, cy - 1);
                fb.pixel(cx + side * 3, cy - 3);
                fb.pixel(cx + side * 3, cy);
            }
        }

        // Slow ring of sparkles when the secondary pulse peaks
        if secondary_glow > 0.7 {
            let sparkle = channel(secondary_glow * 150.0);
            fb.set_pen(Rgb {
                r: sparkle,
                g: channel(f32::from(sparkle) * 0.7),
                b: 0,
            });
            for i in 0..6 {
                let angle = phase * 0.5 + i as f32 * 1.047;
                let radius_x = 10.0 + sinf(phase * 3.0 + i as f32) * 2.0;
                let radius_y = 8.0 + cosf(phase * 2.5 + i as f32) * 2.0;
                fb.pixel(
                    cx + (cosf(angle) * radius_x) as i32,
                    cy + (sinf(angle) * radius_y) as i32,
                );
            }
        }
    }
}
