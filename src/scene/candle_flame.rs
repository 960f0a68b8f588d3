//! A single candle with a heat-map flame.

use libm::sinf;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::color::Rgb;
use crate::scene::heat::{HEAT_ROWS, HeatField};
use crate::scene::{Backdrop, Scene, Tick};
use crate::surface::{HEIGHT, Surface, WIDTH};

const CANDLE_X: i32 = 16;
const CANDLE_BOTTOM: i32 = 28;

pub struct CandleFlameScene {
    heat: HeatField,
    flicker_phase: f32,
    rng: SmallRng,
}

impl CandleFlameScene {
    pub fn new(seed: u64) -> Self {
        Self {
            heat: HeatField::new(),
            flicker_phase: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Scene for CandleFlameScene {
    fn update(&mut self, _tick: &Tick<'_>) {
        self.flicker_phase += 0.08;

        self.heat.diffuse(0.96);
        self.heat.clear_row(HEAT_ROWS - 1);

        // Inject flickering heat just above the wick
        let flicker = 0.8 + 0.4 * sinf(self.flicker_phase * 8.0);
        let flame_base_y = CANDLE_BOTTOM - 11;
        for _ in 0..3 {
            let fx = CANDLE_X + self.rng.random_range(0..3) - 1;
            self.heat.set(fx, flame_base_y, flicker);
            self.heat.set(fx, flame_base_y + 1, flicker * 0.8);
        }
    }

    fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop) {
        backdrop.draw(fb);

        // Wax body
        fb.set_pen(Rgb {
            r: 200,
            g: 180,
            b: 120,
        });
        for y in CANDLE_BOTTOM - 8..=CANDLE_BOTTOM {
            for x in CANDLE_X - 2..=CANDLE_X + 2 {
                fb.pixel(x, y);
            }
        }

        // Wick
        fb.set_pen(Rgb {
            r: 60,
            g: 40,
            b: 20,
        });
        fb.pixel(CANDLE_X, CANDLE_BOTTOM - 9);
        fb.pixel(CANDLE_X, CANDLE_BOTTOM - 10);

        // Flame, colored by heat
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let heat = self.heat.get(x, y + 3);
                let color = if heat > 0.5 {
                    Rgb {
                        r: 255,
                        g: 255,
                        b: 180,
                    }
                } else if heat > 0.4 {
                    Rgb {
                        r: 255,
                        g: 200,
                        b: 0,
                    }
                } else if heat > 0.3 {
                    Rgb {
                        r: 255,
                        g: 100,
                        b: 0,
                    }
                } else if heat > 0.2 {
                    Rgb { r: 200, g: 50, b: 0 }
                } else if heat > 0.1 {
                    Rgb { r: 100, g: 20, b: 0 }
                } else {
                    continue;
                };
                fb.set_pen(color);
                fb.pixel(x, y);
            }
        }

        // Occasional wax drips
        fb.set_pen(Rgb {
            r: 180,
            g: 160,
            b: 100,
        });
        let drip_phase = sinf(self.flicker_phase * 0.3);
        if drip_phase > 0.5 {
            fb.pixel(CANDLE_X - 2, CANDLE_BOTTOM + 1);
            fb.pixel(CANDLE_X - 2, CANDLE_BOTTOM + 2);
        }
        if drip_phase < -0.3 {
            fb.pixel(CANDLE_X + 2, CANDLE_BOTTOM + 1);
        }
    }
}
