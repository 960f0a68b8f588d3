//! Wolf on a mountain ridge howling at the moon, witch passing overhead.

use libm::{cosf, sinf};

use crate::color::{BLACK, Rgb, channel};
use crate::scene::{Backdrop, Scene, Tick, draw_big_moon};
use crate::surface::{HEIGHT, Surface, WIDTH};

pub struct WolfHowlingScene {
    howl_phase: f32,
    moon_phase: f32,
    wind_phase: f32,
    witch_phase: f32,
}

impl WolfHowlingScene {
    pub const fn new() -> Self {
        Self {
            howl_phase: 0.0,
            moon_phase: 0.0,
            wind_phase: 0.0,
            witch_phase: 0.0,
        }
    }
}

impl Default for WolfHowlingScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for WolfHowlingScene {
    fn update(&mut self, _tick: &Tick<'_>) {
        self.howl_phase += 0.03;
        self.moon_phase += 0.02;
        self.wind_phase += 0.015;
        self.witch_phase += 0.08;
    }

    fn render(&mut self, fb: &mut Surface, _backdrop: &Backdrop) {
        // Night sky
        fb.set_pen(Rgb { r: 5, g: 5, b: 20 });
        fb.clear();

        // Twinkling stars, scattered by a fixed hash of their index
        for i in 0..15 {
            let twinkle = 0.5 + 0.5 * sinf(self.howl_phase * 2.0 + i as f32 * 0.7);
            if twinkle > 0.7 {
                let brightness = channel(twinkle * 200.0);
                fb.set_pen(Rgb {
                    r: brightness,
                    g: brightness,
                    b: brightness.saturating_add(50),
                });
                fb.pixel((i * 7 + 3) % WIDTH, (i * 11 + 2) % 15);
            }
        }

        draw_big_moon(fb, self.moon_phase);

        // Mountain ridge silhouette, swaying faintly in the wind
        fb.set_pen(BLACK);
        let wind_sway = sinf(self.wind_phase) * 0.5;
        for x in 0..12 {
            let top =
                26.0 - (x * x) as f32 * 0.08 + sinf(x as f32 * 0.5 + self.wind_phase) * 0.3;
            for y in top as i32..HEIGHT {
                fb.pixel(x, y);
            }
        }
        for x in 12..16 {
            let top = 28.0 + sinf(x as f32 * 0.8 + self.wind_phase * 0.5) * 0.2;
            for y in top as i32..HEIGHT {
                fb.pixel(x, y);
            }
        }
        for x in 16..WIDTH {
            let top = 26.0 - ((x - 24) * (x - 24)) as f32 * 0.03
                + sinf(x as f32 * 0.3 + self.wind_phase * 0.7) * 0.4
                + wind_sway;
            for y in top as i32..HEIGHT {
                fb.pixel(x, y);
            }
        }

        // Wolf against the moon
        let wolf_x = 18;
        let wolf_y = 12;
        let howl = sinf(self.howl_phase * 1.5);
        let howling = howl > 0.3;

        for x in wolf_x - 2..=wolf_x + 1 {
            for y in wolf_y..=wolf_y + 2 {
                fb.pixel(x, y);
            }
        }
        if howling {
            // Snout raised toward the moon
            fb.pixel(wolf_x - 1, wolf_y - 1);
            fb.pixel(wolf_x, wolf_y - 1);
            fb.pixel(wolf_x, wolf_y - 2);
            fb.pixel(wolf_x + 1, wolf_y - 2);
            fb.pixel(wolf_x + 1, wolf_y - 3);
        } else {
            fb.pixel(wolf_x - 1, wolf_y - 1);
            fb.pixel(wolf_x, wolf_y - 1);
            fb.pixel(wolf_x + 1, wolf_y - 1);
            fb.pixel(wolf_x + 2, wolf_y - 1);
        }
        fb.pixel(wolf_x - 2, wolf_y - 1);
        fb.pixel(wolf_x - 1, wolf_y - 2);
        for x in wolf_x - 2..=wolf_x + 1 {
            fb.pixel(x, wolf_y + 3);
        }
        let tail_x = wolf_x - 3 + (sinf(self.howl_phase * 2.0 + 1.5) * 0.5) as i32;
        fb.pixel(tail_x, wolf_y + 1);
        fb.pixel(tail_x, wolf_y + 2);

        // Howl breath
        if howling && howl > 0.7 {
            let breath = (howl - 0.7) / 0.3;
            let alpha = channel(breath * 100.0);
            fb.set_pen(Rgb {
                r: alpha,
                g: alpha,
                b: alpha.saturating_add(50),
            });
            for i in 0..3 {
                let wave = self.howl_phase * 3.0 + i as f32;
                fb.pixel(
                    wolf_x + 2 + i * 2 + (sinf(wave) * 1.5) as i32,
                    wolf_y - 3 - i + (cosf(wave * 1.2) * 0.8) as i32,
                );
            }
        }

        // Witch arcing across the moon
        fb.set_pen(BLACK);
        let cycle = self.witch_phase % core::f32::consts::TAU;
        let progress = cycle / core::f32::consts::TAU;
        let witch_x = (-5.0 + progress * 42.0) as i32;
        let witch_y = 8 + (sinf(progress * core::f32::consts::PI) * 8.0) as i32;
        if (-3..=35).contains(&witch_x) && (0..=29).contains(&witch_y) {
            fb.pixel(witch_x, witch_y);
            fb.pixel(witch_x, witch_y + 1);
            fb.pixel(witch_x - 1, witch_y - 1);
            fb.pixel(witch_x, witch_y - 1);
            fb.pixel(witch_x, witch_y - 2);
            for i in 2..=4 {
                fb.pixel(witch_x - i, witch_y + 1);
            }
            let bristles = (self.witch_phase * 4.0) as i32 % 2 == 0;
            let tip = if bristles { 4 } else { 5 };
            fb.pixel(witch_x - tip, witch_y);
            fb.pixel(witch_x - tip, witch_y + 2);
            fb.pixel(witch_x - 9 + tip, witch_y + 1);
            if witch_x > 2 {
                let cape = (sinf(self.witch_phase * 3.0) * 0.5) as i32;
                fb.pixel(witch_x - 1, witch_y + 2 + cape);
                fb.pixel(witch_x - 2, witch_y + 1 + cape);
            }
        }

        // Valley mist
        fb.set_pen(Rgb {
            r: 25,
            g: 25,
            b: 35,
        });
        for i in 0..10 {
            let mist_phase = self.wind_phase * 0.4 + i as f32 * 0.6;
            let mist_x = i as f32 * 3.2 + sinf(mist_phase) * 2.0;
            let mist_y = 30.0 + sinf(mist_phase * 1.3) * 0.8;
            fb.pixel(mist_x as i32, mist_y as i32);
        }
    }
}
