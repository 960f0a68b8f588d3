//! Background bats crossing a huge glowing moon.

use crate::color::BLACK;
use crate::scene::{Backdrop, Scene, Tick, draw_big_moon};
use crate::surface::Surface;

pub struct FlyingBatsScene {
    moon_phase: f32,
}

impl FlyingBatsScene {
    pub const fn new() -> Self {
        Self { moon_phase: 0.0 }
    }
}

impl Default for FlyingBatsScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for FlyingBatsScene {
    fn update(&mut self, _tick: &Tick<'_>) {
        self.moon_phase += 0.02;
    }

    fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop) {
        backdrop.draw(fb);
        draw_big_moon(fb, self.moon_phase);
        // Redraw the shared bats as full silhouettes against the moon
        backdrop.draw_bats(fb, BLACK);
    }
}
