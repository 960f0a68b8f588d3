//! Translucent spirits drifting and wrapping around the frame.

use heapless::Vec;
use libm::{sinf, sqrtf};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::color::{Rgb, channel};
use crate::scene::{Backdrop, Scene, Tick};
use crate::surface::Surface;

const GHOST_COUNT: usize = 3;
const GHOST_SIZE: i32 = 8;

struct Ghost {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    phase: f32,
    opacity: f32,
}

pub struct GhostlySpiritsScene {
    ghosts: Vec<Ghost, GHOST_COUNT>,
}

impl GhostlySpiritsScene {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut ghosts = Vec::new();
        for _ in 0..GHOST_COUNT {
            let ghost = Ghost {
                x: rng.random_range(0.0..32.0),
                y: rng.random_range(0.0..32.0),
                vx: rng.random_range(-0.5..0.5),
                vy: rng.random_range(-0.5..0.5),
                phase: rng.random_range(0.0..10.0),
                opacity: rng.random_range(0.3..0.8),
            };
            let _ = ghosts.push(ghost);
        }
        Self { ghosts }
    }
}

impl Scene for GhostlySpiritsScene {
    fn update(&mut self, _tick: &Tick<'_>) {
        for ghost in &mut self.ghosts {
            ghost.x += ghost.vx;
            ghost.y += ghost.vy;
            ghost.phase += 0.05;

            if ghost.x < -5.0 {
                ghost.x = 37.0;
            }
            if ghost.x > 37.0 {
                ghost.x = -5.0;
            }
            if ghost.y < -5.0 {
                ghost.y = 37.0;
            }
            if ghost.y > 37.0 {
                ghost.y = -5.0;
            }

            ghost.opacity = 0.3 + 0.4 * sinf(ghost.phase);
        }
    }

    fn render(&mut self, fb: &mut Surface, _backdrop: &Backdrop) {
        for ghost in &self.ghosts {
            let opacity = ghost.opacity * (0.7 + 0.3 * sinf(ghost.phase));

            // Soft radial body
            for dy in -GHOST_SIZE..=GHOST_SIZE {
                for dx in -GHOST_SIZE..=GHOST_SIZE {
                    let dist = sqrtf((dx * dx + dy * dy) as f32);
                    if dist > GHOST_SIZE as f32 {
                        continue;
                    }
                    let intensity = (1.0 - dist / GHOST_SIZE as f32) * opacity;
                    if intensity > 0.1 {
                        let white = channel(intensity * 200.0);
                        let blue = channel(intensity * 150.0);
                        fb.set_pen(Rgb {
                            r: white,
                            g: white,
                            b: white.saturating_add(blue / 2),
                        });
                        fb.pixel(ghost.x as i32 + dx, ghost.y as i32 + dy);
                    }
                }
            }

            // Motion trail
            for i in 1..=3 {
                let trail_x = (ghost.x - ghost.vx * i as f32 * 2.0) as i32;
                let trail_y = (ghost.y - ghost.vy * i as f32 * 2.0) as i32;
                let intensity = ghost.opacity * (0.3 - i as f32 * 0.1);
                if intensity > 0.0 {
                    let value = channel(intensity * 100.0);
                    fb.set_pen(Rgb {
                        r: value,
                        g: value,
                        b: value.saturating_add(20),
                    });
                    fb.pixel(trail_x, trail_y);
                }
            }

            // Hollow eyes once the ghost is solid enough
            if ghost.opacity > 0.5 {
                fb.set_pen(Rgb { r: 150, g: 0, b: 0 });
                fb.pixel(ghost.x as i32 - 2, ghost.y as i32 - 2);
                fb.pixel(ghost.x as i32 + 2, ghost.y as i32 - 2);
            }
        }
    }
}
