//! Jagged lightning strikes over a bounded branch pool.
//!
//! A strike recursively grows a tree of short segments from a start point in
//! the sky toward a target band, then every branch fades out over its own
//! short lifetime. Each strike also arms a 0.2 s thunder flash that spatters
//! tinted pixels across the frame.

use heapless::Vec;
use libm::{atan2f, cosf, powf, sinf};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::color::{Rgb, scale_rgb};
use crate::math::{length, radians};
use crate::surface::{HEIGHT, Surface, WIDTH};

pub const MAX_BRANCHES: usize = 100;

const MAX_GENERATION: u8 = 6;
const BRANCH_ANGLE_VARIATION: f32 = 45.0; // degrees
const BRANCH_LENGTH_DECAY: f32 = 0.7;
const MIN_BRANCH_LENGTH: f32 = 2.0;
const FLASH_DURATION: f32 = 0.2;

/// One strike event, reported through the caller's callback.
#[derive(Debug, Clone, Copy)]
pub struct Strike {
    pub x: f32,
    pub y: f32,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy)]
struct Branch {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    intensity: f32,
    life_timer: f32,
    max_life: f32,
}

#[derive(Debug, Clone)]
pub struct LightningConfig {
    /// Per-frame Bernoulli chance of a spontaneous strike.
    pub spawn_chance: f32,
    /// Start rectangle in the sky, `(min, max)` per axis.
    pub start_x: (f32, f32),
    pub start_y: (f32, f32),
    /// Vertical band the bolt aims for.
    pub target_y: (f32, f32),
    pub core: Rgb,
    pub glow: Rgb,
}

impl Default for LightningConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.020,
            start_x: (8.0, 24.0),
            start_y: (2.0, 10.0),
            target_y: (28.0, 32.0),
            core: Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
            glow: Rgb {
                r: 200,
                g: 220,
                b: 255,
            },
        }
    }
}

pub struct Lightning {
    cfg: LightningConfig,
    branches: Vec<Branch, MAX_BRANCHES>,
    flash_timer: f32,
    rng: SmallRng,
}

impl Lightning {
    pub fn new(cfg: LightningConfig, seed: u64) -> Self {
        Self {
            cfg,
            branches: Vec::new(),
            flash_timer: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn reset(&mut self) {
        self.branches.clear();
        self.flash_timer = 0.0;
    }

    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    pub fn is_flashing(&self) -> bool {
        self.flash_timer > 0.0
    }

    pub fn flash_intensity(&self) -> f32 {
        (self.flash_timer / FLASH_DURATION).clamp(0.0, 1.0)
    }

    /// Advance timers, possibly spawn a strike, age out dead branches.
    /// `on_strike` fires synchronously for every strike that lands.
    pub fn update(&mut self, dt: f32, on_strike: &mut impl FnMut(Strike)) {
        self.flash_timer = (self.flash_timer - dt).max(0.0);

        if self.rng.random::<f32>() < self.cfg.spawn_chance {
            self.trigger_strike(on_strike);
        }

        let mut i = 0;
        while i < self.branches.len() {
            let branch = &mut self.branches[i];
            branch.life_timer += dt;
            if branch.life_timer >= branch.max_life {
                self.branches.swap_remove(i);
            } else {
                let life_ratio = branch.life_timer / branch.max_life;
                branch.intensity *= 1.0 - life_ratio * 0.1;
                i += 1;
            }
        }
    }

    /// Fire one strike from a random sky point. A strike too close to its
    /// target to grow any branch emits nothing and skips the callback.
    pub fn trigger_strike(&mut self, on_strike: &mut impl FnMut(Strike)) {
        let start_x = self.random_in(self.cfg.start_x);
        let start_y = self.random_in(self.cfg.start_y);
        let target_x = start_x + self.rng.random_range(-6.0..6.0);
        let target_y = self.random_in(self.cfg.target_y);
        self.strike_from(start_x, start_y, target_x, target_y, on_strike);
    }

    /// Fire one strike with explicit geometry. A start point too close to
    /// its target to grow any branch emits nothing and skips the callback.
    pub fn strike_from(
        &mut self,
        start_x: f32,
        start_y: f32,
        target_x: f32,
        target_y: f32,
        on_strike: &mut impl FnMut(Strike),
    ) {
        if length(target_x - start_x, target_y - start_y) < MIN_BRANCH_LENGTH {
            return;
        }
        self.grow(start_x, start_y, target_x, target_y, 0, 1.0);

        self.flash_timer = FLASH_DURATION;
        on_strike(Strike {
            x: start_x,
            y: start_y,
            intensity: 1.0,
        });
    }

    fn random_in(&mut self, range: (f32, f32)) -> f32 {
        if range.1 > range.0 {
            self.rng.random_range(range.0..range.1)
        } else {
            range.0
        }
    }

    fn grow(&mut self, x1: f32, y1: f32, target_x: f32, target_y: f32, generation: u8, intensity: f32) {
        if generation > MAX_GENERATION || self.branches.is_full() {
            return;
        }

        let dx = target_x - x1;
        let dy = target_y - y1;
        let distance = length(dx, dy);
        if distance < MIN_BRANCH_LENGTH {
            return;
        }

        // Biased random walk toward the target
        let angle = atan2f(dy, dx)
            + radians(self.rng.random_range(-BRANCH_ANGLE_VARIATION..BRANCH_ANGLE_VARIATION));

        let mut segment = MIN_BRANCH_LENGTH
            + distance * BRANCH_LENGTH_DECAY * powf(0.8, f32::from(generation));
        segment = segment.min(distance * 0.8); // don't overshoot the target

        let x2 = x1 + cosf(angle) * segment;
        let y2 = y1 + sinf(angle) * segment;

        let branch = Branch {
            x1,
            y1,
            x2,
            y2,
            intensity: intensity * self.rng.random_range(0.8..1.0),
            life_timer: 0.0,
            max_life: self.rng.random_range(0.15..0.20),
        };
        if self.branches.push(branch).is_err() {
            return;
        }

        // Occasional sideways fork
        if generation < 4 && self.rng.random_range(0..100) < 40 - i32::from(generation) * 8 {
            let fork_angle = angle + radians(self.rng.random_range(-45.0..45.0));
            let fork_len = segment * 0.5;
            let fork_x = x2 + cosf(fork_angle) * fork_len;
            let fork_y = y2 + sinf(fork_angle) * fork_len;
            self.grow(x2, y2, fork_x, fork_y, generation + 1, intensity * 0.6);
        }

        // Continue the main path
        if generation < 3 {
            self.grow(x2, y2, target_x, target_y, generation + 1, intensity * 0.9);
        }
    }

    pub fn render(&mut self, fb: &mut Surface) {
        for branch in &self.branches {
            fb.set_pen(scale_rgb(self.cfg.glow, branch.intensity * 0.6));
            for offset in -1..=1_i32 {
                let shift = offset as f32;
                fb.line(branch.x1 + shift, branch.y1, branch.x2 + shift, branch.y2);
                fb.line(branch.x1, branch.y1 + shift, branch.x2, branch.y2 + shift);
            }

            fb.set_pen(scale_rgb(self.cfg.core, branch.intensity));
            fb.line(branch.x1, branch.y1, branch.x2, branch.y2);
        }

        if self.flash_timer > 0.0 {
            let flash = self.flash_intensity();
            fb.set_pen(Rgb {
                r: (255.0 * flash * 0.3) as u8,
                g: (255.0 * flash * 0.4) as u8,
                b: (255.0 * flash * 0.7) as u8,
            });
            let spatter = (flash * 20.0) as u32;
            for _ in 0..spatter {
                let x = self.rng.random_range(0..WIDTH);
                let y = self.rng.random_range(0..HEIGHT);
                fb.pixel(x, y);
            }
        }
    }
}
