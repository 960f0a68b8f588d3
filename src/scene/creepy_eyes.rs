//! Random glowing eye pairs in the dark.
//!
//! One to five pairs blink and dart around, periodically closing up and
//! re-seating themselves somewhere else. A few seconds in, an extra pair of
//! point eyes fades up out of the black as a surprise.

use heapless::Vec;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::color::{BLACK, rgb_from_u32};
use crate::eyes::{EyeConfig, EyeEngine, EyeShape};
use crate::scene::{Backdrop, Scene, Tick};
use crate::surface::Surface;

const MAX_PLACED: usize = 6;
const REGENERATE_MS: u64 = 40_000;
const SURPRISE_DELAY_MS: u64 = 5_000;
/// Offset of each eye from its pair center.
const PAIR_SPACING: f32 = 2.5;

const COLORS: [(u32, EyeShape); 10] = [
    (0xFF_00_00, EyeShape::Oval),
    (0x00_FF_00, EyeShape::Triangle),
    (0xFF_FF_00, EyeShape::Oval),
    (0xFF_00_FF, EyeShape::Triangle),
    (0x00_FF_FF, EyeShape::Oval),
    (0xFF_80_00, EyeShape::Triangle),
    (0x80_00_FF, EyeShape::Oval),
    (0x00_FF_80, EyeShape::Triangle),
    (0xFF_40_80, EyeShape::Oval),
    (0x80_FF_00, EyeShape::Triangle),
];

pub struct CreepyEyesScene {
    eyes: EyeEngine,
    rng: SmallRng,
    placed: Vec<(f32, f32), MAX_PLACED>,
    started_ms: Option<u64>,
    regenerated_ms: u64,
    surprise_added: bool,
    glow_phase: f32,
}

impl CreepyEyesScene {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let eyes = EyeEngine::new(rng.random());
        Self {
            eyes,
            rng,
            placed: Vec::new(),
            started_ms: None,
            regenerated_ms: 0,
            surprise_added: false,
            glow_phase: 0.0,
        }
    }

    fn generate(&mut self) {
        self.eyes.clear();
        self.placed.clear();

        let pair_count = self.rng.random_range(1..6);
        for _ in 0..pair_count {
            let Some((x, y)) = self.place(12.0, 3.0) else {
                continue;
            };
            let (hex, shape) = COLORS[self.rng.random_range(0..COLORS.len())];
            let left = EyeConfig {
                x: x - PAIR_SPACING,
                y,
                color: rgb_from_u32(hex),
                radius_x: 1.5,
                radius_y: 1.0,
                shape,
                glow: 0.8,
            };
            let right = EyeConfig {
                x: x + PAIR_SPACING,
                ..left
            };
            self.eyes.add_pair(left, right);
            let _ = self.placed.push((x, y));
        }

        self.eyes.enable_repositioning();
    }

    /// Rejection-sample a pair center that keeps clear of every placed pair.
    fn place(&mut self, min_dx: f32, min_dy: f32) -> Option<(f32, f32)> {
        for _ in 0..50 {
            let x = self.rng.random_range(5.0..27.0);
            let y = self.rng.random_range(3.0..29.0);
            let clear = self
                .placed
                .iter()
                .all(|&(px, py)| (px - x).abs() >= min_dx || (py - y).abs() >= min_dy);
            if clear {
                return Some((x, y));
            }
        }
        None
    }

    /// Black point eyes that only become visible as they fade toward red.
    fn add_surprise(&mut self) {
        let Some((x, y)) = self.place(6.0, 6.0) else {
            return;
        };
        let left = EyeConfig {
            x: x - 1.0,
            y,
            color: BLACK,
            radius_x: 0.5,
            radius_y: 0.5,
            shape: EyeShape::Point,
            glow: 0.5,
        };
        let right = EyeConfig { x: x + 1.0, ..left };
        self.eyes.add_pair(left, right);
        let _ = self.placed.push((x, y));
        self.eyes.enable_repositioning();
    }
}

impl Scene for CreepyEyesScene {
    fn update(&mut self, tick: &Tick<'_>) {
        let now_ms = tick.now.as_millis();
        let started = match self.started_ms {
            Some(started) => started,
            None => {
                self.started_ms = Some(now_ms);
                self.regenerated_ms = now_ms;
                self.generate();
                now_ms
            }
        };

        self.glow_phase += 0.02;

        if now_ms.saturating_sub(self.regenerated_ms) > REGENERATE_MS {
            self.regenerated_ms = now_ms;
            self.surprise_added = false;
            self.generate();
        }

        if !self.surprise_added && now_ms.saturating_sub(started) >= SURPRISE_DELAY_MS {
            self.add_surprise();
            self.surprise_added = true;
        }

        self.eyes.update(tick.now);
    }

    fn render(&mut self, fb: &mut Surface, _backdrop: &Backdrop) {
        self.eyes.draw(fb, self.glow_phase);
    }
}
