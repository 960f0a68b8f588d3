//! Synchronized pairs of animated eyes.
//!
//! Each pair shares one state machine covering blinking (with occasional
//! double blinks), pupil saccades, color fading for point eyes and optional
//! collision-avoided repositioning. Eyes are small fixed glyphs: a 3×2 oval,
//! a 3-wide triangle bar or a single point; vertical extent collapses with
//! blink phase.

use embassy_time::Instant;
use heapless::Vec;
use libm::{roundf, sinf};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::color::{BLACK, Rgb, lerp_rgb, scale_rgb};
use crate::math::length;
use crate::surface::Surface;

pub const MAX_EYES: usize = 16;

const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// Horizontal spacing applied to the right eye when a pair is re-seated.
const PAIR_SPACING: f32 = 4.0;
/// Minimum center distance to any other eye when repositioning.
const MIN_EYE_DISTANCE: f32 = 8.0;
const REPOSITION_ATTEMPTS: u32 = 50;
/// How long eyes stay shut while a pair moves.
const CLOSED_DURATION_MS: u64 = 1000;

const SINGLE_BLINK_MS: u64 = 150;
const DOUBLE_BLINK_MS: u64 = 120;
const DOUBLE_BLINK_DELAY_MS: u64 = 200;

const PUPIL_MOVE_RATE: f32 = 0.25;
const PUPIL_RANGE: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeShape {
    Oval,
    Triangle,
    Point,
}

#[derive(Debug, Clone, Copy)]
pub struct EyeConfig {
    /// Center position in pixel units.
    pub x: f32,
    pub y: f32,
    /// Base color; for [`EyeShape::Point`] the start of the fade-to-red cycle.
    pub color: Rgb,
    pub radius_x: f32,
    pub radius_y: f32,
    pub shape: EyeShape,
    /// Base glow intensity, 0.0 to 1.0.
    pub glow: f32,
}

#[derive(Debug, Clone)]
struct Eye {
    cfg: EyeConfig,
    pair: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlinkStage {
    Idle,
    Single,
    DoubleFirst,
    DoubleDelay,
    DoubleSecond,
}

/// Shared per-pair animation state.
#[derive(Debug, Clone)]
pub struct PairState {
    left: usize,
    right: Option<usize>,

    stage: BlinkStage,
    blink_phase: f32,
    blink_started_ms: u64,
    blink_interval_ms: u64,

    pupil_x: f32,
    pupil_y: f32,
    pupil_target_x: f32,
    pupil_target_y: f32,
    pupil_changed_ms: u64,
    pupil_interval_ms: u64,

    fade_phase: f32,
    fade_started_ms: u64,
    fade_interval_ms: u64,
    to_red: bool,

    can_reposition: bool,
    repositioning: bool,
    reposition_started_ms: u64,
    reposition_interval_ms: u64,
    closed_started_ms: u64,
    new_x: f32,
    new_y: f32,
    moved: bool,
}

impl PairState {
    fn new(now_ms: u64, anchor_x: f32, anchor_y: f32, left: usize, right: Option<usize>, rng: &mut SmallRng) -> Self {
        Self {
            left,
            right,
            stage: BlinkStage::Idle,
            blink_phase: 0.0,
            blink_started_ms: now_ms,
            blink_interval_ms: rng.random_range(1500..5000),
            pupil_x: 0.0,
            pupil_y: 0.0,
            pupil_target_x: 0.0,
            pupil_target_y: 0.0,
            pupil_changed_ms: now_ms,
            pupil_interval_ms: rng.random_range(800..2500),
            fade_phase: 0.0,
            fade_started_ms: now_ms,
            fade_interval_ms: rng.random_range(1000..2500),
            to_red: true,
            can_reposition: false,
            repositioning: false,
            reposition_started_ms: now_ms,
            reposition_interval_ms: rng.random_range(8000..15000),
            closed_started_ms: 0,
            new_x: anchor_x,
            new_y: anchor_y,
            moved: false,
        }
    }

    /// 0 = open, 1 = fully closed. Never leaves `[0, 1]`.
    pub const fn blink_phase(&self) -> f32 {
        self.blink_phase
    }

    /// Current pupil offset, each axis within `[-1.5, 1.5]`.
    pub const fn pupil(&self) -> (f32, f32) {
        (self.pupil_x, self.pupil_y)
    }

    pub const fn is_repositioning(&self) -> bool {
        self.repositioning
    }

    pub const fn is_fading_to_red(&self) -> bool {
        self.to_red
    }

    pub const fn fade_phase(&self) -> f32 {
        self.fade_phase
    }
}

/// Rendered color of a point eye: a linear fade between its base color and
/// pure red, direction given by `to_red`.
pub fn fade_color(base: Rgb, to_red: bool, phase: f32) -> Rgb {
    if to_red {
        lerp_rgb(base, RED, phase)
    } else {
        lerp_rgb(RED, base, phase)
    }
}

pub struct EyeEngine {
    eyes: Vec<Eye, MAX_EYES>,
    pairs: Vec<PairState, MAX_EYES>,
    rng: SmallRng,
    now_ms: u64,
}

impl EyeEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            eyes: Vec::new(),
            pairs: Vec::new(),
            rng: SmallRng::seed_from_u64(seed),
            now_ms: 0,
        }
    }

    /// Remove all eyes and pair states.
    pub fn clear(&mut self) {
        self.eyes.clear();
        self.pairs.clear();
    }

    /// Append one independent eye with its own state. Dropped if the pool
    /// is full.
    pub fn add_eye(&mut self, cfg: EyeConfig) {
        if self.eyes.is_full() {
            return;
        }
        let idx = self.eyes.len();
        let state = PairState::new(self.now_ms, cfg.x, cfg.y, idx, None, &mut self.rng);
        let pair = self.pairs.len();
        let _ = self.pairs.push(state);
        let _ = self.eyes.push(Eye { cfg, pair });
    }

    /// Append a synchronized pair, left then right, sharing one state.
    pub fn add_pair(&mut self, left: EyeConfig, right: EyeConfig) {
        if self.eyes.len() + 2 > MAX_EYES || self.pairs.is_full() {
            return;
        }
        let left_idx = self.eyes.len();
        let pair = self.pairs.len();
        let state = PairState::new(
            self.now_ms,
            left.x,
            left.y,
            left_idx,
            Some(left_idx + 1),
            &mut self.rng,
        );
        let _ = self.pairs.push(state);
        let _ = self.eyes.push(Eye { cfg: left, pair });
        let _ = self.eyes.push(Eye { cfg: right, pair });
    }

    pub fn enable_repositioning(&mut self) {
        for pair in &mut self.pairs {
            pair.can_reposition = true;
        }
    }

    pub fn disable_repositioning(&mut self) {
        for pair in &mut self.pairs {
            pair.can_reposition = false;
        }
    }

    pub fn eye_count(&self) -> usize {
        self.eyes.len()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> &[PairState] {
        &self.pairs
    }

    pub fn eye_position(&self, index: usize) -> Option<(f32, f32)> {
        self.eyes.get(index).map(|eye| (eye.cfg.x, eye.cfg.y))
    }

    pub fn eye_pair_index(&self, index: usize) -> Option<usize> {
        self.eyes.get(index).map(|eye| eye.pair)
    }

    /// Advance every pair's state machines to `now`.
    pub fn update(&mut self, now: Instant) {
        let now_ms = now.as_millis();
        if self.now_ms == 0 && now_ms > 0 {
            // First tick: adopt the host clock for eyes added before it
            // was known, so their intervals start counting from now.
            for pair in &mut self.pairs {
                pair.blink_started_ms = now_ms;
                pair.pupil_changed_ms = now_ms;
                pair.fade_started_ms = now_ms;
                pair.reposition_started_ms = now_ms;
            }
        }
        self.now_ms = now_ms;
        for i in 0..self.pairs.len() {
            self.update_blink(i, now_ms);
            self.update_pupil(i, now_ms);
            self.update_fade(i, now_ms);
            if self.pairs[i].can_reposition {
                self.update_reposition(i, now_ms);
            }
        }
    }

    fn update_blink(&mut self, i: usize, now_ms: u64) {
        let elapsed = now_ms.saturating_sub(self.pairs[i].blink_started_ms);
        let state = &mut self.pairs[i];
        match state.stage {
            BlinkStage::Idle => {
                if elapsed > state.blink_interval_ms {
                    state.blink_started_ms = now_ms;
                    state.blink_phase = 0.0;
                    // 20% chance for a double blink
                    state.stage = if self.rng.random_range(0..5) == 0 {
                        BlinkStage::DoubleFirst
                    } else {
                        BlinkStage::Single
                    };
                }
            }
            BlinkStage::DoubleDelay => {
                if elapsed > DOUBLE_BLINK_DELAY_MS {
                    state.stage = BlinkStage::DoubleSecond;
                    state.blink_started_ms = now_ms;
                    state.blink_phase = 0.0;
                }
            }
            BlinkStage::Single | BlinkStage::DoubleFirst | BlinkStage::DoubleSecond => {
                let duration = if state.stage == BlinkStage::Single {
                    SINGLE_BLINK_MS
                } else {
                    DOUBLE_BLINK_MS
                };
                if elapsed < duration {
                    // Fast close, slow open
                    let progress = elapsed as f32 / duration as f32;
                    state.blink_phase = if progress < 0.3 {
                        progress / 0.3
                    } else {
                        1.0 - (progress - 0.3) / 0.7
                    };
                } else {
                    state.blink_phase = 0.0;
                    state.blink_started_ms = now_ms;
                    if state.stage == BlinkStage::DoubleFirst {
                        state.stage = BlinkStage::DoubleDelay;
                    } else {
                        state.stage = BlinkStage::Idle;
                        state.blink_interval_ms = self.rng.random_range(1500..5500);
                    }
                }
            }
        }
    }

    fn update_pupil(&mut self, i: usize, now_ms: u64) {
        let elapsed = now_ms.saturating_sub(self.pairs[i].pupil_changed_ms);
        if elapsed > self.pairs[i].pupil_interval_ms {
            let (tx, ty) = self.pick_pupil_target();
            let state = &mut self.pairs[i];
            state.pupil_target_x = tx;
            state.pupil_target_y = ty;
            state.pupil_changed_ms = now_ms;
            state.pupil_interval_ms = self.rng.random_range(800..2500);
        }
        let state = &mut self.pairs[i];
        state.pupil_x += (state.pupil_target_x - state.pupil_x) * PUPIL_MOVE_RATE;
        state.pupil_y += (state.pupil_target_y - state.pupil_y) * PUPIL_MOVE_RATE;
    }

    fn pick_pupil_target(&mut self) -> (f32, f32) {
        let wobble = |rng: &mut SmallRng| rng.random_range(-0.2..0.2_f32);
        let (mut x, mut y) = match self.rng.random_range(0..9) {
            0 => (0.0, 0.0),
            1 => (-1.2, wobble(&mut self.rng)),
            2 => (1.2, wobble(&mut self.rng)),
            3 => (-1.0, -1.0),
            4 => (1.0, -1.0),
            5 => (-1.0, 1.0),
            6 => (1.0, 1.0),
            7 => (wobble(&mut self.rng), -1.2),
            _ => (wobble(&mut self.rng), 1.2),
        };
        x += self.rng.random_range(-0.15..0.15);
        y += self.rng.random_range(-0.15..0.15);
        (
            x.clamp(-PUPIL_RANGE, PUPIL_RANGE),
            y.clamp(-PUPIL_RANGE, PUPIL_RANGE),
        )
    }

    fn update_fade(&mut self, i: usize, now_ms: u64) {
        let state = &mut self.pairs[i];
        let elapsed = now_ms.saturating_sub(state.fade_started_ms);
        if elapsed > state.fade_interval_ms {
            state.fade_started_ms = now_ms;
            state.fade_interval_ms = self.rng.random_range(1000..2500);
            state.to_red = !state.to_red;
            state.fade_phase = 0.0;
        } else {
            state.fade_phase = (elapsed as f32 / state.fade_interval_ms as f32).min(1.0);
        }
    }

    fn update_reposition(&mut self, i: usize, now_ms: u64) {
        if !self.pairs[i].repositioning {
            let elapsed = now_ms.saturating_sub(self.pairs[i].reposition_started_ms);
            if elapsed > self.pairs[i].reposition_interval_ms {
                let target = self.find_safe_position(i).unwrap_or_else(|| {
                    (
                        self.rng.random_range(4..24) as f32,
                        self.rng.random_range(4..28) as f32,
                    )
                });
                let state = &mut self.pairs[i];
                state.repositioning = true;
                state.closed_started_ms = now_ms;
                state.reposition_started_ms = now_ms;
                state.new_x = target.0;
                state.new_y = target.1;
                state.moved = false;
                state.blink_phase = 1.0;
            }
            return;
        }

        let closed_elapsed = now_ms.saturating_sub(self.pairs[i].closed_started_ms);
        if closed_elapsed < CLOSED_DURATION_MS {
            self.pairs[i].blink_phase = 1.0;
            if !self.pairs[i].moved && closed_elapsed > CLOSED_DURATION_MS / 2 {
                self.seat_pair(i);
                self.pairs[i].moved = true;
            }
        } else {
            let state = &mut self.pairs[i];
            state.repositioning = false;
            state.blink_phase = 0.0;
            state.stage = BlinkStage::Idle;
            state.blink_started_ms = now_ms;
            state.reposition_started_ms = now_ms;
            state.reposition_interval_ms = self.rng.random_range(8000..15000);
        }
    }

    /// Move both eyes of a pair to the staged position in one step, keeping
    /// the standard spacing between left and right.
    fn seat_pair(&mut self, i: usize) {
        let (left, right, x, y) = {
            let state = &self.pairs[i];
            (state.left, state.right, state.new_x, state.new_y)
        };
        if let Some(eye) = self.eyes.get_mut(left) {
            eye.cfg.x = x;
            eye.cfg.y = y;
        }
        if let Some(right) = right {
            if let Some(eye) = self.eyes.get_mut(right) {
                eye.cfg.x = x + PAIR_SPACING;
                eye.cfg.y = y;
            }
        }
    }

    /// Rejection-sample a landing spot far enough from every other pair's
    /// eyes, including the mirror point where the right eye will sit.
    fn find_safe_position(&mut self, pair: usize) -> Option<(f32, f32)> {
        for _ in 0..REPOSITION_ATTEMPTS {
            let x = self.rng.random_range(4..24) as f32;
            let y = self.rng.random_range(4..28) as f32;
            if !self.collides(x, y, pair) {
                return Some((x, y));
            }
        }
        None
    }

    fn collides(&self, x: f32, y: f32, exclude_pair: usize) -> bool {
        for eye in &self.eyes {
            if eye.pair == exclude_pair {
                continue;
            }
            if length(eye.cfg.x - x, eye.cfg.y - y) < MIN_EYE_DISTANCE {
                return true;
            }
            if length(eye.cfg.x - (x + PAIR_SPACING), eye.cfg.y - y) < MIN_EYE_DISTANCE {
                return true;
            }
        }
        false
    }

    /// Draw every eye. Pure with respect to eye and pair state; the glow
    /// pulses with `glow_phase`.
    pub fn draw(&self, fb: &mut Surface, glow_phase: f32) {
        for (index, eye) in self.eyes.iter().enumerate() {
            let state = &self.pairs[eye.pair];
            draw_single(fb, &eye.cfg, state, glow_phase, index);
        }
    }
}

fn draw_single(fb: &mut Surface, cfg: &EyeConfig, state: &PairState, glow_phase: f32, index: usize) {
    let openness = 1.0 - state.blink_phase;
    if openness < 0.1 {
        return;
    }

    let cx = cfg.x as i32;
    let cy = cfg.y as i32;

    match cfg.shape {
        EyeShape::Point => {
            fb.set_pen(fade_color(cfg.color, state.to_red, state.fade_phase));
            fb.pixel(cx, cy);
            return;
        }
        EyeShape::Oval => {
            fb.set_pen(cfg.color);
            fb.pixel(cx, cy);
            fb.pixel(cx + 1, cy);
            fb.pixel(cx + 2, cy);
            if openness > 0.6 {
                fb.pixel(cx, cy + 1);
                fb.pixel(cx + 1, cy + 1);
                fb.pixel(cx + 2, cy + 1);
            }
            if openness > 0.4 {
                draw_pupil(fb, cx, cy, state, cy, cy + 1);
            }
        }
        EyeShape::Triangle => {
            fb.set_pen(cfg.color);
            fb.pixel(cx, cy);
            fb.pixel(cx + 1, cy);
            fb.pixel(cx + 2, cy);
            if openness > 0.6 {
                fb.pixel(cx + 1, cy - 1);
                fb.pixel(cx + 1, cy + 1);
            }
            if openness > 0.4 {
                draw_pupil(fb, cx, cy, state, cy - 1, cy + 1);
            }
        }
    }

    let glow = cfg.glow * (0.7 + 0.3 * sinf(glow_phase * 3.0 + index as f32 * 1.5)) * openness;

    fb.set_pen(scale_rgb(cfg.color, glow));
    match cfg.shape {
        EyeShape::Triangle => {
            fb.pixel(cx - 1, cy);
            fb.pixel(cx + 3, cy);
            fb.pixel(cx + 1, cy - 2);
            fb.pixel(cx + 1, cy + 2);
        }
        _ => {
            fb.pixel(cx - 1, cy);
            fb.pixel(cx - 1, cy + 1);
            fb.pixel(cx + 3, cy);
            fb.pixel(cx + 3, cy + 1);
            fb.pixel(cx, cy - 1);
            fb.pixel(cx + 1, cy - 1);
            fb.pixel(cx + 2, cy - 1);
            fb.pixel(cx, cy + 2);
            fb.pixel(cx + 1, cy + 2);
            fb.pixel(cx + 2, cy + 2);
        }
    }

    // Wider, dimmer halo
    fb.set_pen(scale_rgb(cfg.color, glow * 0.3));
    fb.pixel(cx - 2, cy);
    fb.pixel(cx - 2, cy + 1);
    fb.pixel(cx + 4, cy);
    fb.pixel(cx + 4, cy + 1);
    fb.pixel(cx + 1, cy - 2);
    fb.pixel(cx + 1, cy + 3);
}

fn draw_pupil(fb: &mut Surface, cx: i32, cy: i32, state: &PairState, min_y: i32, max_y: i32) {
    fb.set_pen(BLACK);
    let px = cx + 1 + roundf(state.pupil_x * 1.2) as i32;
    let py = cy + roundf(state.pupil_y * 0.8) as i32;
    fb.pixel(px.clamp(cx, cx + 2), py.clamp(min_y, max_y));
}
