//! Scene director: sequences the catalog, times dwell, handles buttons.
//!
//! Between any two catalog scenes the director inserts one pass of the
//! woodland path, so the display always "walks" from one tableau to the
//! next. Scene state lives inside the active [`SceneSlot`] and is rebuilt
//! from scratch on every entry.

use embassy_time::Instant;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::color::{BLACK, Rgb};
use crate::input::{Buttons, Edge};
use crate::scene::{Backdrop, SceneId, SceneSlot, Tick};
use crate::surface::{HEIGHT, Surface, WIDTH};

const BASE_DWELL_MS: u64 = 8000;
const TRANSITION_DWELL_MULTIPLIER: u64 = 2;

/// How long the pause border keeps blinking after B is pressed.
const PAUSE_FLASH_MS: u64 = 2000;
const PAUSE_BLINK_MS: u64 = 200;

const PAUSE_BORDER: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 0,
};

pub struct Director {
    rng: SmallRng,
    scene: SceneSlot,
    scene_started_ms: u64,
    in_transition: bool,
    next_target: SceneId,
    paused: bool,
    pause_pressed_ms: u64,
    backdrop: Backdrop,
    last_tick_ms: Option<u64>,
    now_ms: u64,
    a_edge: Edge,
    b_edge: Edge,
    d_edge: Edge,
}

impl Director {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let scene = SceneId::CreepyEyes.to_slot(rng.random());
        Self {
            rng,
            scene,
            scene_started_ms: 0,
            in_transition: false,
            next_target: SceneId::Pumpkin,
            paused: false,
            pause_pressed_ms: 0,
            backdrop: Backdrop::new(),
            last_tick_ms: None,
            now_ms: 0,
            a_edge: Edge::new(),
            b_edge: Edge::new(),
            d_edge: Edge::new(),
        }
    }

    pub fn scene_id(&self) -> SceneId {
        self.scene.id()
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub const fn in_transition(&self) -> bool {
        self.in_transition
    }

    /// Drive one frame. Returns `false` when the host should tear down.
    pub fn update(&mut self, now: Instant, buttons: &Buttons) -> bool {
        let now_ms = now.as_millis();
        let first_tick = self.last_tick_ms.is_none();
        let last = self.last_tick_ms.unwrap_or(now_ms);
        let dt = now_ms.saturating_sub(last) as f32 / 1000.0;
        self.last_tick_ms = Some(now_ms);
        self.now_ms = now_ms;
        if first_tick {
            self.scene_started_ms = now_ms;
        }

        if self.d_edge.rising(buttons.d) {
            return false;
        }

        if self.a_edge.rising(buttons.a) {
            self.advance(now_ms);
        }

        if self.b_edge.rising(buttons.b) {
            self.paused = !self.paused;
            self.pause_pressed_ms = now_ms;
        }

        self.backdrop.update(now);

        if !self.paused && now_ms.saturating_sub(self.scene_started_ms) > self.dwell_ms() {
            self.advance(now_ms);
        }

        // Scene animation keeps running even while paused; only the dwell
        // timer is frozen.
        self.scene.update(&Tick { now, dt, buttons });

        true
    }

    pub fn render(&mut self, fb: &mut Surface) {
        fb.set_pen(BLACK);
        fb.clear();
        self.scene.render(fb, &self.backdrop);

        if self.paused {
            let since_pause = self.now_ms.saturating_sub(self.pause_pressed_ms);
            if since_pause < PAUSE_FLASH_MS && (since_pause / PAUSE_BLINK_MS) % 2 == 0 {
                fb.set_pen(PAUSE_BORDER);
                for x in 0..WIDTH {
                    fb.pixel(x, 0);
                    fb.pixel(x, HEIGHT - 1);
                }
                for y in 0..HEIGHT {
                    fb.pixel(0, y);
                    fb.pixel(WIDTH - 1, y);
                }
            }
        }
    }

    fn dwell_ms(&self) -> u64 {
        let multiplier = if self.in_transition {
            TRANSITION_DWELL_MULTIPLIER
        } else {
            self.scene.id().dwell_multiplier()
        };
        BASE_DWELL_MS * multiplier
    }

    /// Move to the next scene: into the woodland transition from a catalog
    /// scene, or out of it to the pending target.
    fn advance(&mut self, now_ms: u64) {
        let next = if self.in_transition {
            self.in_transition = false;
            let target = self.next_target;
            self.next_target = target.next_catalog();
            target
        } else {
            self.in_transition = true;
            SceneId::WoodlandPath
        };
        self.scene = next.to_slot(self.rng.random());
        self.scene_started_ms = now_ms;
    }
}
