//! Scene catalog with compile-time known variants.
//!
//! Every tableau implements the [`Scene`] trait and lives in one
//! [`SceneSlot`] variant, so the director dispatches without heap
//! allocation. The slot for a scene is rebuilt from its [`SceneId`] on every
//! entry, which is also what resets per-scene state.

mod bat_flock;
mod candle_flame;
mod castle;
mod creepy_eyes;
mod flame_face;
mod flying_bats;
mod ghostly_spirits;
mod haunted_tree;
mod heat;
mod pumpkin;
mod skull;
mod stormy_night;
mod witch_hat;
mod wolf_howling;
mod woodland;

use embassy_time::Instant;
use libm::{cosf, sinf, sqrtf};

pub use bat_flock::BatFlockScene;
pub use candle_flame::CandleFlameScene;
pub use castle::CastleScene;
pub use creepy_eyes::CreepyEyesScene;
pub use flame_face::FlameFaceScene;
pub use flying_bats::FlyingBatsScene;
pub use ghostly_spirits::GhostlySpiritsScene;
pub use haunted_tree::HauntedTreeScene;
pub use pumpkin::PumpkinScene;
pub use skull::SkullScene;
pub use stormy_night::StormyNightScene;
pub use witch_hat::WitchHatScene;
pub use wolf_howling::WolfHowlingScene;
pub use woodland::{Gait, WoodlandScene};

use crate::color::{Rgb, channel};
use crate::input::Buttons;
use crate::surface::{HEIGHT, Surface, WIDTH};

const SCENE_COUNT: u8 = 14;

/// Per-frame context handed from the director to the active scene.
pub struct Tick<'a> {
    pub now: Instant,
    /// Seconds since the previous tick, never negative.
    pub dt: f32,
    pub buttons: &'a Buttons,
}

pub trait Scene {
    /// Advance animation state for one frame.
    fn update(&mut self, tick: &Tick<'_>);

    /// Draw the frame. Called strictly after every update of the tick.
    fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop);
}

/// Catalog tags. [`SceneId::WoodlandPath`] doubles as the transition scene
/// the director inserts between any two others.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SceneId {
    CreepyEyes = 0,
    StormyNight = 1,
    WolfHowling = 2,
    BatFlock = 3,
    CandleFlame = 4,
    Pumpkin = 5,
    FlyingBats = 6,
    FlameFace = 7,
    GhostlySpirits = 8,
    HauntedTree = 9,
    SkullCrossbones = 10,
    Castle = 11,
    WitchHat = 12,
    WoodlandPath = 13,
}

impl SceneId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::CreepyEyes,
            1 => Self::StormyNight,
            2 => Self::WolfHowling,
            3 => Self::BatFlock,
            4 => Self::CandleFlame,
            5 => Self::Pumpkin,
            6 => Self::FlyingBats,
            7 => Self::FlameFace,
            8 => Self::GhostlySpirits,
            9 => Self::HauntedTree,
            10 => Self::SkullCrossbones,
            11 => Self::Castle,
            12 => Self::WitchHat,
            13 => Self::WoodlandPath,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreepyEyes => "creepy_eyes",
            Self::StormyNight => "stormy_night",
            Self::WolfHowling => "wolf_howling",
            Self::BatFlock => "bat_flock",
            Self::CandleFlame => "candle_flame",
            Self::Pumpkin => "pumpkin",
            Self::FlyingBats => "flying_bats",
            Self::FlameFace => "flame_face",
            Self::GhostlySpirits => "ghostly_spirits",
            Self::HauntedTree => "haunted_tree",
            Self::SkullCrossbones => "skull_crossbones",
            Self::Castle => "castle",
            Self::WitchHat => "witch_hat",
            Self::WoodlandPath => "woodland_path",
        }
    }

    /// Next tag in catalog order, skipping the transition scene.
    pub fn next_catalog(self) -> Self {
        let mut raw = self as u8;
        loop {
            raw = (raw + 1) % SCENE_COUNT;
            // raw stays within the enum range
            let id = Self::from_raw(raw).unwrap_or(Self::CreepyEyes);
            if id != Self::WoodlandPath {
                return id;
            }
        }
    }

    /// Dwell-time multiplier over the director's 8 s base.
    pub const fn dwell_multiplier(self) -> u64 {
        match self {
            Self::CreepyEyes => 3,
            Self::FlyingBats | Self::BatFlock => 2,
            _ => 1,
        }
    }

    /// Build a fresh scene instance for this tag.
    pub fn to_slot(self, seed: u64) -> SceneSlot {
        match self {
            Self::CreepyEyes => SceneSlot::CreepyEyes(CreepyEyesScene::new(seed)),
            Self::StormyNight => SceneSlot::StormyNight(StormyNightScene::new(seed)),
            Self::WolfHowling => SceneSlot::WolfHowling(WolfHowlingScene::new()),
            Self::BatFlock => SceneSlot::BatFlock(BatFlockScene::new(seed)),
            Self::CandleFlame => SceneSlot::CandleFlame(CandleFlameScene::new(seed)),
            Self::Pumpkin => SceneSlot::Pumpkin(PumpkinScene::new()),
            Self::FlyingBats => SceneSlot::FlyingBats(FlyingBatsScene::new()),
            Self::FlameFace => SceneSlot::FlameFace(FlameFaceScene::new(seed)),
            Self::GhostlySpirits => SceneSlot::GhostlySpirits(GhostlySpiritsScene::new(seed)),
            Self::HauntedTree => SceneSlot::HauntedTree(HauntedTreeScene::new(seed)),
            Self::SkullCrossbones => SceneSlot::SkullCrossbones(SkullScene::new(seed)),
            Self::Castle => SceneSlot::Castle(CastleScene::new(seed)),
            Self::WitchHat => SceneSlot::WitchHat(WitchHatScene::new()),
            Self::WoodlandPath => SceneSlot::WoodlandPath(WoodlandScene::new(seed)),
        }
    }
}

/// The active scene, one variant per catalog tag.
pub enum SceneSlot {
    CreepyEyes(CreepyEyesScene),
    StormyNight(StormyNightScene),
    WolfHowling(WolfHowlingScene),
    BatFlock(BatFlockScene),
    CandleFlame(CandleFlameScene),
    Pumpkin(PumpkinScene),
    FlyingBats(FlyingBatsScene),
    FlameFace(FlameFaceScene),
    GhostlySpirits(GhostlySpiritsScene),
    HauntedTree(HauntedTreeScene),
    SkullCrossbones(SkullScene),
    Castle(CastleScene),
    WitchHat(WitchHatScene),
    WoodlandPath(WoodlandScene),
}

impl SceneSlot {
    pub fn id(&self) -> SceneId {
        match self {
            Self::CreepyEyes(_) => SceneId::CreepyEyes,
            Self::StormyNight(_) => SceneId::StormyNight,
            Self::WolfHowling(_) => SceneId::WolfHowling,
            Self::BatFlock(_) => SceneId::BatFlock,
            Self::CandleFlame(_) => SceneId::CandleFlame,
            Self::Pumpkin(_) => SceneId::Pumpkin,
            Self::FlyingBats(_) => SceneId::FlyingBats,
            Self::FlameFace(_) => SceneId::FlameFace,
            Self::GhostlySpirits(_) => SceneId::GhostlySpirits,
            Self::HauntedTree(_) => SceneId::HauntedTree,
            Self::SkullCrossbones(_) => SceneId::SkullCrossbones,
            Self::Castle(_) => SceneId::Castle,
            Self::WitchHat(_) => SceneId::WitchHat,
            Self::WoodlandPath(_) => SceneId::WoodlandPath,
        }
    }

    pub fn update(&mut self, tick: &Tick<'_>) {
        match self {
            Self::CreepyEyes(scene) => scene.update(tick),
            Self::StormyNight(scene) => scene.update(tick),
            Self::WolfHowling(scene) => scene.update(tick),
            Self::BatFlock(scene) => scene.update(tick),
            Self::CandleFlame(scene) => scene.update(tick),
            Self::Pumpkin(scene) => scene.update(tick),
            Self::FlyingBats(scene) => scene.update(tick),
            Self::FlameFace(scene) => scene.update(tick),
            Self::GhostlySpirits(scene) => scene.update(tick),
            Self::HauntedTree(scene) => scene.update(tick),
            Self::SkullCrossbones(scene) => scene.update(tick),
            Self::Castle(scene) => scene.update(tick),
            Self::WitchHat(scene) => scene.update(tick),
            Self::WoodlandPath(scene) => scene.update(tick),
        }
    }

    pub fn render(&mut self, fb: &mut Surface, backdrop: &Backdrop) {
        match self {
            Self::CreepyEyes(scene) => scene.render(fb, backdrop),
            Self::StormyNight(scene) => scene.render(fb, backdrop),
            Self::WolfHowling(scene) => scene.render(fb, backdrop),
            Self::BatFlock(scene) => scene.render(fb, backdrop),
            Self::CandleFlame(scene) => scene.render(fb, backdrop),
            Self::Pumpkin(scene) => scene.render(fb, backdrop),
            Self::FlyingBats(scene) => scene.render(fb, backdrop),
            Self::FlameFace(scene) => scene.render(fb, backdrop),
            Self::GhostlySpirits(scene) => scene.render(fb, backdrop),
            Self::HauntedTree(scene) => scene.render(fb, backdrop),
            Self::SkullCrossbones(scene) => scene.render(fb, backdrop),
            Self::Castle(scene) => scene.render(fb, backdrop),
            Self::WitchHat(scene) => scene.render(fb, backdrop),
            Self::WoodlandPath(scene) => scene.render(fb, backdrop),
        }
    }
}

const BACKDROP_BATS: usize = 4;

/// Shared background layer: a slow nebula plus a handful of bats drifting
/// across regardless of the active scene. The director updates it every
/// tick; scenes that want it draw it first.
pub struct Backdrop {
    phase: f32,
    timer_ms: u64,
    bat_x: [f32; BACKDROP_BATS],
    bat_speed: [f32; BACKDROP_BATS],
}

impl Backdrop {
    pub fn new() -> Self {
        let mut bat_x = [0.0; BACKDROP_BATS];
        let mut bat_speed = [0.0; BACKDROP_BATS];
        for (i, (x, speed)) in bat_x.iter_mut().zip(bat_speed.iter_mut()).enumerate() {
            *x = -10.0 - i as f32 * 15.0;
            *speed = 0.3 + i as f32 * 0.1;
        }
        Self {
            phase: 0.0,
            timer_ms: 0,
            bat_x,
            bat_speed,
        }
    }

    pub fn update(&mut self, now: Instant) {
        self.timer_ms = now.as_millis();
        self.phase += 0.02;
        for (x, speed) in self.bat_x.iter_mut().zip(self.bat_speed) {
            *x += speed;
            if *x > 37.0 {
                *x = -10.0;
            }
        }
    }

    pub const fn phase(&self) -> f32 {
        self.phase
    }

    /// Nebula background plus dimmed bat silhouettes.
    pub fn draw(&self, fb: &mut Surface) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let xf = x as f32;
                let yf = y as f32;
                let noise1 = sinf(xf * 0.1 + self.phase * 0.3) * cosf(yf * 0.15 + self.phase * 0.2);
                let noise2 =
                    sinf(xf * 0.08 - self.phase * 0.25) * cosf(yf * 0.12 - self.phase * 0.15);
                let noise3 = sinf((xf + yf) * 0.06 + self.phase * 0.4) * 0.5;

                let nebula = ((noise1 + noise2 + noise3) * 0.3 + 0.2).clamp(0.0, 0.6);
                if nebula > 0.05 {
                    let base = nebula * 100.0;
                    let variation =
                        sinf(xf * 0.2 + self.phase * 0.1) + cosf(yf * 0.15 - self.phase * 0.08);
                    fb.set_pen(Rgb {
                        r: channel(base * 0.8),
                        g: channel(base * (0.3 + variation * 0.2)),
                        b: channel(base * (1.2 + variation * 0.3)),
                    });
                } else {
                    fb.set_pen(Rgb { r: 0, g: 0, b: 8 });
                }
                fb.pixel(x, y);
            }
        }

        self.draw_bats(fb, Rgb { r: 25, g: 5, b: 25 });
    }

    /// Bat silhouettes only, in the given color.
    pub fn draw_bats(&self, fb: &mut Surface, color: Rgb) {
        fb.set_pen(color);
        for (i, x) in self.bat_x.iter().enumerate() {
            let bat_x = *x as i32;
            if !(-5..=37).contains(&bat_x) {
                continue;
            }
            let bob = sinf(self.timer_ms as f32 * 0.01 + i as f32) * 3.0;
            let bat_y = 8 + i as i32 * 6 + bob as i32;

            fb.pixel(bat_x + 2, bat_y);

            let wing_up = (self.timer_ms / 200 + i as u64) % 2 == 0;
            if wing_up {
                fb.pixel(bat_x, bat_y - 1);
                fb.pixel(bat_x + 1, bat_y - 1);
                fb.pixel(bat_x + 3, bat_y - 1);
                fb.pixel(bat_x + 4, bat_y - 1);
            } else {
                fb.pixel(bat_x, bat_y + 1);
                fb.pixel(bat_x + 1, bat_y);
                fb.pixel(bat_x + 3, bat_y);
                fb.pixel(bat_x + 4, bat_y + 1);
            }
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

/// Large glowing moon shared by the night-sky tableaux.
pub(crate) fn draw_big_moon(fb: &mut Surface, glow_phase: f32) {
    let moon_x = 20;
    let moon_y = 8;
    let radius = 6.0_f32;

    let glow_intensity = 0.8 + 0.2 * sinf(glow_phase * 1.2);

    for dy in -8..=8_i32 {
        for dx in -8..=8_i32 {
            let dist = sqrtf((dx * dx + dy * dy) as f32);
            if dist > radius && dist <= radius + 2.5 {
                let strength = (radius + 2.5 - dist) / 2.5 * glow_intensity * 0.4;
                let value = channel(strength * 150.0);
                if value > 8 {
                    fb.set_pen(Rgb {
                        r: value,
                        g: value,
                        b: value.saturating_add(20),
                    });
                    fb.pixel(moon_x + dx, moon_y + dy);
                }
            } else if dist <= radius {
                let surface_variation =
                    sinf(dx as f32 * 0.8 + glow_phase * 0.3) * cosf(dy as f32 * 0.9 - glow_phase * 0.2) * 0.1;
                let brightness = (0.85 + surface_variation) * glow_intensity;
                let depth = (radius - dist) / radius;
                let white = channel(brightness * 240.0 * (0.7 + depth * 0.3));
                let yellow = channel(brightness * 220.0 * (0.7 + depth * 0.3));
                fb.set_pen(Rgb {
                    r: white,
                    g: yellow,
                    b: channel(f32::from(yellow) * 0.8),
                });
                fb.pixel(moon_x + dx, moon_y + dy);
            }
        }
    }

    // Craters
    fb.set_pen(Rgb {
        r: 160,
        g: 150,
        b: 120,
    });
    fb.pixel(moon_x - 2, moon_y - 1);
    fb.pixel(moon_x - 1, moon_y - 1);
    fb.pixel(moon_x + 1, moon_y + 2);
    fb.pixel(moon_x + 3, moon_y - 2);
}
