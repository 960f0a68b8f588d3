//! Storm cell: rolling clouds, driving rain and frequent lightning.

use heapless::Vec;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::color::{Rgb, blend_colors, scale_rgb};
use crate::lightning::{Lightning, LightningConfig};
use crate::scene::{Backdrop, Scene, Tick};
use crate::surface::{HEIGHT, Surface, WIDTH};

const CLOUD_COUNT: usize = 24;
const RAIN_COUNT: usize = 40;
const CLOUD_SPEED: f32 = 8.0;

const SKY_TOP: Rgb = Rgb {
    r: 18,
    g: 20,
    b: 35,
};
const SKY_BOTTOM: Rgb = Rgb { r: 8, g: 9, b: 18 };
const CLOUD: Rgb = Rgb {
    r: 60,
    g: 60,
    b: 72,
};
const RAIN: Rgb = Rgb {
    r: 100,
    g: 120,
    b: 180,
};
const GROUND: Rgb = Rgb {
    r: 15,
    g: 22,
    b: 15,
};

struct CloudPuff {
    x: f32,
    y: f32,
    drift: f32,
    density: f32,
}

struct RainDrop {
    x: f32,
    y: f32,
    speed: f32,
    length: i32,
}

pub struct StormyNightScene {
    clouds: Vec<CloudPuff, CLOUD_COUNT>,
    drops: Vec<RainDrop, RAIN_COUNT>,
    lightning: Lightning,
    rng: SmallRng,
}

impl StormyNightScene {
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut clouds = Vec::new();
        for _ in 0..CLOUD_COUNT {
            let puff = CloudPuff {
                x: rng.random_range(0.0..WIDTH as f32),
                y: rng.random_range(0.0..9.0),
                drift: rng.random_range(0.5..1.5),
                density: rng.random_range(0.3..1.0),
            };
            let _ = clouds.push(puff);
        }

        let mut drops = Vec::new();
        for _ in 0..RAIN_COUNT {
            let drop = RainDrop {
                x: rng.random_range(0.0..WIDTH as f32),
                y: rng.random_range(0.0..HEIGHT as f32),
                speed: rng.random_range(18.0..30.0),
                length: rng.random_range(1..3),
            };
            let _ = drops.push(drop);
        }

        let lightning = Lightning::new(LightningConfig::default(), rng.random());

        Self {
            clouds,
            drops,
            lightning,
            rng,
        }
    }
}

impl Scene for StormyNightScene {
    fn update(&mut self, tick: &Tick<'_>) {
        let dt = tick.dt;

        for puff in &mut self.clouds {
            puff.x += puff.drift * CLOUD_SPEED * dt;
            if puff.x >= WIDTH as f32 {
                puff.x -= WIDTH as f32;
            }
        }

        for drop in &mut self.drops {
            drop.y += drop.speed * dt;
            drop.x -= 4.0 * dt; // wind
            if drop.y >= HEIGHT as f32 {
                drop.y = -1.0;
                drop.x = self.rng.random_range(0.0..WIDTH as f32 + 4.0);
                drop.speed = self.rng.random_range(18.0..30.0);
            }
        }

        self.lightning.update(dt, &mut |_strike| {});
    }

    fn render(&mut self, fb: &mut Surface, _backdrop: &Backdrop) {
        // Slate sky gradient
        for y in 0..HEIGHT {
            let amount = (y * 255 / HEIGHT) as u8;
            fb.set_pen(blend_colors(SKY_TOP, SKY_BOTTOM, amount));
            for x in 0..WIDTH {
                fb.pixel(x, y);
            }
        }

        // Ground strip
        fb.set_pen(GROUND);
        for y in HEIGHT - 3..HEIGHT {
            for x in 0..WIDTH {
                fb.pixel(x, y);
            }
        }

        // Cloud deck
        for puff in &self.clouds {
            fb.set_pen(scale_rgb(CLOUD, puff.density));
            let x = puff.x as i32;
            let y = puff.y as i32;
            fb.pixel(x, y);
            fb.pixel(x + 1, y);
        }

        // Rain streaks
        fb.set_pen(RAIN);
        for drop in &self.drops {
            let x = drop.x as i32;
            let y = drop.y as i32;
            for i in 0..=drop.length {
                fb.pixel(x, y - i);
            }
        }

        self.lightning.render(fb);
    }
}
