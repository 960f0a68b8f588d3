//! Bat flock simulation: separation, alignment, cohesion and a soft
//! boundary force, with per-scene parameter sets.

use heapless::Vec;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::math::length;

pub const MAX_BOIDS: usize = 12;

#[derive(Debug, Clone, Copy)]
pub struct Boid {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub wing_phase: f32,
}

/// Flight box with a soft margin; boids are pushed back inside when they
/// come within `margin` of an edge.
#[derive(Debug, Clone, Copy)]
pub struct FlightBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub margin: f32,
    /// Push strength per unit of penetration.
    pub push: f32,
    /// Bottom edges can push harder to keep bats above the horizon.
    pub bottom_push: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct FlockParams {
    pub desired_separation: f32,
    pub neighbor_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub flight_box: FlightBox,
    /// Per-boid chance of a brief 3x separation burst, for organic scatter.
    pub scatter_chance: f64,
}

/// Force weights applied on one step.
#[derive(Debug, Clone, Copy)]
pub struct ForceWeights {
    pub separation: f32,
    pub alignment: f32,
    pub cohesion: f32,
    pub boundary: f32,
}

impl ForceWeights {
    pub const FLOCKING: Self = Self {
        separation: 1.0,
        alignment: 1.0,
        cohesion: 1.0,
        boundary: 1.0,
    };

    pub const SPREADING: Self = Self {
        separation: 3.0,
        alignment: 0.2,
        cohesion: 0.1,
        boundary: 1.0,
    };
}

pub struct Flock {
    boids: Vec<Boid, MAX_BOIDS>,
    params: FlockParams,
    rng: SmallRng,
}

impl Flock {
    pub fn new(params: FlockParams, seed: u64) -> Self {
        Self {
            boids: Vec::new(),
            params,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seed `count` boids uniformly inside the given area with small random
    /// velocities and random wing phases.
    pub fn spawn(&mut self, count: usize, x: (f32, f32), y: (f32, f32)) {
        self.boids.clear();
        for _ in 0..count.min(MAX_BOIDS) {
            let boid = Boid {
                x: self.rng.random_range(x.0..x.1),
                y: self.rng.random_range(y.0..y.1),
                vx: self.rng.random_range(-0.5..0.5),
                vy: self.rng.random_range(-0.5..0.5),
                wing_phase: self.rng.random_range(0.0..core::f32::consts::TAU),
            };
            let _ = self.boids.push(boid);
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    /// One simulation step. Forces are computed for all boids against the
    /// current positions before any boid moves.
    pub fn step(&mut self, weights: ForceWeights) {
        let mut forces: Vec<(f32, f32), MAX_BOIDS> = Vec::new();
        for boid in &self.boids {
            let scatter = if self.rng.random_bool(self.params.scatter_chance) {
                3.0
            } else {
                1.0
            };
            let (sep_x, sep_y) = self.separate(boid, scatter);
            let (ali_x, ali_y) = self.align(boid);
            let (coh_x, coh_y) = self.cohesion(boid);
            let (bnd_x, bnd_y) = self.boundary(boid);
            let fx = sep_x * weights.separation
                + ali_x * weights.alignment
                + coh_x * weights.cohesion
                + bnd_x * weights.boundary;
            let fy = sep_y * weights.separation
                + ali_y * weights.alignment
                + coh_y * weights.cohesion
                + bnd_y * weights.boundary;
            let _ = forces.push((fx, fy));
        }

        let max_speed = self.params.max_speed;
        for (boid, (fx, fy)) in self.boids.iter_mut().zip(forces) {
            boid.vx += fx;
            boid.vy += fy;

            let speed = length(boid.vx, boid.vy);
            if speed > max_speed {
                boid.vx = boid.vx / speed * max_speed;
                boid.vy = boid.vy / speed * max_speed;
            }

            boid.x += boid.vx;
            boid.y += boid.vy;
            boid.wing_phase += 0.2;
        }
    }

    fn separate(&self, boid: &Boid, scatter: f32) -> (f32, f32) {
        let reach = self.params.desired_separation * scatter;
        let mut steer_x = 0.0;
        let mut steer_y = 0.0;
        let mut count = 0;

        for other in &self.boids {
            let dx = boid.x - other.x;
            let dy = boid.y - other.y;
            let distance = length(dx, dy);
            if distance > 0.0 && distance < reach {
                // Away from the neighbor, weighted by closeness
                steer_x += dx / (distance * distance) * scatter;
                steer_y += dy / (distance * distance) * scatter;
                count += 1;
            }
        }

        if count > 0 {
            steer_x /= count as f32;
            steer_y /= count as f32;
            let mag = length(steer_x, steer_y);
            if mag > 0.0 {
                steer_x = steer_x / mag * self.params.max_force * scatter;
                steer_y = steer_y / mag * self.params.max_force * scatter;
            }
        }
        (steer_x, steer_y)
    }

    fn align(&self, boid: &Boid) -> (f32, f32) {
        let mut sum_vx = 0.0;
        let mut sum_vy = 0.0;
        let mut count = 0;

        for other in &self.boids {
            let distance = length(boid.x - other.x, boid.y - other.y);
            if distance > 0.0 && distance < self.params.neighbor_radius {
                sum_vx += other.vx;
                sum_vy += other.vy;
                count += 1;
            }
        }

        if count > 0 {
            sum_vx /= count as f32;
            sum_vy /= count as f32;
            let mag = length(sum_vx, sum_vy);
            if mag > 0.0 {
                sum_vx = sum_vx / mag * self.params.max_force;
                sum_vy = sum_vy / mag * self.params.max_force;
            }
        }
        (sum_vx, sum_vy)
    }

    fn cohesion(&self, boid: &Boid) -> (f32, f32) {
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut count = 0;

        for other in &self.boids {
            let distance = length(boid.x - other.x, boid.y - other.y);
            if distance > 0.0 && distance < self.params.neighbor_radius {
                sum_x += other.x;
                sum_y += other.y;
                count += 1;
            }
        }

        if count == 0 {
            return (0.0, 0.0);
        }

        let mut seek_x = sum_x / count as f32 - boid.x;
        let mut seek_y = sum_y / count as f32 - boid.y;
        let mag = length(seek_x, seek_y);
        if mag > 0.0 {
            seek_x = seek_x / mag * self.params.max_force;
            seek_y = seek_y / mag * self.params.max_force;
        }
        (seek_x, seek_y)
    }

    fn boundary(&self, boid: &Boid) -> (f32, f32) {
        let fb = &self.params.flight_box;
        let mut force_x = 0.0;
        let mut force_y = 0.0;

        if boid.x < fb.left + fb.margin {
            force_x += (fb.left + fb.margin - boid.x) * fb.push;
        }
        if boid.x > fb.right - fb.margin {
            force_x -= (boid.x - (fb.right - fb.margin)) * fb.push;
        }
        if boid.y < fb.top + fb.margin {
            force_y += (fb.top + fb.margin - boid.y) * fb.push;
        }
        if boid.y > fb.bottom - fb.margin {
            force_y -= (boid.y - (fb.bottom - fb.margin)) * fb.bottom_push;
        }
        (force_x, force_y)
    }
}
