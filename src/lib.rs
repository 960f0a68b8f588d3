#![no_std]

#[cfg(test)]
extern crate std;

pub mod boids;
pub mod color;
pub mod director;
pub mod eyes;
pub mod frame_scheduler;
pub mod input;
pub mod lightning;
pub mod math;
pub mod scene;
pub mod surface;
pub mod theme;

pub use color::Rgb;
pub use director::Director;
pub use embassy_time::{Duration, Instant};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use input::Buttons;
pub use scene::{Backdrop, Scene, SceneId, Tick};
pub use surface::{HEIGHT, Surface, WIDTH};
pub use theme::Theme;

/// Abstract LED panel driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Push a finished frame to the panel, row-major.
    fn write(&mut self, colors: &[Rgb]);
}
