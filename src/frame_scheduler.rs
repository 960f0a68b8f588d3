//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::director::Director;
use crate::input::Buttons;
use crate::surface::Surface;

/// Default target frame rate.
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// The director requested teardown (exit button).
    pub exit: bool,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Runs the director's update/render pair and pushes the frame out
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(Director::new(seed), driver);
///
/// loop {
///     let buttons = read_buttons();
///     let result = scheduler.tick(Instant::from_millis(now_ms()), &buttons);
///     if result.exit {
///         break;
///     }
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<O: OutputDriver> {
    output: O,
    director: Director,
    surface: Surface,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<O: OutputDriver> FrameScheduler<O> {
    /// Create a new frame scheduler running at [`DEFAULT_FPS`].
    pub fn new(director: Director, driver: O) -> Self {
        Self::with_frame_duration(director, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(director: Director, driver: O, frame_duration: Duration) -> Self {
        Self {
            output: driver,
            director,
            surface: Surface::new(),
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    pub fn tick(&mut self, now: Instant, buttons: &Buttons) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now.
        // This prevents catch-up bursts after long stalls.
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let running = self.director.update(now, buttons);
        self.director.render(&mut self.surface);
        self.output.write(self.surface.pixels());

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            exit: !running,
        }
    }

    /// Get a reference to the director.
    pub fn director(&self) -> &Director {
        &self.director
    }

    /// Get a mutable reference to the director.
    pub fn director_mut(&mut self) -> &mut Director {
        &mut self.director
    }
}
