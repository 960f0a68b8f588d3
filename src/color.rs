//! Color types and channel arithmetic.
//!
//! `Rgb` is `smart_leds::RGB8`; everything that touches the framebuffer
//! speaks this type.

use smart_leds::RGB8;

use crate::math::blend8;

pub type Rgb = RGB8;

pub use smart_leds::hsv::{Hsv, hsv2rgb};

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Clamp a float channel value into `0..=255` with rounding.
pub(crate) fn channel(value: f32) -> u8 {
    if value <= 0.0 {
        0
    } else if value >= 255.0 {
        255
    } else {
        (value + 0.5) as u8
    }
}

/// Scale a color by a float intensity, clamping each channel
#[inline]
pub fn scale_rgb(color: Rgb, intensity: f32) -> Rgb {
    Rgb {
        r: channel(f32::from(color.r) * intensity),
        g: channel(f32::from(color.g) * intensity),
        b: channel(f32::from(color.b) * intensity),
    }
}

/// Per-channel linear interpolation with rounding
#[inline]
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    Rgb {
        r: channel(f32::from(a.r) + (f32::from(b.r) - f32::from(a.r)) * t),
        g: channel(f32::from(a.g) + (f32::from(b.g) - f32::from(a.g)) * t),
        b: channel(f32::from(a.b) + (f32::from(b.b) - f32::from(a.b)) * t),
    }
}

/// Distance-based darkening: darker at the horizon, brighter in the
/// foreground. `perspective` is 0 at the horizon and 1 nearest the viewer.
#[inline]
pub fn shade(color: Rgb, perspective: f32) -> Rgb {
    scale_rgb(color, 0.2 + 0.8 * perspective)
}
