//! Palette themes for the woodland path.
//!
//! A theme is eleven colors: sky gradient (top/bottom), two land stripes,
//! four tree tones, moon glow, path and bat. The built-in catalog mirrors
//! the classic set; hosts can substitute their own with [`parse_catalog`].

use heapless::{String, Vec};

use crate::color::{Rgb, rgb_from_u32};

pub const MAX_THEMES: usize = 12;

/// Seconds between automatic theme changes.
pub const THEME_CHANGE_TIME: f32 = 15.0;

pub type Catalog = Vec<Theme, MAX_THEMES>;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String<24>,
    pub sky_top: Rgb,
    pub sky_bottom: Rgb,
    pub dark_land: Rgb,
    pub light_land: Rgb,
    pub trunk: Rgb,
    pub dark_trunk: Rgb,
    pub leaves: Rgb,
    pub dark_leaves: Rgb,
    pub moon_glow: Rgb,
    pub path: Rgb,
    pub bat: Rgb,
}

impl Theme {
    fn from_parts(name: &str, colors: [Rgb; 11]) -> Self {
        let mut owned = String::new();
        let _ = owned.push_str(name);
        let [
            sky_top,
            sky_bottom,
            dark_land,
            light_land,
            trunk,
            dark_trunk,
            leaves,
            dark_leaves,
            moon_glow,
            path,
            bat,
        ] = colors;
        Self {
            name: owned,
            sky_top,
            sky_bottom,
            dark_land,
            light_land,
            trunk,
            dark_trunk,
            leaves,
            dark_leaves,
            moon_glow,
            path,
            bat,
        }
    }

    /// Parse one catalog line: `Name: [r,g,b]` repeated eleven times.
    /// Returns `None` for blank lines, comments and malformed input.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (name, mut rest) = line.split_once(':')?;
        let mut colors = [Rgb::default(); 11];
        for slot in &mut colors {
            let open = rest.find('[')?;
            let close = open + rest[open..].find(']')?;
            *slot = parse_rgb(&rest[open + 1..close])?;
            rest = &rest[close + 1..];
        }
        Some(Self::from_parts(name.trim(), colors))
    }
}

fn parse_rgb(triple: &str) -> Option<Rgb> {
    let mut parts = triple.split(',');
    let r = parts.next()?.trim().parse().ok()?;
    let g = parts.next()?.trim().parse().ok()?;
    let b = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb { r, g, b })
}

/// Parse a textual catalog, one theme per line. Malformed lines are skipped;
/// themes beyond [`MAX_THEMES`] are dropped.
pub fn parse_catalog(text: &str) -> Catalog {
    let mut catalog = Catalog::new();
    for line in text.lines() {
        if let Some(theme) = Theme::parse_line(line) {
            let _ = catalog.push(theme);
        }
    }
    catalog
}

fn theme(name: &str, colors: [u32; 11]) -> Theme {
    let mut parsed = [Rgb::default(); 11];
    for (slot, hex) in parsed.iter_mut().zip(colors) {
        *slot = rgb_from_u32(hex);
    }
    Theme::from_parts(name, parsed)
}

/// The built-in nine-theme catalog.
#[allow(clippy::unreadable_literal)]
pub fn builtin_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    let themes = [
        theme("Classic Halloween", [
            0x190F2D, 0x0F0519, 0x28501E, 0x3C782D, 0x8C5A32, 0x643C1E,
            0x289628, 0x146414, 0xFFFFC8, 0xA08C64, 0x502850,
        ]),
        theme("Blood Moon", [
            0x280F0F, 0x140505, 0x3C1414, 0x5A1E1E, 0x783C28, 0x502814,
            0x502828, 0x3C1414, 0xFFFFC8, 0x8C6450, 0x783C3C,
        ]),
        theme("Toxic Swamp", [
            0x14280F, 0x0A1405, 0x1E3C14, 0x32641E, 0x64783C, 0x3C5028,
            0x3C9628, 0x286414, 0xFAFFC8, 0x788C50, 0x64783C,
        ]),
        theme("Red World", [
            0x3C0A0A, 0x1E0505, 0x8B0000, 0xB22222, 0x8B4513, 0x64320F,
            0xCD5C5C, 0x8B4513, 0xFF0000, 0x8B4513, 0xFF6347,
        ]),
        theme("Vice City", [
            0x333344, 0x191923, 0xFF1493, 0xFF00FF, 0xFF1493, 0xB40F64,
            0x4B0082, 0x320050, 0xFFFFFF, 0x333344, 0x00FFFF,
        ]),
        theme("Ocean Depths", [
            0x001E32, 0x000F19, 0x006464, 0x009696, 0x006464, 0x004646,
            0x009696, 0x007878, 0x64FFFF, 0x005050, 0x00C8C8,
        ]),
        theme("Neon Lights", [
            0x1E0032, 0x0F0019, 0xFF00FF, 0x4B0082, 0xFF00FF, 0xB400B4,
            0x4B0082, 0x320064, 0x00FF00, 0x320064, 0xFF00FF,
        ]),
        theme("Dark Nightmare", [
            0x463278, 0x281E50, 0x3C1450, 0x5A2878, 0x0A0A0A, 0x050505,
            0x642878, 0x78147D, 0xFFFFFF, 0x1E1928, 0x503C78,
        ]),
        theme("Gothic Mist", [
            0x1E283C, 0x0F141E, 0x141E14, 0x233223, 0x3C3228, 0x1E1914,
            0x283C28, 0x192819, 0xDCDCB4, 0x322D28, 0x3C463C,
        ]),
    ];
    for entry in themes {
        let _ = catalog.push(entry);
    }
    catalog
}

/// Rotates through a catalog: automatically every [`THEME_CHANGE_TIME`]
/// seconds, or immediately on a manual advance (which restarts the timer).
pub struct ThemeCycler {
    themes: Catalog,
    index: usize,
    timer: f32,
}

impl ThemeCycler {
    /// Wrap a catalog; an empty one falls back to the built-in set.
    pub fn new(themes: Catalog) -> Self {
        let themes = if themes.is_empty() {
            builtin_catalog()
        } else {
            themes
        };
        Self {
            themes,
            index: 0,
            timer: 0.0,
        }
    }

    pub fn current(&self) -> &Theme {
        &self.themes[self.index]
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Advance the automatic timer by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.timer += dt;
        if self.timer >= THEME_CHANGE_TIME {
            self.timer = 0.0;
            self.index = (self.index + 1) % self.themes.len();
        }
    }

    /// Manual advance; restarts the automatic timer.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.themes.len();
        self.timer = 0.0;
    }
}

impl Default for ThemeCycler {
    fn default() -> Self {
        Self::new(builtin_catalog())
    }
}
