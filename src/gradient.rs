// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Maps an escape count onto a color.
//!
//! The iteration range is split into two sections, each of which
//! blends linearly between a pair of colors.  The first section
//! covers the first quarter of the budget, the second the rest.
//! Points that never escape are left alone, so whatever the
//! background is shows through.
//!
//! Palette from the Dracula theme.

/// A color with each channel in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Color {
    /// Builds a color from 0-255 channel values.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Color {
            r: f64::from(rgb[0]) / 255.0,
            g: f64::from(rgb[1]) / 255.0,
            b: f64::from(rgb[2]) / 255.0,
        }
    }

    /// Quantizes back to bytes, rounding to nearest.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let q = |c: f64| num::clamp((c * 255.0).round(), 0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

/// A start and end color, in 0-255 channel values.
pub type Stop = [u8; 3];

/// dracula bg
pub const COLOR1: Stop = [40, 42, 54];
/// dracula purple
pub const COLOR2: Stop = [189, 147, 249];
/// dracula green
pub const COLOR3: Stop = [80, 250, 123];
/// dracula pink
pub const COLOR4: Stop = [255, 121, 198];

/// What to do with an escape count of exactly `max_iterations - 1`.
///
/// The second section's upper limit is exclusive of `max_iterations - 1`,
/// so that one count falls between the sections and is left as
/// background.  Images that must match the established output keep the
/// gap; `Close` extends the second section to paint it with `COLOR4`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GapPolicy {
    /// Leave `max_iterations - 1` unpainted.
    Preserve,
    /// Paint `max_iterations - 1` with the end of the second section.
    Close,
}

impl Default for GapPolicy {
    fn default() -> Self {
        GapPolicy::Preserve
    }
}

/// The two-section gradient.
#[derive(Copy, Clone, Debug)]
pub struct Gradient {
    first: (Stop, Stop),
    second: (Stop, Stop),
    gap: GapPolicy,
}

impl Default for Gradient {
    fn default() -> Self {
        Gradient {
            first: (COLOR1, COLOR2),
            second: (COLOR3, COLOR4),
            gap: GapPolicy::Preserve,
        }
    }
}

fn blend(from: Stop, to: Stop, t: f64) -> Color {
    let ch = |a: u8, b: u8| {
        let (a, b) = (f64::from(a), f64::from(b));
        (a + (b - a) * t) / 255.0
    };
    Color {
        r: ch(from[0], to[0]),
        g: ch(from[1], to[1]),
        b: ch(from[2], to[2]),
    }
}

impl Gradient {
    /// The Dracula gradient with the given gap policy.
    pub fn new(gap: GapPolicy) -> Self {
        Gradient {
            gap,
            ..Gradient::default()
        }
    }

    /// The gap policy in use.
    pub fn gap(&self) -> GapPolicy {
        self.gap
    }

    /// The color for a point that escaped after `iterations` out of a
    /// budget of `max_iterations`, or `None` to leave the background.
    pub fn color_of(&self, iterations: usize, max_iterations: usize) -> Option<Color> {
        if iterations >= max_iterations {
            return None;
        }

        let first_section = max_iterations / 4;
        let second_section = max_iterations - first_section - 1;
        let second_end = match self.gap {
            GapPolicy::Preserve => max_iterations - 1,
            GapPolicy::Close => max_iterations,
        };

        if iterations < first_section {
            let t = iterations as f64 / first_section as f64;
            Some(blend(self.first.0, self.first.1, t))
        } else if iterations < second_end {
            // An empty second section only happens with a budget of 1
            // and the gap closed; its one count is the section's end.
            let t = if second_section == 0 {
                1.0
            } else {
                (iterations - first_section) as f64 / second_section as f64
            };
            Some(blend(self.second.0, self.second.1, t))
        } else {
            None
        }
    }
}

/// `Gradient::default().color_of(iterations, max_iterations)`.
pub fn color_of(iterations: usize, max_iterations: usize) -> Option<Color> {
    Gradient::default().color_of(iterations, max_iterations)
}
