// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The square image the renderer paints into.  It starts out black,
//! and pixels the gradient declines to color stay that way.

use image::{Rgb, RgbImage};
use std::path::Path;

use crate::errors::{MandelError, Result};
use crate::gradient::Color;
use crate::plane::MAX_SIZE;

/// Bytes per pixel in the backing buffer.
pub const CHANNELS: usize = 3;

/// A `size x size` RGB image with a black background.
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    /// Allocates the whole image up front, filled with black.  Panics
    /// if `size` is over `plane::MAX_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(size <= MAX_SIZE, "canvas size {} over {}", size, MAX_SIZE);
        let size = size as u32;
        Canvas {
            pixels: RgbImage::from_pixel(size, size, Rgb([0, 0, 0])),
        }
    }

    /// Width (and height) in pixels.
    pub fn size(&self) -> usize {
        self.pixels.width() as usize
    }

    /// Paint one pixel.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.pixels.put_pixel(x as u32, y as u32, Rgb(color.to_rgb8()));
    }

    /// The current value of one pixel.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.pixels.get_pixel(x as u32, y as u32).0
    }

    /// The backing buffer, one row after another.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    /// Hands out each row of the image as its own mutable slice, so
    /// rows can be painted independently.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, u8> {
        let stride = self.size() * CHANNELS;
        self.pixels.chunks_mut(stride)
    }

    /// Writes the image; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.pixels.save(path).map_err(|e| MandelError::Save {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Paint one pixel of a row handed out by `Canvas::rows_mut`.
pub fn set_row_pixel(row: &mut [u8], x: usize, color: Color) {
    let offset = x * CHANNELS;
    row[offset..offset + CHANNELS].copy_from_slice(&color.to_rgb8());
}
