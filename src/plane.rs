// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a square grid of pixels with an origin at the top-left
//! corner, and a rectangle on the complex plane.  Pixel rows grow
//! downward while the imaginary axis grows upward, so row 0 maps to
//! the top edge of the rectangle.
use num::Complex;

use crate::errors::{MandelError, Result};

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// The region the renderer always draws: real in [-1.5, 0.5],
/// imaginary in [-1, 1].
pub const MANDELBROT_BOUNDS: ComplexPlane = ComplexPlane(
    Complex { re: -1.5, im: -1.0 },
    Complex { re: 0.5, im: 1.0 },
);

/// The widest grid an image can hold; the encoder addresses pixels
/// with `u32`.
pub const MAX_SIZE: usize = u32::max_value() as usize;

/// Describes the column, row of a pixel in the grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of a `size x size` grid onto a complex rectangle.  The
/// first and last pixel of each axis land exactly on the rectangle's
/// edges.
#[derive(Debug)]
pub struct PlaneMapper {
    /// Width and height of the grid, in pixels.
    pub size: usize,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // Distance on the complex plane between neighbouring pixels, real
    // and imaginary respectively.
    scale: (f64, f64),
}

impl PlaneMapper {
    /// Takes the grid size and the two corners of the complex plane.
    /// Fails on a grid that is too small to have a scale and on
    /// corners given in the wrong order.
    pub fn new(size: usize, complex_plane: ComplexPlane) -> Result<PlaneMapper> {
        let ComplexPlane(leftlower, rightupper) = complex_plane;
        if rightupper.re < leftlower.re {
            return Err(MandelError::BadPlane(
                "The left lower corner is not to the left of the right upper corner.",
            ));
        }

        if rightupper.im < leftlower.im {
            return Err(MandelError::BadPlane(
                "The left lower corner is not lower than the right upper corner",
            ));
        }

        if size < 2 {
            return Err(MandelError::GridTooSmall(size));
        }

        if size > MAX_SIZE {
            return Err(MandelError::GridTooLarge {
                size,
                max: MAX_SIZE,
            });
        }

        let steps = (size - 1) as f64;
        let scale = (
            (rightupper.re - leftlower.re) / steps,
            (rightupper.im - leftlower.im) / steps,
        );

        Ok(PlaneMapper {
            size,
            complex_plane,
            scale,
        })
    }

    /// The mapper for the fixed Mandelbrot region.
    pub fn mandelbrot(size: usize) -> Result<PlaneMapper> {
        PlaneMapper::new(size, MANDELBROT_BOUNDS)
    }

    /// The total number of pixels in the grid.
    pub fn len(&self) -> usize {
        self.size * self.size
    }

    /// The real and imaginary scale factors.
    pub fn scale(&self) -> (f64, f64) {
        self.scale
    }

    /// Given a pixel on the grid, return the complex number at the
    /// equivalent location of the complex plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.complex_plane.0.re + (pixel.0 as f64) * self.scale.0,
            self.complex_plane.1.im - (pixel.1 as f64) * self.scale.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planemapper_fails_on_bad_shape() {
        let pm = PlaneMapper::new(
            4,
            ComplexPlane(Complex::new(-1.0, 1.0), Complex::new(1.0, -1.0)),
        );
        assert!(pm.is_err());
    }

    #[test]
    fn planemapper_fails_on_tiny_grid() {
        for size in 0..2 {
            match PlaneMapper::mandelbrot(size) {
                Err(MandelError::GridTooSmall(s)) => assert_eq!(s, size),
                other => panic!("expected GridTooSmall, got {:?}", other),
            }
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn planemapper_fails_on_huge_grid() {
        match PlaneMapper::mandelbrot(MAX_SIZE + 1) {
            Err(MandelError::GridTooLarge { size, max }) => {
                assert_eq!(size, MAX_SIZE + 1);
                assert_eq!(max, MAX_SIZE);
            }
            other => panic!("expected GridTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn scale_spans_the_region() {
        let pm = PlaneMapper::mandelbrot(5).unwrap();
        assert_eq!(pm.scale(), (0.5, 0.5));
        assert_eq!(pm.len(), 25);
    }

    #[test]
    fn corners_land_on_the_edges() {
        let pm = PlaneMapper::mandelbrot(101).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-1.5, 1.0));
        let far = pm.pixel_to_point(&Pixel(100, 100));
        assert!((far.re - 0.5).abs() < 1e-12);
        assert!((far.im + 1.0).abs() < 1e-12);
    }

    #[test]
    fn three_by_three_grid() {
        let pm = PlaneMapper::mandelbrot(3).unwrap();
        assert_eq!(pm.pixel_to_point(&Pixel(0, 0)), Complex::new(-1.5, 1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(1, 1)), Complex::new(-0.5, 0.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 0)), Complex::new(0.5, 1.0));
        assert_eq!(pm.pixel_to_point(&Pixel(2, 2)), Complex::new(0.5, -1.0));
    }

    #[test]
    fn rows_descend_the_imaginary_axis() {
        let pm = PlaneMapper::mandelbrot(10).unwrap();
        let top = pm.pixel_to_point(&Pixel(3, 0));
        let below = pm.pixel_to_point(&Pixel(3, 1));
        assert!(below.im < top.im);
        assert_eq!(below.re, top.re);
    }
}
