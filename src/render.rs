// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Walks the pixel grid, tests the point under every pixel, and paints
//! the ones that escape.
//!
//! Every pixel depends only on its own coordinates, so the grid can be
//! split up any way we like.  The threaded renderer hands whole rows
//! to its workers; since no two workers ever hold the same row, the
//! only thing they share is the queue of rows still to be done.

use itertools::iproduct;
use log::{debug, info, trace};
use num::Complex;
use std::sync::{Arc, Mutex};

use crate::canvas::{set_row_pixel, Canvas};
use crate::errors::{MandelError, Result};
use crate::escape::Evaluator;
use crate::gradient::{Color, Gradient};
use crate::plane::{Pixel, PlaneMapper};

type RowQueue<'a> = Arc<Mutex<std::iter::Enumerate<std::slice::ChunksMut<'a, u8>>>>;

/// Everything needed to turn a grid of pixels into an image.  Once
/// built, this object should not be mutable.
pub struct Renderer {
    plane: PlaneMapper,
    evaluator: Evaluator,
    gradient: Gradient,
    max_iterations: usize,
}

impl Renderer {
    /// Requires the width (and height) of the image and the number of
    /// iterations to allow each point before declaring it inside the
    /// set.  Sizes below 2 are rejected.
    pub fn new(size: usize, max_iterations: usize, gradient: Gradient) -> Result<Self> {
        Ok(Renderer {
            plane: PlaneMapper::mandelbrot(size)?,
            evaluator: Evaluator::default(),
            gradient,
            max_iterations,
        })
    }

    /// Width (and height) of the image this renderer fills.
    pub fn size(&self) -> usize {
        self.plane.size
    }

    /// The iteration budget per point.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// A black canvas of the right size.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.plane.size)
    }

    /// The color for the point under `pixel`, if it gets one.
    #[inline]
    pub fn shade(&self, pixel: &Pixel) -> Option<Color> {
        let c: Complex<f64> = self.plane.pixel_to_point(pixel);
        let iterations = self.evaluator.evaluate(c, self.max_iterations);
        self.gradient.color_of(iterations, self.max_iterations)
    }

    fn render_row(&self, y: usize, row: &mut [u8]) {
        for x in 0..self.plane.size {
            if let Some(color) = self.shade(&Pixel(x, y)) {
                set_row_pixel(row, x, color);
            }
        }
    }

    /// Paints every pixel on the calling thread, top row first.
    pub fn render(&self, canvas: &mut Canvas) {
        assert_eq!(canvas.size(), self.plane.size);
        info!(
            "rendering {0}x{0} with {1} iterations",
            self.plane.size, self.max_iterations
        );
        for (y, x) in iproduct!(0..self.plane.size, 0..self.plane.size) {
            if let Some(color) = self.shade(&Pixel(x, y)) {
                canvas.set_pixel(x, y, color);
            }
        }
    }

    /// Paints every pixel using `threads` workers.  The result is the
    /// same as `render` no matter how many workers are used.
    pub fn render_threaded(&self, canvas: &mut Canvas, threads: usize) -> Result<()> {
        assert_eq!(canvas.size(), self.plane.size);
        if threads == 0 {
            return Err(MandelError::ThreadCount(threads));
        }
        info!(
            "rendering {0}x{0} with {1} iterations on {2} threads",
            self.plane.size, self.max_iterations, threads
        );

        let rows: RowQueue = Arc::new(Mutex::new(canvas.rows_mut().enumerate()));
        crossbeam::scope(|spawner| {
            for worker in 0..threads {
                let rows = rows.clone();
                spawner.spawn(move |_| {
                    let mut painted = 0;
                    loop {
                        let next = { rows.lock().unwrap().next() };
                        match next {
                            Some((y, row)) => {
                                trace!("worker {} took row {}", worker, y);
                                self.render_row(y, row);
                                painted += 1;
                            }
                            None => {
                                break;
                            }
                        }
                    }
                    debug!("worker {} finished after {} rows", worker, painted);
                });
            }
        })
        .map_err(|_| MandelError::WorkerPanic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{GapPolicy, COLOR1};

    fn rendered(size: usize, max: usize) -> Canvas {
        let r = Renderer::new(size, max, Gradient::default()).unwrap();
        let mut canvas = r.canvas();
        r.render(&mut canvas);
        canvas
    }

    #[test]
    fn refuses_tiny_grids() {
        assert!(Renderer::new(1, 10, Gradient::default()).is_err());
        assert!(Renderer::new(0, 10, Gradient::default()).is_err());
    }

    #[test]
    fn three_by_three() {
        let canvas = rendered(3, 10);
        let black = [0, 0, 0];

        // 0.5+i escapes after one step: first section, halfway along.
        let expected = crate::gradient::color_of(1, 10).unwrap().to_rgb8();
        assert_eq!(canvas.pixel(2, 0), expected);
        assert_ne!(canvas.pixel(2, 0), black);

        // -0.5 never escapes.
        assert_eq!(canvas.pixel(1, 1), black);

        // The image is symmetric about the real axis.
        for x in 0..3 {
            assert_eq!(canvas.pixel(x, 0), canvas.pixel(x, 2));
        }
    }

    #[test]
    fn zero_budget_is_all_background() {
        let canvas = rendered(8, 0);
        assert!(canvas.as_raw().iter().all(|b| *b == 0));
    }

    #[test]
    fn far_corner_is_painted() {
        // 0.5+i sits outside the set, and with a large budget it
        // lands at the very start of the first section.
        let canvas = rendered(16, 100);
        assert_eq!(
            canvas.pixel(15, 0),
            crate::gradient::color_of(1, 100).unwrap().to_rgb8()
        );
        assert_ne!(canvas.pixel(15, 0), COLOR1);
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(rendered(32, 50).as_raw(), rendered(32, 50).as_raw());
    }

    #[test]
    fn threads_match_single() {
        let single = rendered(37, 60);
        let r = Renderer::new(37, 60, Gradient::default()).unwrap();
        for threads in 1..5 {
            let mut canvas = r.canvas();
            r.render_threaded(&mut canvas, threads).unwrap();
            assert_eq!(canvas.as_raw(), single.as_raw(), "threads = {}", threads);
        }
    }

    #[test]
    fn zero_threads_is_an_error() {
        let r = Renderer::new(4, 10, Gradient::default()).unwrap();
        let mut canvas = r.canvas();
        match r.render_threaded(&mut canvas, 0) {
            Err(MandelError::ThreadCount(0)) => {}
            other => panic!("expected ThreadCount, got {:?}", other),
        }
        // More workers than rows is fine; the spares find the queue empty.
        r.render_threaded(&mut canvas, 9).unwrap();
    }

    #[test]
    fn closing_the_gap_paints_more() {
        let count = |gap| {
            let r = Renderer::new(40, 20, Gradient::new(gap)).unwrap();
            let mut canvas = r.canvas();
            r.render(&mut canvas);
            canvas
                .as_raw()
                .chunks(3)
                .filter(|p| p.iter().any(|b| *b != 0))
                .count()
        };
        assert!(count(GapPolicy::Close) >= count(GapPolicy::Preserve));
    }
}
