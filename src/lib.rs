#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of complex numbers `c` for which the
//! sequence `z(n+1) = z(n)^2 + c` stays bounded.  Each pixel of a
//! square image is mapped onto a point of the complex plane, and that
//! point is iterated until it either gets more than 2 away from the
//! origin, at which point it is certain to go to infinity, or until
//! the iteration budget runs out.  This "velocity" is the number used
//! to render the image: points that escape are colored on a gradient
//! by how quickly they left, and points that never do are left black.
//!
//! The renderer always draws the rectangle from -1.5-1i to 0.5+1i,
//! which frames the whole set.

extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;

pub mod canvas;
pub mod errors;
pub mod escape;
pub mod gradient;
pub mod params;
pub mod plane;
pub mod render;

pub use canvas::Canvas;
pub use errors::{MandelError, Result};
pub use escape::{evaluate, Escape, Evaluator};
pub use gradient::{color_of, Color, GapPolicy, Gradient};
pub use params::{Params, Preset, Prompter};
pub use plane::{Pixel, PlaneMapper};
pub use render::Renderer;
