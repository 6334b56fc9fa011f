// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Where the image size and iteration budget come from: parsing and
//! validation shared by the command line, a handful of named presets,
//! and an interactive prompt for whatever the command line left out.

use log::debug;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::errors::{MandelError, Result};
use crate::plane::MAX_SIZE;

/// How many times the prompt asks for one value before giving up.
pub const MAX_PROMPTS: usize = 10;

/// The prompt text for the image size.
pub const SIZE_PROMPT: &str = "Enter the width of the image (pixels, integer): ";
/// The prompt text for the iteration budget.
pub const ITERATIONS_PROMPT: &str = "Enter the maximum number of iterations: ";

/// The two numbers a run needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Params {
    /// Width and height of the image, in pixels.
    pub size: usize,
    /// How many iterations a point gets before it counts as inside.
    pub max_iterations: usize,
}

impl Params {
    /// Checks that the grid is big enough to have a scale and small
    /// enough to fit in an image.
    pub fn new(size: usize, max_iterations: usize) -> Result<Params> {
        if size < 2 {
            return Err(MandelError::GridTooSmall(size));
        }
        if size > MAX_SIZE {
            return Err(MandelError::GridTooLarge {
                size,
                max: MAX_SIZE,
            });
        }
        Ok(Params {
            size,
            max_iterations,
        })
    }
}

/// Parses an image size, rejecting anything under 2.
pub fn parse_size(s: &str) -> Result<usize> {
    let size = parse_count(s, "an image size")?;
    Params::new(size, 0).map(|p| p.size)
}

/// Parses an iteration budget.
pub fn parse_iterations(s: &str) -> Result<usize> {
    parse_count(s, "an iteration count")
}

fn parse_count(s: &str, what: &'static str) -> Result<usize> {
    usize::from_str(s.trim()).map_err(|_| MandelError::InvalidInput {
        what,
        input: s.trim().to_string(),
    })
}

/// Size and budget combinations known to give a reasonable picture.
/// Bigger ones take a long time and a lot of memory.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Preset {
    /// 500px, 100 iterations.  Instant, small file.
    Quick,
    /// 1000px, 250 iterations.
    Standard,
    /// 5000px, 100 iterations.
    BetterMinus,
    /// 5000px, 500 iterations.  Slower than `BetterMinus`, better color.
    BetterPlus,
    /// 20000px, 250 iterations.  Half an hour or more.
    Mandelbrot,
}

/// The names `Preset::from_str` accepts.
pub const PRESET_NAMES: [&str; 5] = ["quick", "standard", "better-", "better+", "mandelbrot"];

impl Preset {
    /// The size and budget this preset stands for.
    pub fn params(self) -> Params {
        let (size, max_iterations) = match self {
            Preset::Quick => (500, 100),
            Preset::Standard => (1000, 250),
            Preset::BetterMinus => (5000, 100),
            Preset::BetterPlus => (5000, 500),
            Preset::Mandelbrot => (20000, 250),
        };
        Params {
            size,
            max_iterations,
        }
    }
}

impl FromStr for Preset {
    type Err = MandelError;

    fn from_str(s: &str) -> Result<Preset> {
        match s {
            "quick" => Ok(Preset::Quick),
            "standard" => Ok(Preset::Standard),
            "better-" => Ok(Preset::BetterMinus),
            "better+" => Ok(Preset::BetterPlus),
            "mandelbrot" => Ok(Preset::Mandelbrot),
            _ => Err(MandelError::InvalidInput {
                what: "a preset",
                input: s.to_string(),
            }),
        }
    }
}

/// Asks for values on one stream and reads answers from another,
/// asking again after garbage or EOF.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wraps the two streams; usually locked stdin and stdout.
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Asks for the image size.
    pub fn read_size(&mut self) -> Result<usize> {
        self.read_value(SIZE_PROMPT, "width", parse_size)
    }

    /// Asks for the iteration budget.
    pub fn read_iterations(&mut self) -> Result<usize> {
        self.read_value(ITERATIONS_PROMPT, "iteration number", parse_iterations)
    }

    fn read_value(
        &mut self,
        prompt: &str,
        what: &'static str,
        parse: fn(&str) -> Result<usize>,
    ) -> Result<usize> {
        let mut line = String::new();
        for attempt in 1..=MAX_PROMPTS {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output, "\nEOF is not a valid {}... Please try again.", what)?;
                continue;
            }

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("attempt {} for {} rejected: {}", attempt, what, e);
                    writeln!(self.output, "Invalid {}: {}. Please try again.", what, e)?;
                }
            }
        }
        Err(MandelError::PromptExhausted {
            what,
            attempts: MAX_PROMPTS,
        })
    }
}
