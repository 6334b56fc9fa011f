// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use log::info;
use std::io;
use std::str::FromStr;

use mandelbrot::params::{self, Params, Preset, Prompter, PRESET_NAMES};
use mandelbrot::{GapPolicy, Gradient, MandelError, Renderer};

fn validate_range(
    s: &str,
    low: usize,
    high: usize,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match usize::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const PRESET: &str = "preset";
const THREADS: &str = "threads";
const CLOSE_GAP: &str = "close-gap";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot renderer")
        .after_help(
            "Any of --size and --iterations not given on the command line, \
             either directly or through --preset, is asked for on stdin.",
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("mandelbrot.png")
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .validator(|s| params::parse_size(&s).map(|_| ()).map_err(|e| e.to_string()))
                .help("Width and height of the output image, in pixels"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .validator(|s| {
                    params::parse_iterations(&s)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .help("Iterations per point before it counts as inside the set"),
        )
        .arg(
            Arg::with_name(PRESET)
                .required(false)
                .long(PRESET)
                .short("p")
                .takes_value(true)
                .possible_values(&PRESET_NAMES)
                .help("Named size and iteration count; --size and --iterations override it"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer"),
        )
        .arg(
            Arg::with_name(CLOSE_GAP)
                .long(CLOSE_GAP)
                .help("Also paint points that escape on the last iteration before the budget"),
        )
        .get_matches()
}

/// Fills in whatever the command line and preset left out by asking.
fn resolve_params(matches: &ArgMatches) -> Result<Params, MandelError> {
    let preset = match matches.value_of(PRESET) {
        Some(name) => Some(Preset::from_str(name)?.params()),
        None => None,
    };
    let size = match matches.value_of(SIZE) {
        Some(s) => Some(params::parse_size(s)?),
        None => preset.map(|p| p.size),
    };
    let iterations = match matches.value_of(ITERATIONS) {
        Some(s) => Some(params::parse_iterations(s)?),
        None => preset.map(|p| p.max_iterations),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    let size = match size {
        Some(size) => size,
        None => prompter.read_size()?,
    };
    let iterations = match iterations {
        Some(iterations) => iterations,
        None => prompter.read_iterations()?,
    };
    Params::new(size, iterations)
}

fn run(matches: &ArgMatches) -> Result<(), MandelError> {
    let params = resolve_params(matches)?;
    let output = matches.value_of(OUTPUT).unwrap_or("mandelbrot.png");
    let threads = match matches.value_of(THREADS) {
        Some(t) => usize::from_str(t).map_err(|_| MandelError::InvalidInput {
            what: "a thread count",
            input: t.to_string(),
        })?,
        None => 1,
    };
    let gap = if matches.is_present(CLOSE_GAP) {
        GapPolicy::Close
    } else {
        GapPolicy::Preserve
    };

    info!(
        "size {}, iterations {}, threads {}, gap {:?}",
        params.size, params.max_iterations, threads, gap
    );
    let renderer = Renderer::new(params.size, params.max_iterations, Gradient::new(gap))?;
    let mut canvas = renderer.canvas();
    if threads > 1 {
        renderer.render_threaded(&mut canvas, threads)?;
    } else {
        renderer.render(&mut canvas);
    }
    canvas.save(output)?;
    info!("wrote {}", output);
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
