// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by every fallible operation in the crate.
//! The escape-time core itself cannot fail; everything here belongs
//! to the layers around it.

use failure::Fail;

/// Everything that can go wrong between reading the parameters and
/// writing the image.
#[derive(Debug, Fail)]
pub enum MandelError {
    /// The scale factors divide by `size - 1`, so a grid needs at
    /// least two pixels on a side.
    #[fail(display = "image size must be at least 2 pixels, got {}", _0)]
    GridTooSmall(usize),

    /// The image encoder cannot address a grid this wide.
    #[fail(display = "image size must be at most {} pixels, got {}", max, size)]
    GridTooLarge {
        /// What was asked for.
        size: usize,
        /// The largest size an image can have.
        max: usize,
    },

    /// The corners of the complex plane are in the wrong order.
    #[fail(display = "{}", _0)]
    BadPlane(&'static str),

    /// A value from the command line or the prompt did not parse.
    #[fail(display = "could not parse {} from {:?}", what, input)]
    InvalidInput {
        /// Which parameter was being read.
        what: &'static str,
        /// The offending text.
        input: String,
    },

    /// The prompt kept receiving garbage or EOF.
    #[fail(display = "gave up reading {} after {} attempts", what, attempts)]
    PromptExhausted {
        /// Which parameter was being read.
        what: &'static str,
        /// How many times we asked.
        attempts: usize,
    },

    /// Reading from or writing to the terminal failed.
    #[fail(display = "terminal I/O failed: {}", _0)]
    Io(#[cause] std::io::Error),

    /// The image encoder refused to write the file.
    #[fail(display = "could not save {}: {}", path, reason)]
    Save {
        /// Destination that was attempted.
        path: String,
        /// What the encoder reported.
        reason: String,
    },

    /// A render needs at least one worker.
    #[fail(display = "thread count must be at least 1, got {}", _0)]
    ThreadCount(usize),

    /// A render worker panicked.
    #[fail(display = "a render worker panicked")]
    WorkerPanic,
}

impl From<std::io::Error> for MandelError {
    fn from(err: std::io::Error) -> Self {
        MandelError::Io(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, MandelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_too_small_names_the_size() {
        let msg = format!("{}", MandelError::GridTooSmall(1));
        assert_eq!(msg, "image size must be at least 2 pixels, got 1");
    }

    #[test]
    fn thread_count_names_the_lower_limit() {
        let msg = format!("{}", MandelError::ThreadCount(0));
        assert_eq!(msg, "thread count must be at least 1, got 0");
    }

    #[test]
    fn io_errors_convert() {
        let err: MandelError =
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed").into();
        match err {
            MandelError::Io(_) => {}
            other => panic!("unexpected variant {:?}", other),
        }
    }
}
