//! Line-oriented console I/O.
//!
//! Generic over the reader and writer so the menu can run against stdin and
//! stdout in the binary and against in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::error::{Result, ZooError};

pub const MIN_WEIGHT: f64 = 0.0;
pub const MAX_WEIGHT: f64 = 10_000.0;

/// Why a typed-in weight was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightRejection {
    NotANumber,
    OutOfRange,
}

impl WeightRejection {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotANumber => "Invalid input. Please enter a valid numeric weight.",
            Self::OutOfRange => "Invalid weight. Weight must be between 0 and 10000.",
        }
    }
}

/// Parse a weight entry, accepting only values in `[0, 10000]`.
pub fn parse_weight(input: &str) -> std::result::Result<f64, WeightRejection> {
    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| WeightRejection::NotANumber)?;
    if (MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        Ok(weight)
    } else {
        Err(WeightRejection::OutOfRange)
    }
}

/// Parse a menu choice. Surrounding whitespace is ignored.
pub fn parse_option(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Read one line without its terminator. `None` means end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    /// Print a question, read the answer, then print a blank separator line.
    ///
    /// End of input counts as an empty answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        Ok(self.ask_raw(question)?.unwrap_or_default())
    }

    fn ask_raw(&mut self, question: &str) -> Result<Option<String>> {
        self.line(question)?;
        let answer = self.read_line()?;
        self.blank()?;
        Ok(answer)
    }

    /// Keep asking for a weight until one parses and is in range.
    ///
    /// Fails with [`ZooError::InputClosed`] if input ends first, since no
    /// further answer could ever be accepted.
    pub fn ask_weight(&mut self) -> Result<f64> {
        loop {
            let answer = self
                .ask_raw("Weight of the animal :")?
                .ok_or(ZooError::InputClosed)?;
            match parse_weight(&answer) {
                Ok(weight) => return Ok(weight),
                Err(rejection) => {
                    tracing::warn!(input = %answer, ?rejection, "weight rejected");
                    self.line(rejection.message())?;
                }
            }
        }
    }
}
