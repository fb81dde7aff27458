//! Interactive prompt mode.
//!
//! Asks for a file, shows the operation menu, asks for any parameter the
//! chosen operation needs, runs it once and saves the result. Problems are
//! reported on the output and end the session instead of crashing.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::warn;
use pixedit_core::decode::decode_file;
use pixedit_core::{BlurEdgePolicy, PixelStyle};

use crate::cli::RunConfig;
use crate::operation::{save, Operation, Outcome};

const MENU: &str = "\nSelect an operation:\n\
                    1 - Print pixel values\n\
                    2 - Convert to grayscale\n\
                    3 - Adjust brightness\n\
                    4 - Rotate right (90 degrees)\n\
                    5 - Rotate left (90 degrees)\n\
                    6 - Flip horizontal\n\
                    7 - Flip vertical\n\
                    8 - Apply blur";

/// How a session ended.
#[derive(Debug, PartialEq)]
pub enum SessionOutcome {
    /// The result was written to this path.
    Saved(PathBuf),
    /// Pixel values were printed; nothing was saved.
    Printed,
    /// An error was reported to the user.
    Aborted,
}

/// Run one interactive session.
///
/// Only I/O failures on `input`/`out` (including end of input) are returned
/// as errors; everything else is reported to the user.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: W,
    config: &RunConfig,
) -> io::Result<SessionOutcome> {
    let mut prompt = Prompt { input, out };

    let filename = prompt.ask("Enter the filename: ")?;
    let image = match decode_file(&filename) {
        Ok(image) => image,
        Err(e) => return prompt.fail(e),
    };

    writeln!(prompt.out, "{}", MENU)?;
    let choice = prompt.ask("\nEnter choice: ")?;
    let operation = match read_operation(&choice, &mut prompt)? {
        Ok(op) => op,
        Err(message) => return prompt.fail(message),
    };

    let outcome = match operation.run(&image, &mut prompt.out) {
        Ok(outcome) => outcome,
        Err(e) => return prompt.fail(format!("{:#}", e)),
    };

    match outcome {
        Outcome::Printed => Ok(SessionOutcome::Printed),
        Outcome::Image(result) => match save(&result, &config.output, config.quality) {
            Ok(_) => {
                writeln!(prompt.out, "Output saved to: {}", config.output.display())?;
                Ok(SessionOutcome::Saved(config.output.clone()))
            }
            Err(e) => prompt.fail(format!("{:#}", e)),
        },
    }
}

/// Map a menu choice to an operation, prompting for its parameter.
///
/// The outer `Result` carries I/O failures, the inner one user errors.
fn read_operation<R: BufRead, W: Write>(
    choice: &str,
    prompt: &mut Prompt<R, W>,
) -> io::Result<Result<Operation, String>> {
    let choice: u32 = match choice.parse() {
        Ok(n) => n,
        Err(_) => return Ok(Err(format!("Invalid choice: {}", choice))),
    };

    let op = match choice {
        1 => Operation::PrintPixels(PixelStyle::Packed),
        2 => Operation::Grayscale,
        3 => {
            let answer = prompt.ask("Enter brightness percentage (-100 to 100): ")?;
            match answer.parse::<i32>() {
                Ok(percentage) => Operation::Brightness(percentage),
                Err(_) => return Ok(Err(format!("Invalid brightness percentage: {}", answer))),
            }
        }
        4 => Operation::RotateRight,
        5 => Operation::RotateLeft,
        6 => Operation::FlipHorizontal,
        7 => Operation::FlipVertical,
        8 => {
            let answer = prompt.ask("Enter blur block size (e.g., 5): ")?;
            match answer.parse::<u32>() {
                Ok(block_size) => Operation::Blur {
                    block_size,
                    policy: BlurEdgePolicy::default(),
                },
                Err(_) => return Ok(Err(format!("Invalid blur block size: {}", answer))),
            }
        }
        _ => return Ok(Err(format!("Invalid choice: {}", choice))),
    };
    Ok(Ok(op))
}

struct Prompt<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Print `question` and read one trimmed line.
    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.out, "{}", question)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before the session finished",
            ));
        }
        Ok(line.trim().to_string())
    }

    fn fail(&mut self, message: impl std::fmt::Display) -> io::Result<SessionOutcome> {
        warn!("{}", message);
        writeln!(self.out, "Error: {}", message)?;
        Ok(SessionOutcome::Aborted)
    }
}
