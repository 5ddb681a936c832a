use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::core::actions::render::render;
use crate::core::data::frame::{Frame, FrameError};
use crate::core::fractals::mandelbrot::escape::MAX_ITERATIONS;
use crate::storage::write_ppm::write_ppm;

/// Fixed output filename; the reference renderer is not parameterized on it.
pub const OUTPUT_FILENAME: &str = "mandelbrot.ppm";

const USAGE: &str = "\
usage: mandelbrot real_min real_max imag_min imag_max image_width
examples with image_width = 11500:
    Full Picture:         mandelbrot -2.5 1.5 -2.0 2.0 11500
    Seahorse Valley:      mandelbrot -0.8 -0.7 0.05 0.15 11500
    Elephant Valley:      mandelbrot 0.175 0.375 -0.1 0.1 11500
    Triple Spiral Valley: mandelbrot -0.188 -0.012 0.554 0.754 11500";

#[derive(Debug, PartialEq)]
pub enum CliError {
    InvalidNumber {
        argument: &'static str,
        value: String,
    },
    Frame(FrameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { argument, value } => {
                write!(f, "argument {} is not a valid number: {:?}", argument, value)
            }
            Self::Frame(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNumber { .. } => None,
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<FrameError> for CliError {
    fn from(err: FrameError) -> Self {
        Self::Frame(err)
    }
}

/// A fully validated render job: the frame plus derived pixel dimensions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    frame: Frame,
    width: usize,
    height: usize,
}

impl RenderRequest {
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }
}

#[derive(Debug, PartialEq)]
pub enum CliCommand {
    /// Too few arguments: print the usage text and exit successfully.
    Usage,
    Render(RenderRequest),
}

fn parse_f64(argument: &'static str, value: &str) -> Result<f64, CliError> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        argument,
        value: value.to_string(),
    })
}

fn parse_width(value: &str) -> Result<usize, CliError> {
    match value.parse() {
        Ok(width) if width > 0 => Ok(width),
        _ => Err(CliError::InvalidNumber {
            argument: "image_width",
            value: value.to_string(),
        }),
    }
}

/// Derives the pixel height from the width and the frame's aspect ratio,
/// truncating toward zero. Truncation is pinned: it keeps dimensions
/// bit-compatible with the reference renderer's implicit conversion.
#[must_use]
pub fn derive_height(frame: &Frame, width: usize) -> usize {
    (width as f64 * frame.imag_extent() / frame.real_extent()) as usize
}

/// Parses the five positional arguments: real_min, real_max, imag_min,
/// imag_max, image_width. Fewer than five yields [`CliCommand::Usage`];
/// unparsable numbers and degenerate frames are reported as errors rather
/// than rendered.
pub fn parse_args(args: impl Iterator<Item = String>) -> Result<CliCommand, CliError> {
    let args: Vec<String> = args.collect();

    if args.len() < 5 {
        return Ok(CliCommand::Usage);
    }

    let real_min = parse_f64("real_min", &args[0])?;
    let real_max = parse_f64("real_max", &args[1])?;
    let imag_min = parse_f64("imag_min", &args[2])?;
    let imag_max = parse_f64("imag_max", &args[3])?;
    let width = parse_width(&args[4])?;

    let frame = Frame::new(real_min, real_max, imag_min, imag_max)?;
    let height = derive_height(&frame, width);

    Ok(CliCommand::Render(RenderRequest {
        frame,
        width,
        height,
    }))
}

/// Entry point for the binary: parse, render, write `mandelbrot.ppm`.
pub fn run_cli(args: impl Iterator<Item = String>) -> Result<(), Box<dyn Error>> {
    let request = match parse_args(args)? {
        CliCommand::Usage => {
            println!("{USAGE}");
            return Ok(());
        }
        CliCommand::Render(request) => request,
    };

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", request.width(), request.height());
    println!("Max iterations: {}", MAX_ITERATIONS);

    let start = Instant::now();
    let image = render(&request.frame(), request.width(), request.height())?;
    println!("Duration:   {:?}", start.elapsed());

    write_ppm(&image, OUTPUT_FILENAME)?;
    println!("Saved to {}", OUTPUT_FILENAME);

    Ok(())
}
