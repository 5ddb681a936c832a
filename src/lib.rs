mod controllers;
mod core;
mod storage;

pub use crate::controllers::cli::{
    derive_height, parse_args, run_cli, CliCommand, CliError, RenderRequest, OUTPUT_FILENAME,
};
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render::{render, render_cancelable, RenderError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame::{Frame, FrameError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::fractals::mandelbrot::escape::{iterate_point, MAX_ITERATIONS};
pub use crate::core::fractals::mandelbrot::palette::{colour_for, PALETTE, PALETTE_SIZE};
pub use crate::storage::write_ppm::write_ppm;
