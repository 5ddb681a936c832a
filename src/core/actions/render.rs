use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_POLL_INTERVAL_PIXELS,
};
use crate::core::data::complex::Complex;
use crate::core::data::frame::Frame;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, BYTES_PER_PIXEL};
use crate::core::fractals::mandelbrot::escape::iterate_point;
use crate::core::fractals::mandelbrot::palette::colour_for;

/// Error type for cancelable rendering.
///
/// Distinguishes buffer construction failures from cancellation so callers
/// can treat the latter as expected control flow.
#[derive(Debug)]
pub enum RenderError {
    /// The render was cancelled before completion.
    Cancelled(Cancelled),
    /// The output buffer could not be constructed.
    Buffer(PixelBufferError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Cancelled(c) => write!(f, "{}", c),
            RenderError::Buffer(e) => write!(f, "pixel buffer error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Cancelled(c) => Some(c),
            RenderError::Buffer(e) => Some(e),
        }
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        RenderError::Buffer(err)
    }
}

/// Renders the escape-time image for `frame` at `width` x `height` pixels.
///
/// Rows are rendered in parallel over disjoint chunks of the output buffer,
/// so the result is deterministic and the final join is the only
/// synchronization point. For cancel-aware rendering, use
/// [`render_cancelable`].
pub fn render(frame: &Frame, width: usize, height: usize) -> Result<PixelBuffer, PixelBufferError> {
    render_cancelable(frame, width, height, &NeverCancel).map_err(|e| match e {
        RenderError::Buffer(buf_err) => buf_err,
        RenderError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`render`], but polls a cancellation token every
/// [`CANCEL_POLL_INTERVAL_PIXELS`] pixels within each row.
pub fn render_cancelable<C>(
    frame: &Frame,
    width: usize,
    height: usize,
    cancel: &C,
) -> Result<PixelBuffer, RenderError>
where
    C: CancelToken,
{
    let mut buffer = PixelBuffer::new(width, height)?;

    let real_step = frame.real_extent() / width as f64;
    let imag_step = frame.imag_extent() / height as f64;
    let real_min = frame.real_min();
    let imag_min = frame.imag_min();
    let row_stride = buffer.row_stride();

    buffer
        .bytes_mut()
        .par_chunks_mut(row_stride)
        .enumerate()
        .try_for_each(|(y, row)| {
            let mut imag = imag_min + y as f64 * imag_step;

            // Snap the row onto the symmetry axis when it lands within half
            // a step of imag = 0, so the axis is computed with an exact zero.
            // Precomputed once per row, never per pixel.
            if imag.abs() < imag_step / 2.0 {
                imag = 0.0;
            }

            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                if x % CANCEL_POLL_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                let real = real_min + x as f64 * real_step;
                let colour = colour_for(iterate_point(Complex::new(real, imag)));

                pixel[0] = colour.r;
                pixel[1] = colour.g;
                pixel[2] = colour.b;
            }

            Ok(())
        })
        .map_err(RenderError::Cancelled)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::palette::{PALETTE, PALETTE_SIZE};

    /// Serial reference renderer, same coordinate mapping and snap rule.
    fn render_serial(frame: &Frame, width: usize, height: usize) -> Vec<u8> {
        let real_step = frame.real_extent() / width as f64;
        let imag_step = frame.imag_extent() / height as f64;
        let mut bytes = Vec::with_capacity(width * height * BYTES_PER_PIXEL);

        for y in 0..height {
            let mut imag = frame.imag_min() + y as f64 * imag_step;
            if imag.abs() < imag_step / 2.0 {
                imag = 0.0;
            }

            for x in 0..width {
                let real = frame.real_min() + x as f64 * real_step;
                let colour = colour_for(iterate_point(Complex::new(real, imag)));
                bytes.extend_from_slice(&[colour.r, colour.g, colour.b]);
            }
        }

        bytes
    }

    #[test]
    fn test_parallel_render_matches_serial_reference() {
        let frame = Frame::new(-2.5, 1.5, -2.0, 2.0).unwrap();

        let parallel = render(&frame, 40, 40).unwrap();
        let serial = render_serial(&frame, 40, 40);

        assert_eq!(parallel.bytes(), &serial[..]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let frame = Frame::new(-0.8, -0.7, 0.05, 0.15).unwrap();

        let first = render(&frame, 32, 32).unwrap();
        let second = render(&frame, 32, 32).unwrap();

        assert_eq!(first.bytes(), second.bytes());
    }

    #[test]
    fn test_rows_mirror_across_snapped_zero_row() {
        // Binary-exact steps: real_step = 0.5, imag_step = 0.25. Row 4 lands
        // on imag = 0.0 exactly; rows 3 and 5 sit at -0.25 and 0.25 and must
        // colour identically by conjugate symmetry.
        let frame = Frame::new(-2.0, 2.0, -1.0, 1.0).unwrap();

        let image = render(&frame, 8, 8).unwrap();
        let stride = image.row_stride();
        let row = |y: usize| &image.bytes()[y * stride..(y + 1) * stride];

        assert_eq!(row(3), row(5));
        assert_eq!(row(2), row(6));
    }

    #[test]
    fn test_far_exterior_region_is_uniformly_first_band() {
        // Every point escapes on update 0, so every pixel takes PALETTE[0].
        let frame = Frame::new(10.0, 14.0, 10.0, 14.0).unwrap();

        let image = render(&frame, 4, 4).unwrap();

        for pixel in image.bytes().chunks_exact(BYTES_PER_PIXEL) {
            assert_eq!(pixel, [PALETTE[0].r, PALETTE[0].g, PALETTE[0].b]);
        }
    }

    #[test]
    fn test_deep_interior_region_is_uniformly_interior_colour() {
        let frame = Frame::new(-0.1, 0.1, -0.1, 0.1).unwrap();
        let interior = PALETTE[PALETTE_SIZE - 1];

        let image = render(&frame, 4, 4).unwrap();

        for pixel in image.bytes().chunks_exact(BYTES_PER_PIXEL) {
            assert_eq!(pixel, [interior.r, interior.g, interior.b]);
        }
    }

    #[test]
    fn test_zero_width_is_rejected_before_rendering() {
        let frame = Frame::new(-2.0, 2.0, -1.0, 1.0).unwrap();

        let result = render(&frame, 0, 8);

        assert_eq!(
            result,
            Err(PixelBufferError::ZeroDimension {
                width: 0,
                height: 8
            })
        );
    }

    #[test]
    fn test_cancelled_token_aborts_render() {
        use crate::core::actions::cancellation::CancelFlag;

        let frame = Frame::new(-2.0, 2.0, -1.0, 1.0).unwrap();
        let flag = CancelFlag::new();
        flag.cancel();

        let result = render_cancelable(&frame, 64, 64, &flag);

        assert!(matches!(result, Err(RenderError::Cancelled(_))));
    }

    #[test]
    fn test_never_cancel_token_completes() {
        let frame = Frame::new(-2.0, 2.0, -1.0, 1.0).unwrap();

        let result = render_cancelable(&frame, 16, 16, &NeverCancel);

        assert!(result.is_ok());
    }
}
