use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FrameError {
    NonFiniteBound {
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    },
    InvalidExtent {
        real_extent: f64,
        imag_extent: f64,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBound {
                real_min,
                real_max,
                imag_min,
                imag_max,
            } => {
                write!(
                    f,
                    "frame bounds must be finite: real [{}, {}], imag [{}, {}]",
                    real_min, real_max, imag_min, imag_max
                )
            }
            Self::InvalidExtent {
                real_extent,
                imag_extent,
            } => {
                write!(
                    f,
                    "frame extents must be positive: {}x{}",
                    real_extent, imag_extent
                )
            }
        }
    }
}

impl Error for FrameError {}

/// Rectangular region of the complex plane to rasterize.
///
/// Both extents are strictly positive; a degenerate frame would produce a
/// zero or infinite step size in the renderer, so it is rejected here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

impl Frame {
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, FrameError> {
        let finite = real_min.is_finite()
            && real_max.is_finite()
            && imag_min.is_finite()
            && imag_max.is_finite();

        if !finite {
            return Err(FrameError::NonFiniteBound {
                real_min,
                real_max,
                imag_min,
                imag_max,
            });
        }

        let real_extent = real_max - real_min;
        let imag_extent = imag_max - imag_min;

        if real_extent <= 0.0 || imag_extent <= 0.0 {
            return Err(FrameError::InvalidExtent {
                real_extent,
                imag_extent,
            });
        }

        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }

    #[must_use]
    pub fn real_extent(&self) -> f64 {
        self.real_max - self.real_min
    }

    #[must_use]
    pub fn imag_extent(&self) -> f64 {
        self.imag_max - self.imag_min
    }
}
