use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::escape::MAX_ITERATIONS;

pub const PALETTE_SIZE: usize = 17;

/// Banded escape-time palette. Indexed cyclically by escape count; the last
/// entry is reserved for non-escaping (interior) points.
pub static PALETTE: [Colour; PALETTE_SIZE] = [
    Colour::new(66, 30, 15),
    Colour::new(25, 7, 26),
    Colour::new(9, 1, 47),
    Colour::new(4, 4, 73),
    Colour::new(0, 7, 100),
    Colour::new(12, 44, 138),
    Colour::new(24, 82, 177),
    Colour::new(57, 125, 209),
    Colour::new(134, 181, 229),
    Colour::new(211, 236, 248),
    Colour::new(241, 233, 191),
    Colour::new(248, 201, 95),
    Colour::new(255, 170, 0),
    Colour::new(204, 128, 0),
    Colour::new(153, 87, 0),
    Colour::new(106, 52, 3),
    Colour::new(16, 16, 16),
];

/// Maps an escape count to its palette entry. Counts at or beyond
/// [`MAX_ITERATIONS`] take the interior colour; everything else cycles
/// through the palette modulo its length.
#[must_use]
pub fn colour_for(iterations: u32) -> Colour {
    if iterations >= MAX_ITERATIONS {
        return PALETTE[PALETTE_SIZE - 1];
    }

    PALETTE[iterations as usize % PALETTE_SIZE]
}
