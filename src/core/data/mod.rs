pub mod colour;
pub mod complex;
pub mod frame;
pub mod pixel_buffer;
