pub mod escape;
pub mod palette;
