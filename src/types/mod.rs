pub mod by_color;

pub mod color;
