pub mod area;

pub use area::shoelace_area;
