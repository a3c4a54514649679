pub mod boundary_locator;
pub mod failure_writer;
pub mod pattern_stripper;
pub mod text_normalizer;

pub use boundary_locator::{cut_back, cut_front, locate_back_cut, locate_front_cut};
pub use failure_writer::FailureWriter;
pub use pattern_stripper::{strip_citations, strip_references};
pub use text_normalizer::normalize;
