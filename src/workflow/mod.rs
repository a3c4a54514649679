pub mod document_scrubber;
pub mod segment_preprocessor;

pub use document_scrubber::{ensure_dir, DocumentScrubber, ScrubOutcome};
pub use segment_preprocessor::SegmentPreprocessor;
