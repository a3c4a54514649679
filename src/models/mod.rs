pub mod document;
pub mod loaders;
pub mod segment;
pub mod summary;

pub use document::{DocumentSections, RawDocument};
pub use loaders::{load_corpus, ArticleFolder};
pub use segment::{Segment, SegmentMode, StopstringSet};
pub use summary::{format_elapsed, BatchRunSummary};
