//! Series module - alignment of one series onto another's labels and
//! 100-based indexing.

mod series_aligner;
mod series_normalizer;

pub use series_aligner::align;
pub use series_normalizer::{normalize, normalize_gapped, INDEX_BASE};
