//! Document-geometry and excerpt-location engine.
//!
//! Maps between the two representations of a citation in a scanned document:
//! an on-page selection (point or pixel range) and canonical excerpt text.
//! Input is a layout-analysis result; [`EnrichedDocument`] preprocesses it
//! into reading-order regions, after which queries run in either direction:
//!
//! - [`range_to_summary`]: selection → excerpt text + bounding polygons
//! - [`excerpt_to_summary`] / [`exact_match_search`]: excerpt text → polygons
//!
//! Everything is synchronous and deterministic; "not found" is the empty
//! [`Summary`](shared_types::Summary), never an error.

pub mod condense;
pub mod excerpt;
pub mod geometry;
pub mod region;
pub mod search;
pub mod summary;

#[cfg(test)]
pub(crate) mod testfix;

pub use condense::condense_polygons;
pub use excerpt::{exact_match_search, excerpt_to_summary, relaxed_match_search};
pub use geometry::{
    adjacent, bounding_polygon, compare_point_to_polygon, compare_points,
    DEFAULT_ADJACENCY_DELTA,
};
pub use region::{EnrichedDocument, Region};
pub use search::{word_at_point, words_by_span};
pub use summary::range_to_summary;

/// Preprocess an analysis result into its queryable form. Thin alias for
/// [`EnrichedDocument::new`].
pub fn preprocess(analysis: shared_types::AnalysisResult) -> EnrichedDocument {
    EnrichedDocument::new(analysis)
}
