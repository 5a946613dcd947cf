pub mod citation;
pub mod error;
pub mod model;
pub mod summary;

pub use citation::Citation;
pub use error::ModelError;
pub use model::{
    AnalysisResult, BoundingRegion, DocumentPage, Line, Paragraph, Point, Polygon, Span, Word,
};
pub use summary::{
    CompositePolygon, CursorRange, PagePoint, PolygonOnPage, SearchMatch, SearchResultSegment,
    Summary,
};
