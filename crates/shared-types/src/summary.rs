//! Engine output shapes: selection ranges, excerpt summaries, and the
//! head/body/tail composite polygons used for highlight overlays.

use serde::{Deserialize, Serialize};

use crate::model::{Point, Polygon};

/// A point on a specific page, in the same page-relative units as the
/// analyzer polygons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PagePoint {
    pub page: u32,
    pub point: Point,
}

/// A user-drawn selection, possibly spanning pages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorRange {
    pub start: PagePoint,
    pub end: PagePoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonOnPage {
    pub page: u32,
    pub polygon: Polygon,
}

/// The engine's answer to "where is this excerpt": the excerpt text plus one
/// coarse polygon per matched (page, region) pair, ordered by page then by
/// region. An unmatched lookup is the empty summary, never an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub excerpt: String,
    pub polygons: Vec<PolygonOnPage>,
}

impl Summary {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.excerpt.is_empty() && self.polygons.is_empty()
    }
}

/// Composite highlight shape for a possibly multi-line, non-rectangular
/// area: `head` is the first line segment, `tail` the last, `body` the merged
/// full-width block between them. Only the geometrically valid combinations
/// exist, so consumers match exhaustively instead of probing optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CompositePolygon {
    Head { head: Polygon },
    Body { body: Polygon },
    Tail { tail: Polygon },
    HeadTail { head: Polygon, tail: Polygon },
    HeadBody { head: Polygon, body: Polygon },
    BodyTail { body: Polygon, tail: Polygon },
    HeadBodyTail { head: Polygon, body: Polygon, tail: Polygon },
}

impl CompositePolygon {
    pub fn head(&self) -> Option<&Polygon> {
        match self {
            CompositePolygon::Head { head }
            | CompositePolygon::HeadTail { head, .. }
            | CompositePolygon::HeadBody { head, .. }
            | CompositePolygon::HeadBodyTail { head, .. } => Some(head),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&Polygon> {
        match self {
            CompositePolygon::Body { body }
            | CompositePolygon::HeadBody { body, .. }
            | CompositePolygon::BodyTail { body, .. }
            | CompositePolygon::HeadBodyTail { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn tail(&self) -> Option<&Polygon> {
        match self {
            CompositePolygon::Tail { tail }
            | CompositePolygon::HeadTail { tail, .. }
            | CompositePolygon::BodyTail { tail, .. }
            | CompositePolygon::HeadBodyTail { tail, .. } => Some(tail),
            _ => None,
        }
    }

    /// Flatten to a plain polygon list, head then body then tail. This is the
    /// shape stored as citation bounds.
    pub fn flatten(&self) -> Vec<Polygon> {
        [self.head(), self.body(), self.tail()]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultSegment {
    pub text: String,
    pub page: u32,
    pub bounding_regions: CompositePolygon,
}

/// One occurrence found by the multi-match search. `matching_ratio` is 1.0
/// for exact matches; the relaxed mode reports the fraction of words that
/// matched without normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    pub segments: Vec<SearchResultSegment>,
    pub matching_ratio: f64,
}
